//! Two-phase template expansion.
//!
//! Phase one rewrites `[[symbol]]` non-terminals from the phrase table until
//! none remain; phase two rewrites `{{token}}` terminals through a
//! [`TokenResolver`]. Each phase runs to a fixpoint under a pass ceiling of
//! `max(min_passes, table size + 1)`: an acyclic table always converges in
//! fewer passes than it has entries, so hitting the ceiling means a cycle.
//! The result is trimmed and sentence-capitalized.

pub mod capitalize;
pub mod segment;

pub use capitalize::capitalize_sentences;
pub use segment::{segments, Markers, Segment};

use alttxt_core::constants::{
    DEFAULT_MIN_PASSES, NON_TERMINAL_CLOSE, NON_TERMINAL_OPEN, TERMINAL_CLOSE, TERMINAL_OPEN,
};
use alttxt_core::errors::{ExpansionPhase, GrammarError};

use crate::phrases::PhraseTable;

const NON_TERMINAL: Markers = Markers {
    open: NON_TERMINAL_OPEN,
    close: NON_TERMINAL_CLOSE,
};

const TERMINAL: Markers = Markers {
    open: TERMINAL_OPEN,
    close: TERMINAL_CLOSE,
};

/// Source of terminal token values.
pub trait TokenResolver {
    /// Display text for `name`. Never fails; unknown names degrade visibly.
    fn resolve(&self, name: &str) -> String;

    /// Number of registered tokens, used to size the pass ceiling.
    fn token_count(&self) -> usize;
}

/// Expands templates against a phrase table.
#[derive(Debug, Clone, Copy)]
pub struct Expander<'a> {
    phrases: &'a PhraseTable,
    min_passes: usize,
}

impl<'a> Expander<'a> {
    pub fn new(phrases: &'a PhraseTable) -> Self {
        Self {
            phrases,
            min_passes: DEFAULT_MIN_PASSES,
        }
    }

    pub fn with_min_passes(mut self, min_passes: usize) -> Self {
        self.min_passes = min_passes;
        self
    }

    /// Fully expand `template`: non-terminals, then terminals, then trim
    /// and capitalize.
    pub fn expand<R>(&self, template: &str, tokens: &R) -> Result<String, GrammarError>
    where
        R: TokenResolver + ?Sized,
    {
        let phrased = self.expand_non_terminals(template)?;
        let resolved = self.expand_terminals(&phrased, tokens)?;
        Ok(capitalize_sentences(&resolved))
    }

    /// Rewrite `[[symbol]]` markers until none remain. Unknown symbols
    /// expand to nothing.
    pub fn expand_non_terminals(&self, template: &str) -> Result<String, GrammarError> {
        let ceiling = self.ceiling(self.phrases.len());
        run_phase(template, NON_TERMINAL, ExpansionPhase::NonTerminal, ceiling, |name| {
            match self.phrases.get(name) {
                Some(phrase) => phrase.to_string(),
                None => {
                    tracing::debug!(symbol = name, "unknown non-terminal");
                    String::new()
                }
            }
        })
    }

    /// Rewrite `{{token}}` markers until none remain.
    pub fn expand_terminals<R>(&self, text: &str, tokens: &R) -> Result<String, GrammarError>
    where
        R: TokenResolver + ?Sized,
    {
        let ceiling = self.ceiling(tokens.token_count());
        run_phase(text, TERMINAL, ExpansionPhase::Terminal, ceiling, |name| {
            tokens.resolve(name)
        })
    }

    fn ceiling(&self, table_size: usize) -> usize {
        self.min_passes.max(table_size + 1)
    }
}

fn run_phase<F>(
    text: &str,
    markers: Markers,
    phase: ExpansionPhase,
    ceiling: usize,
    mut lookup: F,
) -> Result<String, GrammarError>
where
    F: FnMut(&str) -> String,
{
    let mut current = text.to_string();
    let mut passes = 0;

    loop {
        let parts = segments(&current, markers);
        let last_symbol = parts.iter().rev().find_map(|part| match part {
            Segment::Symbol(name) => Some(*name),
            Segment::Literal(_) => None,
        });
        let Some(last_symbol) = last_symbol else {
            tracing::trace!(%phase, passes, "expansion converged");
            return Ok(current);
        };
        if passes >= ceiling {
            return Err(GrammarError::TemplateCycle {
                phase,
                passes,
                symbol: last_symbol.to_string(),
            });
        }

        let mut next = String::with_capacity(current.len());
        for part in &parts {
            match part {
                Segment::Literal(text) => next.push_str(text),
                Segment::Symbol(name) => next.push_str(&lookup(name)),
            }
        }
        passes += 1;
        current = next;
    }
}
