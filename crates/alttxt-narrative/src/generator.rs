//! Alt-text generator: picks the template bundle for a request and expands
//! it against a token map.

use serde::Serialize;

use alttxt_core::config::GenerationOptions;
use alttxt_core::errors::NarrativeError;
use alttxt_core::types::Level;

use crate::formats::MarkdownFormatter;
use crate::grammar::Expander;
use crate::phrases::{self, PhraseTable, Section};
use crate::tokens::TokenMap;

/// Structured description returned for the default level when structured
/// output is requested.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuredDescription {
    pub short_description: String,
    pub technique_description: String,
    /// Markdown document with one section per topic and a glossary.
    pub long_description: String,
}

/// Result of a generation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum AltText {
    Plain(String),
    Structured(StructuredDescription),
}

impl AltText {
    pub fn as_plain(&self) -> Option<&str> {
        match self {
            Self::Plain(text) => Some(text),
            Self::Structured(_) => None,
        }
    }

    pub fn as_structured(&self) -> Option<&StructuredDescription> {
        match self {
            Self::Plain(_) => None,
            Self::Structured(desc) => Some(desc),
        }
    }
}

/// Generates alt text for one analysed plot.
pub struct AltTxtGen<'a> {
    options: GenerationOptions,
    tokens: &'a TokenMap,
    phrases: PhraseTable,
}

impl<'a> AltTxtGen<'a> {
    pub fn new(options: GenerationOptions, tokens: &'a TokenMap) -> Self {
        Self::with_phrases(options, tokens, PhraseTable::standard())
    }

    /// Generator over a custom phrase table.
    pub fn with_phrases(
        options: GenerationOptions,
        tokens: &'a TokenMap,
        phrases: PhraseTable,
    ) -> Self {
        Self {
            options,
            tokens,
            phrases,
        }
    }

    pub fn options(&self) -> &GenerationOptions {
        &self.options
    }

    fn expander(&self) -> Expander<'_> {
        Expander::new(&self.phrases).with_min_passes(self.options.min_passes)
    }

    /// The unexpanded top-level template for the configured level.
    pub fn template(&self) -> String {
        let GenerationOptions {
            level,
            verbosity,
            explain,
            ..
        } = self.options;
        let sort_by = self.tokens.context().grammar().sort_by;

        let body = match level {
            Level::One => phrases::level_one(verbosity).to_string(),
            Level::Two => phrases::level_two(verbosity, sort_by),
            Level::Default => format!(
                "{} {} {}",
                phrases::level_one(verbosity),
                phrases::level_two(verbosity, sort_by),
                phrases::trend_analysis(verbosity)
            ),
        };
        format!("{}{body}", phrases::explanation(explain))
    }

    /// Flat, capitalized prose for the configured level.
    pub fn text(&self) -> Result<String, NarrativeError> {
        let _span = tracing::info_span!(
            "alttxt_text",
            level = %self.options.level,
            verbosity = %self.options.verbosity,
        )
        .entered();

        let text = self.expander().expand(&self.template(), self.tokens)?;
        tracing::info!(chars = text.len(), "generated alt text");
        Ok(text)
    }

    /// Short summary, technique explanation, and sectioned markdown.
    pub fn structured(&self) -> Result<StructuredDescription, NarrativeError> {
        let _span = tracing::info_span!("alttxt_structured").entered();
        let expander = self.expander();

        let short_description = expander.expand(phrases::SHORT_DESCRIPTION, self.tokens)?;
        let technique_description = expander.expand(phrases::TECHNIQUE_DESCRIPTION, self.tokens)?;

        let sections = Section::ALL
            .iter()
            .map(|section| -> Result<(&'static str, String), NarrativeError> {
                let body = expander.expand(section.template(), self.tokens)?;
                Ok((section.heading(), body))
            })
            .collect::<Result<Vec<_>, _>>()?;
        let title = self.tokens.resolve("title");
        let long_description = MarkdownFormatter::new().format(&title, &sections);

        tracing::info!(
            sections = sections.len(),
            chars = long_description.len(),
            "generated structured description"
        );
        Ok(StructuredDescription {
            short_description,
            technique_description,
            long_description,
        })
    }

    /// Structured output for the default level when requested, prose
    /// otherwise.
    pub fn generate(&self) -> Result<AltText, NarrativeError> {
        if self.options.structured && self.options.level == Level::Default {
            self.structured().map(AltText::Structured)
        } else {
            self.text().map(AltText::Plain)
        }
    }
}
