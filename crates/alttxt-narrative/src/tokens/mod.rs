//! Terminal token registry.
//!
//! A token is either a literal fixed when the map is built or a producer
//! evaluated against the [`TokenContext`] each time it is resolved. Unknown
//! names resolve to `{name}` so a missing token is visible in the output
//! instead of failing the whole description.

pub mod context;
pub mod format;
pub mod vocabulary;

pub use context::TokenContext;

use alttxt_core::errors::TokenError;
use alttxt_core::models::{DataModel, GrammarModel};
use alttxt_core::types::FxHashMap;

use crate::grammar::TokenResolver;

/// Computes a token's text from the analysed plot.
pub type Producer = fn(&TokenContext) -> String;

/// A registered token value.
#[derive(Debug, Clone)]
pub enum TokenValue {
    Text(String),
    Int(i64),
    Float(f64),
    Computed(Producer),
}

impl TokenValue {
    fn render(&self, context: &TokenContext) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Int(value) => value.to_string(),
            Self::Float(value) => format::format_float(*value),
            Self::Computed(producer) => producer(context),
        }
    }
}

impl From<String> for TokenValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for TokenValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<i64> for TokenValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<u64> for TokenValue {
    fn from(value: u64) -> Self {
        Self::Int(i64::try_from(value).unwrap_or(i64::MAX))
    }
}

impl From<usize> for TokenValue {
    fn from(value: usize) -> Self {
        Self::Int(i64::try_from(value).unwrap_or(i64::MAX))
    }
}

impl From<f64> for TokenValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<Producer> for TokenValue {
    fn from(value: Producer) -> Self {
        Self::Computed(value)
    }
}

/// Name → value table over one analysed plot.
#[derive(Debug, Clone)]
pub struct TokenMap {
    context: TokenContext,
    table: FxHashMap<String, TokenValue>,
}

impl TokenMap {
    /// An empty map over `context`.
    pub fn new(context: TokenContext) -> Self {
        Self {
            context,
            table: FxHashMap::default(),
        }
    }

    /// Analyse the models and register the full token vocabulary.
    pub fn standard(data: DataModel, grammar: GrammarModel) -> Result<Self, TokenError> {
        let mut map = Self::new(TokenContext::new(data, grammar));
        vocabulary::register_standard(&mut map)?;
        tracing::debug!(tokens = map.len(), "registered token vocabulary");
        Ok(map)
    }

    /// Register a token. Names are unique and float literals must be finite.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        value: impl Into<TokenValue>,
    ) -> Result<(), TokenError> {
        let name = name.into();
        let value = value.into();
        if self.table.contains_key(&name) {
            return Err(TokenError::Duplicate { name });
        }
        if let TokenValue::Float(f) = value {
            if !f.is_finite() {
                return Err(TokenError::InvalidLiteral {
                    name,
                    value: f.to_string(),
                });
            }
        }
        self.table.insert(name, value);
        Ok(())
    }

    /// Resolve a token to display text. Unknown names come back as `{name}`.
    pub fn resolve(&self, name: &str) -> String {
        match self.table.get(name) {
            Some(value) => value.render(&self.context),
            None => {
                tracing::debug!(token = name, "unknown token");
                format!("{{{name}}}")
            }
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.table.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn context(&self) -> &TokenContext {
        &self.context
    }
}

impl TokenResolver for TokenMap {
    fn resolve(&self, name: &str) -> String {
        TokenMap::resolve(self, name)
    }

    fn token_count(&self) -> usize {
        self.len()
    }
}
