//! # alttxt-narrative
//!
//! Turns analysed UpSet plot models into alt text: the token registry,
//! the embedded phrase grammar, the two-phase expansion engine, and plain
//! or structured (markdown) output.

pub mod formats;
pub mod generator;
pub mod glossary;
pub mod grammar;
pub mod phrases;
pub mod tokens;

pub use generator::{AltText, AltTxtGen, StructuredDescription};
pub use grammar::{Expander, TokenResolver};
pub use phrases::PhraseTable;
pub use tokens::{TokenContext, TokenMap, TokenValue};
