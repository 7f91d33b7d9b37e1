//! Output formats for structured descriptions.

pub mod markdown;

pub use markdown::MarkdownFormatter;
