//! Sentence capitalization for expanded text.

use std::sync::LazyLock;

use regex::{Captures, Regex};

/// Start of text or end-of-sentence punctuation plus whitespace, followed
/// by a lowercase letter.
static SENTENCE_START: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(^|[.!?]\s+)(\p{Ll})").ok());

/// Trim `text` and uppercase the first letter of every sentence. The rest
/// of each word is left untouched.
pub fn capitalize_sentences(text: &str) -> String {
    let trimmed = text.trim();
    match SENTENCE_START.as_ref() {
        Some(re) => re
            .replace_all(trimmed, |caps: &Captures<'_>| {
                format!("{}{}", &caps[1], caps[2].to_uppercase())
            })
            .into_owned(),
        None => trimmed.to_string(),
    }
}
