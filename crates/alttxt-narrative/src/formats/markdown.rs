//! Markdown rendering for the long-form structured description.

use crate::glossary::GLOSSARY;

/// Renders a titled, sectioned markdown document followed by the glossary.
#[derive(Debug, Default, Clone, Copy)]
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// One `##` block per `(heading, body)` pair under a `#` title.
    pub fn format<S: AsRef<str>>(&self, title: &str, sections: &[(S, String)]) -> String {
        let mut md = format!("# {}\n\n", heading_text(title));

        for (heading, body) in sections {
            md.push_str(&format!("## {}\n\n", heading_text(heading.as_ref())));
            md.push_str(body.trim());
            md.push_str("\n\n");
        }

        md.push_str("## Glossary\n\n");
        for (term, definition) in GLOSSARY {
            md.push_str(&format!("- **{term}**: {definition}\n"));
        }
        md
    }
}

/// Headings come from user-supplied plot metadata: a `#` would open a new
/// heading and a line break would end this one early.
fn heading_text(raw: &str) -> String {
    raw.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .replace('#', "\\#")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sections_in_order_then_glossary() {
        let sections = [
            ("Introduction", "Intro text. ".to_string()),
            ("Trend Analysis", "Flat.".to_string()),
        ];
        let md = MarkdownFormatter::new().format("Movies", &sections);
        assert!(md.starts_with("# Movies\n\n## Introduction\n\nIntro text.\n\n## Trend Analysis"));
        let glossary = md.find("## Glossary").unwrap();
        assert!(glossary > md.find("Flat.").unwrap());
        assert!(md.contains("- **No-set intersection**:"));
    }

    #[test]
    fn test_glossary_without_sections() {
        let md = MarkdownFormatter::new().format::<&str>("Empty", &[]);
        assert_eq!(md.matches("- **").count(), GLOSSARY.len());
    }

    #[test]
    fn test_title_cannot_open_new_heading() {
        assert_eq!(heading_text("## Injected\r\n\nMalicious"), "\\#\\# Injected Malicious");
        assert_eq!(heading_text("  Genres  "), "Genres");
    }
}
