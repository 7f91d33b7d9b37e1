//! Splits template text into literal runs and marked symbols.

/// An opening/closing marker pair such as `[[`/`]]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Markers {
    pub open: &'static str,
    pub close: &'static str,
}

/// A piece of template text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Literal(&'a str),
    Symbol(&'a str),
}

/// Tokenize `text` left to right. An opening marker without a matching
/// close is kept as literal text.
pub fn segments(text: &str, markers: Markers) -> Vec<Segment<'_>> {
    let mut out = Vec::new();
    let mut pos = 0;

    while pos < text.len() {
        let Some(open) = text[pos..].find(markers.open).map(|i| pos + i) else {
            break;
        };
        let inner_start = open + markers.open.len();
        let Some(close) = text[inner_start..]
            .find(markers.close)
            .map(|i| inner_start + i)
        else {
            break;
        };

        if open > pos {
            out.push(Segment::Literal(&text[pos..open]));
        }
        out.push(Segment::Symbol(&text[inner_start..close]));
        pos = close + markers.close.len();
    }

    if pos < text.len() {
        out.push(Segment::Literal(&text[pos..]));
    }
    out
}
