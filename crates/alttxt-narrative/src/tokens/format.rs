//! Text helpers shared by token producers.

use alttxt_core::constants::DECIMAL_PLACES;
use alttxt_core::models::subset::round_to;

/// Join items as prose: `a`, `a and b`, `a, b and c`.
pub fn join_list<S: AsRef<str>>(items: &[S]) -> String {
    match items {
        [] => String::new(),
        [only] => only.as_ref().to_string(),
        [init @ .., last] => {
            let head: Vec<&str> = init.iter().map(AsRef::as_ref).collect();
            format!("{} and {}", head.join(", "), last.as_ref())
        }
    }
}

/// Round to two decimals; whole numbers keep one decimal place (`5.0`).
pub fn format_float(value: f64) -> String {
    let rounded = round_to(value, DECIMAL_PLACES);
    if rounded.fract() == 0.0 {
        format!("{rounded:.1}")
    } else {
        format!("{rounded}")
    }
}

/// `part` as a percentage of `whole`, e.g. `52.63%`. A zero whole gives `0.0%`.
pub fn percent(part: f64, whole: f64) -> String {
    let pct = if whole == 0.0 { 0.0 } else { 100.0 * part / whole };
    format!("{}%", format_float(pct))
}

/// `1 intersection`, `3 intersections`.
pub fn count_noun(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{count} {singular}")
    } else {
        format!("{count} {plural}")
    }
}

/// Break up grammar markers in user-supplied text so plot metadata can
/// never be expanded as a template. Line breaks become spaces: a value that
/// spans lines could start a markdown heading inside a section body.
pub fn sanitize(text: &str) -> String {
    text.replace(['\r', '\n'], " ")
        .replace("{{", "{ {")
        .replace("}}", "} }")
        .replace("[[", "[ [")
        .replace("]]", "] ]")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_list() {
        assert_eq!(join_list::<&str>(&[]), "");
        assert_eq!(join_list(&["A"]), "A");
        assert_eq!(join_list(&["A", "B"]), "A and B");
        assert_eq!(join_list(&["A", "B", "C"]), "A, B and C");
    }

    #[test]
    fn test_format_float() {
        assert_eq!(format_float(5.0), "5.0");
        assert_eq!(format_float(3.14159), "3.14");
        assert_eq!(format_float(-0.005), "-0.01");
        assert_eq!(format_float(0.1 + 0.2), "0.3");
    }

    #[test]
    fn test_percent() {
        assert_eq!(percent(10.0, 19.0), "52.63%");
        assert_eq!(percent(1.0, 0.0), "0.0%");
    }

    #[test]
    fn test_sanitize_breaks_markers() {
        let clean = sanitize("{{title}} and [[set_list]]");
        assert!(!clean.contains("{{"));
        assert!(!clean.contains("[["));
        assert!(!clean.contains("]]"));
    }

    #[test]
    fn test_sanitize_flattens_line_breaks() {
        assert_eq!(sanitize("Movies\r\n## Injected"), "Movies  ## Injected");
        assert!(!sanitize("a\nb\rc").contains(['\n', '\r']));
    }
}
