//! End-to-end generation over a small three-set plot.

use alttxt_analysis::classifier::ClassificationTable;
use alttxt_core::config::{AltTxtConfig, GenerationOptions};
use alttxt_core::models::{DataModel, GrammarModel, SubsetRecord};
use alttxt_core::types::{BTreeMap, Explanation, Level, SortBy, Verbosity};
use alttxt_narrative::{AltText, AltTxtGen, TokenMap};

fn records() -> Vec<SubsetRecord> {
    vec![
        SubsetRecord::new("Unincluded", 0, 0.0, 0, Vec::<String>::new()),
        SubsetRecord::new("A", 10, 1.5, 1, ["A"]),
        SubsetRecord::new("B", 8, -0.75, 1, ["B"]),
        SubsetRecord::new("C", 2, -2.0, 1, ["C"]),
        SubsetRecord::new("A∩B", 5, 3.1, 2, ["A", "B"]),
        SubsetRecord::new("A∩B∩C", 1, 0.4, 3, ["A", "B", "C"]),
    ]
}

fn tokens(grammar: GrammarModel) -> TokenMap {
    let table = ClassificationTable::new(3);
    let sets = vec!["A".to_string(), "B".to_string(), "C".to_string()];
    let sizes = BTreeMap::from([
        ("A".to_string(), 10),
        ("B".to_string(), 8),
        ("C".to_string(), 2),
    ]);
    let data = DataModel::new(
        sets,
        sizes,
        table.subsets(records()),
        table.subsets(records()),
    )
    .unwrap();
    TokenMap::standard(data, grammar).unwrap()
}

fn options(level: Level, verbosity: Verbosity) -> GenerationOptions {
    GenerationOptions {
        level,
        verbosity,
        ..GenerationOptions::default()
    }
}

fn assert_fully_expanded(text: &str) {
    for marker in ["[[", "]]"] {
        assert!(!text.contains(marker), "leftover {marker} in: {text}");
    }
    // any brace means a token was left unexpanded or unknown
    assert!(!text.contains('{') && !text.contains('}'), "token left in: {text}");
}

#[test]
fn test_level_one_names_sets() {
    let tokens = tokens(GrammarModel::default());
    for verbosity in Verbosity::ALL {
        let text = AltTxtGen::new(options(Level::One, *verbosity), &tokens)
            .text()
            .unwrap();
        assert!(text.contains("3 sets"), "{text}");
        assert!(text.contains("A, B and C"), "{text}");
        assert!(text.starts_with("This UpSet plot"), "{text}");
        assert_fully_expanded(&text);
    }
}

#[test]
fn test_level_two_identifies_high_order_row() {
    let tokens = tokens(GrammarModel::default());
    let text = AltTxtGen::new(options(Level::Two, Verbosity::Medium), &tokens)
        .text()
        .unwrap();
    assert!(
        text.contains("1 high order set intersection (A∩B∩C)"),
        "{text}"
    );
    assert!(text.contains("1 medium set intersection (A∩B)"), "{text}");
    assert_fully_expanded(&text);
}

#[test]
fn test_level_two_follows_sort_field() {
    let grammar = GrammarModel {
        sort_by: SortBy::Deviation,
        ..GrammarModel::default()
    };
    let tokens = tokens(grammar);
    let text = AltTxtGen::new(options(Level::Two, Verbosity::Low), &tokens)
        .text()
        .unwrap();
    assert!(
        text.starts_with("A and B rises the furthest above its expected size"),
        "{text}"
    );
}

#[test]
fn test_default_level_every_combination_expands() {
    for sort_by in SortBy::ALL {
        let grammar = GrammarModel {
            sort_by: *sort_by,
            ..GrammarModel::default()
        };
        let tokens = tokens(grammar);
        for verbosity in Verbosity::ALL {
            for explain in Explanation::ALL {
                let opts = GenerationOptions {
                    level: Level::Default,
                    verbosity: *verbosity,
                    explain: *explain,
                    ..GenerationOptions::default()
                };
                let text = AltTxtGen::new(opts, &tokens).text().unwrap();
                assert_fully_expanded(&text);
                assert!(text.contains("the change in size is"), "{text}");
            }
        }
    }
}

#[test]
fn test_explanation_preamble() {
    let tokens = tokens(GrammarModel::default());
    let opts = GenerationOptions {
        explain: Explanation::Full,
        ..GenerationOptions::default()
    };
    let text = AltTxtGen::new(opts, &tokens).text().unwrap();
    assert!(text.starts_with("This is an UpSet plot"));
    assert!(text.contains("A matrix of dots"));
}

#[test]
fn test_missing_title_degrades_visibly() {
    let tokens = tokens(GrammarModel::default());
    let text = AltTxtGen::new(options(Level::One, Verbosity::Low), &tokens)
        .text()
        .unwrap();
    assert!(text.contains("titled (field not available)"), "{text}");

    let mut grammar = GrammarModel::default();
    grammar.meta_data.title = Some("Movie genres".to_string());
    let tokens = self::tokens(grammar);
    let text = AltTxtGen::new(options(Level::One, Verbosity::Low), &tokens)
        .text()
        .unwrap();
    assert!(text.contains("titled Movie genres"), "{text}");
}

#[test]
fn test_structured_output() {
    alttxt_core::tracing::init_tracing();
    let mut grammar = GrammarModel::default();
    grammar.meta_data.title = Some("# Genres\nInjected".to_string());
    let tokens = tokens(grammar);
    let opts = GenerationOptions {
        level: Level::Default,
        structured: true,
        ..GenerationOptions::default()
    };

    let out = AltTxtGen::new(opts, &tokens).generate().unwrap();
    let AltText::Structured(desc) = &out else {
        panic!("expected structured output, got {out:?}");
    };

    assert!(desc.short_description.contains("3 sets: A, B and C"));
    assert!(desc.technique_description.starts_with("This is an UpSet plot"));

    let md = &desc.long_description;
    assert!(md.starts_with("# \\# Genres Injected\n\n"), "{md}");
    let headings = [
        "## Introduction",
        "## Dataset Properties",
        "## Set Properties",
        "## Intersection Properties",
        "## Statistical Information",
        "## Trend Analysis",
        "## Glossary",
    ];
    let mut last = 0;
    for heading in headings {
        let at = md.find(heading).unwrap_or_else(|| panic!("missing {heading}"));
        assert!(at > last, "{heading} out of order");
        last = at;
    }
    assert!(md.contains("- **All-set intersection**:"));
    assert_fully_expanded(md);

    let json = serde_json::to_value(&out).unwrap();
    assert!(json.get("shortDescription").is_some());
    assert!(json.get("techniqueDescription").is_some());
    assert!(json.get("longDescription").is_some());
}

#[test]
fn test_multiline_metadata_cannot_add_headings() {
    let mut grammar = GrammarModel::default();
    grammar.meta_data.title = Some("Movies\n## Injected heading".to_string());
    grammar.meta_data.description = Some("Genres\r\n# Another".to_string());
    let tokens = tokens(grammar);
    let opts = GenerationOptions {
        level: Level::Default,
        structured: true,
        ..GenerationOptions::default()
    };

    let desc = AltTxtGen::new(opts, &tokens).structured().unwrap();
    let headings: Vec<&str> = desc
        .long_description
        .lines()
        .filter(|line| line.starts_with('#'))
        .collect();
    // title, six sections, glossary
    assert_eq!(headings.len(), 8, "{headings:?}");
    assert!(desc.long_description.contains("titled Movies ## Injected heading"));
    assert!(!desc.short_description.contains('\n'));
}

#[test]
fn test_options_from_config() {
    let config = AltTxtConfig::from_toml(
        r#"
        [generation]
        level = "2"
        verbosity = "low"

        [expansion]
        min_passes = 4
        "#,
    )
    .unwrap();
    let tokens = tokens(GrammarModel::default());
    let generator = AltTxtGen::new(config.to_options(), &tokens);
    assert_eq!(generator.template(), "[[l2_size_low]]");

    let text = generator.generate().unwrap();
    let plain = text.as_plain().unwrap();
    assert!(plain.starts_with("The largest intersection is A with 10 elements"));
}
