use alttxt_narrative::grammar::{capitalize_sentences, Expander, TokenResolver};
use alttxt_narrative::PhraseTable;
use proptest::prelude::*;

struct Numbered(usize);

impl TokenResolver for Numbered {
    fn resolve(&self, name: &str) -> String {
        match name.strip_prefix('t').and_then(|n| n.parse::<usize>().ok()) {
            Some(n) if n < self.0 => format!("value{n}"),
            _ => format!("{{{name}}}"),
        }
    }

    fn token_count(&self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone)]
enum Part {
    Word(String),
    Symbol(usize),
    Token(usize),
}

fn part() -> impl Strategy<Value = Part> {
    prop_oneof![
        "[a-z .]{0,6}".prop_map(Part::Word),
        (0usize..64).prop_map(Part::Symbol),
        (0usize..8).prop_map(Part::Token),
    ]
}

/// Symbol `s{i}` may only reference `s{j}` with `j > i`, so the table is
/// acyclic by construction.
fn acyclic_table() -> impl Strategy<Value = Vec<(String, String)>> {
    prop::collection::vec(prop::collection::vec(part(), 0..6), 1..40).prop_map(|bodies| {
        let count = bodies.len();
        bodies
            .into_iter()
            .enumerate()
            .map(|(i, parts)| {
                let body: String = parts
                    .into_iter()
                    .map(|p| match p {
                        Part::Word(w) => w,
                        Part::Symbol(j) if i + 1 < count => {
                            format!("[[s{}]]", i + 1 + j % (count - i - 1))
                        }
                        Part::Symbol(_) => "leaf".to_string(),
                        Part::Token(t) => format!("{{{{t{t}}}}}"),
                    })
                    .collect();
                (format!("s{i}"), body)
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn acyclic_expansion_terminates_without_markers(
        pairs in acyclic_table(),
        min_passes in 1usize..20,
    ) {
        let table = PhraseTable::from_pairs(pairs.clone());
        let expander = Expander::new(&table).with_min_passes(min_passes);
        let tokens = Numbered(8);

        for (name, _) in &pairs {
            let out = expander.expand(&format!("[[{name}]]"), &tokens).unwrap();
            prop_assert!(!out.contains("[["), "{}", out);
            prop_assert!(!out.contains("{{"), "{}", out);
        }
    }

    #[test]
    fn capitalization_only_changes_case(text in "[a-z .!?]{0,40}") {
        let out = capitalize_sentences(&text);
        prop_assert_eq!(out.to_lowercase(), text.trim().to_lowercase());
    }
}
