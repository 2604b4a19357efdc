//! Свойства лексера на случайных входах

use super::common::{join_tokens, pairs};
use proptest::prelude::*;
use sqllex::{lex, TokenKind};

/// Фрагменты, из которых собираются входы, и ожидаемый результат разбора
const FRAGMENTS: &[(&str, &str, TokenKind)] = &[
    ("SELECT", "select", TokenKind::Keyword),
    ("from", "from", TokenKind::Keyword),
    ("Into", "into", TokenKind::Keyword),
    ("values", "values", TokenKind::Keyword),
    ("users", "users", TokenKind::Identifier),
    ("Price$", "price$", TokenKind::Identifier),
    ("\"Mixed Case\"", "Mixed Case", TokenKind::Identifier),
    ("'it''s'", "it's", TokenKind::String),
    ("'plain'", "plain", TokenKind::String),
    ("1.5e-10", "1.5e-10", TokenKind::Numeric),
    ("42", "42", TokenKind::Numeric),
    ("(", "(", TokenKind::Symbol),
    (")", ")", TokenKind::Symbol),
    (",", ",", TokenKind::Symbol),
    (";", ";", TokenKind::Symbol),
    ("*", "*", TokenKind::Symbol),
];

proptest! {
    #[test]
    fn test_property_fragments_separated_by_spaces(
        picks in prop::collection::vec(0..FRAGMENTS.len(), 0..40)
    ) {
        let source = picks
            .iter()
            .map(|&i| FRAGMENTS[i].0)
            .collect::<Vec<_>>()
            .join(" ");
        let tokens = lex(&source).unwrap();

        let expected: Vec<(String, TokenKind)> = picks
            .iter()
            .map(|&i| (FRAGMENTS[i].1.to_string(), FRAGMENTS[i].2))
            .collect();
        prop_assert_eq!(pairs(&tokens), expected);

        let relexed = lex(&join_tokens(&tokens)).unwrap();
        prop_assert_eq!(pairs(&relexed), pairs(&tokens));
    }

    #[test]
    fn test_property_bare_identifiers_fold_case(
        input in "[ABDEGHJ-RUXYZabdeghj-ruxyz][A-Za-z0-9_$]{0,30}"
    ) {
        let tokens = lex(&input).unwrap();
        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(tokens[0].kind, TokenKind::Identifier);
        prop_assert_eq!(&tokens[0].value, &input.to_ascii_lowercase());
    }

    #[test]
    fn test_property_numeric_literals(
        input in "[0-9]{1,10}(\\.[0-9]{1,5})?(e[+-]?[0-9]{1,3})?"
    ) {
        let tokens = lex(&input).unwrap();
        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(tokens[0].kind, TokenKind::Numeric);
        prop_assert_eq!(&tokens[0].value, &input);
    }

    #[test]
    fn test_property_string_escaping(content in "[a-zA-Z '\n]{0,30}") {
        let source = format!("'{}'", content.replace('\'', "''"));
        let tokens = lex(&source).unwrap();
        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(tokens[0].kind, TokenKind::String);
        prop_assert_eq!(&tokens[0].value, &content);
    }

    #[test]
    fn test_property_whitespace_only(input in "[ \t\n]{0,50}") {
        prop_assert!(lex(&input).unwrap().is_empty());
    }

    #[test]
    fn test_property_arbitrary_input_never_panics(input in any::<String>()) {
        match lex(&input) {
            Ok(tokens) => {
                for token in &tokens {
                    prop_assert!(token.location.line >= 1);
                }
            }
            Err(err) => {
                let lines = input.split('\n').count();
                prop_assert!(err.line() >= 1 && err.line() <= lines);
            }
        }
    }
}
