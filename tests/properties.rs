//! Property tests: resolution is total, idempotent, and produces
//! well-formed output for arbitrary attribute trees.

use blockstyle::{
    StyleOptions, format_inline, generate, resolve_classnames, resolve_rules,
    sanitize_css_declaration, schema, to_kebab_case,
};
use proptest::prelude::*;
use serde_json::Value;

/// Keys biased toward schema paths so generated trees actually hit
/// definitions, mixed with arbitrary identifiers.
fn arb_key() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("spacing".to_string()),
        Just("typography".to_string()),
        Just("color".to_string()),
        Just("border".to_string()),
        Just("margin".to_string()),
        Just("padding".to_string()),
        Just("fontSize".to_string()),
        Just("radius".to_string()),
        Just("top".to_string()),
        Just("topLeft".to_string()),
        "[a-zA-Z]{1,8}",
    ]
}

fn arb_scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        (-1000i32..1000).prop_map(|n| Value::Number(n.into())),
        "[a-zA-Z0-9 _-]{0,12}".prop_map(Value::String),
    ]
}

fn arb_tree() -> impl Strategy<Value = Value> {
    arb_scalar().prop_recursive(4, 32, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::vec((arb_key(), inner), 0..4)
                .prop_map(|entries| Value::Object(entries.into_iter().collect())),
        ]
    })
}

proptest! {
    #[test]
    fn prop_resolvers_are_total_and_idempotent(tree in arb_tree()) {
        let rules = resolve_rules(schema(), &tree);
        let classnames = resolve_classnames(schema(), &tree);

        prop_assert_eq!(&rules, &resolve_rules(schema(), &tree));
        prop_assert_eq!(&classnames, &resolve_classnames(schema(), &tree));

        let options = StyleOptions { inline: true };
        prop_assert_eq!(generate(&tree, &options), generate(&tree, &options));
    }

    #[test]
    fn prop_classnames_are_space_free_tokens(tree in arb_tree()) {
        for classname in resolve_classnames(schema(), &tree) {
            prop_assert!(!classname.is_empty());
            prop_assert!(!classname.contains(' '));
        }
    }

    #[test]
    fn prop_rules_have_nonempty_properties_and_values(tree in arb_tree()) {
        for (property, value) in resolve_rules(schema(), &tree).iter() {
            prop_assert!(!property.is_empty());
            prop_assert!(!value.is_empty());
        }
    }

    #[test]
    fn prop_generate_matches_manual_pipeline(tree in arb_tree()) {
        let expected = if blockstyle::is_empty_value(&tree) {
            String::new()
        } else {
            format_inline(&resolve_rules(schema(), &tree))
        };
        prop_assert_eq!(generate(&tree, &StyleOptions { inline: true }), expected);
    }

    #[test]
    fn prop_sanitizer_output_is_html_safe(declaration in "[ -~]{0,40}") {
        let safe = sanitize_css_declaration(&declaration);
        prop_assert!(!safe.contains('<'));
        prop_assert!(!safe.contains('>'));
        prop_assert!(!safe.contains('"'));
        prop_assert!(!safe.contains('\''));
    }

    #[test]
    fn prop_kebab_case_is_normalized(input in "[a-zA-Z0-9 _-]{0,24}") {
        let slug = to_kebab_case(&input);
        prop_assert!(!slug.contains(' '));
        prop_assert!(!slug.contains('_'));
        prop_assert!(!slug.contains("--"));
        prop_assert!(!slug.starts_with('-'));
        prop_assert!(!slug.ends_with('-'));
        prop_assert!(!slug.chars().any(char::is_uppercase));
        // Already-normalized output is a fixed point
        prop_assert_eq!(to_kebab_case(&slug), slug.clone());
    }
}
