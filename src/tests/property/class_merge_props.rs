//! Property-based tests for class merging
//!
//! Tests invariants:
//! - Only falsy inputs yield an empty string
//! - The later of two conflicting utilities wins
//! - Utilities setting different properties are both kept
//! - Output tokens are unique, non-empty and taken from the input
//! - Merging an already merged string changes nothing

use std::collections::HashSet;

use proptest::prelude::*;

use crate::class_names::{join_classes, merge_classes, ClassInput};

// ============================================================================
// Strategies for generating test inputs
// ============================================================================

/// Inputs that contribute no class tokens
fn arb_falsy_input() -> impl Strategy<Value = ClassInput<'static>> {
    prop_oneof![
        Just(ClassInput::Skip),
        Just(ClassInput::from(None::<&'static str>)),
        Just(ClassInput::from(("hidden", false))),
        "[ \t\n]{0,6}".prop_map(ClassInput::from),
    ]
}

/// Nested falsy inputs, up to a few levels deep
fn arb_nested_falsy() -> impl Strategy<Value = ClassInput<'static>> {
    arb_falsy_input().prop_recursive(3, 24, 4, |inner| {
        prop::collection::vec(inner, 0..4).prop_map(ClassInput::List)
    })
}

/// A utility prefix whose classes all set the same property
fn arb_spacing_prefix() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just("p"),
        Just("px"),
        Just("pt"),
        Just("m"),
        Just("my"),
        Just("ml"),
        Just("w"),
        Just("h"),
        Just("gap"),
        Just("z"),
        Just("opacity"),
        Just("top"),
    ]
}

fn arb_color() -> impl Strategy<Value = String> {
    (
        prop_oneof![
            Just("red"),
            Just("blue"),
            Just("gray"),
            Just("emerald"),
            Just("purple"),
        ],
        prop_oneof![Just(100u16), Just(400), Just(500), Just(700), Just(900)],
    )
        .prop_map(|(hue, shade)| format!("{hue}-{shade}"))
}

/// Two distinct classes setting the same property
fn arb_conflicting_pair() -> impl Strategy<Value = (String, String)> {
    prop_oneof![
        (arb_spacing_prefix(), 0u32..96, 0u32..96)
            .prop_filter("values differ", |(_, a, b)| a != b)
            .prop_map(|(prefix, a, b)| (format!("{prefix}-{a}"), format!("{prefix}-{b}"))),
        (prop_oneof![Just("bg"), Just("text"), Just("border")], arb_color(), arb_color())
            .prop_filter("colors differ", |(_, a, b)| a != b)
            .prop_map(|(prefix, a, b)| (format!("{prefix}-{a}"), format!("{prefix}-{b}"))),
        (
            prop_oneof![Just("text-xs"), Just("text-sm"), Just("text-lg"), Just("text-2xl")],
            prop_oneof![Just("text-base"), Just("text-xl"), Just("text-[13px]")],
        )
            .prop_map(|(a, b)| (a.to_string(), b.to_string())),
        (
            prop_oneof![Just("block"), Just("flex"), Just("grid")],
            prop_oneof![Just("hidden"), Just("inline-flex"), Just("contents")],
        )
            .prop_map(|(a, b)| (a.to_string(), b.to_string())),
        prop::sample::select(SAME_GROUP_PAIRS)
            .prop_map(|(a, b)| (a.to_string(), b.to_string())),
    ]
}

/// Pairs where the second class sets the same property as the first, or a
/// shorthand covering it
const SAME_GROUP_PAIRS: &[(&str, &str)] = &[
    ("rounded-tl-lg", "rounded-tl-none"),
    ("rounded-tl-lg", "rounded-lg"),
    ("rounded-br-md", "rounded-b-none"),
    ("rounded-ss-lg", "rounded-s-md"),
    ("from-black", "from-gray-900"),
    ("via-black/60", "via-transparent"),
    ("to-gray-900", "to-transparent"),
    ("from-10%", "from-30%"),
    ("bg-opacity-50", "bg-opacity-75"),
    ("text-opacity-50", "text-opacity-100"),
    ("float-left", "float-right"),
    ("clear-left", "clear-both"),
    ("place-items-start", "place-items-center"),
    ("place-content-start", "place-content-between"),
    ("place-self-auto", "place-self-end"),
    ("col-start-1", "col-start-3"),
    ("col-end-2", "col-end-4"),
    ("row-start-1", "row-start-2"),
    ("box-border", "box-content"),
    ("brightness-50", "brightness-110"),
    ("grayscale", "grayscale-0"),
    ("contrast-75", "contrast-150"),
    ("drop-shadow", "drop-shadow-xl"),
    ("skew-x-3", "skew-x-12"),
    ("skew-y-1", "skew-y-6"),
    ("origin-top", "origin-bottom-right"),
    ("decoration-red-500", "decoration-blue-500"),
    ("decoration-1", "decoration-4"),
    ("list-disc", "list-none"),
];

/// Pairs of classes that set different properties despite sharing a prefix
const DISTINCT_GROUP_PAIRS: &[(&str, &str)] = &[
    ("bg-black", "bg-opacity-50"),
    ("text-white", "text-opacity-75"),
    ("border-gray-600", "border-opacity-50"),
    ("ring-blue-500", "ring-opacity-50"),
    ("rounded-lg", "rounded-tl-none"),
    ("rounded-t-lg", "rounded-bl-md"),
    ("from-black", "from-10%"),
    ("float-left", "clear-both"),
    ("place-items-center", "place-content-center"),
    ("col-start-1", "col-end-3"),
    ("decoration-red-500", "decoration-2"),
    ("list-disc", "list-inside"),
    ("skew-x-3", "skew-y-3"),
];

fn arb_distinct_pair() -> impl Strategy<Value = (&'static str, &'static str)> {
    prop::sample::select(DISTINCT_GROUP_PAIRS)
}

/// Mixed vocabulary of utilities, variants and plain classes
fn arb_token() -> impl Strategy<Value = String> {
    let base = prop_oneof![
        (arb_spacing_prefix(), 0u32..12).prop_map(|(p, v)| format!("{p}-{v}")),
        arb_color().prop_map(|c| format!("bg-{c}")),
        arb_color().prop_map(|c| format!("text-{c}")),
        Just("text-sm".to_string()),
        Just("font-bold".to_string()),
        Just("rounded-lg".to_string()),
        Just("flex".to_string()),
        Just("hidden".to_string()),
        "[a-z]{3,8}(-[a-z]{2,5})?",
    ];
    (
        prop_oneof![Just(""), Just("hover:"), Just("md:"), Just("dark:hover:")],
        prop::bool::weighted(0.1),
        base,
    )
        .prop_map(|(variant, important, base)| {
            let bang = if important { "!" } else { "" };
            format!("{variant}{bang}{base}")
        })
}

fn arb_class_string() -> impl Strategy<Value = String> {
    prop::collection::vec(arb_token(), 0..16).prop_map(|tokens| tokens.join(" "))
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Property: inputs with no truthy string produce an empty class list
    #[test]
    fn prop_only_falsy_inputs_yield_empty(inputs in prop::collection::vec(arb_nested_falsy(), 0..6)) {
        prop_assert_eq!(merge_classes(inputs.clone()), "");
        prop_assert_eq!(join_classes(inputs), "");
    }

    /// Property: for conflicting (A, B) in order, B survives and A does not
    #[test]
    fn prop_later_conflicting_class_wins(
        (first, second) in arb_conflicting_pair(),
        prefix in arb_class_string(),
    ) {
        let merged = merge_classes([prefix.as_str(), first.as_str(), second.as_str()]);
        let tokens: Vec<&str> = merged.split(' ').collect();
        prop_assert!(tokens.contains(&second.as_str()), "{} missing from {:?}", second, merged);
        prop_assert!(!tokens.contains(&first.as_str()), "{} kept in {:?}", first, merged);
        prop_assert_eq!(tokens.last().copied(), Some(second.as_str()));
    }

    /// Property: classes setting different properties never remove each other
    #[test]
    fn prop_distinct_groups_are_both_kept(
        (first, second) in arb_distinct_pair(),
        prefix in arb_class_string(),
    ) {
        let merged = merge_classes([prefix.as_str(), first, second]);
        let tokens: Vec<&str> = merged.split(' ').collect();
        prop_assert!(tokens.contains(&first), "{} dropped from {:?}", first, merged);
        prop_assert_eq!(tokens.last().copied(), Some(second));
    }

    /// Property: output tokens are unique, non-empty and come from the input
    #[test]
    fn prop_output_tokens_unique_and_from_input(classes in arb_class_string()) {
        let merged = merge_classes([classes.as_str()]);
        let input: HashSet<&str> = classes.split_whitespace().collect();
        prop_assert!(!merged.contains("  "));
        prop_assert_eq!(merged.trim(), merged.as_str());
        let mut seen = HashSet::new();
        for token in merged.split_whitespace() {
            prop_assert!(input.contains(token), "{} not in input", token);
            prop_assert!(seen.insert(token), "{} duplicated in {:?}", token, merged);
        }
    }

    /// Property: merging is idempotent
    #[test]
    fn prop_merge_is_idempotent(classes in arb_class_string()) {
        let once = merge_classes([classes.as_str()]);
        let twice = merge_classes([once.as_str()]);
        prop_assert_eq!(once, twice);
    }

    /// Property: merged output preserves the relative order of kept tokens
    #[test]
    fn prop_merge_preserves_order(classes in arb_class_string()) {
        let merged = merge_classes([classes.as_str()]);
        let input: Vec<&str> = classes.split_whitespace().collect();
        let mut last_index = 0;
        for token in merged.split_whitespace() {
            let index = input
                .iter()
                .rposition(|t| *t == token)
                .expect("merged token comes from input");
            prop_assert!(index >= last_index);
            last_index = index;
        }
    }
}
