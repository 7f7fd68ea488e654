//! Property tests: applying a mode twice changes nothing the second time.

use proptest::prelude::*;

use restyle::{Rewrite, RewriteMode, Rewriter, StylesheetLayout};

fn rewriter() -> Rewriter {
    Rewriter::new(StylesheetLayout::default()).unwrap()
}

fn link(href: &str) -> String {
    format!("  {}", StylesheetLayout::link_tag(href))
}

fn noise_line() -> impl Strategy<Value = String> {
    // No '<', '/' or '.' so noise can never look like a stylesheet line.
    proptest::string::string_regex("[A-Za-z0-9 =\"_]{0,40}").unwrap()
}

fn noise() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec(noise_line(), 0..=6)
}

fn page(before: Vec<String>, run: Vec<String>, after: Vec<String>) -> String {
    let mut lines = vec!["<html>".to_string(), "<head>".to_string()];
    lines.extend(before);
    lines.extend(run);
    lines.extend(after);
    lines.push("</head>".to_string());
    lines.push("</html>".to_string());
    lines.join("\n") + "\n"
}

/// A stylesheet run opening with normalize and closing with the legacy
/// stylesheet, with webflow and a subset of the design system in between
/// in any order.
fn scrambled_run() -> impl Strategy<Value = Vec<String>> {
    let layout = StylesheetLayout::default();
    let extras: Vec<String> = layout.design_system_hrefs[1..].to_vec();
    proptest::sample::subsequence(extras.clone(), 0..=extras.len()).prop_flat_map(move |subset| {
        let layout = StylesheetLayout::default();
        let mut middle = vec![
            link(&layout.webflow_href),
            link(&layout.design_system_hrefs[0]),
        ];
        middle.extend(subset.iter().map(|h| link(h)));
        Just(middle).prop_shuffle().prop_map(move |middle| {
            let mut run = vec![link(&layout.normalize_href)];
            run.extend(middle);
            run.push(link(&layout.legacy_href));
            run
        })
    })
}

fn anchor_run() -> Vec<String> {
    let layout = StylesheetLayout::default();
    vec![
        link(&layout.normalize_href),
        link(&layout.webflow_href),
        link(&layout.legacy_href),
    ]
}

fn canonical_run() -> Vec<String> {
    StylesheetLayout::default()
        .canonical_block()
        .lines()
        .map(str::to_string)
        .collect()
}

fn apply_twice(mode: RewriteMode, text: &str) -> (String, Rewrite) {
    let rewriter = rewriter();
    let once = rewriter.apply(mode, text).into_text(text);
    let twice = rewriter.apply(mode, &once);
    (once, twice)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: insert produces the canonical block and a second insert is a no-op.
    #[test]
    fn property_insert_is_idempotent(before in noise(), after in noise()) {
        let text = page(before, anchor_run(), after);

        let (once, twice) = apply_twice(RewriteMode::Insert, &text);

        prop_assert!(once.contains(&StylesheetLayout::default().canonical_block()));
        prop_assert!(!twice.is_changed());
    }

    /// PROPERTY: remove strips the marker and a second remove is a no-op.
    #[test]
    fn property_remove_is_idempotent(before in noise(), after in noise()) {
        let text = page(before, canonical_run(), after);

        let (once, twice) = apply_twice(RewriteMode::Remove, &text);

        prop_assert!(!once.contains("design-system/tokens.css"));
        prop_assert!(!twice.is_changed());
    }

    /// PROPERTY: normalize yields canonical order whatever the starting order.
    #[test]
    fn property_normalize_is_idempotent(
        before in noise(),
        run in scrambled_run(),
        after in noise(),
    ) {
        let text = page(before.clone(), run, after.clone());

        let (once, twice) = apply_twice(RewriteMode::Normalize, &text);

        prop_assert_eq!(once, page(before, canonical_run(), after));
        prop_assert!(!twice.is_changed());
    }

    /// PROPERTY: noise outside the stylesheet run survives every mode untouched.
    #[test]
    fn property_surroundings_preserved(
        before in noise(),
        after in noise(),
        mode in prop_oneof![
            Just(RewriteMode::Insert),
            Just(RewriteMode::Remove),
            Just(RewriteMode::Normalize),
        ],
    ) {
        let text = page(before.clone(), canonical_run(), after.clone());
        let result = rewriter().apply(mode, &text).into_text(&text);

        let head = page(before, Vec::new(), Vec::new());
        let head_prefix = head.trim_end_matches("</head>\n</html>\n");
        prop_assert!(result.starts_with(head_prefix));
        let tail = after.join("\n");
        prop_assert!(result.contains(&tail));
    }
}
