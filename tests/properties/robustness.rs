//! Property tests: rewriting arbitrary input never panics.

use proptest::prelude::*;

use restyle::{Rewrite, RewriteMode, Rewriter, StylesheetLayout};

fn any_mode() -> impl Strategy<Value = RewriteMode> {
    prop_oneof![
        Just(RewriteMode::Insert),
        Just(RewriteMode::Remove),
        Just(RewriteMode::Normalize),
    ]
}

/// Fragments that make partial matches likely
fn fragment() -> impl Strategy<Value = String> {
    let layout = StylesheetLayout::default();
    prop_oneof![
        Just(StylesheetLayout::link_tag(&layout.normalize_href)),
        Just(StylesheetLayout::link_tag(&layout.webflow_href)),
        Just(StylesheetLayout::link_tag(&layout.legacy_href)),
        Just(StylesheetLayout::link_prefix(&layout.design_system_hrefs[0])),
        Just(layout.design_system_comment.clone()),
        Just(layout.legacy_comment.clone()),
        Just(layout.marker.clone()),
        "[ \t\r\n]{0,4}",
        "(?s).{0,24}",
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: `Rewriter::apply` never panics on arbitrary input.
    #[test]
    fn property_apply_never_panics(mode in any_mode(), text in "(?s).{0,512}") {
        let rewriter = Rewriter::new(StylesheetLayout::default()).unwrap();
        let _ = rewriter.apply(mode, &text);
    }

    /// PROPERTY: a reported change always differs from the input.
    #[test]
    fn property_changed_means_different(
        mode in any_mode(),
        parts in proptest::collection::vec(fragment(), 0..=16),
    ) {
        let rewriter = Rewriter::new(StylesheetLayout::default()).unwrap();
        let text = parts.concat();

        match rewriter.apply(mode, &text) {
            Rewrite::Changed(updated) => prop_assert_ne!(updated, text),
            Rewrite::Unchanged(_) => {}
        }
    }

    /// PROPERTY: insert on a page that already has the marker never changes it.
    #[test]
    fn property_insert_respects_marker(
        parts in proptest::collection::vec(fragment(), 0..=16),
    ) {
        let rewriter = Rewriter::new(StylesheetLayout::default()).unwrap();
        let text = parts.concat();
        prop_assume!(text.contains("design-system/tokens.css"));

        prop_assert!(!rewriter.apply(RewriteMode::Insert, &text).is_changed());
    }
}
