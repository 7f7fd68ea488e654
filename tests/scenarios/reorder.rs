//! Scenario: Repairing stylesheet order
//!
//! Journey: hand edits left design-system stylesheets interleaved with the
//! base ones; normalize restores the canonical order.

use crate::common::*;

#[test]
fn normalize_rewrites_run_into_canonical_order() {
    let env = TestEnv::new();
    env.write_file("pages/index.html", OUT_OF_ORDER_PAGE);

    let result = env.run(&["normalize"]);

    assert!(result.success, "stderr:\n{}", result.stderr);
    assert_eq!(env.read_file("pages/index.html"), DESIGN_SYSTEM_PAGE);
    assert!(result.stdout.contains("reordered: index.html"), "{}", result.stdout);
}

#[test]
fn normalize_is_a_no_op_on_canonical_pages() {
    let env = TestEnv::new();
    env.write_file("pages/index.html", DESIGN_SYSTEM_PAGE);
    let mtime = env.modified("pages/index.html");

    let result = env.run(&["normalize"]);

    assert!(result.success);
    assert_eq!(env.modified("pages/index.html"), mtime);
    assert!(result.stdout.contains("already updated: index.html"), "{}", result.stdout);
}

#[test]
fn normalize_skips_pages_without_design_system() {
    let env = TestEnv::new();
    env.write_file("pages/index.html", ANCHOR_ONLY_PAGE);

    let result = env.run(&["normalize"]);

    assert!(result.success);
    assert_eq!(env.read_file("pages/index.html"), ANCHOR_ONLY_PAGE);
    assert!(result.stdout.contains("design system not found"), "{}", result.stdout);
}

#[test]
fn normalize_applies_to_dashboard_pages() {
    let env = TestEnv::new();
    env.write_file("pages/dashboard/index.html", OUT_OF_ORDER_PAGE);

    assert!(env.run(&["normalize"]).success);
    assert_eq!(env.read_file("pages/dashboard/index.html"), DESIGN_SYSTEM_PAGE);
}
