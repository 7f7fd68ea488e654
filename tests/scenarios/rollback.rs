//! Scenario: Rolling the design system back
//!
//! Journey: the block is removed from marketing pages while the dashboard
//! keeps it.

use crate::common::*;

#[test]
fn remove_strips_block_from_regular_pages() {
    let env = TestEnv::new();
    env.write_file("pages/pricing.html", DESIGN_SYSTEM_PAGE);

    let result = env.run(&["remove"]);

    assert!(result.success, "stderr:\n{}", result.stderr);
    let content = env.read_file("pages/pricing.html");
    assert!(!content.contains("design-system/tokens.css"));
    assert!(!content.contains("Stripe Design System"));
    assert!(content.contains(r#"<link href="/assets/css/webflow.css" rel="stylesheet" type="text/css">"#));
    assert!(content.contains(r#"<link href="/assets/css/checkie-stage.webflow.css""#));
    assert!(content.starts_with("<!DOCTYPE html>\n<html data-wf-page=\"home\">\n<head>\n"));
    assert!(content.ends_with("<body>\n  <h1>Home</h1>\n</body>\n</html>\n"));
    assert!(result.stdout.contains("design system removed: pricing.html"));
}

#[test]
fn remove_leaves_dashboard_pages_alone() {
    let env = TestEnv::new();
    env.write_file("pages/dashboard/index.html", DESIGN_SYSTEM_PAGE);
    let mtime = env.modified("pages/dashboard/index.html");

    let result = env.run(&["remove"]);

    assert!(result.success, "stderr:\n{}", result.stderr);
    assert_eq!(env.read_file("pages/dashboard/index.html"), DESIGN_SYSTEM_PAGE);
    assert_eq!(env.modified("pages/dashboard/index.html"), mtime);
    assert!(result.stdout.contains("excluded, design system kept"), "{}", result.stdout);
    assert!(result.stdout.contains("0 of 1 pages changed"), "{}", result.stdout);
}

#[test]
fn no_exclude_processes_dashboard_pages_too() {
    let env = TestEnv::new();
    env.write_file("pages/dashboard/index.html", DESIGN_SYSTEM_PAGE);

    let result = env.run(&["remove", "--no-exclude"]);

    assert!(result.success, "stderr:\n{}", result.stderr);
    assert!(!env.read_file("pages/dashboard/index.html").contains("tokens.css"));
}

#[test]
fn remove_without_block_reports_not_found() {
    let env = TestEnv::new();
    env.write_file("pages/index.html", ANCHOR_ONLY_PAGE);

    let result = env.run(&["remove"]);

    assert!(result.success);
    assert_eq!(env.read_file("pages/index.html"), ANCHOR_ONLY_PAGE);
    assert!(result.stdout.contains("design system not found: index.html"), "{}", result.stdout);
}

#[test]
fn insert_then_remove_then_insert_restores_block() {
    let env = TestEnv::new();
    env.write_file("pages/index.html", ANCHOR_ONLY_PAGE);

    assert!(env.run(&["insert"]).success);
    assert!(env.run(&["remove"]).success);
    assert!(!env.read_file("pages/index.html").contains("tokens.css"));

    assert!(env.run(&["insert"]).success);
    assert!(env.read_file("pages/index.html").contains("tokens.css"));
}
