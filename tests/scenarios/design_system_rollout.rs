//! Scenario: Rolling the design system out to every page
//!
//! Journey: a site exported with only the base stylesheets gets the
//! design-system block inserted everywhere, then the command is re-run.

use crate::common::*;

#[test]
fn insert_adds_block_after_anchor_and_keeps_rest_identical() {
    let env = TestEnv::new();
    env.write_file("pages/index.html", ANCHOR_ONLY_PAGE);

    let result = env.run(&["insert"]);

    assert!(result.success, "stderr:\n{}", result.stderr);
    assert_eq!(env.read_file("pages/index.html"), DESIGN_SYSTEM_PAGE);
    assert!(result.stdout.contains("updated: index.html"), "{}", result.stdout);
    assert!(result.stdout.contains("1 of 1 pages changed"), "{}", result.stdout);
}

#[test]
fn insert_walks_nested_directories_and_reports_each_page() {
    let env = TestEnv::new();
    env.write_file("pages/index.html", ANCHOR_ONLY_PAGE);
    env.write_file("pages/blog/post.html", ANCHOR_ONLY_PAGE);
    env.write_file("pages/done.html", DESIGN_SYSTEM_PAGE);
    env.write_file("pages/plain.html", UNRELATED_PAGE);
    env.write_file("pages/notes.txt", ANCHOR_ONLY_PAGE);

    let result = env.run(&["insert"]);

    assert!(result.success, "stderr:\n{}", result.stderr);
    assert_eq!(env.read_file("pages/blog/post.html"), DESIGN_SYSTEM_PAGE);
    assert_eq!(env.read_file("pages/plain.html"), UNRELATED_PAGE);
    assert_eq!(env.read_file("pages/notes.txt"), ANCHOR_ONLY_PAGE);

    let out = &result.stdout;
    assert!(out.contains("already updated: done.html"), "{out}");
    assert!(out.contains("pattern not found: plain.html"), "{out}");
    assert!(out.contains("2 of 4 pages changed"), "{out}");
}

#[test]
fn second_insert_changes_nothing_and_keeps_mtime() {
    let env = TestEnv::new();
    env.write_file("pages/index.html", ANCHOR_ONLY_PAGE);

    assert!(env.run(&["insert"]).success);
    let after_first = env.read_file("pages/index.html");
    let mtime = env.modified("pages/index.html");

    let result = env.run(&["insert"]);

    assert!(result.success);
    assert_eq!(env.read_file("pages/index.html"), after_first);
    assert_eq!(env.modified("pages/index.html"), mtime);
    assert!(result.stdout.contains("0 of 1 pages changed"), "{}", result.stdout);
}

#[test]
fn root_flag_and_env_select_the_pages_directory() {
    let env = TestEnv::new();
    env.write_file("site/www/index.html", ANCHOR_ONLY_PAGE);

    let result = env.run(&["insert", "--root", "site/www"]);
    assert!(result.success, "stderr:\n{}", result.stderr);
    assert_eq!(env.read_file("site/www/index.html"), DESIGN_SYSTEM_PAGE);

    env.write_file("other/index.html", ANCHOR_ONLY_PAGE);
    let result = env.run_with_env(&["insert"], &[("RESTYLE_PAGES_DIR", "other")]);
    assert!(result.success, "stderr:\n{}", result.stderr);
    assert_eq!(env.read_file("other/index.html"), DESIGN_SYSTEM_PAGE);
}
