//! Rewrite command handler
//!
//! Shared by `insert`, `remove` and `normalize`: resolves configuration,
//! runs the use case and renders the outcome.

use std::path::Path;

use anyhow::Result;

use restyle::config::Config;
use restyle::infrastructure::JsonEventSink;
use restyle::presentation::{create_rewrite_use_case, ColorWhen, Commands};
use restyle::{ExcludeRule, RewriteOptions, RewriteResult};

use crate::ui::blocks::warning::WarningBlock;
use crate::ui::components::diff::render_unified_diff;
use crate::ui::console::ConsoleEventSink;
use crate::ui::context::UiContext;
use crate::ui::views::rewrite::{
    display_path, render_layout, render_rewrite_header, render_rewrite_summary,
};

/// Resolve run options: CLI flags over configuration
fn build_options(command: &Commands, config: &Config, json: bool) -> RewriteOptions {
    let args = command.args();

    let root = args
        .root
        .clone()
        .unwrap_or_else(|| config.pages.root.clone());
    let extension = args
        .extension
        .as_deref()
        .map(|e| e.trim_start_matches('.').to_string())
        .unwrap_or_else(|| config.pages.extension.clone());
    let exclude = match command.exclude_override() {
        Some(needle) => ExcludeRule::new(needle),
        None => config.pages.exclude_rule(),
    };

    RewriteOptions::new(command.mode(), root)
        .with_extension(extension)
        .with_exclude(exclude)
        .with_dry_run(args.dry_run)
        .with_previews(args.diff && !json)
}

/// Execute a rewrite subcommand
pub fn cmd_rewrite(
    command: &Commands,
    config_path: Option<&Path>,
    json: bool,
    verbose: u8,
    color: Option<ColorWhen>,
) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let loaded = Config::load_layered(&cwd, config_path)?;
    let config = loaded.config;
    let ui = UiContext::new(json, verbose, color, &config);

    if !loaded.warnings.is_empty() {
        eprint!(
            "{}",
            WarningBlock::config_warnings(&loaded.warnings).render(ui.color, ui.unicode)
        );
    }

    let options = build_options(command, &config, json);
    let use_case = create_rewrite_use_case(config.stylesheets.clone())?;

    if ui.json {
        let sink = JsonEventSink::stdout();
        use_case.execute(&options, &sink)?;
        return Ok(());
    }

    print!(
        "{}",
        render_rewrite_header(
            options.mode,
            &options.root,
            &options.extension,
            &options.exclude,
            options.dry_run,
            &ui,
        )
    );
    if ui.verbose >= 2 {
        print!("{}", render_layout(use_case.rewriter().layout(), &ui));
    }
    println!();

    let sink = ConsoleEventSink::stdout(ui, options.mode, &options.root, options.dry_run);
    let result = use_case.execute(&options, &sink)?;

    if options.keep_previews {
        print_diffs(&result, &options.root, &ui);
    }

    println!();
    print!(
        "{}",
        render_rewrite_summary(options.mode, &result, options.dry_run, &ui)
    );

    Ok(())
}

fn print_diffs(result: &RewriteResult, root: &Path, ui: &UiContext) {
    for changed in &result.changed {
        let Some(preview) = &changed.preview else {
            continue;
        };
        println!();
        print!(
            "{}",
            render_unified_diff(
                &display_path(root, &changed.path),
                &preview.original,
                &preview.updated,
                ui.color,
            )
        );
    }
}
