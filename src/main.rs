//! Restyle CLI - bulk stylesheet rewriter for static HTML pages
//!
//! Usage: restyle [--json] [--color WHEN] [-v] [--config FILE] <COMMAND>
//!
//! Commands:
//!   insert     Insert the design-system stylesheet block
//!   remove     Remove the design-system stylesheet block
//!   normalize  Rewrite the stylesheet run into canonical order

mod commands;
mod ui;

use anyhow::Result;
use clap::Parser;

use restyle::presentation::Cli;

fn main() {
    let cli = Cli::parse();
    let json = cli.json;

    if let Err(err) = run(cli) {
        ui::error::print_error(&err, json);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    commands::rewrite::cmd_rewrite(
        &cli.command,
        cli.config.as_deref(),
        cli.json,
        cli.verbose,
        cli.color,
    )
}
