//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--json, --color, --verbose, --config) are inherited by all subcommands
//! - Every subcommand shares the same page selection and preview flags

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::domain::value_objects::RewriteMode;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// Restyle - bulk stylesheet rewriter for static HTML pages
#[derive(Parser, Debug)]
#[command(name = "restyle")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Emit NDJSON events instead of human output
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Configuration file (defaults to ./restyle.toml)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Page selection and preview flags shared by all subcommands
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct RewriteArgs {
    /// Directory searched recursively for pages
    #[arg(short, long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Page file extension
    #[arg(long, value_name = "EXT")]
    pub extension: Option<String>,

    /// Dry run - show what would change without writing
    #[arg(long)]
    pub dry_run: bool,

    /// Print a unified diff for every changed page
    #[arg(long)]
    pub diff: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Insert the design-system stylesheet block after the base stylesheets
    #[command(visible_alias = "add")]
    Insert {
        #[command(flatten)]
        args: RewriteArgs,
    },

    /// Remove the design-system stylesheet block
    #[command(visible_alias = "strip")]
    Remove {
        #[command(flatten)]
        args: RewriteArgs,

        /// Leave pages whose path contains SUBSTR untouched
        #[arg(long, value_name = "SUBSTR", conflicts_with = "no_exclude")]
        exclude: Option<String>,

        /// Process every page, including normally excluded ones
        #[arg(long)]
        no_exclude: bool,
    },

    /// Rewrite the stylesheet run into canonical order
    #[command(visible_alias = "reorder")]
    Normalize {
        #[command(flatten)]
        args: RewriteArgs,
    },
}

impl Commands {
    pub fn mode(&self) -> RewriteMode {
        match self {
            Commands::Insert { .. } => RewriteMode::Insert,
            Commands::Remove { .. } => RewriteMode::Remove,
            Commands::Normalize { .. } => RewriteMode::Normalize,
        }
    }

    pub fn args(&self) -> &RewriteArgs {
        match self {
            Commands::Insert { args }
            | Commands::Remove { args, .. }
            | Commands::Normalize { args } => args,
        }
    }

    /// Exclusion override from the command line.
    ///
    /// `Some("")` disables exclusion, `None` defers to configuration.
    pub fn exclude_override(&self) -> Option<String> {
        match self {
            Commands::Remove {
                no_exclude: true, ..
            } => Some(String::new()),
            Commands::Remove { exclude, .. } => exclude.clone(),
            _ => None,
        }
    }
}
