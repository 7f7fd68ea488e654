//! Rewrite options

use std::path::PathBuf;

use crate::domain::value_objects::{ExcludeRule, RewriteMode};

/// Options for a rewrite run
#[derive(Debug, Clone)]
pub struct RewriteOptions {
    /// Transformation applied to every document
    pub mode: RewriteMode,
    /// Directory searched recursively for documents
    pub root: PathBuf,
    /// Document file extension, without the dot
    pub extension: String,
    /// Paths left alone by remove mode
    pub exclude: ExcludeRule,
    /// Compute changes without writing them
    pub dry_run: bool,
    /// Keep original and rewritten text of changed documents (for diffs)
    pub keep_previews: bool,
}

impl RewriteOptions {
    /// Create options for `mode` over `root` with default extension and exclusion
    pub fn new(mode: RewriteMode, root: impl Into<PathBuf>) -> Self {
        Self {
            mode,
            root: root.into(),
            extension: "html".to_string(),
            exclude: ExcludeRule::default(),
            dry_run: false,
            keep_previews: false,
        }
    }

    /// Set extension
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// Set exclusion rule
    pub fn with_exclude(mut self, exclude: ExcludeRule) -> Self {
        self.exclude = exclude;
        self
    }

    /// Set dry run
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Keep before/after text for changed documents
    pub fn with_previews(mut self, keep_previews: bool) -> Self {
        self.keep_previews = keep_previews;
        self
    }
}
