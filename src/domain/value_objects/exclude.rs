//! Path exclusion rule
//!
//! Pages whose path contains the designated substring keep their
//! design-system block during removal runs.

use std::path::Path;

/// Substring-based path exclusion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExcludeRule {
    needle: Option<String>,
}

impl ExcludeRule {
    pub const DEFAULT_NEEDLE: &'static str = "dashboard";

    /// Exclude paths containing `needle`. An empty needle excludes nothing.
    pub fn new(needle: impl Into<String>) -> Self {
        let needle = needle.into();
        Self {
            needle: (!needle.is_empty()).then_some(needle),
        }
    }

    pub fn needle(&self) -> Option<&str> {
        self.needle.as_deref()
    }

    /// Whether `path` is excluded.
    ///
    /// The path is matched relative to `root` when it lives under it, so a
    /// root that happens to contain the needle does not exclude every page.
    /// Separators are normalized to `/` before matching.
    pub fn matches(&self, root: &Path, path: &Path) -> bool {
        let Some(needle) = &self.needle else {
            return false;
        };
        let relative = path.strip_prefix(root).unwrap_or(path);
        relative
            .to_string_lossy()
            .replace('\\', "/")
            .contains(needle.as_str())
    }
}

impl Default for ExcludeRule {
    fn default() -> Self {
        Self::new(Self::DEFAULT_NEEDLE)
    }
}
