//! Rewrite mode value object
//!
//! The closed set of transformations a run can apply to every document.

/// Which transformation to apply to the stylesheet block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RewriteMode {
    /// Add the design-system block after the anchor pair
    Insert,
    /// Strip the design-system block from non-excluded pages
    Remove,
    /// Replace the stylesheet run with the canonical order
    Normalize,
}

impl RewriteMode {
    /// Whether path exclusion applies to this mode
    pub fn honors_exclusion(&self) -> bool {
        matches!(self, RewriteMode::Remove)
    }

    /// Status text for a changed document
    pub fn past_tense(&self) -> &'static str {
        match self {
            RewriteMode::Insert => "updated",
            RewriteMode::Remove => "design system removed",
            RewriteMode::Normalize => "reordered",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RewriteMode::Insert => "insert",
            RewriteMode::Remove => "remove",
            RewriteMode::Normalize => "normalize",
        }
    }
}

impl std::fmt::Display for RewriteMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
