//! Stylesheet rewriter
//!
//! Pure text transformation for the three rewrite modes. The rewriter owns
//! the compiled patterns for one [`StylesheetLayout`] and holds no state
//! between documents. Emitted lines follow the document's line ending.

use std::borrow::Cow;

use crate::domain::services::line_pattern::LinePattern;
use crate::domain::value_objects::{RewriteMode, StylesheetLayout};
use crate::error::{RestyleError, RestyleResult};

/// Why a document was left untouched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkipReason {
    /// Already in the desired state
    AlreadyUpdated,
    /// The block to rewrite was not found
    PatternNotFound,
    /// Path matches the exclusion rule
    Excluded,
    /// The mode does not apply to this document (marker absent)
    NotApplicable,
}

impl SkipReason {
    /// Stable identifier for machine-readable output
    pub fn code(&self) -> &'static str {
        match self {
            SkipReason::AlreadyUpdated => "already_updated",
            SkipReason::PatternNotFound => "pattern_not_found",
            SkipReason::Excluded => "excluded",
            SkipReason::NotApplicable => "not_applicable",
        }
    }
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::AlreadyUpdated => write!(f, "already updated"),
            SkipReason::PatternNotFound => write!(f, "pattern not found"),
            SkipReason::Excluded => write!(f, "excluded, design system kept"),
            SkipReason::NotApplicable => write!(f, "design system not found"),
        }
    }
}

/// Result of rewriting one document's text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rewrite {
    Changed(String),
    Unchanged(SkipReason),
}

impl Rewrite {
    pub fn is_changed(&self) -> bool {
        matches!(self, Rewrite::Changed(_))
    }

    /// The text after rewriting: the new text, or `original` when unchanged
    pub fn into_text(self, original: &str) -> String {
        match self {
            Rewrite::Changed(text) => text,
            Rewrite::Unchanged(_) => original.to_string(),
        }
    }
}

/// Applies rewrite modes to document text
#[derive(Debug, Clone)]
pub struct Rewriter {
    layout: StylesheetLayout,
    /// normalize `<link>` followed by webflow `<link>`
    anchor: LinePattern,
    /// design-system comment through legacy comment plus trailing whitespace
    design_system: LinePattern,
    /// normalize `<link>` through the legacy stylesheet `<link>`
    stylesheet_run: LinePattern,
    insertion: String,
    canonical: String,
}

impl Rewriter {
    pub fn new(layout: StylesheetLayout) -> RestyleResult<Self> {
        layout
            .validate()
            .map_err(|message| RestyleError::InvalidLayout { message })?;

        let design_system_block = layout.design_system_block();
        if !design_system_block.contains(&layout.marker) {
            return Err(RestyleError::InvalidLayout {
                message: format!(
                    "marker '{}' does not occur in the design-system block",
                    layout.marker
                ),
            });
        }

        let anchor = LinePattern::builder()
            .literal(&StylesheetLayout::link_tag(&layout.normalize_href))
            .whitespace()
            .literal(&StylesheetLayout::link_tag(&layout.webflow_href))
            .build("anchor")?;

        let design_system_prefixes: Vec<String> = layout
            .design_system_hrefs
            .iter()
            .map(|href| StylesheetLayout::link_prefix(href))
            .collect();
        let design_system = LinePattern::builder()
            .literal(&format!("{}{}", layout.indent, layout.design_system_comment))
            .whitespace()
            .tag_sequence(design_system_prefixes.iter().map(String::as_str))
            .whitespace()
            .literal(&layout.legacy_comment)
            .whitespace()
            .build("design system")?;

        let stylesheet_run = LinePattern::builder()
            .indent()
            .tag(&StylesheetLayout::link_prefix(&layout.normalize_href))
            .lazy_gap()
            .tag(&StylesheetLayout::link_prefix(&layout.legacy_href))
            .build("stylesheet run")?;

        Ok(Self {
            insertion: format!("\n{}", design_system_block),
            canonical: layout.canonical_block(),
            layout,
            anchor,
            design_system,
            stylesheet_run,
        })
    }

    pub fn layout(&self) -> &StylesheetLayout {
        &self.layout
    }

    /// Rewrite `text` according to `mode`
    pub fn apply(&self, mode: RewriteMode, text: &str) -> Rewrite {
        match mode {
            RewriteMode::Insert => self.insert(text),
            RewriteMode::Remove => self.remove(text),
            RewriteMode::Normalize => self.normalize(text),
        }
    }

    fn has_marker(&self, text: &str) -> bool {
        text.contains(&self.layout.marker)
    }

    fn insert(&self, text: &str) -> Rewrite {
        if self.has_marker(text) {
            return Rewrite::Unchanged(SkipReason::AlreadyUpdated);
        }

        let insertion = with_line_ending(&self.insertion, line_ending(text));
        let updated = self
            .anchor
            .replace_all_with(text, |anchor| format!("{}{}", anchor, insertion));
        changed_or(text, updated.into_owned(), SkipReason::PatternNotFound)
    }

    fn remove(&self, text: &str) -> Rewrite {
        if !self.has_marker(text) {
            return Rewrite::Unchanged(SkipReason::NotApplicable);
        }

        let updated = self.design_system.replace_all(text, "");
        changed_or(text, updated.into_owned(), SkipReason::PatternNotFound)
    }

    fn normalize(&self, text: &str) -> Rewrite {
        if !self.has_marker(text) {
            return Rewrite::Unchanged(SkipReason::NotApplicable);
        }
        if !self.stylesheet_run.is_match(text) {
            return Rewrite::Unchanged(SkipReason::PatternNotFound);
        }

        let canonical = with_line_ending(&self.canonical, line_ending(text));
        let updated = self.stylesheet_run.replace_all(text, &canonical);
        changed_or(text, updated.into_owned(), SkipReason::AlreadyUpdated)
    }
}

/// `\r\n` when the document uses CRLF line endings, `\n` otherwise
fn line_ending(text: &str) -> &'static str {
    if text.contains("\r\n") {
        "\r\n"
    } else {
        "\n"
    }
}

fn with_line_ending<'a>(lines: &'a str, eol: &str) -> Cow<'a, str> {
    if eol == "\n" {
        Cow::Borrowed(lines)
    } else {
        Cow::Owned(lines.replace('\n', eol))
    }
}

fn changed_or(original: &str, updated: String, reason: SkipReason) -> Rewrite {
    if updated == original {
        Rewrite::Unchanged(reason)
    } else {
        Rewrite::Changed(updated)
    }
}
