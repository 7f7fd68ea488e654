//! Stylesheet layout value object
//!
//! Every fixed string the rewriter matches or emits lives here. The defaults
//! are a byte-exact contract with the pages on disk: changing a single
//! character makes the patterns stop triggering.

use serde::{Deserialize, Serialize};

/// The stylesheet block shape: anchors, design-system lines and legacy tail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StylesheetLayout {
    /// Leading whitespace of every emitted line
    pub indent: String,
    /// First line of the anchor pair
    pub normalize_href: String,
    /// Second line of the anchor pair
    pub webflow_href: String,
    /// Substring whose presence means the design-system block is in place
    pub marker: String,
    /// Comment opening the design-system block
    pub design_system_comment: String,
    /// Design-system stylesheets in load order
    pub design_system_hrefs: Vec<String>,
    /// Comment closing the design-system block
    pub legacy_comment: String,
    /// Legacy stylesheet that terminates the canonical block
    pub legacy_href: String,
}

impl Default for StylesheetLayout {
    fn default() -> Self {
        Self {
            indent: "  ".to_string(),
            normalize_href: "/assets/css/normalize.css".to_string(),
            webflow_href: "/assets/css/webflow.css".to_string(),
            marker: "design-system/tokens.css".to_string(),
            design_system_comment: "<!-- Stripe Design System -->".to_string(),
            design_system_hrefs: [
                "/assets/css/design-system/tokens.css",
                "/assets/css/design-system/base.css",
                "/assets/css/design-system/utilities.css",
                "/assets/css/design-system/components.css",
                "/assets/css/design-system/legacy-compat.css",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            legacy_comment: "<!-- Legacy styles (will be gradually removed) -->".to_string(),
            legacy_href: "/assets/css/checkie-stage.webflow.css".to_string(),
        }
    }
}

impl StylesheetLayout {
    /// Render a stylesheet `<link>` tag for `href`
    pub fn link_tag(href: &str) -> String {
        format!(r#"<link href="{}" rel="stylesheet" type="text/css">"#, href)
    }

    /// Opening of a `<link>` tag for `href`, up to the closing quote
    pub fn link_prefix(href: &str) -> String {
        format!(r#"<link href="{}""#, href)
    }

    /// The design-system block inserted after the anchor pair.
    ///
    /// Comment, stylesheet lines, legacy comment; indented, `\n`-joined,
    /// no trailing newline.
    pub fn design_system_block(&self) -> String {
        let mut lines = Vec::with_capacity(self.design_system_hrefs.len() + 2);
        lines.push(self.indented(&self.design_system_comment));
        for href in &self.design_system_hrefs {
            lines.push(self.indented(&Self::link_tag(href)));
        }
        lines.push(self.indented(&self.legacy_comment));
        lines.join("\n")
    }

    /// The full block in canonical load order:
    /// normalize, webflow, design system, legacy.
    pub fn canonical_block(&self) -> String {
        [
            self.indented(&Self::link_tag(&self.normalize_href)),
            self.indented(&Self::link_tag(&self.webflow_href)),
            self.design_system_block(),
            self.indented(&Self::link_tag(&self.legacy_href)),
        ]
        .join("\n")
    }

    /// Check that the layout can produce meaningful patterns
    pub fn validate(&self) -> Result<(), String> {
        if self.marker.trim().is_empty() {
            return Err("marker must not be empty".to_string());
        }
        if self.design_system_hrefs.is_empty() {
            return Err("design_system_hrefs must list at least one stylesheet".to_string());
        }
        let hrefs = [
            ("normalize_href", &self.normalize_href),
            ("webflow_href", &self.webflow_href),
            ("legacy_href", &self.legacy_href),
        ];
        for (name, href) in hrefs {
            if href.trim().is_empty() {
                return Err(format!("{} must not be empty", name));
            }
        }
        if !self.indent.chars().all(|c| c == ' ' || c == '\t') {
            return Err("indent may only contain spaces and tabs".to_string());
        }
        Ok(())
    }

    fn indented(&self, line: &str) -> String {
        format!("{}{}", self.indent, line)
    }
}
