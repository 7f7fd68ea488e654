//! Flexible line-boundary matcher
//!
//! Builds regexes out of fixed strings so that the literal text always
//! matches byte-for-byte while the whitespace and newlines between lines,
//! and the trailing attributes of `<link>` tags, are free to vary.

use std::borrow::Cow;

use regex::{NoExpand, Regex};

use crate::error::{RestyleError, RestyleResult};

/// A compiled flexible pattern
#[derive(Debug, Clone)]
pub struct LinePattern {
    regex: Regex,
}

impl LinePattern {
    pub fn builder() -> LinePatternBuilder {
        LinePatternBuilder::default()
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    /// Replace every match with `replacement` taken literally (no `$` expansion)
    pub fn replace_all<'t>(&self, text: &'t str, replacement: &str) -> Cow<'t, str> {
        self.regex.replace_all(text, NoExpand(replacement))
    }

    /// Replace every match with the result of `f(matched_text)`
    pub fn replace_all_with<'t>(
        &self,
        text: &'t str,
        mut f: impl FnMut(&str) -> String,
    ) -> Cow<'t, str> {
        self.regex
            .replace_all(text, |caps: &regex::Captures<'_>| f(&caps[0]))
    }
}

/// Builder assembling a [`LinePattern`] segment by segment.
///
/// Segments are concatenated exactly as added; nothing is implied between
/// them. Use [`LinePatternBuilder::whitespace`] to allow a line break.
#[derive(Debug, Default, Clone)]
pub struct LinePatternBuilder {
    source: String,
}

impl LinePatternBuilder {
    /// Horizontal whitespace at the start of a line (`[ \t]*`)
    pub fn indent(mut self) -> Self {
        self.source.push_str(r"[ \t]*");
        self
    }

    /// Text matched byte-for-byte
    pub fn literal(mut self, text: &str) -> Self {
        self.source.push_str(&regex::escape(text));
        self
    }

    /// A tag starting with `prefix`, with any attributes up to the closing `>`
    pub fn tag(mut self, prefix: &str) -> Self {
        self.source.push_str(&regex::escape(prefix));
        self.source.push_str("[^>]*>");
        self
    }

    /// Any run of whitespace, newlines included (`\s*`)
    pub fn whitespace(mut self) -> Self {
        self.source.push_str(r"\s*");
        self
    }

    /// Shortest span of anything, newlines included
    pub fn lazy_gap(mut self) -> Self {
        self.source.push_str("(?s:.*?)");
        self
    }

    /// Tags that must appear in order, separated by whitespace
    pub fn tag_sequence<'a>(self, prefixes: impl IntoIterator<Item = &'a str>) -> Self {
        prefixes
            .into_iter()
            .enumerate()
            .fold(self, |builder, (i, prefix)| {
                let builder = if i > 0 { builder.whitespace() } else { builder };
                builder.tag(prefix)
            })
    }

    pub fn build(self, name: &'static str) -> RestyleResult<LinePattern> {
        let regex = Regex::new(&self.source)
            .map_err(|source| RestyleError::InvalidPattern { name, source })?;
        Ok(LinePattern { regex })
    }
}
