//! Rewrite result types

use std::path::PathBuf;

use crate::domain::services::SkipReason;
use crate::domain::value_objects::ContentHash;

/// Original and rewritten text of a changed document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentPreview {
    pub original: String,
    pub updated: String,
}

/// A document whose content changed
#[derive(Debug, Clone)]
pub struct ChangedFile {
    pub path: PathBuf,
    pub before: ContentHash,
    pub after: ContentHash,
    /// Present when previews were requested
    pub preview: Option<ContentPreview>,
}

/// A document left untouched
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: SkipReason,
}

/// A document that could not be read or written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedFile {
    pub path: PathBuf,
    pub message: String,
}

/// Result of a rewrite run
#[derive(Debug, Clone, Default)]
pub struct RewriteResult {
    /// Number of documents enumerated
    pub scanned: usize,
    /// Documents changed (or that would change in dry run)
    pub changed: Vec<ChangedFile>,
    /// Documents skipped, with reasons
    pub skipped: Vec<SkippedFile>,
    /// Documents that failed
    pub errors: Vec<FailedFile>,
}

impl RewriteResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_changed(&mut self, file: ChangedFile) {
        self.changed.push(file);
    }

    pub fn add_skipped(&mut self, path: PathBuf, reason: SkipReason) {
        self.skipped.push(SkippedFile { path, reason });
    }

    pub fn add_error(&mut self, path: PathBuf, message: String) {
        self.errors.push(FailedFile { path, message });
    }

    /// Number of skipped documents with `reason`
    pub fn skipped_for(&self, reason: SkipReason) -> usize {
        self.skipped.iter().filter(|s| s.reason == reason).count()
    }

    /// Check if every document was processed without I/O failure
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }
}
