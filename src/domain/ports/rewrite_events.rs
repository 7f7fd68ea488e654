//! Rewrite Event Port
//!
//! Provides an observable interface for rewrite runs.
//! Enables per-document status lines, JSON event streams, and debugging.

use std::path::PathBuf;

use crate::domain::services::SkipReason;
use crate::domain::value_objects::{ContentHash, RewriteMode};

/// Event emitted during a rewrite run
#[derive(Debug, Clone)]
pub enum RewriteEvent {
    /// Documents enumerated, processing about to begin
    Started {
        root: PathBuf,
        mode: RewriteMode,
        document_count: usize,
        dry_run: bool,
    },

    /// Document content changed (written unless dry run)
    DocumentChanged {
        index: usize,
        path: PathBuf,
        before: ContentHash,
        after: ContentHash,
    },

    /// Document left untouched
    DocumentSkipped {
        index: usize,
        path: PathBuf,
        reason: SkipReason,
    },

    /// Reading or writing the document failed
    DocumentFailed {
        index: usize,
        path: PathBuf,
        error: String,
    },

    /// Run completed
    Completed {
        scanned: usize,
        changed: usize,
        skipped: usize,
        failed: usize,
        dry_run: bool,
    },
}

/// Trait for receiving rewrite events
///
/// Implementations:
/// - ConsoleEventSink: status lines in the terminal
/// - JsonEventSink: NDJSON event stream for CI
/// - NoopEventSink: silent operation
pub trait RewriteEventSink {
    /// Handle a rewrite event
    fn on_event(&self, event: RewriteEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl RewriteEventSink for NoopEventSink {
    fn on_event(&self, _event: RewriteEvent) {}
}

impl<T: RewriteEventSink + ?Sized> RewriteEventSink for &T {
    fn on_event(&self, event: RewriteEvent) {
        (**self).on_event(event)
    }
}

/// Collecting sink, for tests
#[cfg(test)]
#[derive(Default)]
pub struct RecordingEventSink {
    pub events: std::sync::Mutex<Vec<RewriteEvent>>,
}

#[cfg(test)]
impl RewriteEventSink for RecordingEventSink {
    fn on_event(&self, event: RewriteEvent) {
        self.events.lock().unwrap().push(event);
    }
}
