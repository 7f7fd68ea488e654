//! JSON Event Sink
//!
//! Outputs rewrite events as NDJSON for CI/automation consumption.

use std::io::{self, Write};
use std::sync::Mutex;

use crate::domain::ports::{RewriteEvent, RewriteEventSink};

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    /// Mutex so the sink can be shared behind `&self`
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer (for testing)
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

/// Convert an event to its NDJSON object
pub fn event_to_json(event: &RewriteEvent) -> serde_json::Value {
    match event {
        RewriteEvent::Started {
            root,
            mode,
            document_count,
            dry_run,
        } => serde_json::json!({
            "event": "start",
            "mode": mode.as_str(),
            "root": root.display().to_string(),
            "document_count": document_count,
            "dry_run": dry_run,
        }),

        RewriteEvent::DocumentChanged {
            index,
            path,
            before,
            after,
        } => serde_json::json!({
            "event": "document_changed",
            "index": index,
            "path": path.display().to_string(),
            "before": before.as_str(),
            "after": after.as_str(),
        }),

        RewriteEvent::DocumentSkipped {
            index,
            path,
            reason,
        } => serde_json::json!({
            "event": "document_skipped",
            "index": index,
            "path": path.display().to_string(),
            "reason": reason.code(),
        }),

        RewriteEvent::DocumentFailed { index, path, error } => serde_json::json!({
            "event": "document_failed",
            "index": index,
            "path": path.display().to_string(),
            "error": error,
        }),

        RewriteEvent::Completed {
            scanned,
            changed,
            skipped,
            failed,
            dry_run,
        } => serde_json::json!({
            "event": "complete",
            "scanned": scanned,
            "changed": changed,
            "skipped": skipped,
            "failed": failed,
            "dry_run": dry_run,
        }),
    }
}

impl RewriteEventSink for JsonEventSink {
    fn on_event(&self, event: RewriteEvent) {
        self.write_event(event_to_json(&event));
    }
}
