//! Human-readable event sink
//!
//! Prints one status line per document as the run progresses.

use std::cell::RefCell;
use std::io::{self, Write};
use std::path::PathBuf;

use restyle::domain::ports::{RewriteEvent, RewriteEventSink};
use restyle::RewriteMode;

use crate::ui::context::UiContext;
use crate::ui::views::rewrite::{
    display_path, render_changed_line, render_failed_line, render_skipped_line,
};

pub struct ConsoleEventSink<W: Write = io::Stdout> {
    ui: UiContext,
    mode: RewriteMode,
    root: PathBuf,
    dry_run: bool,
    writer: RefCell<W>,
}

impl ConsoleEventSink {
    pub fn stdout(ui: UiContext, mode: RewriteMode, root: impl Into<PathBuf>, dry_run: bool) -> Self {
        Self::with_writer(ui, mode, root, dry_run, io::stdout())
    }
}

impl<W: Write> ConsoleEventSink<W> {
    pub fn with_writer(
        ui: UiContext,
        mode: RewriteMode,
        root: impl Into<PathBuf>,
        dry_run: bool,
        writer: W,
    ) -> Self {
        Self {
            ui,
            mode,
            root: root.into(),
            dry_run,
            writer: RefCell::new(writer),
        }
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.writer.into_inner()
    }

    fn line(&self, event: &RewriteEvent) -> Option<String> {
        match event {
            RewriteEvent::DocumentChanged {
                path,
                before,
                after,
                ..
            } => {
                let hashes = (self.ui.verbose > 0).then_some((before, after));
                Some(render_changed_line(
                    self.mode,
                    &display_path(&self.root, path),
                    hashes,
                    self.dry_run,
                    &self.ui,
                ))
            }
            RewriteEvent::DocumentSkipped { path, reason, .. } => Some(render_skipped_line(
                &display_path(&self.root, path),
                *reason,
                &self.ui,
            )),
            RewriteEvent::DocumentFailed { path, error, .. } => Some(render_failed_line(
                &display_path(&self.root, path),
                error,
                &self.ui,
            )),
            // Header and summary are rendered by the command.
            RewriteEvent::Started { .. } | RewriteEvent::Completed { .. } => None,
        }
    }
}

impl<W: Write> RewriteEventSink for ConsoleEventSink<W> {
    fn on_event(&self, event: RewriteEvent) {
        if let Some(line) = self.line(&event) {
            let mut writer = self.writer.borrow_mut();
            let _ = writeln!(writer, "{}", line);
        }
    }
}
