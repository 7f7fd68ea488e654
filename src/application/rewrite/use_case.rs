//! Rewrite Use Case
//!
//! Shared driver for all rewrite modes: enumerate documents, then
//! read, transform and conditionally write each one in turn.

use std::path::Path;

use crate::domain::entities::Document;
use crate::domain::ports::{FileSystem, FsError, RewriteEvent, RewriteEventSink};
use crate::domain::services::{Rewrite, Rewriter, SkipReason};
use crate::domain::value_objects::ContentHash;
use crate::error::{RestyleError, RestyleResult};

use super::options::RewriteOptions;
use super::result::{ChangedFile, ContentPreview, RewriteResult};

/// Terminal state of a single document
enum DocumentOutcome {
    Changed(ChangedFile),
    Skipped(SkipReason),
}

/// Rewrite use case - applies one mode to every document under a root
pub struct RewriteUseCase<FS>
where
    FS: FileSystem,
{
    fs: FS,
    rewriter: Rewriter,
}

impl<FS> RewriteUseCase<FS>
where
    FS: FileSystem,
{
    /// Create a new rewrite use case
    pub fn new(fs: FS, rewriter: Rewriter) -> Self {
        Self { fs, rewriter }
    }

    pub fn rewriter(&self) -> &Rewriter {
        &self.rewriter
    }

    /// Execute the run.
    ///
    /// Only enumeration failures are returned as errors. Per-document
    /// failures are recorded in the result and processing continues.
    pub fn execute(
        &self,
        options: &RewriteOptions,
        events: &dyn RewriteEventSink,
    ) -> RestyleResult<RewriteResult> {
        let files = self
            .fs
            .list_files(&options.root, &options.extension)
            .map_err(|e| match e {
                FsError::NotFound(_) => RestyleError::RootNotFound {
                    path: options.root.clone(),
                },
                other => RestyleError::Walk {
                    root: options.root.clone(),
                    message: other.to_string(),
                },
            })?;

        events.on_event(RewriteEvent::Started {
            root: options.root.clone(),
            mode: options.mode,
            document_count: files.len(),
            dry_run: options.dry_run,
        });

        let mut result = RewriteResult::new();
        result.scanned = files.len();

        for (index, path) in files.into_iter().enumerate() {
            match self.process(&path, options) {
                Ok(DocumentOutcome::Changed(changed)) => {
                    events.on_event(RewriteEvent::DocumentChanged {
                        index,
                        path: path.clone(),
                        before: changed.before.clone(),
                        after: changed.after.clone(),
                    });
                    result.add_changed(changed);
                }
                Ok(DocumentOutcome::Skipped(reason)) => {
                    events.on_event(RewriteEvent::DocumentSkipped {
                        index,
                        path: path.clone(),
                        reason,
                    });
                    result.add_skipped(path, reason);
                }
                Err(e) => {
                    let message = e.to_string();
                    events.on_event(RewriteEvent::DocumentFailed {
                        index,
                        path: path.clone(),
                        error: message.clone(),
                    });
                    result.add_error(path, message);
                }
            }
        }

        events.on_event(RewriteEvent::Completed {
            scanned: result.scanned,
            changed: result.changed.len(),
            skipped: result.skipped.len(),
            failed: result.errors.len(),
            dry_run: options.dry_run,
        });

        Ok(result)
    }

    fn process(&self, path: &Path, options: &RewriteOptions) -> Result<DocumentOutcome, FsError> {
        // Excluded pages are never opened.
        if options.mode.honors_exclusion() && options.exclude.matches(&options.root, path) {
            return Ok(DocumentOutcome::Skipped(SkipReason::Excluded));
        }

        let document = Document::new(path, self.fs.read(path)?);

        let updated = match self.rewriter.apply(options.mode, document.content()) {
            Rewrite::Changed(updated) => updated,
            Rewrite::Unchanged(reason) => return Ok(DocumentOutcome::Skipped(reason)),
        };

        if !options.dry_run {
            self.fs.write(path, &updated)?;
        }

        let changed = ChangedFile {
            path: document.path().to_path_buf(),
            before: document.hash(),
            after: ContentHash::from_content(&updated),
            preview: options.keep_previews.then(|| ContentPreview {
                original: document.into_content(),
                updated,
            }),
        };
        Ok(DocumentOutcome::Changed(changed))
    }
}
