//! Rewrite Use Case
//!
//! Orchestrates a bulk stylesheet rewrite over a pages directory.
//!
//! This module handles:
//! - Enumerating documents under the root
//! - Skipping path-excluded documents in remove mode
//! - Rewriting each document and writing only real changes
//! - Reporting per-document outcomes through the event port

mod options;
mod result;
mod use_case;


pub use options::RewriteOptions;
pub use result::{ChangedFile, ContentPreview, FailedFile, RewriteResult, SkippedFile};
pub use use_case::RewriteUseCase;
