//! Restyle - bulk stylesheet rewriter for static HTML pages
//!
//! Restyle walks a tree of exported pages and rewrites the `<link>` run in
//! each document's head: inserting a design-system stylesheet block,
//! removing it again, or restoring the canonical stylesheet order.
//!
//! Every mode is idempotent. Documents that need no change are never
//! rewritten on disk.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{RewriteOptions, RewriteResult, RewriteUseCase};
pub use config::Config;
pub use domain::services::{Rewrite, Rewriter, SkipReason};
pub use domain::value_objects::{ExcludeRule, RewriteMode, StylesheetLayout};
pub use error::{RestyleError, RestyleResult};
