//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod file_system;
pub mod rewrite_events;

pub use file_system::{has_extension, FileSystem, FsError, FsResult};
pub use rewrite_events::{NoopEventSink, RewriteEvent, RewriteEventSink};
