//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Local file system (enumeration, reads, atomic writes)
//! - `events/` - Event sinks (NDJSON)

pub mod events;
pub mod fs;

// Re-export for convenience
pub use events::JsonEventSink;
pub use fs::LocalFs;
