//! Application Layer
//!
//! Use cases that coordinate domain services and ports.
//!
//! - `rewrite` - The shared driver behind insert, remove and normalize

pub mod rewrite;

pub use rewrite::{RewriteOptions, RewriteResult, RewriteUseCase};
