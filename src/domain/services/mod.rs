//! Domain Services
//!
//! Stateless logic operating on document text:
//!
//! - `line_pattern` - Flexible line-boundary matcher built from fixed strings
//! - `rewriter` - Insert / remove / normalize transformations

pub mod line_pattern;
pub mod rewriter;

pub use line_pattern::{LinePattern, LinePatternBuilder};
pub use rewriter::{Rewrite, Rewriter, SkipReason};
