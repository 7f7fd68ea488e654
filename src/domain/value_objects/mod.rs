//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod exclude;
mod hash;
mod layout;
mod mode;

pub use exclude::ExcludeRule;
pub use hash::ContentHash;
pub use layout::StylesheetLayout;
pub use mode::RewriteMode;
