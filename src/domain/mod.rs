//! Domain Layer
//!
//! The core of restyle: pure text transformation without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Documents under rewrite
//! - `value_objects/` - Immutable value types (RewriteMode, StylesheetLayout, ContentHash)
//! - `services/` - The line-pattern matcher and the rewriter
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system directly
//! 2. **Pure Functions** - A rewrite depends only on the document text
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
