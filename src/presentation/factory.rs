//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use crate::application::RewriteUseCase;
use crate::domain::services::Rewriter;
use crate::domain::value_objects::StylesheetLayout;
use crate::error::RestyleResult;
use crate::infrastructure::LocalFs;

/// Type alias for the concrete RewriteUseCase with all dependencies
pub type ConcreteRewriteUseCase = RewriteUseCase<LocalFs>;

/// Create a rewrite use case operating on the local file system
///
/// Fails when the layout cannot produce usable patterns.
pub fn create_rewrite_use_case(layout: StylesheetLayout) -> RestyleResult<ConcreteRewriteUseCase> {
    let rewriter = Rewriter::new(layout)?;
    Ok(RewriteUseCase::new(LocalFs::new(), rewriter))
}
