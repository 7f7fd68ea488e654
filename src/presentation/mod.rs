//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//!
//! ## Usage
//!
//! ```ignore
//! use restyle::presentation::factory;
//!
//! let use_case = factory::create_rewrite_use_case(config.stylesheets)?;
//! let result = use_case.execute(&options, &sink)?;
//! ```

pub mod cli;
pub mod factory;

pub use cli::{Cli, ColorWhen, Commands, RewriteArgs};
pub use factory::create_rewrite_use_case;
