//! Configuration module for restyle
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (RESTYLE_*)
//! 3. Explicit `--config` file, else project config (./restyle.toml)
//! 4. User config (<config dir>/restyle/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{user_config_path, ConfigWarning, LoadedConfig};
pub use types::{ColorMode, Config, OutputConfig, PagesConfig};
