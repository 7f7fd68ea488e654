//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{RestyleError, RestyleResult};

use super::types::{ColorMode, Config};

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Configuration together with where it came from
#[derive(Debug, Clone, Default)]
pub struct LoadedConfig {
    pub config: Config,
    /// File the configuration was read from, if any
    pub source: Option<PathBuf>,
    pub warnings: Vec<ConfigWarning>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub(crate) fn load_with_warnings(path: &Path) -> RestyleResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| RestyleError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| RestyleError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    config
        .stylesheets
        .validate()
        .map_err(|message| RestyleError::InvalidConfig {
            file: path.to_path_buf(),
            message,
        })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from an explicit file, the project file, the user file, or defaults.
///
/// An explicit file must exist. A project or user file that exists but does
/// not parse is an error rather than silently ignored. A relative
/// `pages.root` from an explicit or project file is resolved against that
/// file's directory.
pub fn load_layered(project_dir: &Path, explicit: Option<&Path>) -> RestyleResult<LoadedConfig> {
    let project_config = project_dir.join(Config::FILE_NAME);

    let (source, anchored) = match explicit {
        Some(path) => (Some(path.to_path_buf()), true),
        None if project_config.is_file() => (Some(project_config), true),
        None => (user_config_path().filter(|p| p.is_file()), false),
    };

    let mut loaded = match source {
        Some(path) => {
            let (mut config, warnings) = load_with_warnings(&path)?;
            if anchored && config.pages.root.is_relative() {
                if let Some(parent) = path.parent() {
                    config.pages.root = parent.join(&config.pages.root);
                }
            }
            LoadedConfig {
                config,
                source: Some(path),
                warnings,
            }
        }
        None => LoadedConfig::default(),
    };

    loaded.config = apply_env_overrides(loaded.config, |key| std::env::var(key).ok());
    Ok(loaded)
}

/// User-level config file (`<config dir>/restyle/config.toml`).
///
/// `RESTYLE_USER_CONFIG` overrides the location; `dirs` ignores `HOME` and
/// `XDG_CONFIG_HOME` on Windows.
pub fn user_config_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os("RESTYLE_USER_CONFIG").filter(|p| !p.is_empty()) {
        return Some(PathBuf::from(path));
    }
    dirs::config_dir().map(|dir| dir.join("restyle").join("config.toml"))
}

/// Apply environment variable overrides (RESTYLE_* prefix)
pub(crate) fn apply_env_overrides(
    mut config: Config,
    get_env: impl Fn(&str) -> Option<String>,
) -> Config {
    // RESTYLE_PAGES_DIR
    if let Some(root) = get_env("RESTYLE_PAGES_DIR").filter(|v| !v.is_empty()) {
        config.pages.root = PathBuf::from(root);
    }

    // RESTYLE_EXTENSION
    if let Some(ext) = get_env("RESTYLE_EXTENSION").filter(|v| !v.is_empty()) {
        config.pages.extension = ext.trim_start_matches('.').to_string();
    }

    // RESTYLE_EXCLUDE (empty disables exclusion)
    if let Some(exclude) = get_env("RESTYLE_EXCLUDE") {
        config.pages.exclude = exclude;
    }

    // RESTYLE_COLOR
    if let Some(color) = get_env("RESTYLE_COLOR") {
        config.output.color = match color.to_lowercase().as_str() {
            "always" => ColorMode::Always,
            "never" => ColorMode::Never,
            _ => ColorMode::Auto,
        };
    }

    config
}

pub(crate) fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

pub(crate) fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "pages",
        "root",
        "extension",
        "exclude",
        "output",
        "color",
        "unicode",
        "stylesheets",
        "indent",
        "normalize_href",
        "webflow_href",
        "marker",
        "design_system_comment",
        "design_system_hrefs",
        "legacy_comment",
        "legacy_href",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
