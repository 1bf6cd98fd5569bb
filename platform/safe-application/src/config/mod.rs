use safe_domain::value_objects::portfolio_snapshot::PortfolioDefaults;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_DATA_DIR: &str = "~/Step";
pub const DEFAULT_OUTPUT_FILE: &str = "safe-live-data.json";
pub const DEFAULT_PORTFOLIO_CSV: &str = "paper_trading_v4_portfolio_snapshot.csv";
pub const DEFAULT_DECISIONS_CSV: &str = "paper_trading_v4_multi_asset.csv";
pub const DEFAULT_START_TIME_FILE: &str = "safe_v4_fullpower_start.txt";

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Every section is optional; an empty file is the built-in setup.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(deny_unknown_fields, default)]
pub struct Config {
    pub paths: PathsConfig,
    pub files: FilesConfig,
    pub portfolio_defaults: PortfolioDefaults,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(deny_unknown_fields, default)]
pub struct PathsConfig {
    /// Directory holding the trading process output. `~` expands to the home directory.
    pub data_dir: String,
    /// Relative paths are placed next to the executable.
    pub output_file: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            data_dir: DEFAULT_DATA_DIR.to_string(),
            output_file: DEFAULT_OUTPUT_FILE.to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(deny_unknown_fields, default)]
pub struct FilesConfig {
    pub portfolio_csv: String,
    pub decisions_csv: String,
    pub start_time: String,
}

impl Default for FilesConfig {
    fn default() -> Self {
        Self {
            portfolio_csv: DEFAULT_PORTFOLIO_CSV.to_string(),
            decisions_csv: DEFAULT_DECISIONS_CSV.to_string(),
            start_time: DEFAULT_START_TIME_FILE.to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(deny_unknown_fields, default)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive.
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: LogFormat::Text,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPaths {
    pub data_dir: PathBuf,
    pub output_file: PathBuf,
}

pub fn load_config(path: &Path) -> Result<Config, String> {
    let (config, _source) = load_config_with_source(path)?;
    Ok(config)
}

pub fn load_config_with_source(path: &Path) -> Result<(Config, String), String> {
    let contents = fs::read_to_string(path)
        .map_err(|err| format!("failed to read config {}: {}", path.display(), err))?;
    let config = toml::from_str(&contents)
        .map_err(|err| format!("failed to parse TOML {}: {}", path.display(), err))?;
    Ok((config, contents))
}

pub fn to_toml_pretty(config: &Config) -> Result<String, String> {
    toml::to_string_pretty(config)
        .map_err(|err| format!("failed to serialize config as TOML: {err}"))
}

/// Turns configured path strings into concrete locations.
///
/// `home` backs `~` expansion; `exe_dir` anchors a relative output file.
/// Without a home directory `~` paths are kept literally, which leaves the
/// data directory unreadable rather than failing the run.
pub fn resolve_paths(paths: &PathsConfig, home: Option<&Path>, exe_dir: &Path) -> ResolvedPaths {
    let output_file = expand_home(&paths.output_file, home);
    let output_file = if output_file.is_relative() {
        exe_dir.join(output_file)
    } else {
        output_file
    };
    ResolvedPaths {
        data_dir: expand_home(&paths.data_dir, home),
        output_file,
    }
}

fn expand_home(raw: &str, home: Option<&Path>) -> PathBuf {
    let rest = match raw.strip_prefix('~') {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => rest.trim_start_matches('/'),
        _ => return PathBuf::from(raw),
    };
    let Some(home) = home else {
        tracing::warn!(path = raw, "home directory is unknown; using path as given");
        return PathBuf::from(raw);
    };
    if rest.is_empty() {
        return home.to_path_buf();
    }
    home.join(rest)
}
