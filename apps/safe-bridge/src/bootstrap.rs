use safe_application::config::{
    load_config as load_config_file, resolve_paths as resolve_configured_paths, Config,
    ResolvedPaths,
};
use std::env;
use std::path::{Path, PathBuf};

/// Command line overrides, all optional.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub config_path: Option<PathBuf>,
    pub data_dir: Option<PathBuf>,
    pub output: Option<PathBuf>,
}

/// Built-in defaults unless a config file was asked for explicitly.
pub fn load_config(overrides: &Overrides) -> Result<Config, String> {
    match overrides.config_path.as_deref() {
        Some(path) => load_config_file(path),
        None => Ok(Config::default()),
    }
}

/// Command line paths are taken as given and replace the configured ones.
pub fn resolve_paths(config: &Config, overrides: &Overrides) -> ResolvedPaths {
    let home = dirs::home_dir();
    let mut resolved = resolve_configured_paths(&config.paths, home.as_deref(), &executable_dir());
    if let Some(dir) = &overrides.data_dir {
        resolved.data_dir = dir.clone();
    }
    if let Some(output) = &overrides.output {
        resolved.output_file = output.clone();
    }
    resolved
}

fn executable_dir() -> PathBuf {
    env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}
