use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::model::config::Config;

/// The starter config written by `jot init`.
pub const CONFIG_TEMPLATE: &str = include_str!("../templates/config.toml");

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot write config {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("config already exists at {0} (pass --force to overwrite)")]
    Exists(PathBuf),
}

/// Resolve the config path: explicit override, else
/// $XDG_CONFIG_HOME/jot/config.toml, else ~/.config/jot/config.toml.
pub fn config_path(override_path: Option<&Path>) -> PathBuf {
    if let Some(path) = override_path {
        return path.to_path_buf();
    }
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME")
        && !xdg.is_empty()
    {
        return PathBuf::from(xdg).join("jot").join("config.toml");
    }
    let home = env::var("HOME").unwrap_or_default();
    PathBuf::from(home)
        .join(".config")
        .join("jot")
        .join("config.toml")
}

/// Load the config, falling back to defaults when the file doesn't exist.
/// A file that exists but doesn't parse is an error, not a silent default.
pub fn load_config(override_path: Option<&Path>) -> Result<Config, ConfigError> {
    let path = config_path(override_path);
    let text = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Config::default()),
        Err(e) => return Err(ConfigError::Read { path, source: e }),
    };
    Ok(toml::from_str(&text)?)
}

/// Write the starter config template, creating parent directories. Refuses
/// to overwrite an existing file unless `force`.
pub fn write_default_config(path: &Path, force: bool) -> Result<(), ConfigError> {
    if path.exists() && !force {
        return Err(ConfigError::Exists(path.to_path_buf()));
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| ConfigError::Write {
            path: path.to_path_buf(),
            source: e,
        })?;
    }
    fs::write(path, CONFIG_TEMPLATE).map_err(|e| ConfigError::Write {
        path: path.to_path_buf(),
        source: e,
    })
}
