//! Config file location for bookfees
//!
//! ## Resolution Order
//!
//! 1. An explicit path (the `--config` flag)
//! 2. `BOOKFEES_CONFIG` environment variable (if set)
//! 3. Unix (Linux/macOS): `$XDG_CONFIG_HOME/bookfees/config.json` or
//!    `~/.config/bookfees/config.json`
//! 4. Windows: `%APPDATA%\bookfees\config.json`

use std::path::{Path, PathBuf};

use crate::error::FeesError;

/// Environment variable naming the config file
pub const CONFIG_ENV_VAR: &str = "BOOKFEES_CONFIG";

/// Where the settings file lives
#[derive(Debug, Clone)]
pub struct ConfigPaths {
    settings_file: PathBuf,
}

impl ConfigPaths {
    /// Resolve the settings file location
    ///
    /// # Errors
    ///
    /// Returns an error if no explicit path is given and the user's config
    /// directory cannot be determined.
    pub fn resolve(explicit: Option<PathBuf>) -> Result<Self, FeesError> {
        let settings_file = match explicit {
            Some(path) => path,
            None => match std::env::var(CONFIG_ENV_VAR) {
                Ok(custom) if !custom.is_empty() => PathBuf::from(custom),
                _ => resolve_default_dir()?.join("config.json"),
            },
        };

        Ok(Self { settings_file })
    }

    /// Use a specific settings file (useful for testing)
    pub fn with_settings_file(settings_file: PathBuf) -> Self {
        Self { settings_file }
    }

    pub fn settings_file(&self) -> &Path {
        &self.settings_file
    }
}

/// Resolve the default config directory based on platform
#[cfg(not(windows))]
fn resolve_default_dir() -> Result<PathBuf, FeesError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) if !xdg.is_empty() => PathBuf::from(xdg),
        _ => {
            let home = std::env::var("HOME").map_err(|_| {
                FeesError::Config("Could not determine HOME directory".into())
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("bookfees"))
}

/// Resolve the default config directory based on platform
#[cfg(windows)]
fn resolve_default_dir() -> Result<PathBuf, FeesError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| FeesError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("bookfees"))
}
