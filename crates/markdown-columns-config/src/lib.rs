use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Failed to write config file at {config_path}: {source}")]
    ConfigWriteError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to serialize settings: {0}")]
    ConfigSerializeError(#[from] toml::ser::Error),

    #[error("Unknown setting `{0}` (expected one of: {names})", names = Settings::NAMES.join(", "))]
    UnknownSetting(String),
}

/// Process-wide column rendering settings.
///
/// Missing keys in the file fall back to the values from [`Settings::default`],
/// so a partial config merges over the defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Arrange columns right-to-left unless a block says `ltr`.
    pub rtl_by_default: bool,
    /// Let columns wrap onto a new line without a `wrap` keyword.
    pub wrap_by_default: bool,
    /// Apply the side-by-side layout on mobile platforms too.
    pub render_on_mobile: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            rtl_by_default: false,
            wrap_by_default: false,
            render_on_mobile: true,
        }
    }
}

impl Settings {
    /// Setting names accepted by [`Settings::set`] and [`Settings::get`].
    pub const NAMES: [&'static str; 3] = ["rtl_by_default", "wrap_by_default", "render_on_mobile"];

    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let settings: Settings =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        Ok(Some(settings))
    }

    /// Loads settings from `config_path`, or the defaults when no file exists.
    pub fn load_or_default<P: AsRef<Path>>(config_path: P) -> Result<Self, ConfigError> {
        Ok(Self::load_from_path(config_path)?.unwrap_or_default())
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> Result<(), ConfigError> {
        let config_path = config_path.as_ref();
        let write_error = |source| ConfigError::ConfigWriteError {
            config_path: config_path.to_path_buf(),
            source,
        };

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).map_err(write_error)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content).map_err(write_error)
    }

    pub fn save(&self) -> Result<(), ConfigError> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/markdown-columns");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// Expands `~` and environment variables in a user supplied config path.
    pub fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }

    pub fn get(&self, name: &str) -> Result<bool, ConfigError> {
        match name {
            "rtl_by_default" => Ok(self.rtl_by_default),
            "wrap_by_default" => Ok(self.wrap_by_default),
            "render_on_mobile" => Ok(self.render_on_mobile),
            other => Err(ConfigError::UnknownSetting(other.to_string())),
        }
    }

    pub fn set(&mut self, name: &str, value: bool) -> Result<(), ConfigError> {
        let slot = match name {
            "rtl_by_default" => &mut self.rtl_by_default,
            "wrap_by_default" => &mut self.wrap_by_default,
            "render_on_mobile" => &mut self.render_on_mobile,
            other => return Err(ConfigError::UnknownSetting(other.to_string())),
        };
        *slot = value;
        Ok(())
    }
}
