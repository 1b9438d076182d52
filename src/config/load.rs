use std::{env, path::PathBuf};

use tracing_subscriber::EnvFilter;

use super::schema::{LayoutSettings, Settings};

/// Configuration loading helpers.
///
/// `Settings::load` tries environment variables first (prefix `GPM_FLATTEN__`), then an
/// optional config file and falls back to struct defaults.
impl Settings {
    /// Load settings from environment and optional config file.
    pub fn load() -> Result<Self, ::config::ConfigError> {
        let config_path = resolve_config_path();

        let mut builder = ::config::Config::builder();

        if let Some(path) = &config_path {
            builder = builder.add_source(::config::File::from(path.as_path()).required(false));
        }

        builder = builder.add_source(
            ::config::Environment::with_prefix("GPM_FLATTEN")
                .separator("__")
                .try_parsing(true),
        );

        let cfg = builder.build()?;
        let settings: Settings = cfg.try_deserialize()?;
        Ok(settings)
    }

    /// Perform basic validation checks on loaded settings.
    pub fn validate(&self) -> Result<(), String> {
        self.layout.validate()?;
        EnvFilter::try_new(&self.log.level)
            .map_err(|e| format!("log.level {:?} is not a valid filter: {e}", self.log.level))?;
        Ok(())
    }
}

impl LayoutSettings {
    fn validate(&self) -> Result<(), String> {
        let segments = [
            ("layout.tracks_dir", &self.tracks_dir),
            ("layout.playlists_dir", &self.playlists_dir),
            ("layout.library_file", &self.library_file),
        ];
        for (key, value) in segments {
            if value.trim().is_empty() {
                return Err(format!("{key} must not be empty"));
            }
            if value.contains(['/', '\\']) || value == "." || value == ".." {
                return Err(format!("{key} must be a single path component, got {value:?}"));
            }
        }
        if self.thumbs_up.is_empty() {
            return Err("layout.thumbs_up must not be empty".to_string());
        }
        Ok(())
    }
}

/// Resolve the config path from `GPM_FLATTEN_CONFIG_PATH` or XDG defaults.
pub fn resolve_config_path() -> Option<PathBuf> {
    if let Some(p) = env::var_os("GPM_FLATTEN_CONFIG_PATH") {
        return Some(PathBuf::from(p));
    }
    default_config_path()
}

/// Compute the default config path under `$XDG_CONFIG_HOME/gpm-flatten/config.toml`
/// or `~/.config/gpm-flatten/config.toml` when `XDG_CONFIG_HOME` is not set.
pub fn default_config_path() -> Option<PathBuf> {
    let config_home = if let Some(xdg) = env::var_os("XDG_CONFIG_HOME") {
        Some(PathBuf::from(xdg))
    } else {
        env::var_os("HOME").map(|home| PathBuf::from(home).join(".config"))
    };

    config_home.map(|d| d.join("gpm-flatten").join("config.toml"))
}
