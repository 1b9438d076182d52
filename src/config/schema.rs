use serde::Deserialize;

/// Top-level settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/gpm-flatten/config.toml` or `~/.config/gpm-flatten/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `GPM_FLATTEN__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub layout: LayoutSettings,
    pub log: LogSettings,
}

/// Names used in the Takeout export and in the flattened output.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LayoutSettings {
    /// Subdirectory holding record files for the library and ordinary playlists.
    pub tracks_dir: String,
    /// Directory (under both source and destination) containing playlists.
    pub playlists_dir: String,
    /// Output file stem for the main library (`.csv` is appended).
    pub library_file: String,
    /// Playlist whose record files sit directly in its own directory.
    pub thumbs_up: String,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            tracks_dir: "Tracks".to_string(),
            playlists_dir: "Playlists".to_string(),
            library_file: "Library".to_string(),
            thumbs_up: "Thumbs Up".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// Filter used when `RUST_LOG` is unset, e.g. "warn" or "gpm_flatten=debug".
    pub level: String,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}
