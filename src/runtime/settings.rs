use crate::config;

/// Load and validate settings, falling back to defaults on any problem.
///
/// Runs before the tracing subscriber exists, so warnings go straight to stderr.
pub fn load_settings() -> config::Settings {
    match config::Settings::load() {
        Ok(s) => {
            if let Err(msg) = s.validate() {
                eprintln!("gpm-flatten: invalid config, using defaults: {msg}");
                config::Settings::default()
            } else {
                s
            }
        }
        Err(e) => {
            // Config is optional; failures should not prevent a run.
            eprintln!("gpm-flatten: failed to load config, using defaults: {e}");
            config::Settings::default()
        }
    }
}
