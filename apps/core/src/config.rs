//! Runtime configuration.
//!
//! Settings come from environment variables (a `.env` file is honored via
//! `dotenv`), with defaults suitable for local development.

use std::env;
use std::path::PathBuf;

/// Default HTTP port, matching the historical backend.
const DEFAULT_PORT: u16 = 5001;

/// Default CTS keyword lexicon shipped with the crate.
const DEFAULT_KEYWORDS_FILE: &str = "data/cts_keywords.csv";

/// Process-wide settings resolved once at startup.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Port the HTTP server binds to.
    pub port: u16,
    /// Path to the CTS keyword CSV file.
    pub keywords_path: PathBuf,
    /// Root directory for generated artifacts (icon arrays, downloaded images).
    pub artifacts_dir: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            keywords_path: PathBuf::from(DEFAULT_KEYWORDS_FILE),
            artifacts_dir: PathBuf::from("artifacts"),
        }
    }
}

impl Settings {
    /// Resolve settings from the environment.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let port = env::var("CLARIFY_PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.port);

        let keywords_path = env::var("CLARIFY_KEYWORDS")
            .map(PathBuf::from)
            .unwrap_or(defaults.keywords_path);

        let artifacts_dir = env::var("CLARIFY_ARTIFACTS_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.artifacts_dir);

        Self {
            port,
            keywords_path,
            artifacts_dir,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.port, 5001);
        assert_eq!(settings.keywords_path, PathBuf::from("data/cts_keywords.csv"));
    }
}
