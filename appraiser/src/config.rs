use std::{env, path::PathBuf};

pub const DEFAULT_BUNDLE_PATH: &str = "modelos/modelo_inmuebles_pack.json";
pub const DEFAULT_LOG_FILE: &str = "tasador.log";

pub const BUNDLE_ENV: &str = "TASADOR_BUNDLE";
pub const LOG_FILE_ENV: &str = "TASADOR_LOG_FILE";

/// Where the app reads its model from and writes its logs to.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub bundle_path: PathBuf,
    pub log_file: PathBuf,
}

impl AppConfig {
    /// Reads the configuration from the process environment, falling back to the defaults.
    ///
    /// # Returns
    /// An `AppConfig` instance.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Replaces the bundle path, used for the command line override.
    pub fn with_bundle_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.bundle_path = path.into();
        self
    }

    fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> Self {
        let get = |key: &str, default: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(default))
        };

        Self {
            bundle_path: get(BUNDLE_ENV, DEFAULT_BUNDLE_PATH),
            log_file: get(LOG_FILE_ENV, DEFAULT_LOG_FILE),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
