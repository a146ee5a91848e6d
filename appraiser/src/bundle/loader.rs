use std::{
    fs, io,
    path::{Path, PathBuf},
    sync::OnceLock,
};

use log::{info, warn};

use super::{ModelBundle, RawBundle};
use crate::BundleError;

/// Reads a model bundle from disk.
///
/// # Arguments
/// * `path` - Location of the JSON bundle.
///
/// # Returns
/// `None` if there is no file at `path`, the bundle if it loads, or an error if the file
/// exists but cannot be read or is malformed.
pub fn load_bundle<P: AsRef<Path>>(path: P) -> Result<Option<ModelBundle>, BundleError> {
    let path = path.as_ref();

    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            warn!("no model bundle at {}", path.display());
            return Ok(None);
        }
        Err(source) => {
            return Err(BundleError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let raw: RawBundle = serde_json::from_str(&content).map_err(|source| BundleError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    let bundle = ModelBundle::new(raw.model, raw.columns)?;
    info!("loaded {} from {}", bundle.describe(), path.display());
    Ok(Some(bundle))
}

/// Loads the bundle once and hands out the same copy for as long as the loader lives.
///
/// A missing file is remembered too: once absent, the loader never looks again.
#[derive(Debug)]
pub struct ModelLoader {
    path: PathBuf,
    cached: OnceLock<Option<ModelBundle>>,
}

impl ModelLoader {
    /// Creates a new `ModelLoader`. Nothing is read until [`ModelLoader::load`].
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            cached: OnceLock::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the cached bundle, reading it on the first call.
    ///
    /// # Returns
    /// The bundle, `None` if the file is absent, or the load error.
    pub fn load(&self) -> Result<Option<&ModelBundle>, BundleError> {
        if let Some(cached) = self.cached.get() {
            return Ok(cached.as_ref());
        }

        let loaded = load_bundle(&self.path)?;
        Ok(self.cached.get_or_init(|| loaded).as_ref())
    }
}
