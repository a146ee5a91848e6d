mod loader;

use std::collections::HashSet;

use serde::Deserialize;

pub use loader::{ModelLoader, load_bundle};

use crate::{
    BundleError,
    estimator::{Estimator, Regressor},
};

/// Prefix of the one-hot indicator columns for the neighborhood.
pub const NEIGHBORHOOD_PREFIX: &str = "barrio_";

/// The bundle exactly as it is laid out on disk.
#[derive(Deserialize)]
struct RawBundle {
    #[serde(alias = "modelo")]
    model: Estimator,
    #[serde(alias = "columnas")]
    columns: Vec<String>,
}

/// A fitted estimator together with the ordered columns it was trained on.
#[derive(Debug, Clone)]
pub struct ModelBundle {
    estimator: Estimator,
    columns: Vec<String>,
}

impl ModelBundle {
    /// Creates a new `ModelBundle`.
    ///
    /// # Arguments
    /// * `estimator` - The fitted model.
    /// * `columns` - The training columns, in the order the model reads them.
    ///
    /// # Returns
    /// The bundle or an error if the column list is empty or repeats a name.
    pub fn new(estimator: Estimator, columns: Vec<String>) -> Result<Self, BundleError> {
        if columns.is_empty() {
            return Err(BundleError::Invalid("the column list is empty".into()));
        }

        if let Some(dup) = first_duplicate(&columns) {
            return Err(BundleError::Invalid(format!("column '{dup}' appears twice")));
        }

        Ok(Self { estimator, columns })
    }

    pub fn estimator(&self) -> &Estimator {
        &self.estimator
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Returns the neighborhoods the model knows about, sorted.
    ///
    /// These are the indicator columns with the neighborhood prefix stripped.
    pub fn neighborhoods(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .columns
            .iter()
            .filter_map(|c| c.strip_prefix(NEIGHBORHOOD_PREFIX))
            .collect();

        names.sort_unstable();
        names
    }

    /// One line summary for logs.
    pub fn describe(&self) -> String {
        format!(
            "{} model, {} columns, {} features read",
            self.estimator.kind(),
            self.columns.len(),
            self.estimator.n_features()
        )
    }
}

fn first_duplicate(columns: &[String]) -> Option<&str> {
    let mut seen = HashSet::with_capacity(columns.len());
    columns
        .iter()
        .map(String::as_str)
        .find(|c| !seen.insert(*c))
}
