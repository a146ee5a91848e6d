use ndarray::ArrayView1;
use serde::Deserialize;

use super::{RegressionTree, Regressor};
use crate::Result;

#[derive(Deserialize)]
struct RawForest {
    trees: Vec<RegressionTree>,
}

/// A bagged ensemble of regression trees whose estimate is the mean of its trees.
#[derive(Debug, Clone, Deserialize)]
#[serde(try_from = "RawForest")]
pub struct RandomForest {
    trees: Vec<RegressionTree>,
}

impl RandomForest {
    /// Creates a new `RandomForest`.
    ///
    /// # Arguments
    /// * `trees` - The fitted trees, at least one.
    ///
    /// # Returns
    /// The forest or an error if there are no trees.
    pub fn new(trees: Vec<RegressionTree>) -> std::result::Result<Self, String> {
        if trees.is_empty() {
            return Err("forest has no trees".into());
        }

        Ok(Self { trees })
    }

    pub fn n_trees(&self) -> usize {
        self.trees.len()
    }
}

impl TryFrom<RawForest> for RandomForest {
    type Error = String;

    fn try_from(raw: RawForest) -> std::result::Result<Self, Self::Error> {
        Self::new(raw.trees)
    }
}

impl Regressor for RandomForest {
    fn n_features(&self) -> usize {
        self.trees.iter().map(|t| t.n_features()).max().unwrap_or(0)
    }

    fn predict(&self, x: ArrayView1<f64>) -> Result<f64> {
        let mut total = 0.0;
        for tree in &self.trees {
            total += tree.predict(x)?;
        }

        Ok(total / self.trees.len() as f64)
    }
}
