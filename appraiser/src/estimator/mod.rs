mod forest;
mod linear;
mod tree;

use ndarray::ArrayView1;
use serde::Deserialize;

pub use forest::RandomForest;
pub use linear::LinearRegressor;
pub use tree::{Node, RegressionTree};

use crate::Result;

/// A fitted model able to turn one feature row into an estimate.
pub trait Regressor {
    /// Returns the amount of features the model reads from each row.
    fn n_features(&self) -> usize;

    /// Predicts the target value for a single row.
    ///
    /// # Arguments
    /// * `x` - A feature row aligned to the training column order.
    ///
    /// # Returns
    /// The estimate or an error if the row does not fit the model.
    fn predict(&self, x: ArrayView1<f64>) -> Result<f64>;
}

/// Every estimator kind a bundle can carry.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Estimator {
    Linear(LinearRegressor),
    DecisionTree(RegressionTree),
    RandomForest(RandomForest),
}

impl Estimator {
    /// Human readable name of the estimator kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Linear(_) => "linear",
            Self::DecisionTree(_) => "decision_tree",
            Self::RandomForest(_) => "random_forest",
        }
    }
}

impl Regressor for Estimator {
    fn n_features(&self) -> usize {
        match self {
            Self::Linear(m) => m.n_features(),
            Self::DecisionTree(m) => m.n_features(),
            Self::RandomForest(m) => m.n_features(),
        }
    }

    fn predict(&self, x: ArrayView1<f64>) -> Result<f64> {
        match self {
            Self::Linear(m) => m.predict(x),
            Self::DecisionTree(m) => m.predict(x),
            Self::RandomForest(m) => m.predict(x),
        }
    }
}
