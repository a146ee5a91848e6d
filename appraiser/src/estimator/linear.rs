use ndarray::ArrayView1;
use serde::Deserialize;

use super::Regressor;
use crate::{AppraisalError, Result};

/// An ordinary linear model: `intercept + coefficients · x`.
#[derive(Debug, Clone, Deserialize)]
pub struct LinearRegressor {
    intercept: f64,
    coefficients: Vec<f64>,
}

impl LinearRegressor {
    /// Creates a new `LinearRegressor`.
    ///
    /// # Arguments
    /// * `intercept` - The bias term.
    /// * `coefficients` - One weight per training column.
    ///
    /// # Returns
    /// A new `LinearRegressor` instance.
    pub fn new(intercept: f64, coefficients: Vec<f64>) -> Self {
        Self {
            intercept,
            coefficients,
        }
    }
}

impl Regressor for LinearRegressor {
    fn n_features(&self) -> usize {
        self.coefficients.len()
    }

    fn predict(&self, x: ArrayView1<f64>) -> Result<f64> {
        if x.len() != self.coefficients.len() {
            return Err(AppraisalError::FeatureMismatch {
                got: x.len(),
                expected: self.coefficients.len(),
            });
        }

        let w = ArrayView1::from(&self.coefficients[..]);
        Ok(self.intercept + w.dot(&x))
    }
}

#[cfg(test)]
mod tests {
    use ndarray::array;

    use super::*;

    #[test]
    fn test_linear_dot_plus_intercept() {
        let model = LinearRegressor::new(10.0, vec![2.0, -1.0, 0.5]);
        let x = array![3.0, 4.0, 2.0];
        assert_eq!(model.predict(x.view()).unwrap(), 10.0 + 6.0 - 4.0 + 1.0);
    }

    #[test]
    fn test_linear_rejects_wrong_width() {
        let model = LinearRegressor::new(0.0, vec![1.0, 1.0]);
        let x = array![1.0, 2.0, 3.0];
        assert_eq!(
            model.predict(x.view()),
            Err(AppraisalError::FeatureMismatch {
                got: 3,
                expected: 2
            })
        );
    }
}
