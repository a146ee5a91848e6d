use ndarray::ArrayView1;
use serde::Deserialize;

use super::Regressor;
use crate::{AppraisalError, Result};

/// A node of a fitted regression tree.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Node {
    /// Rows with `x[feature] <= threshold` continue on `left`, the rest on `right`.
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        value: f64,
    },
}

#[derive(Deserialize)]
struct RawTree {
    nodes: Vec<Node>,
}

/// A single regression tree stored as a flat node array rooted at index 0.
///
/// Children always sit after their parent, so walking the tree terminates.
#[derive(Debug, Clone, Deserialize)]
#[serde(try_from = "RawTree")]
pub struct RegressionTree {
    nodes: Vec<Node>,
    n_features: usize,
}

impl RegressionTree {
    /// Creates a new `RegressionTree` after checking its structure.
    ///
    /// # Arguments
    /// * `nodes` - The flat node array, root first.
    ///
    /// # Returns
    /// The tree or a description of the first structural problem found.
    pub fn new(nodes: Vec<Node>) -> std::result::Result<Self, String> {
        if nodes.is_empty() {
            return Err("tree has no nodes".into());
        }

        let len = nodes.len();
        let mut n_features = 0;

        for (i, node) in nodes.iter().enumerate() {
            let Node::Split {
                feature,
                left,
                right,
                ..
            } = *node
            else {
                continue;
            };

            for child in [left, right] {
                if child <= i || child >= len {
                    return Err(format!(
                        "node {i}: child {child} must be after its parent and below {len}"
                    ));
                }
            }

            let Some(width) = feature.checked_add(1) else {
                return Err(format!("node {i}: feature index {feature} is out of range"));
            };
            n_features = n_features.max(width);
        }

        Ok(Self { nodes, n_features })
    }
}

impl TryFrom<RawTree> for RegressionTree {
    type Error = String;

    fn try_from(raw: RawTree) -> std::result::Result<Self, Self::Error> {
        Self::new(raw.nodes)
    }
}

impl Regressor for RegressionTree {
    fn n_features(&self) -> usize {
        self.n_features
    }

    fn predict(&self, x: ArrayView1<f64>) -> Result<f64> {
        if x.len() < self.n_features {
            return Err(AppraisalError::FeatureMismatch {
                got: x.len(),
                expected: self.n_features,
            });
        }

        let mut idx = 0;
        loop {
            match self.nodes[idx] {
                Node::Leaf { value } => return Ok(value),
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => idx = if x[feature] <= threshold { left } else { right },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use ndarray::{Array1, array};

    use super::*;

    fn stump(feature: usize, threshold: f64, low: f64, high: f64) -> RegressionTree {
        RegressionTree::new(vec![
            Node::Split {
                feature,
                threshold,
                left: 1,
                right: 2,
            },
            Node::Leaf { value: low },
            Node::Leaf { value: high },
        ])
        .unwrap()
    }

    #[test]
    fn test_tree_threshold_is_inclusive_on_the_left() {
        let tree = stump(1, 50.0, 1.0, 2.0);
        assert_eq!(tree.predict(array![0.0, 50.0].view()).unwrap(), 1.0);
        assert_eq!(tree.predict(array![0.0, 50.1].view()).unwrap(), 2.0);
    }

    #[test]
    fn test_tree_single_leaf() {
        let tree = RegressionTree::new(vec![Node::Leaf { value: 7.5 }]).unwrap();
        assert_eq!(tree.n_features(), 0);
        assert_eq!(tree.predict(Array1::<f64>::zeros(0).view()).unwrap(), 7.5);
    }

    #[test]
    fn test_tree_rejects_backward_children() {
        let nodes = vec![
            Node::Split {
                feature: 0,
                threshold: 1.0,
                left: 0,
                right: 1,
            },
            Node::Leaf { value: 1.0 },
        ];
        assert!(RegressionTree::new(nodes).is_err());
    }

    #[test]
    fn test_tree_rejects_out_of_range_children() {
        let nodes = vec![
            Node::Split {
                feature: 0,
                threshold: 1.0,
                left: 1,
                right: 5,
            },
            Node::Leaf { value: 1.0 },
        ];
        assert!(RegressionTree::new(nodes).is_err());
    }

    #[test]
    fn test_tree_rejects_overflowing_feature_index() {
        let nodes = vec![
            Node::Split {
                feature: usize::MAX,
                threshold: 1.0,
                left: 1,
                right: 2,
            },
            Node::Leaf { value: 1.0 },
            Node::Leaf { value: 2.0 },
        ];
        assert!(RegressionTree::new(nodes).is_err());

        let json = format!(
            r#"{{"nodes": [
                {{"feature": {}, "threshold": 1.0, "left": 1, "right": 2}},
                {{"value": 1.0}},
                {{"value": 2.0}}
            ]}}"#,
            usize::MAX
        );
        assert!(serde_json::from_str::<RegressionTree>(&json).is_err());
    }

    #[test]
    fn test_tree_rejects_short_rows() {
        let tree = stump(3, 0.0, 1.0, 2.0);
        assert_eq!(
            tree.predict(array![1.0, 2.0].view()),
            Err(AppraisalError::FeatureMismatch {
                got: 2,
                expected: 4
            })
        );
    }

    #[test]
    fn test_tree_parses_from_json() {
        let tree: RegressionTree = serde_json::from_str(
            r#"{"nodes": [
                {"feature": 0, "threshold": 10.0, "left": 1, "right": 2},
                {"value": 100.0},
                {"value": 200.0}
            ]}"#,
        )
        .unwrap();
        assert_eq!(tree.predict(array![11.0].view()).unwrap(), 200.0);
    }
}
