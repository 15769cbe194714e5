//! Binary logistic regression
//!
//! Trains on sparse TF-IDF features with full-batch gradient descent over
//! the log-loss plus an L2 penalty. Weights start at zero and the data is
//! visited in order, so a fit is reproducible from hyperparameters alone.

use serde::{Deserialize, Serialize};

use crate::classifier::types::{Label, SparseVector};
use crate::error::{FilterError, Result};

/// Probability cutoff separating predicted spam from ham
pub const DECISION_THRESHOLD: f64 = 0.5;

/// Unfitted logistic regression model with training hyperparameters
#[derive(Debug, Clone)]
pub struct LogisticRegression {
    learning_rate: f64,
    l2: f64,
    max_iter: usize,
}

impl Default for LogisticRegression {
    fn default() -> Self {
        Self {
            learning_rate: 0.5,
            l2: 1e-4,
            max_iter: 500,
        }
    }
}

impl LogisticRegression {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_learning_rate(mut self, learning_rate: f64) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    pub fn with_l2(mut self, l2: f64) -> Self {
        self.l2 = l2;
        self
    }

    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    /// Fit weights on `features`/`labels`, where every feature index lies
    /// below `dimension` (the vocabulary size).
    ///
    /// Fails with `DegenerateDataset` when the inputs disagree in length,
    /// are empty, or contain a single class only — a linear separator
    /// cannot be learned from one class.
    pub fn fit(
        &self,
        features: &[SparseVector],
        labels: &[Label],
        dimension: usize,
    ) -> Result<FittedClassifier> {
        if features.len() != labels.len() {
            return Err(FilterError::DegenerateDataset(format!(
                "{} feature rows but {} labels",
                features.len(),
                labels.len()
            )));
        }
        if features.is_empty() {
            return Err(FilterError::DegenerateDataset(
                "no training examples".to_string(),
            ));
        }

        let spam_count = labels.iter().filter(|l| **l == Label::Spam).count();
        if spam_count == 0 || spam_count == labels.len() {
            return Err(FilterError::DegenerateDataset(
                "training data contains a single class".to_string(),
            ));
        }

        if let Some(max_index) = features.iter().filter_map(SparseVector::max_index).max() {
            if max_index >= dimension {
                return Err(FilterError::InvalidInput(format!(
                    "feature index {max_index} out of range for dimension {dimension}"
                )));
            }
        }

        let n = features.len() as f64;
        let mut weights = vec![0.0; dimension];
        let mut bias = 0.0;

        for _ in 0..self.max_iter {
            let mut grad_weights = vec![0.0; dimension];
            let mut grad_bias = 0.0;

            for (x, y) in features.iter().zip(labels) {
                let residual = sigmoid(x.dot(&weights) + bias) - y.target();
                for &(index, value) in &x.entries {
                    grad_weights[index] += residual * value;
                }
                grad_bias += residual;
            }

            for (w, g) in weights.iter_mut().zip(&grad_weights) {
                *w -= self.learning_rate * (g / n + self.l2 * *w);
            }
            bias -= self.learning_rate * grad_bias / n;
        }

        Ok(FittedClassifier { weights, bias })
    }
}

/// Fitted classifier: weight vector plus bias, immutable after training
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FittedClassifier {
    pub weights: Vec<f64>,
    pub bias: f64,
}

impl FittedClassifier {
    /// Feature-space dimension this classifier was trained on
    pub fn dimension(&self) -> usize {
        self.weights.len()
    }

    /// Spam probability for one feature vector
    pub fn score_one(&self, features: &SparseVector) -> f64 {
        sigmoid(features.dot(&self.weights) + self.bias)
    }

    /// Hard label for one feature vector
    pub fn predict_one(&self, features: &SparseVector) -> Label {
        if self.score_one(features) > DECISION_THRESHOLD {
            Label::Spam
        } else {
            Label::Ham
        }
    }

    /// Spam probabilities in [0, 1], one per row
    pub fn predict_score(&self, features: &[SparseVector]) -> Vec<f64> {
        features.iter().map(|x| self.score_one(x)).collect()
    }

    /// Hard labels, one per row
    pub fn predict(&self, features: &[SparseVector]) -> Vec<Label> {
        features.iter().map(|x| self.predict_one(x)).collect()
    }
}

fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Two well-separated clusters on two disjoint vocabulary indices
    fn toy_data() -> (Vec<SparseVector>, Vec<Label>) {
        let mut features = Vec::new();
        let mut labels = Vec::new();
        for _ in 0..20 {
            features.push(SparseVector::new(vec![(0, 1.0)]));
            labels.push(Label::Spam);
            features.push(SparseVector::new(vec![(1, 1.0)]));
            labels.push(Label::Ham);
        }
        (features, labels)
    }

    #[test]
    fn test_fit_separates_disjoint_classes() {
        let (features, labels) = toy_data();
        let fitted = LogisticRegression::new().fit(&features, &labels, 2).unwrap();

        assert_eq!(fitted.predict_one(&SparseVector::new(vec![(0, 1.0)])), Label::Spam);
        assert_eq!(fitted.predict_one(&SparseVector::new(vec![(1, 1.0)])), Label::Ham);
        assert!(fitted.weights[0] > 0.0);
        assert!(fitted.weights[1] < 0.0);
    }

    #[test]
    fn test_predict_score_in_unit_interval() {
        let (features, labels) = toy_data();
        let fitted = LogisticRegression::new().fit(&features, &labels, 2).unwrap();

        for score in fitted.predict_score(&features) {
            assert!((0.0..=1.0).contains(&score));
        }
    }

    #[test]
    fn test_single_class_fit_fails() {
        let features = vec![SparseVector::new(vec![(0, 1.0)]); 10];
        let labels = vec![Label::Spam; 10];
        assert!(matches!(
            LogisticRegression::new().fit(&features, &labels, 1),
            Err(FilterError::DegenerateDataset(_))
        ));
    }

    #[test]
    fn test_length_mismatch_fails() {
        let features = vec![SparseVector::new(vec![(0, 1.0)]); 3];
        let labels = vec![Label::Spam, Label::Ham];
        assert!(matches!(
            LogisticRegression::new().fit(&features, &labels, 1),
            Err(FilterError::DegenerateDataset(_))
        ));
    }

    #[test]
    fn test_out_of_range_index_fails() {
        let features = vec![
            SparseVector::new(vec![(5, 1.0)]),
            SparseVector::new(vec![(0, 1.0)]),
        ];
        let labels = vec![Label::Spam, Label::Ham];
        assert!(matches!(
            LogisticRegression::new().fit(&features, &labels, 2),
            Err(FilterError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_fit_is_deterministic() {
        let (features, labels) = toy_data();
        let a = LogisticRegression::new().fit(&features, &labels, 2).unwrap();
        let b = LogisticRegression::new().fit(&features, &labels, 2).unwrap();
        assert_eq!(a.weights, b.weights);
        assert_eq!(a.bias, b.bias);
    }

    #[test]
    fn test_empty_features_score_at_bias() {
        let (features, labels) = toy_data();
        let fitted = LogisticRegression::new().fit(&features, &labels, 2).unwrap();

        // A vector with no known tokens falls back to the bias term
        let score = fitted.score_one(&SparseVector::default());
        assert!((score - sigmoid(fitted.bias)).abs() < 1e-12);
    }
}
