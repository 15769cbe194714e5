//! Classifier types and data structures

use serde::{Deserialize, Serialize};

use crate::error::FilterError;

/// Binary message label: spam (1) or ham (0)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    Spam,
    Ham,
}

impl Label {
    /// Wire representation ("spam" / "ham")
    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Spam => "spam",
            Label::Ham => "ham",
        }
    }

    /// Numeric target used by the training loss (spam = 1, ham = 0)
    pub fn target(&self) -> f64 {
        match self {
            Label::Spam => 1.0,
            Label::Ham => 0.0,
        }
    }
}

impl std::str::FromStr for Label {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "spam" | "1" => Ok(Label::Spam),
            "ham" | "0" => Ok(Label::Ham),
            other => Err(FilterError::InvalidInput(format!(
                "unknown label: {other}"
            ))),
        }
    }
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sparse feature vector over the fitted vocabulary
///
/// Entries are (vocabulary index, TF-IDF weight) pairs sorted by index.
/// Indices absent from `entries` carry an implicit weight of zero.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SparseVector {
    pub entries: Vec<(usize, f64)>,
}

impl SparseVector {
    pub fn new(entries: Vec<(usize, f64)>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Dot product against a dense weight vector
    pub fn dot(&self, dense: &[f64]) -> f64 {
        self.entries
            .iter()
            .map(|&(idx, value)| value * dense[idx])
            .sum()
    }

    /// Largest vocabulary index referenced, if any
    pub fn max_index(&self) -> Option<usize> {
        self.entries.iter().map(|&(idx, _)| idx).max()
    }

    /// Scale the vector to unit Euclidean length. A zero vector is left
    /// untouched.
    pub fn l2_normalize(&mut self) {
        let norm = self
            .entries
            .iter()
            .map(|&(_, value)| value * value)
            .sum::<f64>()
            .sqrt();
        if norm > 0.0 {
            for (_, value) in &mut self.entries {
                *value /= norm;
            }
        }
    }
}
