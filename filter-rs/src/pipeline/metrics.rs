//! Evaluation metrics
//!
//! Per-label precision/recall/F1 over a held-out partition. Diagnostic
//! output only; nothing on the inference path consumes it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::classifier::Label;

/// Precision/recall/F1 for one label
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelMetrics {
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
    /// Ground-truth examples carrying this label
    pub support: usize,
}

/// Evaluation summary for a training run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationReport {
    pub spam: LabelMetrics,
    pub ham: LabelMetrics,
    pub accuracy: f64,
    /// Held-out examples the report was computed on
    pub evaluated: usize,
    pub generated_at: DateTime<Utc>,
}

/// Compute the report from ground truth and predictions of equal length
pub fn classification_report(truth: &[Label], predicted: &[Label]) -> EvaluationReport {
    debug_assert_eq!(truth.len(), predicted.len());

    let correct = truth
        .iter()
        .zip(predicted)
        .filter(|(t, p)| t == p)
        .count();
    let accuracy = if truth.is_empty() {
        0.0
    } else {
        correct as f64 / truth.len() as f64
    };

    EvaluationReport {
        spam: label_metrics(truth, predicted, Label::Spam),
        ham: label_metrics(truth, predicted, Label::Ham),
        accuracy,
        evaluated: truth.len(),
        generated_at: Utc::now(),
    }
}

fn label_metrics(truth: &[Label], predicted: &[Label], label: Label) -> LabelMetrics {
    let mut true_pos = 0usize;
    let mut false_pos = 0usize;
    let mut false_neg = 0usize;

    for (t, p) in truth.iter().zip(predicted) {
        match (*t == label, *p == label) {
            (true, true) => true_pos += 1,
            (false, true) => false_pos += 1,
            (true, false) => false_neg += 1,
            (false, false) => {}
        }
    }

    let precision = ratio(true_pos, true_pos + false_pos);
    let recall = ratio(true_pos, true_pos + false_neg);
    let f1 = if precision + recall > 0.0 {
        2.0 * precision * recall / (precision + recall)
    } else {
        0.0
    };

    LabelMetrics {
        precision,
        recall,
        f1,
        support: true_pos + false_neg,
    }
}

fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}
