//! Training pipeline
//!
//! Orchestrates the seeded train/test split, fits the vectorizer and then
//! the classifier on the training partition, and evaluates on the held-out
//! partition. Training and serving share nothing in-process; the fitted
//! artifacts travel through the artifact store.

pub mod dataset;
pub mod metrics;

pub use dataset::Dataset;
pub use metrics::{classification_report, EvaluationReport, LabelMetrics};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::info;

use crate::classifier::{
    FittedClassifier, FittedVectorizer, Label, LogisticRegression, TfidfVectorizer,
    TokenizerPolicy,
};
use crate::config::TrainingConfig;
use crate::error::{FilterError, Result};

/// Fitted artifacts plus the evaluation report of one training run
#[derive(Debug, Clone)]
pub struct TrainingOutcome {
    pub vectorizer: FittedVectorizer,
    pub classifier: FittedClassifier,
    pub report: EvaluationReport,
}

/// Orchestrates one offline training run
pub struct TrainingPipeline {
    config: TrainingConfig,
    tokenizer: TokenizerPolicy,
}

impl TrainingPipeline {
    pub fn new(config: TrainingConfig) -> Self {
        Self {
            config,
            tokenizer: TokenizerPolicy::default(),
        }
    }

    pub fn with_tokenizer(mut self, tokenizer: TokenizerPolicy) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    /// Run the full pipeline on `dataset`.
    ///
    /// The vectorizer is fit on the training partition only, so the
    /// held-out evaluation never leaks test vocabulary into the model.
    /// Same seed and same dataset reproduce the same artifacts.
    pub fn run(&self, dataset: &Dataset) -> Result<TrainingOutcome> {
        if dataset.is_empty() {
            return Err(FilterError::EmptyCorpus);
        }

        let (train, test) = self.split(dataset);
        info!(
            train = train.len(),
            test = test.len(),
            seed = self.config.seed,
            "dataset split"
        );

        let train_docs: Vec<&str> = train.iter().map(|(text, _)| text.as_str()).collect();
        let train_labels: Vec<Label> = train.iter().map(|(_, label)| *label).collect();

        let vectorizer = TfidfVectorizer::new()
            .with_tokenizer(self.tokenizer)
            .fit(&train_docs)?;
        info!(vocabulary = vectorizer.vocabulary_size(), "vectorizer fitted");

        let train_features = vectorizer.transform(&train_docs);
        let classifier = LogisticRegression::new()
            .with_learning_rate(self.config.learning_rate)
            .with_l2(self.config.l2)
            .with_max_iter(self.config.max_iter)
            .fit(&train_features, &train_labels, vectorizer.vocabulary_size())?;

        let test_docs: Vec<&str> = test.iter().map(|(text, _)| text.as_str()).collect();
        let test_labels: Vec<Label> = test.iter().map(|(_, label)| *label).collect();
        let predicted = classifier.predict(&vectorizer.transform(&test_docs));
        let report = classification_report(&test_labels, &predicted);
        info!(
            accuracy = report.accuracy,
            spam_f1 = report.spam.f1,
            ham_f1 = report.ham.f1,
            "evaluation complete"
        );

        Ok(TrainingOutcome {
            vectorizer,
            classifier,
            report,
        })
    }

    /// Seeded shuffle-and-split. The test partition holds
    /// `test_ratio * len` examples, clamped so both partitions stay
    /// non-empty whenever the dataset has at least two rows.
    fn split<'a>(
        &self,
        dataset: &'a Dataset,
    ) -> (Vec<&'a (String, Label)>, Vec<&'a (String, Label)>) {
        let mut rows: Vec<&(String, Label)> = dataset.examples().iter().collect();
        let mut rng = StdRng::seed_from_u64(self.config.seed);
        rows.shuffle(&mut rng);

        let n = rows.len();
        let test_len = if n < 2 {
            0
        } else {
            ((n as f64 * self.config.test_ratio).round() as usize).clamp(1, n - 1)
        };

        let train = rows.split_off(test_len);
        (train, rows)
    }
}
