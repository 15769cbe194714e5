//! filter-rs: Spam classification service
//!
//! A TF-IDF + logistic regression spam filter for email bodies, with an
//! HTTP prediction endpoint.
//!
//! # Features
//!
//! - **Vectorizer**: TF-IDF features over a learned vocabulary with a
//!   swappable tokenization policy
//! - **Classifier**: binary logistic regression with reproducible training
//! - **Pipeline**: seeded train/test split, leakage-free fitting, held-out
//!   evaluation report
//! - **Serving**: explicit load()/Ready state machine behind an axum API
//!
//! Training and serving are separate binaries that communicate only
//! through the artifact store.
//!
//! # Example
//!
//! ```no_run
//! use filter_rs::config::Config;
//! use filter_rs::pipeline::{Dataset, TrainingPipeline};
//! use filter_rs::store::{ArtifactStore, FsArtifactStore};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::default();
//!     let outcome = TrainingPipeline::new(config.training).run(&Dataset::sample())?;
//!
//!     let store = FsArtifactStore::new(&config.artifacts.root);
//!     store.save_json(&config.artifacts.vectorizer_name, &outcome.vectorizer)?;
//!     store.save_json(&config.artifacts.classifier_name, &outcome.classifier)?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Modules
//!
//! - [`config`]: Configuration management
//! - [`error`]: Error types and handling
//! - [`classifier`]: Tokenization, TF-IDF vectorizer, logistic regression
//! - [`pipeline`]: Training orchestration and evaluation
//! - [`store`]: Artifact persistence
//! - [`inference`]: Prediction service state machine
//! - [`api`]: HTTP endpoint

pub mod api;
pub mod classifier;
pub mod config;
pub mod error;
pub mod inference;
pub mod pipeline;
pub mod store;

// Re-export commonly used types
pub use config::Config;
pub use error::{FilterError, Result};
