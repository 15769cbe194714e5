//! Text classification module
//!
//! Provides TF-IDF feature extraction and a binary logistic regression
//! model for spam/ham classification.

pub mod model;
pub mod tokenizer;
pub mod types;
pub mod vectorizer;

pub use model::{FittedClassifier, LogisticRegression};
pub use tokenizer::TokenizerPolicy;
pub use types::*;
pub use vectorizer::{FittedVectorizer, TfidfVectorizer};
