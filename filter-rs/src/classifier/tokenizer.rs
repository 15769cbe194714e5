//! Tokenization policies
//!
//! The vectorizer never splits text itself; it delegates to a policy so the
//! rule can be swapped without touching the TF-IDF math. The chosen policy
//! is serialized into the fitted artifact, which keeps `transform` aligned
//! with the corpus the vocabulary was fit on.

use rust_stemmers::{Algorithm, Stemmer};
use serde::{Deserialize, Serialize};

/// How raw text is turned into vocabulary tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenizerPolicy {
    /// Case-fold, split on non-alphanumeric characters, keep words of two
    /// or more characters
    #[default]
    Word,
    /// `Word` followed by English stemming, so "winning" and "winner"
    /// share a vocabulary entry
    Stemmed,
}

impl TokenizerPolicy {
    /// Split `text` into tokens under this policy
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        let words = lowered
            .split(|c: char| !c.is_alphanumeric())
            .filter(|w| w.len() >= 2);

        match self {
            TokenizerPolicy::Word => words.map(str::to_string).collect(),
            TokenizerPolicy::Stemmed => {
                let stemmer = Stemmer::create(Algorithm::English);
                words.map(|w| stemmer.stem(w).to_string()).collect()
            }
        }
    }
}
