//! TF-IDF vectorizer
//!
//! Learns a vocabulary and per-token inverse document frequencies from a
//! training corpus, then maps raw text to sparse, L2-normalized TF-IDF
//! feature vectors. Fitting and transforming are split across two types so
//! the fitted state is immutable and freely shareable across requests.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::classifier::tokenizer::TokenizerPolicy;
use crate::classifier::types::SparseVector;
use crate::error::{FilterError, Result};

/// Unfitted vectorizer: carries the tokenization policy used for fitting
#[derive(Debug, Clone, Default)]
pub struct TfidfVectorizer {
    tokenizer: TokenizerPolicy,
}

impl TfidfVectorizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tokenizer(mut self, tokenizer: TokenizerPolicy) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    /// Build the vocabulary and IDF weights from a training corpus.
    ///
    /// Vocabulary indices are assigned in lexicographic token order, so two
    /// fits on the same corpus produce identical artifacts. Fails with
    /// `EmptyCorpus` when `documents` is empty or yields no tokens.
    pub fn fit<S: AsRef<str>>(&self, documents: &[S]) -> Result<FittedVectorizer> {
        if documents.is_empty() {
            return Err(FilterError::EmptyCorpus);
        }

        // Document frequency per token; BTreeMap keeps tokens sorted
        let mut doc_freq: BTreeMap<String, usize> = BTreeMap::new();
        for doc in documents {
            let mut tokens = self.tokenizer.tokenize(doc.as_ref());
            tokens.sort();
            tokens.dedup();
            for token in tokens {
                *doc_freq.entry(token).or_insert(0) += 1;
            }
        }

        if doc_freq.is_empty() {
            return Err(FilterError::EmptyCorpus);
        }

        let n_docs = documents.len() as f64;
        let mut vocabulary = BTreeMap::new();
        let mut idf = Vec::with_capacity(doc_freq.len());
        for (index, (token, df)) in doc_freq.into_iter().enumerate() {
            // Smoothed IDF: ln((1 + n) / (1 + df)) + 1
            idf.push(((1.0 + n_docs) / (1.0 + df as f64)).ln() + 1.0);
            vocabulary.insert(token, index);
        }

        Ok(FittedVectorizer {
            tokenizer: self.tokenizer,
            vocabulary,
            idf,
        })
    }
}

/// Fitted vectorizer: vocabulary plus IDF weights, immutable after fitting
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FittedVectorizer {
    tokenizer: TokenizerPolicy,
    /// Token -> vocabulary index, indices dense in 0..len
    vocabulary: BTreeMap<String, usize>,
    /// IDF weight per vocabulary index
    idf: Vec<f64>,
}

impl FittedVectorizer {
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn vocabulary(&self) -> &BTreeMap<String, usize> {
        &self.vocabulary
    }

    pub fn contains_token(&self, token: &str) -> bool {
        self.vocabulary.contains_key(token)
    }

    /// Map a single document to a TF-IDF feature vector.
    ///
    /// Tokens outside the vocabulary are dropped silently; the vocabulary
    /// never grows after fitting.
    pub fn transform_one(&self, document: &str) -> SparseVector {
        let mut counts: BTreeMap<usize, f64> = BTreeMap::new();
        for token in self.tokenizer.tokenize(document) {
            if let Some(&index) = self.vocabulary.get(&token) {
                *counts.entry(index).or_insert(0.0) += 1.0;
            }
        }

        let entries = counts
            .into_iter()
            .map(|(index, count)| (index, count * self.idf[index]))
            .collect();

        let mut vector = SparseVector::new(entries);
        vector.l2_normalize();
        vector
    }

    /// Map a batch of documents to feature vectors
    pub fn transform<S: AsRef<str>>(&self, documents: &[S]) -> Vec<SparseVector> {
        documents
            .iter()
            .map(|doc| self.transform_one(doc.as_ref()))
            .collect()
    }
}
