//! Labeled training data

use std::path::Path;
use std::str::FromStr;

use crate::classifier::Label;
use crate::error::{FilterError, Result};

/// Ordered collection of (document, label) pairs
///
/// Order carries no meaning for training; the pipeline shuffles before
/// splitting.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    examples: Vec<(String, Label)>,
}

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, text: impl Into<String>, label: Label) {
        self.examples.push((text.into(), label));
    }

    pub fn len(&self) -> usize {
        self.examples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.examples.is_empty()
    }

    pub fn examples(&self) -> &[(String, Label)] {
        &self.examples
    }

    /// Read a labeled corpus from a text file: one example per line,
    /// `spam` or `ham`, a tab, then the message body. Blank lines are
    /// skipped.
    pub fn from_labeled_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let mut dataset = Dataset::new();

        for (line_no, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let (label, text) = line.split_once('\t').ok_or_else(|| {
                FilterError::InvalidInput(format!(
                    "line {}: expected '<label>\\t<text>'",
                    line_no + 1
                ))
            })?;
            dataset.push(text, Label::from_str(label)?);
        }

        Ok(dataset)
    }

    /// Built-in toy corpus: five spam and five ham templates, each
    /// repeated sixty times (600 rows total). Not representative of real
    /// mail traffic; useful for smoke-testing the pipeline end to end.
    pub fn sample() -> Self {
        let spam_texts = [
            "Congratulations! You won a free lottery ticket.",
            "Claim your free prize now!!!",
            "You have been selected for a cash reward.",
            "Win big money today, click here!",
            "Urgent! Update your bank details immediately.",
        ];
        let ham_texts = [
            "Hi John, are we still meeting tomorrow?",
            "Please find the attached project report.",
            "Let's have lunch at 1pm.",
            "Your order has been shipped and will arrive soon.",
            "Thanks for your help yesterday.",
        ];

        let mut dataset = Dataset::new();
        for _ in 0..60 {
            for text in spam_texts {
                dataset.push(text, Label::Spam);
            }
        }
        for _ in 0..60 {
            for text in ham_texts {
                dataset.push(text, Label::Ham);
            }
        }
        dataset
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_sample_corpus_shape() {
        let dataset = Dataset::sample();
        assert_eq!(dataset.len(), 600);

        let spam = dataset
            .examples()
            .iter()
            .filter(|(_, l)| *l == Label::Spam)
            .count();
        assert_eq!(spam, 300);
    }

    #[test]
    fn test_from_labeled_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "spam\tClaim your free prize now!!!").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "ham\tLet's have lunch at 1pm.").unwrap();

        let dataset = Dataset::from_labeled_file(file.path()).unwrap();
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.examples()[0].1, Label::Spam);
        assert_eq!(dataset.examples()[1].1, Label::Ham);
    }

    #[test]
    fn test_from_labeled_file_rejects_bad_lines() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "no tab separator here").unwrap();
        assert!(Dataset::from_labeled_file(file.path()).is_err());

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "junk\tsome text").unwrap();
        assert!(matches!(
            Dataset::from_labeled_file(file.path()),
            Err(FilterError::InvalidInput(_))
        ));
    }
}
