//! Types shared by the tokenizer, the lexicon and the classifier

use serde::{Deserialize, Serialize};

/// A labeled tweet
///
/// The label stays unset until the target file has been read; everything
/// else is fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    id: String,
    author: String,
    text: String,
    label: Option<i32>,
}

impl Record {
    /// Create an unlabeled record
    pub fn new(id: impl Into<String>, author: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            author: author.into(),
            text: text.into(),
            label: None,
        }
    }

    /// Attach a class label
    pub fn with_label(mut self, label: i32) -> Self {
        self.label = Some(label);
        self
    }

    /// Assign the class label during the labeling pass
    pub fn set_label(&mut self, label: i32) {
        self.label = Some(label);
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn label(&self) -> Option<i32> {
        self.label
    }

    /// Whether the record carries the positive sentinel label
    pub fn is_positive(&self, positive_label: i32) -> bool {
        self.label == Some(positive_label)
    }
}

/// Normalized token produced by the tokenizer
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    /// Raw text of the first piece
    pub original: String,
    /// Normalized form, the lexicon key
    pub normalized: String,
    /// Index of the first piece in the whitespace split
    pub position: usize,
    /// Token type
    pub kind: TokenKind,
}

/// Token type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Single word
    Word,
    /// "not X" bigram
    Negation,
    /// "very X" bigram
    Intensifier,
}

/// Outcome of classifying one record
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    /// Predicted label (positive sentinel or baseline)
    pub label: i32,
    /// Summed score divided by the raw piece count plus one
    pub average_score: f64,
}

/// Result of running the classifier over a labeled test set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub correct: usize,
    pub incorrect: usize,
    /// correct / (correct + incorrect)
    pub accuracy: f64,
    /// Identifiers of misclassified records in encounter order
    pub misclassified: Vec<String>,
}

impl Evaluation {
    pub fn total(&self) -> usize {
        self.correct + self.incorrect
    }
}

impl std::fmt::Display for Evaluation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Correct: {}\nIncorrect: {}\nTotal: {}\nAccuracy: {:.3}",
            self.correct,
            self.incorrect,
            self.total(),
            self.accuracy
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_label_lifecycle() {
        let mut record = Record::new("1", "alice", "hello world");
        assert_eq!(record.label(), None);
        assert!(!record.is_positive(4));

        record.set_label(4);
        assert_eq!(record.label(), Some(4));
        assert!(record.is_positive(4));
    }

    #[test]
    fn test_non_sentinel_labels_are_negative() {
        for label in [0, 1, 2, 3] {
            let record = Record::new("1", "bob", "").with_label(label);
            assert!(!record.is_positive(4));
        }
    }

    #[test]
    fn test_evaluation_display() {
        let evaluation = Evaluation {
            correct: 3,
            incorrect: 1,
            accuracy: 0.75,
            misclassified: vec!["7".to_string()],
        };
        assert_eq!(evaluation.total(), 4);
        assert!(evaluation.to_string().contains("Accuracy: 0.750"));
    }
}
