//! Record scoring and the binary decision rule
//!
//! The document score is the author's score plus the score of every
//! accepted token, divided by the number of raw pieces plus one. The
//! denominator counts pieces before filtering while the numerator only sums
//! accepted tokens; the decision threshold is tuned against exactly this
//! average.

use super::lexicon::SentimentLexicon;
use crate::config::{
    ClassifierSettings, DEFAULT_DECISION_THRESHOLD, DEFAULT_NEGATIVE_LABEL,
    DEFAULT_POSITIVE_LABEL,
};
use crate::models::{Prediction, Record};
use crate::nlp::Tokenizer;

/// Raw parts of a document score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DocumentScore {
    /// Author score plus the scores of accepted tokens
    pub total: f64,
    /// Pieces in the text before normalization
    pub raw_token_count: usize,
}

impl DocumentScore {
    /// `total / (raw_token_count + 1)`, the `+ 1` standing for the author
    pub fn average(&self) -> f64 {
        self.total / (self.raw_token_count + 1) as f64
    }
}

/// Lexicon-based binary classifier
#[derive(Debug, Clone)]
pub struct Classifier {
    tokenizer: Tokenizer,
    positive_label: i32,
    negative_label: i32,
    threshold: f64,
}

impl Classifier {
    pub fn new() -> Self {
        Self {
            tokenizer: Tokenizer::new(),
            positive_label: DEFAULT_POSITIVE_LABEL,
            negative_label: DEFAULT_NEGATIVE_LABEL,
            threshold: DEFAULT_DECISION_THRESHOLD,
        }
    }

    pub fn from_settings(settings: &ClassifierSettings) -> Self {
        Self::new()
            .with_labels(settings.positive_label, settings.negative_label)
            .with_threshold(settings.decision_threshold)
    }

    /// Must match the tokenizer used for training
    pub fn with_tokenizer(mut self, tokenizer: Tokenizer) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    pub fn with_labels(mut self, positive: i32, negative: i32) -> Self {
        self.positive_label = positive;
        self.negative_label = negative;
        self
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn positive_label(&self) -> i32 {
        self.positive_label
    }

    pub fn negative_label(&self) -> i32 {
        self.negative_label
    }

    /// Sum and raw piece count for one record
    pub fn score_breakdown<L: SentimentLexicon + ?Sized>(
        &self,
        record: &Record,
        lexicon: &L,
    ) -> DocumentScore {
        let mut total = lexicon.score_of(record.author());
        for token in self.tokenizer.tokenize(record.text()) {
            total += lexicon.score_of(&token.normalized);
        }

        DocumentScore {
            total,
            raw_token_count: self.tokenizer.raw_count(record.text()),
        }
    }

    /// Average score of one record
    pub fn score<L: SentimentLexicon + ?Sized>(&self, record: &Record, lexicon: &L) -> f64 {
        self.score_breakdown(record, lexicon).average()
    }

    /// Label for an average score
    pub fn decide(&self, average_score: f64) -> i32 {
        if average_score > self.threshold {
            self.positive_label
        } else {
            self.negative_label
        }
    }

    pub fn predict<L: SentimentLexicon + ?Sized>(&self, record: &Record, lexicon: &L) -> Prediction {
        let average_score = self.score(record, lexicon);
        Prediction {
            label: self.decide(average_score),
            average_score,
        }
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new()
    }
}
