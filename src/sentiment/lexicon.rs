//! Trained sentiment lexicon
//!
//! Maps each token to how often it appeared in positive and negative
//! tweets. Scores are derived once, by [`Lexicon::finalize`], after all
//! training records have been observed. Calling `observe` after that leaves
//! the scores stale until `finalize` runs again.

use std::collections::HashMap;

/// Read access used by the classifier
pub trait SentimentLexicon {
    /// Score of a token in [-1, 1]; unknown tokens are neutral
    fn score_of(&self, token: &str) -> f64;

    /// Whether the token was observed during training
    fn contains(&self, token: &str) -> bool;

    /// Number of distinct tokens
    fn size(&self) -> usize;
}

/// Co-occurrence counts and derived score of one token
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LexiconEntry {
    pub positive_count: u64,
    pub negative_count: u64,
    score: f64,
}

impl LexiconEntry {
    /// Score set by the last `finalize`, zero before
    pub fn score(&self) -> f64 {
        self.score
    }

    fn compute_score(&self) -> f64 {
        // Seen under one label only: treated as noise rather than certainty
        if self.positive_count == 0 || self.negative_count == 0 {
            return 0.0;
        }

        let positive = self.positive_count as f64;
        let negative = self.negative_count as f64;
        (positive - negative) / (positive + negative)
    }
}

/// Insertion-ordered token → counts mapping
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    /// Entries in first-seen order
    entries: Vec<(String, LexiconEntry)>,
    /// Token → index into `entries`
    index: HashMap<String, usize>,
    finalized: bool,
}

impl Lexicon {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one occurrence of `token` under the given class
    pub fn observe(&mut self, token: &str, is_positive: bool) {
        let idx = match self.index.get(token) {
            Some(&idx) => idx,
            None => {
                self.entries.push((token.to_string(), LexiconEntry::default()));
                self.index.insert(token.to_string(), self.entries.len() - 1);
                self.entries.len() - 1
            }
        };

        let entry = &mut self.entries[idx].1;
        if is_positive {
            entry.positive_count += 1;
        } else {
            entry.negative_count += 1;
        }
    }

    /// Derive the score of every entry from its counts
    pub fn finalize(&mut self) {
        for (_, entry) in &mut self.entries {
            entry.score = entry.compute_score();
        }
        self.finalized = true;
    }

    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    pub fn entry(&self, token: &str) -> Option<&LexiconEntry> {
        self.index.get(token).map(|&idx| &self.entries[idx].1)
    }

    /// Entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &LexiconEntry)> {
        self.entries.iter().map(|(token, entry)| (token.as_str(), entry))
    }

    /// Up to `n` tokens with a non-zero score, strongest first
    ///
    /// Ties keep insertion order.
    pub fn most_polarized(&self, n: usize) -> Vec<(&str, f64)> {
        let mut scored: Vec<(&str, f64)> = self
            .iter()
            .map(|(token, entry)| (token, entry.score))
            .filter(|(_, score)| *score != 0.0)
            .collect();

        scored.sort_by(|a, b| b.1.abs().total_cmp(&a.1.abs()));
        scored.truncate(n);
        scored
    }
}

impl SentimentLexicon for Lexicon {
    fn score_of(&self, token: &str) -> f64 {
        self.entry(token).map_or(0.0, |entry| entry.score)
    }

    fn contains(&self, token: &str) -> bool {
        self.index.contains_key(token)
    }

    fn size(&self) -> usize {
        self.entries.len()
    }
}
