//! Lexicon training
//!
//! Every record contributes its author as a pseudo-token plus every token of
//! its body, counted under the record's class. Only the positive sentinel
//! counts as positive; any other label counts as negative.

use super::lexicon::{Lexicon, SentimentLexicon};
use crate::config::{DEFAULT_POSITIVE_LABEL, DEFAULT_PROGRESS_INTERVAL};
use crate::models::Record;
use crate::nlp::Tokenizer;
use tracing::{debug, info, warn};

/// Snapshot passed to a [`TrainingObserver`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrainingProgress {
    /// Records consumed before this notification
    pub processed: usize,
    pub total: usize,
}

impl TrainingProgress {
    pub fn percent(&self) -> usize {
        if self.total == 0 {
            return 100;
        }
        self.processed * 100 / self.total
    }
}

/// Receives progress notifications while a lexicon is trained
pub trait TrainingObserver {
    fn on_progress(&mut self, progress: TrainingProgress);

    /// Called once after the lexicon is finalized
    fn on_complete(&mut self, _lexicon_size: usize) {}
}

/// Observer that ignores all notifications
#[derive(Debug, Default)]
pub struct NoopObserver;

impl TrainingObserver for NoopObserver {
    fn on_progress(&mut self, _progress: TrainingProgress) {}
}

/// Observer that reports through `tracing`
#[derive(Debug, Default)]
pub struct LogObserver;

impl TrainingObserver for LogObserver {
    fn on_progress(&mut self, progress: TrainingProgress) {
        info!(
            "Trained on {} tweets. Progress: {}%",
            progress.processed,
            progress.percent()
        );
    }

    fn on_complete(&mut self, lexicon_size: usize) {
        info!("Ran training on {} words", lexicon_size);
    }
}

/// Builds a finalized [`Lexicon`] from labeled records
#[derive(Debug, Clone)]
pub struct Trainer {
    tokenizer: Tokenizer,
    positive_label: i32,
    progress_interval: usize,
}

impl Trainer {
    pub fn new() -> Self {
        Self {
            tokenizer: Tokenizer::new(),
            positive_label: DEFAULT_POSITIVE_LABEL,
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
        }
    }

    pub fn with_tokenizer(mut self, tokenizer: Tokenizer) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    /// Label value that counts as positive
    pub fn with_positive_label(mut self, label: i32) -> Self {
        self.positive_label = label;
        self
    }

    /// Notify observers every `interval` records; 0 disables notifications
    pub fn with_progress_interval(mut self, interval: usize) -> Self {
        self.progress_interval = interval;
        self
    }

    /// Train without progress reporting
    pub fn train(&self, records: &[Record]) -> Lexicon {
        self.train_with_observer(records, &mut NoopObserver)
    }

    /// Train, reporting progress to `observer`
    pub fn train_with_observer(
        &self,
        records: &[Record],
        observer: &mut dyn TrainingObserver,
    ) -> Lexicon {
        let mut lexicon = Lexicon::new();
        let total = records.len();
        if total == 0 {
            warn!("Training on an empty set, every token will score 0");
        }

        for (i, record) in records.iter().enumerate() {
            let is_positive = record.is_positive(self.positive_label);

            lexicon.observe(record.author(), is_positive);
            for token in self.tokenizer.tokenize(record.text()) {
                lexicon.observe(&token.normalized, is_positive);
            }

            if self.progress_interval > 0 && i % self.progress_interval == 0 {
                observer.on_progress(TrainingProgress { processed: i, total });
            }
        }

        lexicon.finalize();
        debug!(records = total, tokens = lexicon.size(), "lexicon finalized");
        observer.on_complete(lexicon.size());

        lexicon
    }
}

impl Default for Trainer {
    fn default() -> Self {
        Self::new()
    }
}
