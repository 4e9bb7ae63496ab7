//! Sentiment lexicon, training and classification
//!
//! - Lexicon of per-token co-occurrence counts and scores
//! - Trainer building a lexicon from labeled tweets
//! - Classifier turning a lexicon into a binary decision
//! - Evaluator measuring accuracy on a held-out set

mod classifier;
mod evaluator;
mod lexicon;
mod trainer;

pub use classifier::{Classifier, DocumentScore};
pub use evaluator::Evaluator;
pub use lexicon::{Lexicon, LexiconEntry, SentimentLexicon};
pub use trainer::{LogObserver, NoopObserver, Trainer, TrainingObserver, TrainingProgress};
