//! # Tweet sentiment lexicon
//!
//! Builds a word-level sentiment lexicon from labeled tweets and uses it to
//! classify unseen tweets as positive or negative.
//!
//! ## Modules
//!
//! - `nlp` - Token normalization and bigram-merging tokenizer
//! - `sentiment` - Lexicon, trainer, classifier and evaluator
//! - `data` - Loading labeled CSV files, writing results
//! - `pipeline` - Full load → train → evaluate run
//! - `models` - Data models
//! - `config` - Configuration
//!
//! ## Example
//!
//! ```rust
//! use rust_tweet_sentiment::{Classifier, Record, Trainer};
//!
//! let training = vec![
//!     Record::new("1", "ann", "good morning").with_label(4),
//!     Record::new("2", "bob", "good grief").with_label(0),
//!     Record::new("3", "cat", "good times").with_label(4),
//! ];
//! let lexicon = Trainer::new().train(&training);
//!
//! let tweet = Record::new("4", "dan", "a good day");
//! let prediction = Classifier::new().predict(&tweet, &lexicon);
//! assert_eq!(prediction.label, 4);
//! ```

pub mod config;
pub mod data;
pub mod error;
pub mod models;
pub mod nlp;
pub mod pipeline;
pub mod sentiment;

pub use config::AppConfig;
pub use error::{Error, Result};
pub use models::{Evaluation, Prediction, Record, Token, TokenKind};
pub use nlp::{normalize, Tokenizer};
pub use pipeline::{Pipeline, PipelinePaths};
pub use sentiment::{Classifier, Evaluator, Lexicon, SentimentLexicon, Trainer};
