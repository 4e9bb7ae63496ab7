//! Data models

mod types;

pub use types::{Evaluation, Prediction, Record, Token, TokenKind};
