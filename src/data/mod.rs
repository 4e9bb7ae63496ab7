//! Data files
//!
//! Loading of labeled tweets and writing of evaluation results.

mod loader;
mod writer;

pub use loader::DataLoader;
pub use writer::{write_results, write_results_to};
