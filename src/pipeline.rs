//! End-to-end batch run: load, train, evaluate, write results

use crate::config::AppConfig;
use crate::data::{write_results, DataLoader};
use crate::error::Result;
use crate::models::{Evaluation, Record};
use crate::nlp::Tokenizer;
use crate::sentiment::{Classifier, Evaluator, Lexicon, Trainer, TrainingObserver};
use std::path::{Path, PathBuf};
use tracing::info;

/// Input and output files of one run
#[derive(Debug, Clone)]
pub struct PipelinePaths {
    pub train_data: PathBuf,
    pub train_target: PathBuf,
    pub test_data: PathBuf,
    pub test_target: PathBuf,
    pub output: PathBuf,
}

/// Components wired from one [`AppConfig`]
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    config: AppConfig,
}

impl Pipeline {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn tokenizer(&self) -> Tokenizer {
        Tokenizer::new().with_min_length(self.config.tokenizer.min_token_len)
    }

    pub fn loader(&self) -> DataLoader {
        DataLoader::new(self.config.data.clone())
    }

    pub fn trainer(&self) -> Trainer {
        Trainer::new()
            .with_tokenizer(self.tokenizer())
            .with_positive_label(self.config.classifier.positive_label)
            .with_progress_interval(self.config.training.progress_interval)
    }

    pub fn classifier(&self) -> Classifier {
        Classifier::from_settings(&self.config.classifier).with_tokenizer(self.tokenizer())
    }

    /// Load a labeled split
    pub fn load(&self, data: &Path, target: &Path) -> Result<Vec<Record>> {
        let records = self.loader().load_pairs(data, target)?;
        info!("Done loading {} tweets from {:?}", records.len(), data);
        Ok(records)
    }

    /// Load a labeled split and train a lexicon on it
    pub fn train(
        &self,
        data: &Path,
        target: &Path,
        observer: &mut dyn TrainingObserver,
    ) -> Result<Lexicon> {
        let records = self.load(data, target)?;
        Ok(self.trainer().train_with_observer(&records, observer))
    }

    /// Train on the training split, evaluate on the test split, write results
    pub fn run(
        &self,
        paths: &PipelinePaths,
        observer: &mut dyn TrainingObserver,
    ) -> Result<Evaluation> {
        let training = self.load(&paths.train_data, &paths.train_target)?;
        let testing = self.load(&paths.test_data, &paths.test_target)?;

        let lexicon = self.trainer().train_with_observer(&training, observer);

        info!("Testing against {} tweets", testing.len());
        let evaluation = Evaluator::new(self.classifier()).evaluate(&testing, &lexicon)?;

        write_results(&paths.output, &evaluation)?;
        info!("Results written to {:?}", paths.output);

        Ok(evaluation)
    }
}
