//! CLI for training and evaluating the tweet sentiment lexicon
//!
//! Usage:
//! ```bash
//! cargo run -- run --train-data train.csv --train-target train_target.csv \
//!     --test-data test.csv --test-target test_target.csv --output results.txt
//! cargo run -- classify --data train.csv --target train_target.csv --text "not bad at all"
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use rust_tweet_sentiment::config::{load_config, AppConfig};
use rust_tweet_sentiment::sentiment::{SentimentLexicon, TrainingObserver, TrainingProgress};
use rust_tweet_sentiment::{Pipeline, PipelinePaths, Record, Tokenizer};
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "tweet_sentiment")]
#[command(version)]
#[command(about = "Word-level sentiment lexicon for tweets", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file (.toml, .json, .yaml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log level (overrides the config file)
    #[arg(short, long, global = true)]
    log_level: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Train on one split, evaluate on another, write the results file
    Run {
        #[arg(long)]
        train_data: PathBuf,
        #[arg(long)]
        train_target: PathBuf,
        #[arg(long)]
        test_data: PathBuf,
        #[arg(long)]
        test_target: PathBuf,
        /// Results file: accuracy, then misclassified ids
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Train a lexicon and show its most polarized tokens
    Train {
        #[arg(short, long)]
        data: PathBuf,
        #[arg(short, long)]
        target: PathBuf,
        /// Number of tokens to show
        #[arg(long, default_value = "20")]
        top: usize,
    },

    /// Train a lexicon and classify one text
    Classify {
        #[arg(short, long)]
        data: PathBuf,
        #[arg(short, long)]
        target: PathBuf,
        /// Text to classify
        #[arg(long)]
        text: String,
        /// Author of the text
        #[arg(short, long, default_value = "")]
        author: String,
    },

    /// Show the normalized token stream of a text
    Tokenize {
        #[arg(long)]
        text: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => AppConfig::default(),
    };

    let level_name = cli
        .log_level
        .clone()
        .unwrap_or_else(|| config.logging.level.clone());
    let log_level = match level_name.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let pipeline = Pipeline::new(config);

    match cli.command {
        Commands::Run {
            train_data,
            train_target,
            test_data,
            test_target,
            output,
        } => {
            let paths = PipelinePaths {
                train_data,
                train_target,
                test_data,
                test_target,
                output,
            };
            let evaluation = pipeline
                .run(&paths, &mut ProgressBarObserver::default())
                .context("Pipeline run failed")?;
            println!("{}", evaluation);
        }
        Commands::Train { data, target, top } => {
            let lexicon = pipeline
                .train(&data, &target, &mut ProgressBarObserver::default())
                .context("Training failed")?;

            println!("Lexicon size: {}", lexicon.size());
            for (token, score) in lexicon.most_polarized(top) {
                println!("  {:+.3}  {}", score, token);
            }
        }
        Commands::Classify {
            data,
            target,
            text,
            author,
        } => {
            let lexicon = pipeline
                .train(&data, &target, &mut ProgressBarObserver::default())
                .context("Training failed")?;

            let record = Record::new("input", author, text);
            let prediction = pipeline.classifier().predict(&record, &lexicon);
            println!("Score: {:.3}", prediction.average_score);
            println!("Label: {}", prediction.label);
        }
        Commands::Tokenize { text } => {
            let tokenizer: Tokenizer = pipeline.tokenizer();
            for token in tokenizer.tokenize(&text) {
                println!(
                    "{:3} {:20} -> {:20} [{:?}]",
                    token.position, token.original, token.normalized, token.kind
                );
            }
        }
    }

    Ok(())
}

/// Training observer drawing an `indicatif` progress bar
#[derive(Default)]
struct ProgressBarObserver {
    bar: Option<ProgressBar>,
}

impl TrainingObserver for ProgressBarObserver {
    fn on_progress(&mut self, progress: TrainingProgress) {
        let bar = self.bar.get_or_insert_with(|| {
            let bar = ProgressBar::new(progress.total as u64);
            if let Ok(style) = ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} tweets")
            {
                bar.set_style(style.progress_chars("#>-"));
            }
            bar
        });
        bar.set_position(progress.processed as u64);
    }

    fn on_complete(&mut self, lexicon_size: usize) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
        info!("Ran training on {} words", lexicon_size);
    }
}
