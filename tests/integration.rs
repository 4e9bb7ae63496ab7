//! Integration tests for the tweet sentiment lexicon

use approx::assert_abs_diff_eq;
use rust_tweet_sentiment::config::AppConfig;
use rust_tweet_sentiment::sentiment::{LogObserver, NoopObserver};
use rust_tweet_sentiment::{
    Classifier, Error, Evaluator, Lexicon, Pipeline, PipelinePaths, Record, SentimentLexicon,
    Trainer,
};
use std::fs;
use std::path::Path;
use tempfile::tempdir;

/// "good" ends up at +0.5, "bad" at -0.5, everything else at 0
fn balanced_records() -> Vec<Record> {
    vec![
        Record::new("p1", "u1", "good movie").with_label(4),
        Record::new("p2", "u2", "good times").with_label(4),
        Record::new("p3", "u3", "good bad").with_label(4),
        Record::new("n1", "u4", "bad movie").with_label(0),
        Record::new("n2", "u5", "bad times").with_label(0),
        Record::new("n3", "u6", "bad good").with_label(0),
    ]
}

fn write_split(dir: &Path, name: &str, records: &[Record]) -> (std::path::PathBuf, std::path::PathBuf) {
    let data = dir.join(format!("{name}_data.csv"));
    let target = dir.join(format!("{name}_target.csv"));

    let mut data_text = String::from("Row,Id,User,Tweet\n");
    let mut target_text = String::from("Row,Sentiment\n");
    for (i, record) in records.iter().enumerate() {
        data_text.push_str(&format!(
            "{i},{},{},{}\n",
            record.id(),
            record.author(),
            record.text()
        ));
        target_text.push_str(&format!("{i},{}\n", record.label().unwrap()));
    }

    fs::write(&data, data_text).unwrap();
    fs::write(&target, target_text).unwrap();
    (data, target)
}

mod lexicon_scoring {
    use super::*;

    #[test]
    fn test_good_bad_end_to_end() {
        let mut lexicon = Lexicon::new();
        for _ in 0..5 {
            lexicon.observe("good", true);
            lexicon.observe("bad", false);
        }
        lexicon.observe("good", false);
        lexicon.observe("bad", true);
        lexicon.finalize();

        assert_abs_diff_eq!(lexicon.score_of("good"), 0.667, epsilon = 1e-3);
        assert_abs_diff_eq!(lexicon.score_of("bad"), -0.667, epsilon = 1e-3);

        let classifier = Classifier::new();
        let prediction = classifier.predict(&Record::new("1", "nobody", "good"), &lexicon);
        assert_abs_diff_eq!(prediction.average_score, 0.333, epsilon = 1e-3);
        assert_eq!(prediction.label, 4);
    }

    #[test]
    fn test_empty_text_unknown_author_predicts_positive() {
        let lexicon = Trainer::new().train(&balanced_records());
        let prediction = Classifier::new().predict(&Record::new("e", "nobody", ""), &lexicon);

        assert_eq!(prediction.average_score, 0.0);
        assert_eq!(prediction.label, 4);
    }

    #[test]
    fn test_training_beats_empty_lexicon() {
        let records = balanced_records();
        let evaluator = Evaluator::default();

        let trained = Trainer::new().train(&records);
        let mut empty = Lexicon::new();
        empty.finalize();

        let with_training = evaluator.evaluate(&records, &trained).unwrap();
        let without = evaluator.evaluate(&records, &empty).unwrap();

        assert!(with_training.accuracy >= without.accuracy);
        assert_abs_diff_eq!(with_training.accuracy, 5.0 / 6.0, epsilon = 1e-9);
        assert_abs_diff_eq!(without.accuracy, 0.5, epsilon = 1e-9);
        assert_eq!(with_training.misclassified, vec!["n3"]);
    }

    #[test]
    fn test_single_author_tokens_are_noise() {
        let lexicon = Trainer::new().train(&balanced_records());

        for author in ["u1", "u2", "u3", "u4", "u5", "u6"] {
            assert!(lexicon.contains(author));
            assert_eq!(lexicon.score_of(author), 0.0);
        }
    }

    #[test]
    fn test_negation_bigram_learned_separately() {
        let records = vec![
            Record::new("1", "a", "not good").with_label(0),
            Record::new("2", "b", "not good").with_label(0),
            Record::new("3", "c", "not good").with_label(4),
            Record::new("4", "d", "good").with_label(4),
            Record::new("5", "e", "good").with_label(4),
            Record::new("6", "f", "good").with_label(0),
        ];
        let lexicon = Trainer::new().train(&records);

        assert_abs_diff_eq!(lexicon.score_of("not good"), -1.0 / 3.0, epsilon = 1e-9);
        assert_abs_diff_eq!(lexicon.score_of("good"), 1.0 / 3.0, epsilon = 1e-9);
    }
}

mod pipeline_run {
    use super::*;

    #[test]
    fn test_run_writes_results() {
        let dir = tempdir().unwrap();
        let records = balanced_records();
        let (train_data, train_target) = write_split(dir.path(), "train", &records);
        let (test_data, test_target) = write_split(dir.path(), "test", &records);
        let output = dir.path().join("results.txt");

        let paths = PipelinePaths {
            train_data,
            train_target,
            test_data,
            test_target,
            output: output.clone(),
        };
        let evaluation = Pipeline::default()
            .run(&paths, &mut LogObserver)
            .unwrap();

        assert_eq!(evaluation.correct, 5);
        assert_eq!(evaluation.incorrect, 1);
        assert_eq!(fs::read_to_string(&output).unwrap(), "0.833\nn3\n");
    }

    #[test]
    fn test_empty_test_split_is_an_error() {
        let dir = tempdir().unwrap();
        let (train_data, train_target) = write_split(dir.path(), "train", &balanced_records());
        let (test_data, test_target) = write_split(dir.path(), "test", &[]);

        let paths = PipelinePaths {
            train_data,
            train_target,
            test_data,
            test_target,
            output: dir.path().join("results.txt"),
        };
        let result = Pipeline::default().run(&paths, &mut NoopObserver);

        assert!(matches!(result, Err(Error::EmptyTestSet)));
        assert!(!dir.path().join("results.txt").exists());
    }

    #[test]
    fn test_comma_split_text_trains_clean_tokens() {
        let dir = tempdir().unwrap();
        let data = dir.path().join("data.csv");
        let target = dir.path().join("target.csv");
        fs::write(
            &data,
            "Row,Id,User,Tweet\n0,1,a,great, fun day\n1,2,b,great, sad day\n2,3,c,great movie\n",
        )
        .unwrap();
        fs::write(&target, "Row,Sentiment\n0,4\n1,0\n2,4\n").unwrap();

        let pipeline = Pipeline::default();
        let records = pipeline.load(&data, &target).unwrap();
        assert_eq!(records[0].text(), "great fun day");

        let lexicon = pipeline.train(&data, &target, &mut NoopObserver).unwrap();
        assert!(!lexicon.contains("great,"));
        assert_abs_diff_eq!(lexicon.score_of("great"), 1.0 / 3.0, epsilon = 1e-9);
    }

    #[test]
    fn test_threshold_from_config() {
        let dir = tempdir().unwrap();
        let records = balanced_records();
        let (data, target) = write_split(dir.path(), "train", &records);

        let mut config = AppConfig::default();
        config.classifier.decision_threshold = 0.0;
        let pipeline = Pipeline::new(config);

        let lexicon = pipeline.train(&data, &target, &mut NoopObserver).unwrap();
        let evaluation = Evaluator::new(pipeline.classifier())
            .evaluate(&records, &lexicon)
            .unwrap();

        // p3 and n3 both average exactly 0 and now fall on the negative side
        assert_eq!(evaluation.misclassified, vec!["p3"]);
    }
}
