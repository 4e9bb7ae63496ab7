//! Accuracy over a labeled test set

use super::classifier::Classifier;
use super::lexicon::SentimentLexicon;
use crate::error::{Error, Result};
use crate::models::{Evaluation, Record};
use tracing::info;

/// Runs a [`Classifier`] over held-out records
#[derive(Debug, Clone, Default)]
pub struct Evaluator {
    classifier: Classifier,
}

impl Evaluator {
    pub fn new(classifier: Classifier) -> Self {
        Self { classifier }
    }

    /// Tally predictions against the ground truth
    ///
    /// Records whose label is unset never match a prediction. An empty
    /// test set is rejected with [`Error::EmptyTestSet`].
    pub fn evaluate<L: SentimentLexicon + ?Sized>(
        &self,
        records: &[Record],
        lexicon: &L,
    ) -> Result<Evaluation> {
        if records.is_empty() {
            return Err(Error::EmptyTestSet);
        }

        let mut correct = 0;
        let mut incorrect = 0;
        let mut misclassified = Vec::new();

        for record in records {
            let prediction = self.classifier.predict(record, lexicon);
            if record.label() == Some(prediction.label) {
                correct += 1;
            } else {
                incorrect += 1;
                misclassified.push(record.id().to_string());
            }
        }

        let evaluation = Evaluation {
            correct,
            incorrect,
            accuracy: correct as f64 / (correct + incorrect) as f64,
            misclassified,
        };

        info!(
            correct = evaluation.correct,
            incorrect = evaluation.incorrect,
            total = evaluation.total(),
            "Accuracy: {:.3}",
            evaluation.accuracy
        );

        Ok(evaluation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sentiment::Lexicon;
    use approx::assert_abs_diff_eq;

    fn lexicon() -> Lexicon {
        let mut lexicon = Lexicon::new();
        for _ in 0..3 {
            lexicon.observe("happy", true);
            lexicon.observe("sad", false);
        }
        lexicon.observe("happy", false);
        lexicon.observe("sad", true);
        lexicon.finalize();
        lexicon
    }

    #[test]
    fn test_accuracy_and_misclassified_order() {
        let records = vec![
            Record::new("a", "u", "happy").with_label(4),
            Record::new("b", "u", "sad").with_label(4),
            Record::new("c", "u", "sad").with_label(0),
            Record::new("d", "u", "happy").with_label(0),
        ];

        let evaluation = Evaluator::default().evaluate(&records, &lexicon()).unwrap();

        assert_eq!(evaluation.correct, 2);
        assert_eq!(evaluation.incorrect, 2);
        assert_abs_diff_eq!(evaluation.accuracy, 0.5);
        assert_eq!(evaluation.misclassified, vec!["b", "d"]);
    }

    #[test]
    fn test_empty_test_set_rejected() {
        let result = Evaluator::default().evaluate(&[], &lexicon());
        assert!(matches!(result, Err(Error::EmptyTestSet)));
    }

    #[test]
    fn test_unlabeled_record_is_misclassified() {
        let records = vec![Record::new("x", "u", "happy")];
        let evaluation = Evaluator::default().evaluate(&records, &lexicon()).unwrap();

        assert_eq!(evaluation.misclassified, vec!["x"]);
        assert_eq!(evaluation.accuracy, 0.0);
    }

    #[test]
    fn test_non_sentinel_truth_never_predicted() {
        let records = vec![Record::new("n", "u", "sad").with_label(2)];
        let evaluation = Evaluator::default().evaluate(&records, &lexicon()).unwrap();

        assert_eq!(evaluation.incorrect, 1);
    }
}
