//! Loading of aligned data/target CSV files
//!
//! The data file holds one tweet per row; the target file holds the labels
//! of the same tweets in the same row order. Tweet text may contain the
//! delimiter, so the text column and every column after it are concatenated
//! back into one body with the delimiters dropped. Fields are never quoted.

use crate::config::DataSettings;
use crate::error::{Error, Result};
use crate::models::Record;
use csv::{ReaderBuilder, StringRecord};
use std::fs::File;
use std::path::Path;
use tracing::info;

/// Reads labeled records from a data file and a target file
#[derive(Debug, Clone, Default)]
pub struct DataLoader {
    settings: DataSettings,
}

impl DataLoader {
    pub fn new(settings: DataSettings) -> Self {
        Self { settings }
    }

    /// Load records from `data` and attach labels from `target`
    pub fn load_pairs<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        data: P,
        target: Q,
    ) -> Result<Vec<Record>> {
        let data = data.as_ref();
        let target = target.as_ref();
        info!("Loading pairs of tweets from {:?} and {:?}", data, target);

        let mut records = self.load_unlabeled(data)?;
        let labels = self.load_labels(target)?;

        if labels.len() != records.len() {
            return Err(Error::MisalignedTargets {
                data_rows: records.len(),
                target_rows: labels.len(),
            });
        }

        for (record, label) in records.iter_mut().zip(labels) {
            record.set_label(label);
        }

        Ok(records)
    }

    /// Load records without labels
    pub fn load_unlabeled<P: AsRef<Path>>(&self, path: P) -> Result<Vec<Record>> {
        let path = path.as_ref();
        let mut records = Vec::new();

        for row in self.reader(path)?.records() {
            let row = row?;
            let id = self.field(path, &row, self.settings.id_column)?;
            let author = self.field(path, &row, self.settings.author_column)?;
            self.field(path, &row, self.settings.text_column)?;

            let text: String = row.iter().skip(self.settings.text_column).collect();

            records.push(Record::new(id, author, text));
        }

        Ok(records)
    }

    /// Load the label column of a target file
    pub fn load_labels<P: AsRef<Path>>(&self, path: P) -> Result<Vec<i32>> {
        let path = path.as_ref();
        let mut labels = Vec::new();

        for row in self.reader(path)?.records() {
            let row = row?;
            let value = self.field(path, &row, self.settings.label_column)?;
            let label = value.trim().parse::<i32>().map_err(|_| Error::InvalidLabel {
                path: path.to_path_buf(),
                line: line_of(&row),
                value: value.to_string(),
            })?;
            labels.push(label);
        }

        Ok(labels)
    }

    fn reader(&self, path: &Path) -> Result<csv::Reader<File>> {
        let file = File::open(path)?;
        Ok(ReaderBuilder::new()
            .delimiter(self.settings.delimiter as u8)
            .has_headers(self.settings.has_headers)
            .flexible(true)
            .quoting(false)
            .from_reader(file))
    }

    fn field<'r>(&self, path: &Path, row: &'r StringRecord, column: usize) -> Result<&'r str> {
        row.get(column).ok_or_else(|| Error::MissingField {
            path: path.to_path_buf(),
            line: line_of(row),
            column,
        })
    }
}

fn line_of(row: &StringRecord) -> u64 {
    row.position().map_or(0, |p| p.line())
}
