//! Results file: accuracy on the first line, then misclassified ids

use crate::error::Result;
use crate::models::Evaluation;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write an evaluation to `path`, replacing any existing file
pub fn write_results<P: AsRef<Path>>(path: P, evaluation: &Evaluation) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_results_to(&mut writer, evaluation)?;
    writer.flush()?;
    Ok(())
}

/// Write an evaluation to any writer
pub fn write_results_to<W: Write>(writer: &mut W, evaluation: &Evaluation) -> Result<()> {
    writeln!(writer, "{:.3}", evaluation.accuracy)?;
    for id in &evaluation.misclassified {
        writeln!(writer, "{id}")?;
    }
    Ok(())
}
