//! Record collection and evaluation for the CLI

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use stepstats::core::Biometrics;
use stepstats::utils::debug_enabled;
use stepstats::{AppError, DaySummary, RecordError, TrainingOutcome, day_summary, training_summary};

use crate::cli::RecordKind;

#[derive(Debug)]
pub(crate) enum Summary {
    Day(DaySummary),
    Training(TrainingOutcome),
}

/// One input record with its evaluation result
#[derive(Debug)]
pub(crate) struct ProcessedRecord {
    pub(crate) input: String,
    pub(crate) result: Result<Summary, RecordError>,
}

impl ProcessedRecord {
    pub(crate) fn is_failure(&self) -> bool {
        self.result.is_err()
    }
}

pub(crate) fn process_records(
    kind: RecordKind,
    records: &[String],
    body: Biometrics,
) -> Vec<ProcessedRecord> {
    records
        .iter()
        .map(|input| {
            let result = match kind {
                RecordKind::Day => day_summary(input, body.weight, body.height).map(Summary::Day),
                RecordKind::Training => {
                    training_summary(input, body.weight, body.height).map(Summary::Training)
                }
            };
            if debug_enabled()
                && let Err(err) = &result
            {
                eprintln!("Record {input:?} rejected ({:?}): {err}", err.kind());
            }
            ProcessedRecord {
                input: input.clone(),
                result,
            }
        })
        .collect()
}

/// Read one record per line, skipping blank lines and `#` comments.
/// A path of `-` reads stdin.
pub(crate) fn read_records(path: &Path) -> Result<Vec<String>, AppError> {
    let read_err = |source| AppError::ReadInput {
        path: path.display().to_string(),
        source,
    };

    let reader: Box<dyn BufRead> = if path == Path::new("-") {
        Box::new(BufReader::new(io::stdin()))
    } else {
        Box::new(BufReader::new(File::open(path).map_err(read_err)?))
    };

    let mut records = Vec::new();
    for line in reader.lines() {
        let line = line.map_err(read_err)?;
        if line.trim().is_empty() || line.starts_with('#') {
            continue;
        }
        records.push(line);
    }

    if debug_enabled() {
        eprintln!("Read {} records from {}", records.len(), path.display());
    }
    Ok(records)
}
