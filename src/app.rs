use stepstats::AppError;

use crate::batch::{ProcessedRecord, process_records, read_records};
use crate::cli::{Cli, OutputFormat};
use crate::output::{output_csv, output_json, print_diagnostics, print_table, print_text};

/// Outcome of a run, used for the exit status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RunReport {
    pub(crate) processed: usize,
    pub(crate) failed: usize,
}

fn collect_records(cli: &Cli) -> Result<Vec<String>, AppError> {
    let mut records = cli.command.records().to_vec();
    if let Some(path) = &cli.file {
        records.extend(read_records(path)?);
    }
    Ok(records)
}

fn render(records: &[ProcessedRecord], cli: &Cli) {
    match cli.output_format() {
        OutputFormat::Text => print_text(records),
        OutputFormat::Table => print_table(records, cli.use_color()),
        OutputFormat::Json => {
            print_diagnostics(records);
            println!("{}", output_json(records));
        }
        OutputFormat::Csv => {
            print_diagnostics(records);
            print!("{}", output_csv(records));
        }
    }
}

/// Evaluate every record of the selected kind and print the results
pub(crate) fn run(cli: &Cli) -> Result<RunReport, AppError> {
    let body = cli.biometrics()?;
    let records = collect_records(cli)?;

    if records.is_empty() {
        println!("No records to process.");
        return Ok(RunReport {
            processed: 0,
            failed: 0,
        });
    }

    let processed = process_records(cli.command.kind(), &records, body);
    render(&processed, cli);

    let report = RunReport {
        processed: processed.len(),
        failed: processed.iter().filter(|r| r.is_failure()).count(),
    };
    if cli.debug {
        eprintln!(
            "Processed {} records, {} failed",
            report.processed, report.failed
        );
    }
    Ok(report)
}
