use std::fmt::Write;

use stepstats::TrainingOutcome;

use crate::batch::{ProcessedRecord, Summary};
use crate::output::format::{format_metric, metric_row};

const HEADER: &str =
    "record,status,activity,steps,duration_hours,distance_km,mean_speed_kmh,calories,error";

fn csv_escape(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') || s.contains('\r') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

pub(crate) fn output_csv(records: &[ProcessedRecord]) -> String {
    let mut out = String::new();
    out.push_str(HEADER);
    out.push('\n');

    for record in records {
        let input = csv_escape(&record.input);
        match &record.result {
            Ok(summary) => match metric_row(summary) {
                Some(row) => {
                    let _ = writeln!(
                        out,
                        "{},ok,{},{},{},{},{},{},",
                        input,
                        csv_escape(row.activity),
                        row.steps,
                        format_metric(row.duration_hours),
                        format_metric(row.metrics.distance_km),
                        format_metric(row.metrics.mean_speed_kmh),
                        format_metric(row.metrics.calories),
                    );
                }
                None => {
                    let label = match summary {
                        Summary::Training(TrainingOutcome::UnknownActivity(label)) => {
                            label.as_str()
                        }
                        _ => "",
                    };
                    let _ = writeln!(out, "{},unknown_activity,{},,,,,,", input, csv_escape(label));
                }
            },
            Err(err) => {
                let _ = writeln!(
                    out,
                    "{},error,,,,,,,{}",
                    input,
                    csv_escape(&err.to_string())
                );
            }
        }
    }
    out
}
