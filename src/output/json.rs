use serde_json::{Value, json};
use stepstats::TrainingOutcome;
use stepstats::consts::UNKNOWN_ACTIVITY;

use crate::batch::{ProcessedRecord, Summary};

fn entry_json(record: &ProcessedRecord) -> Value {
    let (status, details) = match &record.result {
        Ok(Summary::Day(summary)) => ("ok", serde_json::to_value(summary)),
        Ok(Summary::Training(TrainingOutcome::Completed(summary))) => {
            ("ok", serde_json::to_value(summary))
        }
        Ok(Summary::Training(TrainingOutcome::UnknownActivity(label))) => (
            "unknown_activity",
            Ok(json!({ "label": label, "message": UNKNOWN_ACTIVITY })),
        ),
        Err(err) => (
            "error",
            Ok(json!({ "kind": err.kind(), "error": err.to_string() })),
        ),
    };

    let mut entry = serde_json::Map::new();
    entry.insert("record".to_string(), json!(record.input));
    entry.insert("status".to_string(), json!(status));
    match details {
        Ok(Value::Object(fields)) => entry.extend(fields),
        Ok(_) => {}
        Err(e) => eprintln!("Failed to serialize summary for {:?}: {}", record.input, e),
    }
    Value::Object(entry)
}

/// One JSON array with an object per record
pub(crate) fn output_json(records: &[ProcessedRecord]) -> String {
    let output: Vec<Value> = records.iter().map(entry_json).collect();
    serde_json::to_string_pretty(&output).unwrap_or_else(|e| {
        eprintln!("Failed to serialize JSON output: {}", e);
        "[]".to_string()
    })
}
