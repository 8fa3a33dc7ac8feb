use crate::error::RecordError;
use crate::utils::{debug_enabled, parse_duration};

use super::{DayRecord, TrainingRecord};

const DAY_FIELDS: usize = 2;
const TRAINING_FIELDS: usize = 3;

/// Split a record and check it has exactly `expected` fields
fn split_fields(data: &str, expected: usize) -> Result<Vec<&str>, RecordError> {
    let parts: Vec<&str> = data.split(',').collect();
    if parts.len() != expected {
        return Err(RecordError::Format {
            expected,
            got: parts.len(),
            data: data.to_string(),
        });
    }
    Ok(parts)
}

/// Steps must be a positive integer; checked before the duration field
fn parse_steps(field: &str) -> Result<u64, RecordError> {
    let steps: i64 = field.parse().map_err(|source| RecordError::Steps {
        input: field.to_string(),
        source,
    })?;
    if steps <= 0 {
        return Err(RecordError::NonPositiveSteps);
    }
    Ok(steps.unsigned_abs())
}

/// Parse a `<steps>,<duration>` record
pub fn parse_day_record(data: &str) -> Result<DayRecord, RecordError> {
    let parts = split_fields(data, DAY_FIELDS)?;
    let steps = parse_steps(parts[0])?;
    let duration = parse_duration(parts[1])?;

    if debug_enabled() {
        eprintln!("Parsed day record {data:?}: steps={steps}, duration={duration}");
    }
    Ok(DayRecord { steps, duration })
}

/// Parse a `<steps>,<activity>,<duration>` record
pub fn parse_training_record(data: &str) -> Result<TrainingRecord, RecordError> {
    let parts = split_fields(data, TRAINING_FIELDS)?;
    let steps = parse_steps(parts[0])?;
    let duration = parse_duration(parts[2])?;
    let activity = parts[1].to_string();

    if debug_enabled() {
        eprintln!(
            "Parsed training record {data:?}: steps={steps}, activity={activity:?}, duration={duration}"
        );
    }
    Ok(TrainingRecord {
        steps,
        activity,
        duration,
    })
}
