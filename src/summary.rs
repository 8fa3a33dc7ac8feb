//! Summary entry points
//!
//! `day_summary` handles daily step records and always applies the walking
//! formula. `training_summary` dispatches on the record's activity label.
//! Both return the rendered summary through `Display` or a `RecordError`;
//! nothing here prints.

use std::fmt;

use serde::Serialize;

use crate::consts::UNKNOWN_ACTIVITY;
use crate::core::{Activity, Biometrics, Metrics};
use crate::error::RecordError;
use crate::record::{parse_day_record, parse_training_record};
use crate::utils::{debug_enabled, hours};

/// Daily step summary, always computed as walking
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DaySummary {
    pub steps: u64,
    pub duration_hours: f64,
    #[serde(flatten)]
    pub metrics: Metrics,
}

/// Summary of a recognized training session
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrainingSummary {
    pub activity: Activity,
    pub steps: u64,
    pub duration_hours: f64,
    #[serde(flatten)]
    pub metrics: Metrics,
}

/// Result of a successfully parsed training record
#[derive(Debug, Clone, PartialEq)]
pub enum TrainingOutcome {
    Completed(TrainingSummary),
    /// The label is neither running nor walking; not an error
    UnknownActivity(String),
}

impl fmt::Display for DaySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Количество шагов: {}.\nДистанция составила {:.2} км.\nВы сожгли {:.2} ккал.",
            self.steps, self.metrics.distance_km, self.metrics.calories
        )
    }
}

impl fmt::Display for TrainingSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Тип тренировки: {}\nДлительность: {:.2} ч.\nДистанция: {:.2} км.\nСкорость: {:.2} км/ч\nСожгли калорий: {:.2}",
            self.activity.label(),
            self.duration_hours,
            self.metrics.distance_km,
            self.metrics.mean_speed_kmh,
            self.metrics.calories
        )
    }
}

impl fmt::Display for TrainingOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrainingOutcome::Completed(summary) => fmt::Display::fmt(summary, f),
            TrainingOutcome::UnknownActivity(_) => f.write_str(UNKNOWN_ACTIVITY),
        }
    }
}

/// Summarize a `<steps>,<duration>` record
pub fn day_summary(data: &str, weight: f64, height: f64) -> Result<DaySummary, RecordError> {
    let record = parse_day_record(data)?;
    let body = Biometrics { weight, height };
    Ok(DaySummary {
        steps: record.steps,
        duration_hours: hours(record.duration),
        metrics: Metrics::walking(record.steps, record.duration, body),
    })
}

/// Summarize a `<steps>,<activity>,<duration>` record
pub fn training_summary(
    data: &str,
    weight: f64,
    height: f64,
) -> Result<TrainingOutcome, RecordError> {
    let record = parse_training_record(data)?;
    let body = Biometrics { weight, height };

    let activity = Activity::from_label(&record.activity);
    let metrics = match &activity {
        Activity::Running => Metrics::running(record.steps, record.duration, body),
        Activity::Walking => Metrics::walking(record.steps, record.duration, body),
        Activity::Unknown(label) => {
            if debug_enabled() {
                eprintln!("Unknown activity {label:?} in record {data:?}");
            }
            return Ok(TrainingOutcome::UnknownActivity(label.clone()));
        }
    };

    Ok(TrainingOutcome::Completed(TrainingSummary {
        activity,
        steps: record.steps,
        duration_hours: hours(record.duration),
        metrics,
    }))
}
