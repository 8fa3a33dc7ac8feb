//! Activity records
//!
//! A record is one comma-separated line of input: either a daily step
//! count (`<steps>,<duration>`) or a typed training session
//! (`<steps>,<activity>,<duration>`).

mod parser;

use chrono::TimeDelta;

pub use parser::{parse_day_record, parse_training_record};

/// Daily step tracking record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayRecord {
    pub steps: u64,
    pub duration: TimeDelta,
}

/// Training session record, activity label kept verbatim
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainingRecord {
    pub steps: u64,
    pub activity: String,
    pub duration: TimeDelta,
}
