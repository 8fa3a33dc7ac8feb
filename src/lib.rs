//! Step-count activity summaries
//!
//! Parses comma-separated activity records and derives distance, mean speed
//! and calories burned for walking and running.
//!
//! ```
//! let summary = stepstats::day_summary("5000,1h", 75.0, 175.0).unwrap();
//! assert!(summary.to_string().starts_with("Количество шагов: 5000."));
//! ```

pub mod consts;
pub mod core;
pub mod error;
pub mod record;
pub mod summary;
pub mod utils;

pub use error::{AppError, DurationError, ErrorKind, RecordError};
pub use summary::{DaySummary, TrainingOutcome, TrainingSummary, day_summary, training_summary};
