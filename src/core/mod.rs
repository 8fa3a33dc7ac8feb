//! Core module - activity classification and metric formulas

mod activity;
mod metrics;

pub use activity::Activity;
pub use metrics::{
    Biometrics, Metrics, distance, mean_speed, running_calories, walking_calories,
};
