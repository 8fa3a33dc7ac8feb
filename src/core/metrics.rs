//! Distance, speed and calorie formulas
//!
//! All functions are pure. Distance derives from the step count and a fixed
//! step length; speed and calories also depend on the elapsed time.

use chrono::TimeDelta;
use serde::Serialize;

use crate::consts::{MIN_IN_H, M_IN_KM, STEP_LENGTH_M};
use crate::utils::hours;

/// Running: calories per unit of weight grow with mean speed
const RUNNING_SPEED_MULTIPLIER: f64 = 18.0;
const RUNNING_SPEED_SHIFT: f64 = 20.0;

/// Walking: weight and speed-over-height coefficients
const WALKING_WEIGHT_MULTIPLIER: f64 = 0.035;
const WALKING_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

/// User body measurements, taken as given
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Biometrics {
    pub weight: f64,
    pub height: f64,
}

/// Metrics derived from one record
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Metrics {
    pub distance_km: f64,
    pub mean_speed_kmh: f64,
    pub calories: f64,
}

impl Metrics {
    pub fn walking(steps: u64, duration: TimeDelta, body: Biometrics) -> Self {
        Metrics {
            distance_km: distance(steps),
            mean_speed_kmh: mean_speed(steps, duration),
            calories: walking_calories(steps, body.weight, body.height, duration),
        }
    }

    pub fn running(steps: u64, duration: TimeDelta, body: Biometrics) -> Self {
        Metrics {
            distance_km: distance(steps),
            mean_speed_kmh: mean_speed(steps, duration),
            calories: running_calories(steps, body.weight, duration),
        }
    }
}

/// Distance in kilometers covered by `steps`
pub fn distance(steps: u64) -> f64 {
    steps as f64 * STEP_LENGTH_M / M_IN_KM
}

/// Mean speed in km/h; zero for a zero or negative duration
pub fn mean_speed(steps: u64, duration: TimeDelta) -> f64 {
    if duration <= TimeDelta::zero() {
        return 0.0;
    }
    distance(steps) / hours(duration)
}

pub fn running_calories(steps: u64, weight: f64, duration: TimeDelta) -> f64 {
    let speed = mean_speed(steps, duration);
    (RUNNING_SPEED_MULTIPLIER * speed - RUNNING_SPEED_SHIFT) * weight
}

pub fn walking_calories(steps: u64, weight: f64, height: f64, duration: TimeDelta) -> f64 {
    let speed = mean_speed(steps, duration);
    (WALKING_WEIGHT_MULTIPLIER * weight
        + (speed * speed / height) * WALKING_SPEED_HEIGHT_MULTIPLIER)
        * hours(duration)
        * MIN_IN_H
}
