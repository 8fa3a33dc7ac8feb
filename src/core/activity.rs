use serde::Serialize;

use crate::consts::{LABEL_RUNNING, LABEL_WALKING};

/// Training type, resolved from the record's activity label
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Activity {
    Running,
    Walking,
    /// Label that matches neither known activity, kept verbatim
    Unknown(String),
}

impl Activity {
    /// Labels are matched exactly: no trimming, no case folding
    pub fn from_label(label: &str) -> Self {
        match label {
            LABEL_RUNNING => Activity::Running,
            LABEL_WALKING => Activity::Walking,
            other => Activity::Unknown(other.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Activity::Running => LABEL_RUNNING,
            Activity::Walking => LABEL_WALKING,
            Activity::Unknown(label) => label,
        }
    }
}
