/// Average step length in meters, used for every activity
pub const STEP_LENGTH_M: f64 = 0.65;

/// Meters in a kilometer
pub const M_IN_KM: f64 = 1000.0;

/// Minutes in an hour
pub const MIN_IN_H: f64 = 60.0;

/// Activity label for running sessions
pub const LABEL_RUNNING: &str = "Бег";

/// Activity label for walking sessions
pub const LABEL_WALKING: &str = "Ходьба";

/// Rendered in place of a summary when the activity label is not recognized
pub const UNKNOWN_ACTIVITY: &str = "неизвестный тип тренировки";

/// Prefix of the diagnostic printed for records that fail to parse
pub const DIAGNOSTIC_PREFIX: &str = "Ошибка обработки данных";
