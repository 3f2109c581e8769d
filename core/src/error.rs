use thiserror::Error;

/// Everything that can go wrong between a raw package and a rendered report.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TrainingError {
    #[error("unknown workout type code: {0:?} (expected SWM, RUN or WLK)")]
    UnknownWorkoutCode(String),

    #[error("{code} expects {expected} parameters, got {got}")]
    ArityMismatch {
        code: &'static str,
        expected: usize,
        got: usize,
    },

    /// Duration is a denominator for mean speed.
    #[error("duration must be a positive number of hours, got {0}")]
    InvalidDuration(f64),

    #[error("{field} must be a whole non-negative number, got {value}")]
    InvalidCount { field: &'static str, value: f64 },

    #[error("parse error ({what}) at {path}: {message}")]
    Parse {
        what: &'static str,
        path: String,
        message: String,
    },

    #[error("failed to serialize report: {0}")]
    Serialize(String),
}

impl TrainingError {
    /// Short label used for the rejected-packages counter.
    pub fn reason(&self) -> &'static str {
        match self {
            TrainingError::UnknownWorkoutCode(_) => "unknown_workout_code",
            TrainingError::ArityMismatch { .. } => "arity_mismatch",
            TrainingError::InvalidDuration(_) => "invalid_duration",
            TrainingError::InvalidCount { .. } => "invalid_count",
            TrainingError::Parse { .. } => "parse",
            TrainingError::Serialize(_) => "serialize",
        }
    }
}

pub type TrainingResult<T> = Result<T, TrainingError>;
