use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::{TrainingError, TrainingResult};
use crate::training::{Running, SportsWalking, Swimming, Workout};

/// Workout type code as sent by the sensor unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkoutCode {
    Swimming,
    Running,
    SportsWalking,
}

impl WorkoutCode {
    pub const ALL: [WorkoutCode; 3] = [
        WorkoutCode::Swimming,
        WorkoutCode::Running,
        WorkoutCode::SportsWalking,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            WorkoutCode::Swimming => "SWM",
            WorkoutCode::Running => "RUN",
            WorkoutCode::SportsWalking => "WLK",
        }
    }

    /// Positional parameters the workout constructor takes.
    pub fn arity(&self) -> usize {
        match self {
            WorkoutCode::Running => 3,
            WorkoutCode::SportsWalking => 4,
            WorkoutCode::Swimming => 5,
        }
    }
}

impl FromStr for WorkoutCode {
    type Err = TrainingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SWM" => Ok(WorkoutCode::Swimming),
            "RUN" => Ok(WorkoutCode::Running),
            "WLK" => Ok(WorkoutCode::SportsWalking),
            other => Err(TrainingError::UnknownWorkoutCode(other.to_string())),
        }
    }
}

impl fmt::Display for WorkoutCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One raw sensor package.
///
/// JSON accepts the object form first, then the legacy pair `["SWM", [..]]`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Package {
    Object { workout_type: String, data: Vec<f64> },
    Pair(String, Vec<f64>),
}

impl Package {
    pub fn new(workout_type: impl Into<String>, data: Vec<f64>) -> Self {
        Package::Object {
            workout_type: workout_type.into(),
            data,
        }
    }

    pub fn workout_type(&self) -> &str {
        match self {
            Package::Object { workout_type, .. } | Package::Pair(workout_type, _) => workout_type,
        }
    }

    pub fn data(&self) -> &[f64] {
        match self {
            Package::Object { data, .. } | Package::Pair(_, data) => data,
        }
    }

    pub fn read(&self) -> TrainingResult<Workout> {
        read_package(self.workout_type(), self.data())
    }
}

/// Steps, strokes and laps arrive as JSON numbers; accept only whole values.
fn as_count(field: &'static str, value: f64) -> TrainingResult<u32> {
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= f64::from(u32::MAX) {
        Ok(value as u32)
    } else {
        Err(TrainingError::InvalidCount { field, value })
    }
}

/// Build the workout for `workout_type` from positional `data`:
/// action, duration, weight, then the workout specific fields.
pub fn read_package(workout_type: &str, data: &[f64]) -> TrainingResult<Workout> {
    let code: WorkoutCode = workout_type.parse()?;
    if data.len() != code.arity() {
        return Err(TrainingError::ArityMismatch {
            code: code.as_str(),
            expected: code.arity(),
            got: data.len(),
        });
    }

    let action = as_count("action", data[0])?;
    let (duration, weight) = (data[1], data[2]);

    let workout: Workout = match code {
        WorkoutCode::Running => Running::new(action, duration, weight)?.into(),
        WorkoutCode::SportsWalking => SportsWalking::new(action, duration, weight, data[3])?.into(),
        WorkoutCode::Swimming => {
            let count_pool = as_count("count_pool", data[4])?;
            Swimming::new(action, duration, weight, data[3], count_pool)?.into()
        }
    };
    Ok(workout)
}
