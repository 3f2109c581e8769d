pub mod cli;
pub mod error;
pub mod message;
pub mod metrics;
pub mod package;
pub mod report;
pub mod training;
pub mod types;

#[cfg(feature = "python")]
mod py;

pub use error::{TrainingError, TrainingResult};
pub use message::InfoMessage;
pub use package::{read_package, Package, WorkoutCode};
pub use report::{report_json, report_lines, run_packages};
pub use training::{Running, SportsWalking, Swimming, Training, TrainingBase, Workout};
pub use types::{Cfg, Report, ReportEntry};
