use serde::de::DeserializeOwned;
use serde_path_to_error as spte;

use crate::error::{TrainingError, TrainingResult};
use crate::metrics;
use crate::package::Package;
use crate::types::{Cfg, Report, ReportEntry};

fn parse_json<T: DeserializeOwned>(what: &'static str, json_in: &str) -> TrainingResult<T> {
    let mut de = serde_json::Deserializer::from_str(json_in);
    spte::deserialize(&mut de).map_err(|e| TrainingError::Parse {
        what,
        path: e.path().to_string(),
        message: e.inner().to_string(),
    })
}

/// Evaluate packages in input order.
///
/// With `fail_fast` (default) the first bad package aborts the batch;
/// otherwise it is reported as a `Rejected` entry and the batch continues.
pub fn run_packages(packages: &[Package], cfg: &Cfg) -> TrainingResult<Report> {
    let counters = metrics::global();
    let mut report = Report::default();

    for (index, package) in packages.iter().enumerate() {
        match package.read() {
            Ok(workout) => {
                let info = workout.show_training_info();
                if let Some(m) = counters {
                    m.record_evaluated(&info.training_type);
                }
                report.ok += 1;
                report.reports.push(ReportEntry::Line {
                    index,
                    workout_type: package.workout_type().to_string(),
                    message: info.get_message(),
                    record: cfg.include_records().then_some(info),
                });
            }
            Err(e) => {
                log::warn!("package #{index} ({}) rejected: {e}", package.workout_type());
                if let Some(m) = counters {
                    m.record_rejected(e.reason());
                }
                if cfg.fail_fast() {
                    return Err(e);
                }
                report.rejected += 1;
                report.reports.push(ReportEntry::Rejected {
                    index,
                    workout_type: package.workout_type().to_string(),
                    error: e.to_string(),
                });
            }
        }
    }

    Ok(report)
}

/// Report lines for `packages`, failing on the first bad one.
pub fn report_lines(packages: &[Package]) -> TrainingResult<Vec<String>> {
    let report = run_packages(packages, &Cfg::default())?;
    Ok(report.lines().into_iter().map(str::to_owned).collect())
}

/// JSON entry point: array of packages (+ optional cfg) in, report document out.
pub fn report_json(packages_json: &str, cfg_json: Option<&str>) -> TrainingResult<String> {
    let packages: Vec<Package> = parse_json("packages", packages_json)?;
    let cfg: Cfg = match cfg_json {
        Some(s) if !s.trim().is_empty() => parse_json("cfg", s)?,
        _ => Cfg::default(),
    };

    let report = run_packages(&packages, &cfg)?;
    serde_json::to_string(&report).map_err(|e| TrainingError::Serialize(e.to_string()))
}
