use crate::error::TrainingResult;
use crate::package::Package;
use crate::report::report_lines;

/// Fixed packages printed by the `workout-report` binary.
pub fn demo_packages() -> Vec<Package> {
    vec![
        Package::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        Package::new("RUN", vec![15000.0, 1.0, 75.0]),
        Package::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
    ]
}

/// Print one report line per package, in input order.
pub fn print_training_report(packages: &[Package]) -> TrainingResult<()> {
    for line in report_lines(packages)? {
        println!("{line}");
    }
    Ok(())
}
