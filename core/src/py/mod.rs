use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;
use pyo3::wrap_pyfunction;

use crate::error::TrainingError;
use crate::metrics;
use crate::package::read_package;
use crate::report;

fn value_err(e: TrainingError) -> PyErr {
    PyValueError::new_err(e.to_string())
}

/// read_package_message("RUN", [15000, 1, 75]) -> report line
#[pyfunction]
fn read_package_message(workout_type: &str, data: Vec<f64>) -> PyResult<String> {
    let workout = read_package(workout_type, &data).map_err(value_err)?;
    Ok(workout.show_training_info().get_message())
}

#[pyfunction]
#[pyo3(name = "report_json", signature = (packages_json, cfg_json = None))]
fn report_json_py(packages_json: &str, cfg_json: Option<&str>) -> PyResult<String> {
    report::report_json(packages_json, cfg_json).map_err(value_err)
}

/// Prometheus text for the process counters ("" if disabled).
#[pyfunction]
fn metrics_text() -> PyResult<String> {
    match metrics::global() {
        Some(m) => m
            .render()
            .map_err(|e| PyRuntimeError::new_err(format!("failed to render metrics: {e}"))),
        None => Ok(String::new()),
    }
}

#[pymodule]
fn workout_core(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(read_package_message, m)?)?;
    m.add_function(wrap_pyfunction!(report_json_py, m)?)?;
    m.add_function(wrap_pyfunction!(metrics_text, m)?)?;
    Ok(())
}
