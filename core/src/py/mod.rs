use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::wrap_pyfunction;

use crate::package::read_package;
use crate::types::InfoMessage;

fn info_for(workout_type: &str, data: &[f64]) -> PyResult<InfoMessage> {
    read_package(workout_type, data)
        .map(|t| t.show_training_info())
        .map_err(|e| PyErr::new::<PyValueError, _>(e.to_string()))
}

/// Ferdig formatert melding, samme tekst som workout-report skriver.
#[pyfunction]
fn read_package_message(workout_type: &str, data: Vec<f64>) -> PyResult<String> {
    Ok(info_for(workout_type, &data)?.get_message())
}

/// (type, varighet, distanse, fart, kcal)
#[pyfunction]
fn read_package_info(workout_type: &str, data: Vec<f64>) -> PyResult<(String, f64, f64, f64, f64)> {
    let m = info_for(workout_type, &data)?;
    Ok((m.training_type, m.duration, m.distance, m.speed, m.calories))
}

#[pymodule]
fn workout_core(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(read_package_message, m)?)?;
    m.add_function(wrap_pyfunction!(read_package_info, m)?)?;
    Ok(())
}
