//! PyO3 bindings for Python integration

use pyo3::exceptions::{PyIOError, PyRuntimeError, PyValueError};
use pyo3::prelude::*;

use crate::error::FrequencyDataError;

mod reducer_bindings;

impl From<FrequencyDataError> for PyErr {
    fn from(err: FrequencyDataError) -> PyErr {
        let msg = err.to_string();
        match err {
            FrequencyDataError::Configuration(_) => PyValueError::new_err(msg),
            FrequencyDataError::Decode { .. } | FrequencyDataError::Write { .. } => {
                PyIOError::new_err(msg)
            }
            FrequencyDataError::Serialize(_) | FrequencyDataError::Transform(_) => {
                PyRuntimeError::new_err(msg)
            }
        }
    }
}

/// Python module definition
#[pymodule]
fn frequency_data(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_class::<reducer_bindings::PySpectrumReducer>()?;
    m.add_function(wrap_pyfunction!(reducer_bindings::process_audio, m)?)?;

    Ok(())
}
