//! PyO3 bindings for Python integration

use pyo3::prelude::*;

mod spectrum_bindings;

/// Python module definition
#[pymodule]
fn vibration_fft(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(spectrum_bindings::fft, m)?)?;
    m.add_class::<spectrum_bindings::PyVibrationAnalyzer>()?;

    Ok(())
}
