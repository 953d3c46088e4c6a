//! Python bindings for the FFT engine and vibration analyzer

use crate::spectrum::{transform, AnalyzerConfig, Complex64, VibrationAnalyzer};
use numpy::{PyArray1, PyReadonlyArray1};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

fn value_error(err: impl std::fmt::Display) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// Discrete Fourier transform of a complex128 array
///
/// Args:
///     samples: Input samples (length 0 or a power of two)
///
/// Returns:
///     Unnormalized spectrum as a new numpy array
#[pyfunction]
pub fn fft<'py>(
    py: Python<'py>,
    samples: PyReadonlyArray1<Complex64>,
) -> PyResult<&'py PyArray1<Complex64>> {
    let mut buffer = samples.as_slice().map_err(value_error)?.to_vec();
    transform(&mut buffer).map_err(value_error)?;

    Ok(PyArray1::from_vec(py, buffer))
}

/// Vibration analyzer exposed to Python
#[pyclass(name = "VibrationAnalyzer")]
pub struct PyVibrationAnalyzer {
    analyzer: VibrationAnalyzer,
}

#[pymethods]
impl PyVibrationAnalyzer {
    /// Create a new vibration analyzer
    ///
    /// Args:
    ///     sample_rate: Sample rate in Hz
    ///     report_threshold: Minimum normalized magnitude to report a bin
    ///     alert_threshold: Magnitude above which a bin raises an alert
    #[new]
    #[pyo3(signature = (sample_rate=1000.0, report_threshold=0.1, alert_threshold=0.5))]
    fn new(sample_rate: f64, report_threshold: f64, alert_threshold: f64) -> PyResult<Self> {
        let config = AnalyzerConfig {
            sample_rate,
            report_threshold,
            alert_threshold,
        };

        Ok(Self {
            analyzer: VibrationAnalyzer::new(config).map_err(value_error)?,
        })
    }

    /// Analyze a block of samples
    ///
    /// Returns:
    ///     (peaks, status) where peaks is a list of
    ///     (frequency_hz, magnitude, alert) tuples and status is
    ///     "NORMAL" or "CRITICAL"
    fn analyze(
        &self,
        signal: PyReadonlyArray1<f64>,
    ) -> PyResult<(Vec<(f64, f64, bool)>, &'static str)> {
        let sig = signal.as_slice().map_err(value_error)?;
        let report = self.analyzer.analyze(sig).map_err(value_error)?;

        let peaks = report
            .peaks
            .iter()
            .map(|p| (p.frequency_hz, p.magnitude, p.alert))
            .collect();

        Ok((peaks, report.status.as_str()))
    }

    /// Get current sample rate
    fn get_sample_rate(&self) -> f64 {
        self.analyzer.config().sample_rate
    }
}
