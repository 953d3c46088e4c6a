//! Vibration FFT - Machine Vibration Spectral Analysis
//!
//! Recursive radix-2 FFT engine with a threshold-based vibration analyzer
//! and optional Python bindings.

// Suppress PyO3 non-local impl warnings (harmless macro-generated code)
#![cfg_attr(feature = "python", allow(non_local_definitions))]

pub mod report;
pub mod signal;
pub mod spectrum;

#[cfg(feature = "python")]
pub mod python_bindings;

pub use signal::{SignalConfig, Tone};
pub use spectrum::{transform, Complex64, FftEngine, FftError, VibrationAnalyzer};
