//! Spectral analysis with FFT

pub mod analysis;
pub mod fft;

pub use analysis::{AnalysisError, AnalyzerConfig, VibrationAnalyzer, VibrationReport};
pub use fft::{is_valid_length, transform, Complex64, FftEngine, FftError};
