//! Vibration analyzer
//!
//! Runs the FFT engine over a block of real samples and flags spectral
//! peaks whose normalized magnitude crosses the configured thresholds.

use super::fft::{transform, FftError};
use crate::signal::to_complex;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalysisError {
    #[error("FFT failed: {0}")]
    Fft(#[from] FftError),

    #[error("Sample rate must be positive and finite, got {0}")]
    InvalidSampleRate(f64),

    #[error("Invalid thresholds: report {report}, alert {alert}")]
    InvalidThresholds { report: f64, alert: f64 },
}

/// Vibration analyzer configuration
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzerConfig {
    /// Sample rate in Hz
    pub sample_rate: f64,

    /// Bins with magnitude above this are listed in the report
    pub report_threshold: f64,

    /// Listed bins with magnitude above this raise an alert
    pub alert_threshold: f64,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            sample_rate: 1000.0,
            report_threshold: 0.1,
            alert_threshold: 0.5,
        }
    }
}

impl AnalyzerConfig {
    pub fn with_sample_rate(mut self, sample_rate: f64) -> Self {
        self.sample_rate = sample_rate;
        self
    }

    pub fn with_report_threshold(mut self, threshold: f64) -> Self {
        self.report_threshold = threshold;
        self
    }

    pub fn with_alert_threshold(mut self, threshold: f64) -> Self {
        self.alert_threshold = threshold;
        self
    }

    fn validate(&self) -> Result<(), AnalysisError> {
        if !(self.sample_rate.is_finite() && self.sample_rate > 0.0) {
            return Err(AnalysisError::InvalidSampleRate(self.sample_rate));
        }
        let valid = |t: f64| t.is_finite() && t >= 0.0;
        if !valid(self.report_threshold) || !valid(self.alert_threshold) {
            return Err(AnalysisError::InvalidThresholds {
                report: self.report_threshold,
                alert: self.alert_threshold,
            });
        }
        Ok(())
    }
}

/// A frequency bin that crossed the report threshold
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpectralPeak {
    pub bin: usize,
    pub frequency_hz: f64,

    /// |X[k]| / N
    pub magnitude: f64,

    pub alert: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MachineStatus {
    Normal,
    Critical,
}

impl MachineStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MachineStatus::Normal => "NORMAL",
            MachineStatus::Critical => "CRITICAL",
        }
    }
}

/// Outcome of one analysis pass
#[derive(Debug, Clone, PartialEq)]
pub struct VibrationReport {
    pub peaks: Vec<SpectralPeak>,
    pub status: MachineStatus,
}

impl VibrationReport {
    pub fn problem_detected(&self) -> bool {
        self.status == MachineStatus::Critical
    }
}

/// Machine vibration analyzer
#[derive(Debug, Clone)]
pub struct VibrationAnalyzer {
    config: AnalyzerConfig,
}

impl VibrationAnalyzer {
    /// Create new analyzer, rejecting non-positive sample rates and negative thresholds
    pub fn new(config: AnalyzerConfig) -> Result<Self, AnalysisError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Analyze a block of samples
    ///
    /// # Arguments
    /// * `samples` - Time-domain samples; length must be 0 or a power of two
    ///
    /// # Returns
    /// Peaks among bins 0..N/2 with |X[k]|/N above the report threshold
    pub fn analyze(&self, samples: &[f64]) -> Result<VibrationReport, AnalysisError> {
        let n = samples.len();
        let mut spectrum = to_complex(samples);
        transform(&mut spectrum)?;

        let peaks: Vec<SpectralPeak> = spectrum
            .iter()
            .take(n / 2)
            .enumerate()
            .filter_map(|(bin, x)| {
                let magnitude = x.norm() / n as f64;
                (magnitude > self.config.report_threshold).then(|| SpectralPeak {
                    bin,
                    frequency_hz: bin as f64 * self.config.sample_rate / n as f64,
                    magnitude,
                    alert: magnitude > self.config.alert_threshold,
                })
            })
            .collect();

        let status = if peaks.iter().any(|p| p.alert) {
            MachineStatus::Critical
        } else {
            MachineStatus::Normal
        };

        Ok(VibrationReport { peaks, status })
    }

    /// Get current configuration
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signal::{SignalConfig, Tone};

    #[test]
    fn test_on_bin_tone_reported_at_half_amplitude() {
        // 125 Hz at fs = 1000, N = 64 falls exactly on bin 8
        let signal = SignalConfig::default()
            .with_tones(vec![Tone::new(1.4, 125.0)])
            .generate()
            .unwrap();

        let analyzer = VibrationAnalyzer::new(AnalyzerConfig::default()).unwrap();
        let report = analyzer.analyze(&signal).unwrap();

        assert_eq!(report.peaks.len(), 1);
        let peak = report.peaks[0];
        assert_eq!(peak.bin, 8);
        assert!((peak.frequency_hz - 125.0).abs() < 1e-9);
        assert!((peak.magnitude - 0.7).abs() < 1e-9);
        assert!(peak.alert);
        assert_eq!(report.status, MachineStatus::Critical);
    }

    #[test]
    fn test_default_machine_is_normal() {
        let signal = SignalConfig::default().generate().unwrap();
        let analyzer = VibrationAnalyzer::new(AnalyzerConfig::default()).unwrap();
        let report = analyzer.analyze(&signal).unwrap();

        assert!(!report.peaks.is_empty());
        assert!(report.peaks.iter().all(|p| !p.alert));
        assert!(!report.problem_detected());

        // Strongest peak sits on the bin nearest 120 Hz
        let strongest = report
            .peaks
            .iter()
            .max_by(|a, b| a.magnitude.partial_cmp(&b.magnitude).unwrap())
            .unwrap();
        assert_eq!(strongest.bin, 8);
    }

    #[test]
    fn test_lower_alert_threshold_flags_default_machine() {
        let signal = SignalConfig::default().generate().unwrap();
        let config = AnalyzerConfig::default().with_alert_threshold(0.2);
        let report = VibrationAnalyzer::new(config).unwrap().analyze(&signal).unwrap();

        assert_eq!(report.status, MachineStatus::Critical);
    }

    #[test]
    fn test_silence_has_no_peaks() {
        let analyzer = VibrationAnalyzer::new(AnalyzerConfig::default()).unwrap();
        let report = analyzer.analyze(&[0.0; 32]).unwrap();

        assert!(report.peaks.is_empty());
        assert_eq!(report.status, MachineStatus::Normal);

        let empty = analyzer.analyze(&[]).unwrap();
        assert!(empty.peaks.is_empty());
    }

    #[test]
    fn test_rejects_bad_input() {
        let analyzer = VibrationAnalyzer::new(AnalyzerConfig::default()).unwrap();
        assert_eq!(
            analyzer.analyze(&[0.0; 10]),
            Err(AnalysisError::Fft(FftError::NotPowerOfTwo(10)))
        );

        let bad_rate = AnalyzerConfig::default().with_sample_rate(0.0);
        assert!(matches!(
            VibrationAnalyzer::new(bad_rate),
            Err(AnalysisError::InvalidSampleRate(_))
        ));

        let bad_threshold = AnalyzerConfig::default().with_report_threshold(f64::NAN);
        assert!(matches!(
            VibrationAnalyzer::new(bad_threshold),
            Err(AnalysisError::InvalidThresholds { .. })
        ));
    }
}
