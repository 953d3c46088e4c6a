//! Sum-of-sines signal generator
//!
//! Produces sampled vibration traces from a list of pure tones.

use crate::spectrum::analysis::AnalysisError;
use crate::spectrum::fft::Complex64;
use std::f64::consts::PI;

/// Pure sinusoidal component
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    /// Peak amplitude
    pub amplitude: f64,

    /// Frequency in Hz
    pub frequency_hz: f64,
}

impl Tone {
    pub fn new(amplitude: f64, frequency_hz: f64) -> Self {
        Self {
            amplitude,
            frequency_hz,
        }
    }

    /// Value at time `t` seconds
    #[inline]
    fn sample(&self, t: f64) -> f64 {
        self.amplitude * (2.0 * PI * self.frequency_hz * t).sin()
    }
}

/// Signal generator configuration
#[derive(Debug, Clone, PartialEq)]
pub struct SignalConfig {
    /// Sample rate in Hz
    pub sample_rate: f64,

    /// Number of samples to generate
    pub num_samples: usize,

    /// Components summed into the trace
    pub tones: Vec<Tone>,
}

impl Default for SignalConfig {
    /// Machine running with a 50 Hz and a 120 Hz vibration component
    fn default() -> Self {
        Self {
            sample_rate: 1000.0,
            num_samples: 64,
            tones: vec![Tone::new(0.4, 50.0), Tone::new(0.6, 120.0)],
        }
    }
}

impl SignalConfig {
    pub fn with_sample_rate(mut self, sample_rate: f64) -> Self {
        self.sample_rate = sample_rate;
        self
    }

    pub fn with_num_samples(mut self, num_samples: usize) -> Self {
        self.num_samples = num_samples;
        self
    }

    pub fn with_tones(mut self, tones: Vec<Tone>) -> Self {
        self.tones = tones;
        self
    }

    /// Generate the sampled trace
    ///
    /// # Returns
    /// `num_samples` values; sample i is taken at t = i / sample_rate
    pub fn generate(&self) -> Result<Vec<f64>, AnalysisError> {
        if !(self.sample_rate.is_finite() && self.sample_rate > 0.0) {
            return Err(AnalysisError::InvalidSampleRate(self.sample_rate));
        }

        Ok((0..self.num_samples)
            .map(|i| {
                let t = i as f64 / self.sample_rate;
                self.tones.iter().map(|tone| tone.sample(t)).sum()
            })
            .collect())
    }
}

/// Lift real samples into complex form with zero imaginary part
pub fn to_complex(samples: &[f64]) -> Vec<Complex64> {
    samples.iter().map(|&s| Complex64::new(s, 0.0)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_signal_shape() {
        let signal = SignalConfig::default().generate().unwrap();
        assert_eq!(signal.len(), 64);
        assert_eq!(signal[0], 0.0);

        // t = 1 ms: 0.4*sin(0.1π) + 0.6*sin(0.24π)
        let expected = 0.4 * (0.1 * PI).sin() + 0.6 * (0.24 * PI).sin();
        assert!((signal[1] - expected).abs() < 1e-12);
    }

    #[test]
    fn test_no_tones_is_silence() {
        let signal = SignalConfig::default().with_tones(Vec::new()).generate().unwrap();
        assert!(signal.iter().all(|&s| s == 0.0));
    }

    #[test]
    fn test_invalid_sample_rate() {
        let err = SignalConfig::default().with_sample_rate(-1.0).generate();
        assert_eq!(err, Err(AnalysisError::InvalidSampleRate(-1.0)));
    }

    #[test]
    fn test_to_complex() {
        let lifted = to_complex(&[1.0, -2.0]);
        assert_eq!(lifted, vec![Complex64::new(1.0, 0.0), Complex64::new(-2.0, 0.0)]);
    }
}
