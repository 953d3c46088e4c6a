//! Recursive radix-2 FFT engine
//!
//! Cooley-Tukey decimation-in-time over complex buffers, computed in place.
//! Output is unnormalized (no 1/N scaling).

use num_complex::Complex;
use std::f64::consts::PI;
use thiserror::Error;

/// Double-precision complex sample
pub type Complex64 = Complex<f64>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FftError {
    #[error("FFT length {0} is not a power of two")]
    NotPowerOfTwo(usize),

    #[error("Buffer length {actual} does not match FFT size {expected}")]
    LengthMismatch { expected: usize, actual: usize },
}

/// Whether `n` is a length the radix-2 transform accepts (0 or a power of two)
pub fn is_valid_length(n: usize) -> bool {
    n == 0 || n.is_power_of_two()
}

/// Transform `buffer` in place into its discrete Fourier transform
///
/// # Arguments
/// * `buffer` - Time-domain samples; length must be 0 or a power of two
///
/// # Errors
/// `FftError::NotPowerOfTwo` if the length is invalid. The buffer is not
/// touched in that case.
pub fn transform(buffer: &mut [Complex64]) -> Result<(), FftError> {
    if !is_valid_length(buffer.len()) {
        return Err(FftError::NotPowerOfTwo(buffer.len()));
    }
    radix2(buffer, None);
    Ok(())
}

/// Recursive decimation-in-time step. Length is assumed valid.
fn radix2(x: &mut [Complex64], parallel_cutoff: Option<usize>) {
    let n = x.len();
    if n <= 1 {
        return;
    }
    let half = n / 2;

    let mut even: Vec<Complex64> = x.iter().step_by(2).copied().collect();
    let mut odd: Vec<Complex64> = x.iter().skip(1).step_by(2).copied().collect();

    match parallel_cutoff {
        Some(cutoff) if n >= cutoff => {
            rayon::join(
                || radix2(&mut even, parallel_cutoff),
                || radix2(&mut odd, parallel_cutoff),
            );
        }
        _ => {
            radix2(&mut even, parallel_cutoff);
            radix2(&mut odd, parallel_cutoff);
        }
    }

    // Butterfly: both outputs of a pair read the same even[k]
    let (lower, upper) = x.split_at_mut(half);
    for (k, (lo, hi)) in lower.iter_mut().zip(upper.iter_mut()).enumerate() {
        let twiddle = Complex64::from_polar(1.0, -2.0 * PI * k as f64 / n as f64) * odd[k];
        *lo = even[k] + twiddle;
        *hi = even[k] - twiddle;
    }
}

/// FFT engine bound to a fixed transform size
#[derive(Debug, Clone)]
pub struct FftEngine {
    /// FFT size (number of samples)
    fft_size: usize,

    /// Sub-problems at least this long split their halves across rayon
    parallel_cutoff: Option<usize>,
}

impl FftEngine {
    /// Create new FFT engine
    ///
    /// # Arguments
    /// * `fft_size` - FFT size (0 or a power of two)
    pub fn new(fft_size: usize) -> Result<Self, FftError> {
        if !is_valid_length(fft_size) {
            return Err(FftError::NotPowerOfTwo(fft_size));
        }

        Ok(Self {
            fft_size,
            parallel_cutoff: None,
        })
    }

    /// Run the two recursive halves of sub-problems of length >= `cutoff` in parallel
    pub fn with_parallel_cutoff(mut self, cutoff: usize) -> Self {
        self.parallel_cutoff = Some(cutoff.max(2));
        self
    }

    /// Transform `buffer` in place
    pub fn process(&self, buffer: &mut [Complex64]) -> Result<(), FftError> {
        if buffer.len() != self.fft_size {
            return Err(FftError::LengthMismatch {
                expected: self.fft_size,
                actual: buffer.len(),
            });
        }
        radix2(buffer, self.parallel_cutoff);
        Ok(())
    }

    /// Compute FFT of a real signal and return magnitude spectrum
    ///
    /// # Arguments
    /// * `signal` - Input signal (zero-padded or truncated to fft_size)
    ///
    /// # Returns
    /// Magnitude spectrum |X[k]| for k = 0..=fft_size/2 (positive frequencies only)
    pub fn compute_magnitude(&self, signal: &[f64]) -> Vec<f64> {
        let mut buffer = vec![Complex64::new(0.0, 0.0); self.fft_size];
        for (slot, &s) in buffer.iter_mut().zip(signal) {
            slot.re = s;
        }

        radix2(&mut buffer, self.parallel_cutoff);

        buffer.iter().take(self.num_bins()).map(|c| c.norm()).collect()
    }

    /// Get FFT size
    pub fn fft_size(&self) -> usize {
        self.fft_size
    }

    /// Number of non-negative frequency bins (fft_size/2 + 1)
    pub fn num_bins(&self) -> usize {
        if self.fft_size == 0 {
            0
        } else {
            self.fft_size / 2 + 1
        }
    }

    /// Center frequency of `bin` in Hz
    pub fn bin_to_hz(&self, bin: usize, sample_rate: f64) -> f64 {
        bin as f64 * sample_rate / self.fft_size as f64
    }
}
