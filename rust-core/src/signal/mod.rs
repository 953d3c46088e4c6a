//! Synthetic vibration signals

pub mod synth;

pub use synth::{to_complex, SignalConfig, Tone};
