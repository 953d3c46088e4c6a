//! Machine vibration report
//!
//! Samples the default machine trace, analyzes its spectrum and prints
//! the findings.

use std::process::ExitCode;
use vibration_fft::spectrum::{AnalysisError, AnalyzerConfig, VibrationAnalyzer};
use vibration_fft::SignalConfig;

fn run() -> Result<(), AnalysisError> {
    let signal_config = SignalConfig::default();
    let analyzer_config = AnalyzerConfig::default().with_sample_rate(signal_config.sample_rate);

    println!("--- Machine Vibration Analysis Tool ---");
    println!("Collecting data samples...");
    let samples = signal_config.generate()?;

    let report = VibrationAnalyzer::new(analyzer_config)?.analyze(&samples)?;
    println!();
    print!("{}", report);
    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Vibration analysis error: {}", err);
            ExitCode::FAILURE
        }
    }
}
