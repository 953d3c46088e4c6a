//! Console rendering of vibration reports

use crate::spectrum::analysis::{MachineStatus, SpectralPeak, VibrationReport};
use std::fmt;

const RULE: &str = "----------------------------";

/// Format with six significant digits and no trailing zeros (46.875, 0.195223, 125)
fn significant(value: f64) -> String {
    if value == 0.0 || !value.is_finite() {
        return format!("{}", value);
    }
    let magnitude = value.abs().log10().floor() as i32;
    let decimals = (5 - magnitude).max(0) as usize;
    let text = format!("{:.*}", decimals, value);
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        text
    }
}

impl fmt::Display for SpectralPeak {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Freq: {} Hz | Mag: {}",
            significant(self.frequency_hz),
            significant(self.magnitude)
        )?;
        if self.alert {
            write!(f, " [!] ALERT: HIGH VIBRATION DETECTED")?;
        }
        Ok(())
    }
}

impl fmt::Display for MachineStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MachineStatus::Critical => write!(
                f,
                "STATUS: CRITICAL - Potential machine fault detected.\n\
                 Action: Inspect bearings and alignment."
            ),
            MachineStatus::Normal => {
                write!(f, "STATUS: NORMAL - Machine operating within parameters.")
            }
        }
    }
}

impl fmt::Display for VibrationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Frequency Spectrum Analysis:")?;
        writeln!(f, "{}", RULE)?;
        for peak in &self.peaks {
            writeln!(f, "{}", peak)?;
        }
        writeln!(f)?;
        writeln!(f, "{}", RULE)?;
        writeln!(f, "{}", self.status)
    }
}
