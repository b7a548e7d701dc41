//! Recommendations
//!
//! Rules are evaluated in a fixed order and each appends its advice when its
//! guard holds. The order is part of the output contract.

use crate::types::{Reading, StressLevel};

pub const SLEEP_ADVICE: &str = "Prioritize getting 7-9 hours of sleep per night";
pub const ACTIVITY_ADVICE: &str = "Increase daily physical activity to at least 30 minutes";
pub const RELAXATION_ADVICE: &str =
    "Practice relaxation techniques like deep breathing or meditation";
pub const PROFESSIONAL_ADVICE: &str = "Consider consulting with a healthcare professional";
pub const BREAKS_ADVICE: &str = "Take regular breaks throughout the day";
pub const MAINTAIN_ADVICE: &str = "Maintain your current healthy lifestyle habits";

/// Build the ordered recommendation list. Never empty.
pub fn recommendations(level: StressLevel, reading: &Reading) -> Vec<String> {
    let mut recs = Vec::new();

    if reading.sleep_hours < 7.0 {
        recs.push(SLEEP_ADVICE);
    }

    if reading.physical_activity < 30.0 {
        recs.push(ACTIVITY_ADVICE);
    }

    if reading.heart_rate > 90.0 {
        recs.push(RELAXATION_ADVICE);
    }

    if level == StressLevel::High {
        recs.push(PROFESSIONAL_ADVICE);
        recs.push(BREAKS_ADVICE);
    }

    if recs.is_empty() {
        recs.push(MAINTAIN_ADVICE);
    }

    recs.into_iter().map(String::from).collect()
}
