//! Stress scoring
//!
//! Classification runs in four stages:
//! 1. Penalty score - independent threshold rules per parameter
//! 2. Level assignment - fixed score bands
//! 3. Probability distribution - see [`crate::probability`]
//! 4. Confidence - see [`crate::confidence`]
//!
//! Recommendations are appended by [`crate::recommendations`]. Every stage is a
//! pure function of the reading, so identical readings always produce identical
//! results.

use crate::confidence;
use crate::probability;
use crate::recommendations;
use crate::types::{ClassificationResult, Parameter, PenaltyContribution, Reading, StressLevel};

/// Scores below this are low stress
pub const MODERATE_THRESHOLD: u32 = 25;

/// Scores at or above this are high stress
pub const HIGH_THRESHOLD: u32 = 50;

/// Largest possible penalty sum
pub const MAX_SCORE: u32 = 100;

/// Classify a reading into a stress level.
///
/// Total over finite input: negative or physiologically implausible values
/// still produce a result.
pub fn classify(reading: &Reading) -> ClassificationResult {
    let score = penalty_score(reading);
    let level = level_for_score(score);
    let probabilities = probability::probability_distribution(score);
    let confidence = confidence::confidence(level, reading);
    let recommendations = recommendations::recommendations(level, reading);

    log::debug!(
        "classified reading: score={score} level={level} confidence={confidence} probabilities={:?}",
        probabilities
    );

    ClassificationResult {
        level,
        score,
        confidence,
        probabilities,
        recommendations,
    }
}

/// Sum of all penalty contributions (0-100)
pub fn penalty_score(reading: &Reading) -> u32 {
    penalty_breakdown(reading).iter().map(|c| c.points).sum()
}

/// Per-parameter penalties in rule order. Parameters that cross no band
/// contribute zero points.
pub fn penalty_breakdown(reading: &Reading) -> Vec<PenaltyContribution> {
    Parameter::ALL
        .iter()
        .map(|&parameter| PenaltyContribution {
            parameter,
            points: parameter_penalty(parameter, reading.get(parameter)),
        })
        .collect()
}

/// Penalty for a single parameter value. The more severe band wins.
fn parameter_penalty(parameter: Parameter, value: f64) -> u32 {
    match parameter {
        Parameter::HeartRate => {
            if value > 100.0 {
                20
            } else if value > 90.0 {
                10
            } else {
                0
            }
        }
        Parameter::SkinConductance => {
            if value > 20.0 {
                20
            } else if value > 15.0 {
                10
            } else {
                0
            }
        }
        Parameter::SleepHours => {
            if value < 6.0 {
                25
            } else if value < 7.0 {
                15
            } else {
                0
            }
        }
        Parameter::BloodOxygen => {
            if value < 95.0 {
                15
            } else {
                0
            }
        }
        Parameter::RespirationRate => {
            if value > 20.0 {
                10
            } else {
                0
            }
        }
        Parameter::PhysicalActivity => {
            if value < 20.0 {
                10
            } else {
                0
            }
        }
    }
}

/// Map a score onto its level band. Bands are half-open on the low end:
/// 25 is moderate and 50 is high.
pub fn level_for_score(score: u32) -> StressLevel {
    if score < MODERATE_THRESHOLD {
        StressLevel::Low
    } else if score < HIGH_THRESHOLD {
        StressLevel::Moderate
    } else {
        StressLevel::High
    }
}

/// Round to one decimal place, halves upward
pub(crate) fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0 + 0.5).floor() / 10.0
}
