//! Probability distribution
//!
//! Interpolates un-normalized weights for each level from the score, then
//! normalizes them to sum to 100. The distribution is for display only; the
//! level itself comes from the score bands.

use crate::scorer::{round_one_decimal, HIGH_THRESHOLD, MODERATE_THRESHOLD};
use crate::types::Probabilities;

/// Compute the normalized probability triple for a score.
pub fn probability_distribution(score: u32) -> Probabilities {
    let (low, moderate, high) = interpolate_weights(score);
    normalize(low, moderate, high)
}

/// Piecewise-linear weights over the three score bands
fn interpolate_weights(score: u32) -> (f64, f64, f64) {
    let score = score as f64;
    let moderate_start = MODERATE_THRESHOLD as f64;
    let high_start = HIGH_THRESHOLD as f64;

    if score < moderate_start {
        // 80-100% low, 0-15% moderate
        let position = score / moderate_start;
        (100.0 - 20.0 * position, 15.0 * position, 0.0)
    } else if score < high_start {
        // 25..=49 maps onto 0..=1
        let position = (score - moderate_start) / 24.0;
        (20.0 * (1.0 - position), 60.0 + 25.0 * position, 15.0 * position)
    } else {
        let position = ((score - high_start) / 50.0).min(1.0);
        (0.0, 30.0 * (1.0 - position), 70.0 + 30.0 * position)
    }
}

fn normalize(low: f64, moderate: f64, high: f64) -> Probabilities {
    // Every band keeps at least one weight >= 60, so total is never zero
    let total = low + moderate + high;

    Probabilities {
        low: round_one_decimal(low / total * 100.0),
        moderate: round_one_decimal(moderate / total * 100.0),
        high: round_one_decimal(high / total * 100.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_zero_score_is_all_low() {
        let p = probability_distribution(0);
        assert_close(p.low, 100.0);
        assert_close(p.moderate, 0.0);
        assert_close(p.high, 0.0);
    }

    #[test]
    fn test_low_band_interpolation() {
        // position 0.8: low 84, moderate 12, total 96
        let p = probability_distribution(20);
        assert_close(p.low, 87.5);
        assert_close(p.moderate, 12.5);
        assert_close(p.high, 0.0);
    }

    #[test]
    fn test_moderate_band_start() {
        // position 0: low 20, moderate 60, high 0
        let p = probability_distribution(25);
        assert_close(p.low, 25.0);
        assert_close(p.moderate, 75.0);
        assert_close(p.high, 0.0);
    }

    #[test]
    fn test_moderate_band_middle() {
        let p = probability_distribution(35);
        assert_close(p.low, 13.2);
        assert_close(p.moderate, 79.7);
        assert_close(p.high, 7.1);
    }

    #[test]
    fn test_high_band() {
        let p = probability_distribution(50);
        assert_close(p.moderate, 30.0);
        assert_close(p.high, 70.0);

        let p = probability_distribution(75);
        assert_close(p.low, 0.0);
        assert_close(p.moderate, 15.0);
        assert_close(p.high, 85.0);
    }

    #[test]
    fn test_every_reachable_score_sums_to_hundred() {
        for score in (0..=100).step_by(5) {
            let p = probability_distribution(score);
            assert!(
                (p.total() - 100.0).abs() <= 0.1 + 1e-9,
                "score {score} sums to {}",
                p.total()
            );
        }
    }

    #[test]
    fn test_scores_above_max_clamp_to_full_high() {
        let p = probability_distribution(150);
        assert_close(p.high, 100.0);
        assert_close(p.moderate, 0.0);
    }
}
