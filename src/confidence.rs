//! Confidence calculation
//!
//! Confidence counts how many of the six readings fall inside the reference
//! table of the assigned level. Each level owns a disjoint 10-point range:
//! low 90-100, moderate 80-90, high 70-80. It measures closeness of fit to a
//! table, not statistical certainty.

use crate::scorer::round_one_decimal;
use crate::types::{Parameter, Reading, StressLevel};

/// Bound of a reference range
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bound {
    Inclusive(f64),
    Exclusive(f64),
    Unbounded,
}

/// Reference range for one parameter
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceRange {
    pub min: Bound,
    pub max: Bound,
}

impl ReferenceRange {
    const fn closed(min: f64, max: f64) -> Self {
        Self {
            min: Bound::Inclusive(min),
            max: Bound::Inclusive(max),
        }
    }

    const fn half_open(min: f64, max: f64) -> Self {
        Self {
            min: Bound::Inclusive(min),
            max: Bound::Exclusive(max),
        }
    }

    const fn above(min: f64) -> Self {
        Self {
            min: Bound::Exclusive(min),
            max: Bound::Unbounded,
        }
    }

    const fn below(max: f64) -> Self {
        Self {
            min: Bound::Unbounded,
            max: Bound::Exclusive(max),
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        let above_min = match self.min {
            Bound::Inclusive(min) => value >= min,
            Bound::Exclusive(min) => value > min,
            Bound::Unbounded => true,
        };
        let below_max = match self.max {
            Bound::Inclusive(max) => value <= max,
            Bound::Exclusive(max) => value < max,
            Bound::Unbounded => true,
        };
        above_min && below_max
    }
}

/// Reference ranges in parameter order:
/// heart rate, skin conductance, sleep, blood oxygen, respiration, activity
const LOW_RANGES: [ReferenceRange; 6] = [
    ReferenceRange::closed(60.0, 100.0),
    ReferenceRange::closed(1.0, 20.0),
    ReferenceRange::closed(7.0, 9.0),
    ReferenceRange::closed(95.0, 100.0),
    ReferenceRange::closed(12.0, 20.0),
    ReferenceRange::closed(30.0, 60.0),
];

// Blood oxygen here is [94, 96) even though the penalty rule uses < 95.
// Both tables are kept as authored.
const MODERATE_RANGES: [ReferenceRange; 6] = [
    ReferenceRange::closed(80.0, 95.0),
    ReferenceRange::closed(12.0, 18.0),
    ReferenceRange::half_open(6.0, 7.0),
    ReferenceRange::half_open(94.0, 96.0),
    ReferenceRange::closed(16.0, 20.0),
    ReferenceRange::half_open(20.0, 30.0),
];

const HIGH_RANGES: [ReferenceRange; 6] = [
    ReferenceRange::above(100.0),
    ReferenceRange::above(20.0),
    ReferenceRange::below(6.0),
    ReferenceRange::below(95.0),
    ReferenceRange::above(20.0),
    ReferenceRange::below(20.0),
];

/// Reference table for a level
pub fn reference_ranges(level: StressLevel) -> &'static [ReferenceRange; 6] {
    match level {
        StressLevel::Low => &LOW_RANGES,
        StressLevel::Moderate => &MODERATE_RANGES,
        StressLevel::High => &HIGH_RANGES,
    }
}

/// Lowest confidence a level can report
pub fn base_confidence(level: StressLevel) -> f64 {
    match level {
        StressLevel::Low => 90.0,
        StressLevel::Moderate => 80.0,
        StressLevel::High => 70.0,
    }
}

/// Number of readings (0-6) inside the level's reference table
pub fn match_count(level: StressLevel, reading: &Reading) -> usize {
    reference_ranges(level)
        .iter()
        .zip(Parameter::ALL)
        .filter(|(range, parameter)| range.contains(reading.get(*parameter)))
        .count()
}

/// Confidence for the assigned level, rounded to one decimal
pub fn confidence(level: StressLevel, reading: &Reading) -> f64 {
    let matches = match_count(level, reading) as f64;
    let total = Parameter::ALL.len() as f64;
    round_one_decimal(base_confidence(level) + (matches / total) * 10.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_low_full_match() {
        let reading = Reading::new(68.0, 7.0, 8.5, 98.0, 13.0, 50.0);
        assert_eq!(match_count(StressLevel::Low, &reading), 6);
        assert_eq!(confidence(StressLevel::Low, &reading), 100.0);
    }

    #[test]
    fn test_low_partial_match() {
        // sleep 6 and activity 25 fall outside the low table
        let reading = Reading::new(88.0, 15.0, 6.0, 95.0, 18.0, 25.0);
        assert_eq!(match_count(StressLevel::Low, &reading), 4);
        assert_eq!(confidence(StressLevel::Low, &reading), 96.7);
    }

    #[test]
    fn test_moderate_half_open_bounds() {
        let inside = Reading::new(80.0, 12.0, 6.0, 94.0, 16.0, 20.0);
        assert_eq!(match_count(StressLevel::Moderate, &inside), 6);
        assert_eq!(confidence(StressLevel::Moderate, &inside), 90.0);

        // Upper bounds of sleep, blood oxygen and activity are exclusive
        let edge = Reading::new(95.0, 18.0, 7.0, 96.0, 20.0, 30.0);
        assert_eq!(match_count(StressLevel::Moderate, &edge), 3);
        assert_eq!(confidence(StressLevel::Moderate, &edge), 85.0);
    }

    #[test]
    fn test_high_strict_conditions() {
        let reading = Reading::new(110.0, 21.0, 5.0, 93.0, 22.0, 15.0);
        assert_eq!(match_count(StressLevel::High, &reading), 6);
        assert_eq!(confidence(StressLevel::High, &reading), 80.0);

        let edge = Reading::new(100.0, 20.0, 6.0, 95.0, 20.0, 20.0);
        assert_eq!(match_count(StressLevel::High, &edge), 0);
        assert_eq!(confidence(StressLevel::High, &edge), 70.0);
    }

    #[test]
    fn test_one_match_steps() {
        let reading = Reading::new(110.0, 0.0, 8.0, 99.0, 10.0, 100.0);
        assert_eq!(match_count(StressLevel::High, &reading), 1);
        assert_eq!(confidence(StressLevel::High, &reading), 71.7);
    }

    #[test]
    fn test_range_contains() {
        let range = ReferenceRange::half_open(94.0, 96.0);
        assert!(range.contains(94.0));
        assert!(range.contains(95.99));
        assert!(!range.contains(96.0));
        assert!(!range.contains(93.9));

        assert!(ReferenceRange::above(20.0).contains(20.01));
        assert!(!ReferenceRange::below(6.0).contains(6.0));
    }
}
