//! Preset scenarios
//!
//! Nine fixed readings, three per targeted level, used for demonstrations and
//! self-tests. A random scenario picks a level uniformly, then a preset
//! uniformly within that level, and classifies it with [`classify`].
//!
//! The targeted level is what the preset was authored for; the classified
//! level comes from the scorer and can differ.

use crate::scorer::classify;
use crate::types::{ClassificationResult, Reading, StressLevel};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

const LOW_PRESETS: [Reading; 3] = [
    reading(68.0, 7.0, 8.5, 98.0, 13.0, 50.0),
    reading(72.0, 8.0, 8.0, 97.0, 14.0, 45.0),
    reading(75.0, 9.0, 7.5, 98.0, 15.0, 40.0),
];

const MODERATE_PRESETS: [Reading; 3] = [
    reading(85.0, 14.0, 6.5, 96.0, 17.0, 28.0),
    reading(88.0, 15.0, 6.0, 95.0, 18.0, 25.0),
    reading(92.0, 16.0, 6.5, 96.0, 19.0, 22.0),
];

const HIGH_PRESETS: [Reading; 3] = [
    reading(105.0, 20.0, 5.5, 94.0, 21.0, 18.0),
    reading(110.0, 21.0, 5.0, 93.0, 22.0, 15.0),
    reading(115.0, 23.0, 4.5, 92.0, 24.0, 12.0),
];

const fn reading(
    heart_rate: f64,
    skin_conductance: f64,
    sleep_hours: f64,
    blood_oxygen: f64,
    respiration_rate: f64,
    physical_activity: f64,
) -> Reading {
    Reading {
        heart_rate,
        skin_conductance,
        sleep_hours,
        blood_oxygen,
        respiration_rate,
        physical_activity,
    }
}

/// Presets authored for a level
pub fn presets(level: StressLevel) -> &'static [Reading] {
    match level {
        StressLevel::Low => &LOW_PRESETS,
        StressLevel::Moderate => &MODERATE_PRESETS,
        StressLevel::High => &HIGH_PRESETS,
    }
}

/// All presets grouped by targeted level
#[derive(Debug, Clone, Serialize)]
pub struct PresetCatalog {
    pub low: Vec<Reading>,
    pub moderate: Vec<Reading>,
    pub high: Vec<Reading>,
}

/// Every preset, grouped by level
pub fn catalog() -> PresetCatalog {
    PresetCatalog {
        low: LOW_PRESETS.to_vec(),
        moderate: MODERATE_PRESETS.to_vec(),
        high: HIGH_PRESETS.to_vec(),
    }
}

/// Outcome of a preset run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioRun {
    /// Level the preset was authored for
    pub target_level: StressLevel,
    pub reading: Reading,
    pub result: ClassificationResult,
}

impl ScenarioRun {
    /// User-facing summary line
    pub fn message(&self) -> String {
        format!(
            "Random {} scenario analyzed with preset health data",
            self.target_level.display_name()
        )
    }
}

/// Pick a preset with the given RNG and classify it.
pub fn random_scenario_with<R: Rng + ?Sized>(rng: &mut R) -> ScenarioRun {
    let target_level = *StressLevel::ALL
        .choose(rng)
        .unwrap_or(&StressLevel::Low);
    scenario_for_level_with(target_level, rng)
}

/// Pick a preset of a fixed level with the given RNG and classify it.
pub fn scenario_for_level_with<R: Rng + ?Sized>(level: StressLevel, rng: &mut R) -> ScenarioRun {
    let candidates = presets(level);
    let reading = *candidates.choose(rng).unwrap_or(&candidates[0]);

    log::info!("selected {} preset: {:?}", level, reading);

    ScenarioRun {
        target_level: level,
        reading,
        result: classify(&reading),
    }
}

/// Pick and classify a random preset using the thread-local RNG
pub fn random_scenario() -> ScenarioRun {
    random_scenario_with(&mut rand::thread_rng())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_nine_presets() {
        let catalog = catalog();
        assert_eq!(catalog.low.len(), 3);
        assert_eq!(catalog.moderate.len(), 3);
        assert_eq!(catalog.high.len(), 3);
    }

    #[test]
    fn test_low_and_high_presets_classify_as_targeted() {
        for reading in presets(StressLevel::Low) {
            assert_eq!(classify(reading).level, StressLevel::Low);
        }
        for reading in presets(StressLevel::High) {
            assert_eq!(classify(reading).level, StressLevel::High);
        }
    }

    #[test]
    fn test_moderate_presets_can_classify_low() {
        let levels: Vec<StressLevel> = presets(StressLevel::Moderate)
            .iter()
            .map(|r| classify(r).level)
            .collect();

        // Only sleep < 7 fires for the first two; the third adds hr and sc
        assert_eq!(
            levels,
            vec![StressLevel::Low, StressLevel::Low, StressLevel::Moderate]
        );
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let a = random_scenario_with(&mut StdRng::seed_from_u64(7));
        let b = random_scenario_with(&mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }

    #[test]
    fn test_random_run_uses_a_preset_of_its_level() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let run = random_scenario_with(&mut rng);
            assert!(presets(run.target_level).contains(&run.reading));
            assert_eq!(run.result, classify(&run.reading));
        }
    }

    #[test]
    fn test_random_runs_reach_every_level() {
        let mut rng = StdRng::seed_from_u64(1);
        let targets: HashSet<StressLevel> = (0..200)
            .map(|_| random_scenario_with(&mut rng).target_level)
            .collect();
        assert_eq!(targets.len(), 3);
    }

    #[test]
    fn test_forced_level() {
        let mut rng = StdRng::seed_from_u64(3);
        let run = scenario_for_level_with(StressLevel::High, &mut rng);
        assert_eq!(run.target_level, StressLevel::High);
        assert_eq!(
            run.message(),
            "Random High Stress scenario analyzed with preset health data"
        );
    }

    #[test]
    fn test_thread_rng_entry_point() {
        let run = random_scenario();
        assert!(presets(run.target_level).contains(&run.reading));
    }
}
