//! Pipeline orchestration
//!
//! This module provides the JSON-facing API of stress-detect. It ties reading
//! validation, classification and payload encoding together.

use crate::encoder::{to_json, AssessmentEncoder};
use crate::error::DetectError;
use crate::input::RawReading;
use crate::scenarios::{self, ScenarioRun};
use crate::scorer::classify;
use crate::types::{AssessmentOrigin, AssessmentPayload, ClassificationResult, Reading, StressLevel};

/// Classify a JSON reading and return the classification result as JSON.
///
/// # Example
/// ```ignore
/// let result = classify_json(r#"{"heartRate": 68, "skinConductance": 7,
///     "sleepHours": 8.5, "bloodOxygen": 98, "respirationRate": 13,
///     "physicalActivity": 50}"#.to_string())?;
/// ```
pub fn classify_json(reading_json: String) -> Result<String, DetectError> {
    let reading = parse_reading(&reading_json)?;
    let result = classify(&reading);
    to_json(&result)
}

/// Classify a JSON reading and return a full assessment payload as JSON.
pub fn assess_json(reading_json: String) -> Result<String, DetectError> {
    let reading = parse_reading(&reading_json)?;
    StressAnalyzer::new().assess_to_json(&reading)
}

/// Run a random preset scenario and return its assessment payload as JSON.
pub fn random_scenario_json() -> Result<String, DetectError> {
    StressAnalyzer::new().random_scenario_to_json()
}

/// All nine presets grouped by level, as JSON
pub fn presets_json() -> Result<String, DetectError> {
    to_json(&scenarios::catalog())
}

/// Parse and validate a JSON reading
pub fn parse_reading(reading_json: &str) -> Result<Reading, DetectError> {
    let reading: Reading = serde_json::from_str(reading_json)?;
    reading.validate()?;
    Ok(reading)
}

/// Analyzer that keeps one encoder identity across assessments.
///
/// Use this when several assessments should share a producer instance id.
pub struct StressAnalyzer {
    encoder: AssessmentEncoder,
}

impl Default for StressAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl StressAnalyzer {
    pub fn new() -> Self {
        Self {
            encoder: AssessmentEncoder::new(),
        }
    }

    /// Create an analyzer with a fixed producer instance id
    pub fn with_instance_id(instance_id: String) -> Self {
        Self {
            encoder: AssessmentEncoder::with_instance_id(instance_id),
        }
    }

    /// Classify a reading
    pub fn classify(&self, reading: &Reading) -> ClassificationResult {
        classify(reading)
    }

    /// Parse user-entered form text and classify it
    pub fn classify_form(&self, raw: &RawReading) -> Result<ClassificationResult, DetectError> {
        let reading = raw.parse()?;
        Ok(classify(&reading))
    }

    /// Classify a reading and wrap it into a manual assessment
    pub fn assess(&self, reading: &Reading) -> AssessmentPayload {
        let result = classify(reading);
        self.encoder
            .encode(AssessmentOrigin::Manual, reading, &result)
    }

    pub fn assess_to_json(&self, reading: &Reading) -> Result<String, DetectError> {
        let result = classify(reading);
        self.encoder
            .encode_to_json(AssessmentOrigin::Manual, reading, &result)
    }

    /// Wrap a preset run into an assessment
    pub fn assess_scenario(&self, run: &ScenarioRun) -> AssessmentPayload {
        self.encoder.encode(
            AssessmentOrigin::Preset {
                target_level: run.target_level,
            },
            &run.reading,
            &run.result,
        )
    }

    /// Run a random preset and wrap it into an assessment
    pub fn random_scenario(&self) -> AssessmentPayload {
        self.assess_scenario(&scenarios::random_scenario())
    }

    pub fn random_scenario_to_json(&self) -> Result<String, DetectError> {
        let run = scenarios::random_scenario();
        self.encoder.encode_to_json(
            AssessmentOrigin::Preset {
                target_level: run.target_level,
            },
            &run.reading,
            &run.result,
        )
    }

    /// Run a random preset of a fixed level
    pub fn scenario_for_level(&self, level: StressLevel) -> AssessmentPayload {
        let run = scenarios::scenario_for_level_with(level, &mut rand::thread_rng());
        self.assess_scenario(&run)
    }
}
