//! Core types for stress-detect
//!
//! This module defines the data structures that flow through classification:
//! the input reading, the stress level bands, the classification result, and
//! the versioned assessment payload.

use crate::error::DetectError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One physiological parameter of a reading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Parameter {
    HeartRate,
    SkinConductance,
    SleepHours,
    BloodOxygen,
    RespirationRate,
    PhysicalActivity,
}

impl Parameter {
    /// All parameters in rule order
    pub const ALL: [Parameter; 6] = [
        Parameter::HeartRate,
        Parameter::SkinConductance,
        Parameter::SleepHours,
        Parameter::BloodOxygen,
        Parameter::RespirationRate,
        Parameter::PhysicalActivity,
    ];

    /// Field name as used in the JSON form
    pub fn as_str(&self) -> &'static str {
        match self {
            Parameter::HeartRate => "heartRate",
            Parameter::SkinConductance => "skinConductance",
            Parameter::SleepHours => "sleepHours",
            Parameter::BloodOxygen => "bloodOxygen",
            Parameter::RespirationRate => "respirationRate",
            Parameter::PhysicalActivity => "physicalActivity",
        }
    }

    /// Human-readable label with unit
    pub fn label(&self) -> &'static str {
        match self {
            Parameter::HeartRate => "Heart Rate (bpm)",
            Parameter::SkinConductance => "Skin Conductance (μS)",
            Parameter::SleepHours => "Sleep Hours",
            Parameter::BloodOxygen => "Blood Oxygen (%)",
            Parameter::RespirationRate => "Respiration Rate (breaths/min)",
            Parameter::PhysicalActivity => "Physical Activity (min/day)",
        }
    }
}

/// Six physiological readings describing one assessment
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reading {
    /// Heart rate (bpm)
    #[serde(alias = "heart_rate")]
    pub heart_rate: f64,
    /// Skin conductance (μS)
    #[serde(alias = "skin_conductance")]
    pub skin_conductance: f64,
    /// Sleep duration (hours)
    #[serde(alias = "sleep_hours")]
    pub sleep_hours: f64,
    /// Blood oxygen saturation (percentage, 0-100)
    #[serde(alias = "blood_oxygen")]
    pub blood_oxygen: f64,
    /// Respiration rate (breaths per minute)
    #[serde(alias = "respiration_rate")]
    pub respiration_rate: f64,
    /// Physical activity (minutes per day)
    #[serde(alias = "physical_activity")]
    pub physical_activity: f64,
}

impl Reading {
    pub fn new(
        heart_rate: f64,
        skin_conductance: f64,
        sleep_hours: f64,
        blood_oxygen: f64,
        respiration_rate: f64,
        physical_activity: f64,
    ) -> Self {
        Self {
            heart_rate,
            skin_conductance,
            sleep_hours,
            blood_oxygen,
            respiration_rate,
            physical_activity,
        }
    }

    /// Value of a single parameter
    pub fn get(&self, parameter: Parameter) -> f64 {
        match parameter {
            Parameter::HeartRate => self.heart_rate,
            Parameter::SkinConductance => self.skin_conductance,
            Parameter::SleepHours => self.sleep_hours,
            Parameter::BloodOxygen => self.blood_oxygen,
            Parameter::RespirationRate => self.respiration_rate,
            Parameter::PhysicalActivity => self.physical_activity,
        }
    }

    /// Reject readings with NaN or infinite fields.
    ///
    /// Readings built from parsed form text are always finite; this guards the
    /// JSON and FFI entry points.
    pub fn validate(&self) -> Result<(), DetectError> {
        for parameter in Parameter::ALL {
            if !self.get(parameter).is_finite() {
                return Err(DetectError::NonFiniteReading {
                    field: parameter.as_str(),
                });
            }
        }
        Ok(())
    }
}

/// Stress level band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StressLevel {
    Low,
    Moderate,
    High,
}

impl StressLevel {
    pub const ALL: [StressLevel; 3] = [StressLevel::Low, StressLevel::Moderate, StressLevel::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            StressLevel::Low => "low",
            StressLevel::Moderate => "moderate",
            StressLevel::High => "high",
        }
    }

    /// Display name used in result messages
    pub fn display_name(&self) -> &'static str {
        match self {
            StressLevel::Low => "Low Stress",
            StressLevel::Moderate => "Moderate Stress",
            StressLevel::High => "High Stress",
        }
    }
}

impl fmt::Display for StressLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StressLevel {
    type Err = DetectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(StressLevel::Low),
            "moderate" => Ok(StressLevel::Moderate),
            "high" => Ok(StressLevel::High),
            other => Err(DetectError::UnknownLevel(other.to_string())),
        }
    }
}

/// Probability distribution over the three levels (percent, one decimal)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Probabilities {
    pub low: f64,
    pub moderate: f64,
    pub high: f64,
}

impl Probabilities {
    pub fn total(&self) -> f64 {
        self.low + self.moderate + self.high
    }

    pub fn get(&self, level: StressLevel) -> f64 {
        match level {
            StressLevel::Low => self.low,
            StressLevel::Moderate => self.moderate,
            StressLevel::High => self.high,
        }
    }
}

/// Outcome of classifying one reading
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub level: StressLevel,
    /// Penalty sum (0-100)
    pub score: u32,
    /// Level-specific closeness of fit (70-100)
    pub confidence: f64,
    pub probabilities: Probabilities,
    /// Ordered, never empty
    pub recommendations: Vec<String>,
}

/// Penalty contributed by one parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PenaltyContribution {
    pub parameter: Parameter,
    pub points: u32,
}

/// Assessment producer metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentProducer {
    pub name: String,
    pub version: String,
    pub instance_id: String,
}

/// Where the reading of an assessment came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AssessmentOrigin {
    /// Entered by the user
    Manual,
    /// Picked from the preset scenarios
    Preset { target_level: StressLevel },
}

/// Complete assessment payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentPayload {
    pub version: String,
    pub producer: AssessmentProducer,
    pub computed_at_utc: String,
    pub origin: AssessmentOrigin,
    pub reading: Reading,
    pub result: ClassificationResult,
}
