//! Form input parsing
//!
//! Readings typically arrive as six text fields typed by the user. A
//! submission is rejected as a whole when any field is empty or not a finite
//! number; no partial result is ever computed.

use crate::error::InputError;
use crate::types::Reading;
use serde::{Deserialize, Serialize};

/// Raw, unvalidated text of the six form fields
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawReading {
    pub heart_rate: String,
    pub skin_conductance: String,
    pub sleep_hours: String,
    pub blood_oxygen: String,
    pub respiration_rate: String,
    pub physical_activity: String,
}

impl RawReading {
    /// Parse every field into a [`Reading`].
    pub fn parse(&self) -> Result<Reading, InputError> {
        Ok(Reading {
            heart_rate: parse_field(&self.heart_rate)?,
            skin_conductance: parse_field(&self.skin_conductance)?,
            sleep_hours: parse_field(&self.sleep_hours)?,
            blood_oxygen: parse_field(&self.blood_oxygen)?,
            respiration_rate: parse_field(&self.respiration_rate)?,
            physical_activity: parse_field(&self.physical_activity)?,
        })
    }

    /// Fill the form from an already-parsed reading
    pub fn from_reading(reading: &Reading) -> Self {
        Self {
            heart_rate: reading.heart_rate.to_string(),
            skin_conductance: reading.skin_conductance.to_string(),
            sleep_hours: reading.sleep_hours.to_string(),
            blood_oxygen: reading.blood_oxygen.to_string(),
            respiration_rate: reading.respiration_rate.to_string(),
            physical_activity: reading.physical_activity.to_string(),
        }
    }
}

fn parse_field(text: &str) -> Result<f64, InputError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(InputError::InvalidInput);
    }

    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(InputError::InvalidInput),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> RawReading {
        RawReading {
            heart_rate: "75".to_string(),
            skin_conductance: "9".to_string(),
            sleep_hours: " 7.5 ".to_string(),
            blood_oxygen: "98".to_string(),
            respiration_rate: "15".to_string(),
            physical_activity: "40".to_string(),
        }
    }

    #[test]
    fn test_parse_complete_form() {
        let reading = filled().parse().unwrap();
        assert_eq!(reading, Reading::new(75.0, 9.0, 7.5, 98.0, 15.0, 40.0));
    }

    #[test]
    fn test_empty_field_rejected() {
        let mut raw = filled();
        raw.blood_oxygen = "   ".to_string();
        assert_eq!(raw.parse(), Err(InputError::InvalidInput));
    }

    #[test]
    fn test_non_numeric_rejected() {
        for bad in ["abc", "12abc", "NaN", "inf", "-inf", "1,5"] {
            let mut raw = filled();
            raw.heart_rate = bad.to_string();
            assert_eq!(raw.parse(), Err(InputError::InvalidInput), "accepted {bad:?}");
        }
    }

    #[test]
    fn test_negative_values_accepted() {
        let mut raw = filled();
        raw.physical_activity = "-10".to_string();
        assert_eq!(raw.parse().unwrap().physical_activity, -10.0);
    }

    #[test]
    fn test_error_message_names_no_field() {
        let raw = RawReading::default();
        let err = raw.parse().unwrap_err();
        assert_eq!(err.to_string(), "Please fill in all fields with valid numbers");
    }

    #[test]
    fn test_from_reading_roundtrip() {
        let reading = Reading::new(110.0, 21.0, 5.0, 93.0, 22.0, 15.0);
        let raw = RawReading::from_reading(&reading);
        assert_eq!(raw.sleep_hours, "5");
        assert_eq!(raw.parse().unwrap(), reading);
    }

    #[test]
    fn test_missing_json_fields_default_to_empty() {
        let raw: RawReading = serde_json::from_str(r#"{"heartRate": "72"}"#).unwrap();
        assert_eq!(raw.heart_rate, "72");
        assert!(raw.skin_conductance.is_empty());
        assert!(raw.parse().is_err());
    }
}
