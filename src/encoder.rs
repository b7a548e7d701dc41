//! Assessment encoding
//!
//! This module wraps classification results into versioned assessment
//! payloads carrying producer and provenance metadata.

use crate::error::DetectError;
use crate::types::{
    AssessmentOrigin, AssessmentPayload, AssessmentProducer, ClassificationResult, Reading,
};
use crate::{DETECT_VERSION, PRODUCER_NAME};
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Current assessment payload schema version
pub const PAYLOAD_VERSION: &str = "1.0.0";

/// Encoder for producing assessment payloads
pub struct AssessmentEncoder {
    instance_id: String,
}

impl Default for AssessmentEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl AssessmentEncoder {
    /// Create a new encoder with a unique instance ID
    pub fn new() -> Self {
        Self {
            instance_id: Uuid::new_v4().to_string(),
        }
    }

    /// Create an encoder with a specific instance ID
    pub fn with_instance_id(instance_id: String) -> Self {
        Self { instance_id }
    }

    pub fn instance_id(&self) -> &str {
        &self.instance_id
    }

    /// Encode a classification into a payload stamped with the current time
    pub fn encode(
        &self,
        origin: AssessmentOrigin,
        reading: &Reading,
        result: &ClassificationResult,
    ) -> AssessmentPayload {
        self.encode_at(origin, reading, result, Utc::now())
    }

    /// Encode a classification with an explicit computation time
    pub fn encode_at(
        &self,
        origin: AssessmentOrigin,
        reading: &Reading,
        result: &ClassificationResult,
        computed_at: DateTime<Utc>,
    ) -> AssessmentPayload {
        AssessmentPayload {
            version: PAYLOAD_VERSION.to_string(),
            producer: AssessmentProducer {
                name: PRODUCER_NAME.to_string(),
                version: DETECT_VERSION.to_string(),
                instance_id: self.instance_id.clone(),
            },
            computed_at_utc: computed_at.to_rfc3339(),
            origin,
            reading: *reading,
            result: result.clone(),
        }
    }

    /// Encode to JSON string
    pub fn encode_to_json(
        &self,
        origin: AssessmentOrigin,
        reading: &Reading,
        result: &ClassificationResult,
    ) -> Result<String, DetectError> {
        let payload = self.encode(origin, reading, result);
        to_json_pretty(&payload)
    }
}

/// Serialize an output value, mapping failures to `EncodingError`
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, DetectError> {
    serde_json::to_string(value).map_err(|e| DetectError::EncodingError(e.to_string()))
}

/// Pretty-printed variant of [`to_json`]
pub fn to_json_pretty<T: Serialize + ?Sized>(value: &T) -> Result<String, DetectError> {
    serde_json::to_string_pretty(value).map_err(|e| DetectError::EncodingError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scorer::classify;
    use crate::types::StressLevel;
    use chrono::TimeZone;

    fn sample() -> (Reading, ClassificationResult) {
        let reading = Reading::new(92.0, 16.0, 6.5, 96.0, 19.0, 22.0);
        let result = classify(&reading);
        (reading, result)
    }

    #[test]
    fn test_encode_payload_fields() {
        let encoder = AssessmentEncoder::with_instance_id("test-instance".to_string());
        let (reading, result) = sample();
        let computed_at = Utc.with_ymd_and_hms(2024, 1, 15, 14, 0, 0).unwrap();

        let payload = encoder.encode_at(AssessmentOrigin::Manual, &reading, &result, computed_at);

        assert_eq!(payload.version, PAYLOAD_VERSION);
        assert_eq!(payload.producer.name, PRODUCER_NAME);
        assert_eq!(payload.producer.instance_id, "test-instance");
        assert_eq!(payload.computed_at_utc, "2024-01-15T14:00:00+00:00");
        assert_eq!(payload.result.score, 35);
        assert_eq!(payload.result.level, StressLevel::Moderate);
    }

    #[test]
    fn test_encode_to_json() {
        let encoder = AssessmentEncoder::new();
        let (reading, result) = sample();

        let json = encoder
            .encode_to_json(
                AssessmentOrigin::Preset {
                    target_level: StressLevel::Moderate,
                },
                &reading,
                &result,
            )
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["origin"]["kind"], "preset");
        assert_eq!(value["reading"]["heartRate"], 92.0);
        assert_eq!(value["result"]["level"], "moderate");
        assert!(value["producer"]["instance_id"].as_str().unwrap().len() == 36);
    }

    struct Unserializable;

    impl Serialize for Unserializable {
        fn serialize<S: serde::Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
            Err(serde::ser::Error::custom("cannot serialize"))
        }
    }

    #[test]
    fn test_serialization_failure_is_encoding_error() {
        match to_json(&Unserializable) {
            Err(DetectError::EncodingError(msg)) => assert!(msg.contains("cannot serialize")),
            other => panic!("unexpected: {other:?}"),
        }
        assert!(matches!(
            to_json_pretty(&Unserializable),
            Err(DetectError::EncodingError(_))
        ));
    }

    #[test]
    fn test_instance_ids_are_unique() {
        let a = AssessmentEncoder::new();
        let b = AssessmentEncoder::new();
        assert_ne!(a.instance_id(), b.instance_id());
    }
}
