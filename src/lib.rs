//! stress-detect - Deterministic stress level classification
//!
//! Six physiological readings (heart rate, skin conductance, sleep hours, blood
//! oxygen, respiration rate, physical activity) are classified through a
//! deterministic pipeline: penalty scoring → level assignment → probability
//! interpolation → confidence matching → recommendations.
//!
//! ## Modules
//!
//! - **Scorer**: `classify` and its four stages
//! - **Input**: validation of user-entered form text
//! - **Scenarios**: preset readings and the random scenario entry point
//! - **Pipeline / FFI**: JSON and C entry points for application shells

pub mod confidence;
pub mod encoder;
pub mod error;
pub mod input;
pub mod pipeline;
pub mod probability;
pub mod recommendations;
pub mod scenarios;
pub mod scorer;
pub mod types;

// FFI bindings for C interop (always available for cdylib/staticlib builds)
pub mod ffi;

pub use error::{DetectError, InputError};
pub use input::RawReading;
pub use pipeline::{assess_json, classify_json, presets_json, random_scenario_json, StressAnalyzer};
pub use scenarios::{random_scenario, ScenarioRun};
pub use scorer::classify;
pub use types::{ClassificationResult, Probabilities, Reading, StressLevel};

/// Library version embedded in all assessment payloads
pub const DETECT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Producer name for assessment payloads
pub const PRODUCER_NAME: &str = "stress-detect";
