use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Structured failure record produced by the contained conversion path.
///
/// `state` is always `"parsererror"`; `error` carries either the converter's
/// own error text or the "No conversion from X to Y" message when no
/// converter was available.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionFailure {
    pub state: String,
    pub error: String,
}

impl ConversionFailure {
    pub fn parser_error(error: impl Into<String>) -> Self {
        Self {
            state: "parsererror".to_string(),
            error: error.into(),
        }
    }
}

/// Result of one conversion step: the converted value, or a failure record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum ConvertOutcome {
    Converted { value: serde_json::Value },
    Failed { failure: ConversionFailure },
}

impl ConvertOutcome {
    pub fn converted(value: serde_json::Value) -> Self {
        Self::Converted { value }
    }

    pub fn failed(failure: ConversionFailure) -> Self {
        Self::Failed { failure }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

/// Outcome for one slot of the input batch, keyed by its original index.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotOutcome {
    pub index: usize,
    #[serde(flatten)]
    pub outcome: ConvertOutcome,
}

/// Summary of one batch run through a conversion chain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchReport {
    pub chain: Vec<String>,
    pub chain_fingerprint: i32,
    pub outcomes: Vec<SlotOutcome>,
    pub converted: usize,
    pub failed: usize,
    pub holes: usize,
    pub stopped_early: bool,
    pub completed_at: DateTime<Utc>,
}
