use serde::de::{self, Deserializer};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::services::feature_service::{FeatureVector, FEATURE_COUNT};

/// Request body for POST /predict/
///
/// Serialized as a flat object: `Time`, `Amount`, then `V1` through `V28`.
/// Merchant and cardholder never leave the process.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionPayload {
    pub time: f64,
    pub amount: f64,
    pub features: FeatureVector,
}

impl Serialize for TransactionPayload {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(FEATURE_COUNT + 2))?;
        map.serialize_entry("Time", &self.time)?;
        map.serialize_entry("Amount", &self.amount)?;
        for (i, value) in self.features.values().iter().enumerate() {
            map.serialize_entry(&format!("V{}", i + 1), value)?;
        }
        map.end()
    }
}

/// Response from POST /predict/
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    #[serde(deserialize_with = "flag_from_int_or_bool")]
    pub is_fraud: u8,
    pub probability_fraud: f64,
}

impl Prediction {
    pub fn is_fraud(&self) -> bool {
        self.is_fraud == 1
    }
}

/// One row of GET /history/
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub id: i64,
    #[serde(rename = "Amount")]
    pub amount: f64,
    #[serde(deserialize_with = "flag_from_int_or_bool")]
    pub is_fraud: u8,
    pub probability_fraud: f64,
    #[serde(rename = "Time")]
    pub time: f64,
    /// Everything else the backend persisted (V1..V28 and friends)
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// The scorer emits 0/1, but some deployments serialize the flag as a bool.
fn flag_from_int_or_bool<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u8, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Int(i64),
        Bool(bool),
    }

    match Flag::deserialize(deserializer)? {
        Flag::Bool(b) => Ok(b as u8),
        Flag::Int(0) => Ok(0),
        Flag::Int(1) => Ok(1),
        Flag::Int(other) => Err(de::Error::custom(format!(
            "is_fraud must be 0 or 1, got {}",
            other
        ))),
    }
}

/// Error type for scorer API operations
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    /// Transport could not reach the scorer (refused, DNS, timeout)
    #[error("Connection Error: {0}")]
    Connection(String),
    /// Scorer answered with a non-200 status
    #[error("HTTP Error ({status}): {body}")]
    Http { status: u16, body: String },
    /// Request could not be built or sent for a reason other than connectivity
    #[error("Request Error: {0}")]
    Request(String),
    /// Response body did not match the expected shape
    #[error("Deserialization Error: {0}")]
    Deserialization(String),
}
