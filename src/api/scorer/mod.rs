pub mod client;
pub mod models;

#[cfg(test)]
pub mod mock;

pub use client::{FraudScorer, ScorerClient};
pub use models::{ApiError, HistoryRecord, Prediction, TransactionPayload};
