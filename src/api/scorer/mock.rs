//! In-memory scorer for tests
//!
//! Returns canned answers and records every call so tests can assert on
//! call counts and on the exact payload that would have gone over the wire.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use super::client::FraudScorer;
use super::models::{ApiError, HistoryRecord, Prediction, TransactionPayload};

pub struct MockScorer {
    prediction: Mutex<Result<Prediction, ApiError>>,
    history: Mutex<Result<Vec<HistoryRecord>, ApiError>>,
    payloads: Mutex<Vec<TransactionPayload>>,
    predict_calls: AtomicUsize,
    history_calls: AtomicUsize,
}

impl MockScorer {
    pub fn new() -> Self {
        Self {
            prediction: Mutex::new(Ok(Prediction {
                is_fraud: 0,
                probability_fraud: 0.0,
            })),
            history: Mutex::new(Ok(Vec::new())),
            payloads: Mutex::new(Vec::new()),
            predict_calls: AtomicUsize::new(0),
            history_calls: AtomicUsize::new(0),
        }
    }

    pub fn answering(is_fraud: u8, probability_fraud: f64) -> Self {
        let scorer = Self::new();
        scorer.set_prediction(Ok(Prediction {
            is_fraud,
            probability_fraud,
        }));
        scorer
    }

    pub fn set_prediction(&self, result: Result<Prediction, ApiError>) {
        *self.prediction.lock().unwrap() = result;
    }

    pub fn set_history(&self, result: Result<Vec<HistoryRecord>, ApiError>) {
        *self.history.lock().unwrap() = result;
    }

    pub fn predict_calls(&self) -> usize {
        self.predict_calls.load(Ordering::SeqCst)
    }

    pub fn history_calls(&self) -> usize {
        self.history_calls.load(Ordering::SeqCst)
    }

    pub fn last_payload(&self) -> Option<TransactionPayload> {
        self.payloads.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl FraudScorer for MockScorer {
    async fn predict(&self, payload: &TransactionPayload) -> Result<Prediction, ApiError> {
        self.predict_calls.fetch_add(1, Ordering::SeqCst);
        self.payloads.lock().unwrap().push(payload.clone());
        self.prediction.lock().unwrap().clone()
    }

    async fn history(&self) -> Result<Vec<HistoryRecord>, ApiError> {
        self.history_calls.fetch_add(1, Ordering::SeqCst);
        self.history.lock().unwrap().clone()
    }

    fn base_url(&self) -> &str {
        "http://scorer.test"
    }
}

pub fn record(id: i64, amount: f64, is_fraud: u8, probability_fraud: f64) -> HistoryRecord {
    HistoryRecord {
        id,
        amount,
        is_fraud,
        probability_fraud,
        time: 406.0,
        extra: serde_json::Map::new(),
    }
}
