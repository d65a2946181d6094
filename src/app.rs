use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Instant;
use tracing::debug;

use crate::api::scorer::FraudScorer;
use crate::config::Config;
use crate::models::{HistoryView, Outcome, Session, TransactionRequest};
use crate::services::feature_service::TriggerSet;
use crate::services::history_service::{self, HistoryCache};
use crate::services::{balance_service, payment_service};

/// Everything one interactive session owns: the wallet, the ledger cache,
/// the random source for feature synthesis and the scorer it talks to.
pub struct App<S: FraudScorer> {
    pub scorer: S,
    pub session: Session,
    pub history: HistoryCache,
    pub triggers: TriggerSet,
    rng: StdRng,
}

impl<S: FraudScorer> App<S> {
    pub fn new(scorer: S, config: &Config) -> Self {
        let rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            scorer,
            session: Session::create(config.initial_balance),
            history: HistoryCache::new(config.history_ttl),
            triggers: config.triggers.clone(),
            rng,
        }
    }

    /// Submit a payment. The ledger cache is dropped whenever the scorer
    /// recorded a decision, so the next history view includes it.
    pub async fn submit(&mut self, request: &TransactionRequest) -> Outcome {
        let outcome = payment_service::evaluate_and_submit(
            &self.scorer,
            &mut self.rng,
            &self.triggers,
            &mut self.session,
            request,
        )
        .await;

        if outcome.reached_ledger() {
            self.history.invalidate();
        }
        debug!("Submission finished: {:?}", outcome);
        outcome
    }

    pub fn reset_balance(&mut self) -> f64 {
        balance_service::reset_balance(&mut self.session)
    }

    pub async fn history(&mut self, now: Instant) -> HistoryView {
        history_service::fetch_history(&mut self.history, &self.scorer, now).await
    }

    pub async fn refresh_history(&mut self, now: Instant) -> HistoryView {
        self.history.invalidate();
        self.history(now).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::scorer::mock::{record, MockScorer};
    use crate::api::scorer::ApiError;
    use chrono::Utc;

    fn app(scorer: MockScorer) -> App<MockScorer> {
        let config = Config {
            rng_seed: Some(42),
            ..Config::default()
        };
        App::new(scorer, &config)
    }

    fn request(amount: f64, merchant: &str) -> TransactionRequest {
        TransactionRequest::new(amount, merchant, "John M. Doe", Utc::now())
    }

    #[tokio::test]
    async fn test_approved_submission_invalidates_history() {
        let scorer = MockScorer::answering(0, 0.01);
        scorer.set_history(Ok(vec![record(1, 5.0, 0, 0.0)]));
        let mut app = app(scorer);
        let now = Instant::now();

        app.history(now).await;
        let outcome = app.submit(&request(100.0, "Coffee Shop")).await;
        assert!(outcome.is_approved());
        app.history(now).await;

        assert_eq!(app.scorer.history_calls(), 2);
        assert_eq!(app.session.balance(), 499_900.00);
    }

    #[tokio::test]
    async fn test_connection_error_keeps_history_cache() {
        let scorer = MockScorer::new();
        scorer.set_prediction(Err(ApiError::Connection("refused".to_string())));
        let mut app = app(scorer);
        let now = Instant::now();

        app.history(now).await;
        let outcome = app.submit(&request(100.0, "Coffee Shop")).await;
        assert!(matches!(outcome, Outcome::ConnectionError(_)));
        app.history(now).await;

        assert_eq!(app.scorer.history_calls(), 1);
        assert_eq!(app.session.balance(), 500_000.00);
    }

    #[tokio::test]
    async fn test_insufficient_funds_keeps_history_cache() {
        let mut app = app(MockScorer::answering(0, 0.0));
        let now = Instant::now();

        app.history(now).await;
        app.submit(&request(600_000.0, "Coffee Shop")).await;
        app.history(now).await;

        assert_eq!(app.scorer.history_calls(), 1);
        assert_eq!(app.scorer.predict_calls(), 0);
    }

    #[tokio::test]
    async fn test_refresh_always_refetches() {
        let mut app = app(MockScorer::new());
        let now = Instant::now();

        app.history(now).await;
        app.refresh_history(now).await;

        assert_eq!(app.scorer.history_calls(), 2);
    }

    #[tokio::test]
    async fn test_reset_after_spending() {
        let mut app = app(MockScorer::answering(0, 0.0));
        app.submit(&request(250_000.0, "Car Dealer")).await;
        assert_eq!(app.session.balance(), 250_000.0);
        assert_eq!(app.reset_balance(), 500_000.0);
    }
}
