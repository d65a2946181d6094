//! Transaction ledger: cached fetch from the scorer plus display formatting

use std::time::{Duration, Instant};
use tracing::{debug, error, warn};

use crate::api::scorer::{ApiError, FraudScorer, HistoryRecord};
use crate::models::{HistoryRow, HistoryView};
use crate::utils::{format_currency, format_percent, Table};

pub const DEFAULT_HISTORY_TTL: Duration = Duration::from_secs(60);

pub const EMPTY_HISTORY_MESSAGE: &str =
    "No transaction history found. Submit a payment to see it appear here.";

/// Short-lived snapshot of GET /history/.
///
/// Staleness is checked passively on `get`; nothing expires in the background.
/// Failed fetches are not cached, so the next `get` tries again.
pub struct HistoryCache {
    ttl: Duration,
    snapshot: Option<(Vec<HistoryRecord>, Instant)>,
}

impl HistoryCache {
    pub fn new(ttl: Duration) -> Self {
        Self { ttl, snapshot: None }
    }

    /// Force the next `get` to hit the scorer
    pub fn invalidate(&mut self) {
        if self.snapshot.take().is_some() {
            debug!("History cache invalidated");
        }
    }

    fn fresh_snapshot(&self, now: Instant) -> Option<&Vec<HistoryRecord>> {
        match &self.snapshot {
            Some((records, fetched_at)) if now.saturating_duration_since(*fetched_at) < self.ttl => {
                Some(records)
            }
            _ => None,
        }
    }

    /// Return the cached snapshot, or fetch a new one when missing or stale
    pub async fn get<S: FraudScorer + ?Sized>(
        &mut self,
        scorer: &S,
        now: Instant,
    ) -> Result<Vec<HistoryRecord>, ApiError> {
        if let Some(records) = self.fresh_snapshot(now) {
            debug!("Serving {} history records from cache", records.len());
            return Ok(records.clone());
        }

        let records = scorer.history().await?;
        debug!("Fetched {} history records", records.len());
        self.snapshot = Some((records.clone(), now));
        Ok(records)
    }
}

impl Default for HistoryCache {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_TTL)
    }
}

/// Fetch the ledger for display. Failures degrade to an empty view with a message.
pub async fn fetch_history<S: FraudScorer + ?Sized>(
    cache: &mut HistoryCache,
    scorer: &S,
    now: Instant,
) -> HistoryView {
    match cache.get(scorer, now).await {
        Ok(records) => HistoryView {
            rows: build_rows(&records),
            error: None,
        },
        Err(e) => {
            let message = match &e {
                ApiError::Connection(_) => {
                    error!("History fetch could not reach {}", scorer.base_url());
                    format!(
                        "Connection Error: Could not connect to the API at {}.",
                        scorer.base_url()
                    )
                }
                ApiError::Http { status, .. } => {
                    warn!("History fetch returned {}", status);
                    format!("Failed to fetch history (Status: {})", status)
                }
                other => {
                    warn!("History fetch failed: {}", other);
                    format!("An error occurred: {}", other)
                }
            };
            HistoryView {
                rows: Vec::new(),
                error: Some(message),
            }
        }
    }
}

/// Derive display columns and sort newest first
pub fn build_rows(records: &[HistoryRecord]) -> Vec<HistoryRow> {
    let mut rows: Vec<HistoryRow> = records
        .iter()
        .map(|r| HistoryRow {
            id: r.id,
            amount: format_currency(r.amount),
            status: if r.is_fraud == 1 { "FRAUD 🚨" } else { "Genuine ✅" }.to_string(),
            fraud_probability: format_percent(r.probability_fraud),
            time: format!("{:.0}", r.time),
        })
        .collect();

    rows.sort_by(|a, b| b.id.cmp(&a.id));
    rows
}

/// Render the ledger screen as text
pub fn render_history(view: &HistoryView) -> String {
    let mut output = String::from("📈 Transaction Ledger\n");

    if let Some(error) = &view.error {
        output.push_str(&format!("❌ {}\n", error));
    }

    if view.is_empty() {
        output.push_str(EMPTY_HISTORY_MESSAGE);
        return output;
    }

    let mut table = Table::new(vec!["id", "Amount", "Status", "Fraud Probability", "Time"]);
    for row in &view.rows {
        let id = row.id.to_string();
        table.add_row(vec![
            id.as_str(),
            row.amount.as_str(),
            row.status.as_str(),
            row.fraud_probability.as_str(),
            row.time.as_str(),
        ]);
    }
    output.push_str(&table.render());
    output
}
