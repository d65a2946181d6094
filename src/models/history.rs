//! Ledger display models

/// A history record with the derived display columns filled in
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryRow {
    pub id: i64,
    pub amount: String,
    pub status: String,
    pub fraud_probability: String,
    pub time: String,
}

/// What the ledger screen shows: rows, plus a message when the fetch failed
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistoryView {
    pub rows: Vec<HistoryRow>,
    pub error: Option<String>,
}

impl HistoryView {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
