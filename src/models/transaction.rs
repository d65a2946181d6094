//! Transaction models

use chrono::{DateTime, Utc};

/// Seconds in two days; the scorer's `Time` feature wraps at this period
pub const TIME_PERIOD_SECONDS: f64 = 172_800.0;

/// Smallest payment the form accepts
pub const MIN_AMOUNT: f64 = 0.01;

/// Round a currency amount to whole cents
pub fn round_to_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// A payable amount: finite, whole cents, and at least [`MIN_AMOUNT`]
pub fn is_payable_amount(amount: f64) -> bool {
    amount.is_finite() && amount >= MIN_AMOUNT && round_to_cents(amount) == amount
}

/// One payment as entered on the form
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionRequest {
    pub amount: f64,
    pub merchant_name: String,
    /// Cosmetic only; never sent to the scorer
    pub cardholder_name: String,
    pub timestamp_seconds: f64,
}

impl TransactionRequest {
    pub fn new(
        amount: f64,
        merchant_name: impl Into<String>,
        cardholder_name: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            amount,
            merchant_name: merchant_name.into(),
            cardholder_name: cardholder_name.into(),
            timestamp_seconds: time_feature(now),
        }
    }
}

/// Unix time modulo two days, keeping the fractional part
pub fn time_feature(now: DateTime<Utc>) -> f64 {
    let unix = now.timestamp() as f64 + f64::from(now.timestamp_subsec_nanos()) / 1e9;
    unix.rem_euclid(TIME_PERIOD_SECONDS)
}
