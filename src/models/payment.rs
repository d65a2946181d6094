//! Payment submission models

/// Result of one payment submission.
///
/// Every submission ends in exactly one of these; none of them is retried.
/// Only `Approved` has touched the wallet.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Local guard: amount exceeds the wallet. No scorer call was made.
    InsufficientFunds { requested: f64, available: f64 },
    /// Scorer flagged the payment
    Denied { probability_fraud: f64 },
    /// Scorer cleared the payment and the wallet was debited
    Approved { probability_fraud: f64, new_balance: f64 },
    /// Scorer unreachable
    ConnectionError(String),
    /// Scorer reachable but answered with a non-200 status
    ApiError { status: u16, body: String },
    /// Anything else that went wrong building the request or reading the answer
    UnexpectedError(String),
}

impl Outcome {
    /// Whether the scorer produced a decision it has persisted to its ledger
    pub fn reached_ledger(&self) -> bool {
        matches!(self, Outcome::Denied { .. } | Outcome::Approved { .. })
    }

    pub fn is_approved(&self) -> bool {
        matches!(self, Outcome::Approved { .. })
    }
}
