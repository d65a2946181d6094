//! Data models for the SecureBank simulator
//!
//! Session state plus the result structs that services hand back to commands.

pub mod balance;
pub mod history;
pub mod payment;
pub mod transaction;

pub use balance::{BalanceResult, Session};
pub use history::{HistoryRow, HistoryView};
pub use payment::Outcome;
pub use transaction::TransactionRequest;
