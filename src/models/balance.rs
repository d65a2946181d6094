//! Wallet session models

use super::transaction::round_to_cents;

/// Wallet balance for the lifetime of one interactive session.
///
/// Only two things move the balance: an approved payment (`debit`) and an
/// explicit `reset`. Denied and failed submissions never reach it.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    initial_balance: f64,
    wallet_balance: f64,
}

impl Session {
    /// Balance the bank demo starts with
    pub const DEFAULT_INITIAL_BALANCE: f64 = 500_000.00;

    pub fn create(initial_balance: f64) -> Self {
        Self {
            initial_balance,
            wallet_balance: initial_balance,
        }
    }

    pub fn balance(&self) -> f64 {
        self.wallet_balance
    }

    pub fn initial_balance(&self) -> f64 {
        self.initial_balance
    }

    /// Restore the initial balance, whatever happened before
    pub fn reset(&mut self) -> f64 {
        self.wallet_balance = self.initial_balance;
        self.wallet_balance
    }

    pub fn can_afford(&self, amount: f64) -> bool {
        amount <= self.wallet_balance
    }

    /// Subtract an approved amount and return the new balance, rounded to cents
    pub fn debit(&mut self, amount: f64) -> f64 {
        self.wallet_balance = round_to_cents(self.wallet_balance - amount);
        self.wallet_balance
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::create(Self::DEFAULT_INITIAL_BALANCE)
    }
}

/// Balance snapshot for display
#[derive(Debug, Clone)]
pub struct BalanceResult {
    pub balance: String,
    pub initial_balance: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debit_subtracts_exactly_once() {
        let mut session = Session::default();
        assert_eq!(session.debit(100.00), 499_900.00);
        assert_eq!(session.balance(), 499_900.00);
    }

    #[test]
    fn test_debit_rounds_to_cents() {
        let mut session = Session::create(1.00);
        assert_eq!(session.debit(0.10), 0.90);
        assert_eq!(session.debit(0.20), 0.70);
    }

    #[test]
    fn test_reset_restores_initial_regardless_of_history() {
        let mut session = Session::create(250.0);
        session.debit(100.0);
        session.debit(149.5);
        assert_eq!(session.reset(), 250.0);

        let mut untouched = Session::create(250.0);
        assert_eq!(untouched.reset(), 250.0);
    }

    #[test]
    fn test_can_afford_allows_exact_balance() {
        let session = Session::create(500.0);
        assert!(session.can_afford(500.0));
        assert!(!session.can_afford(500.01));
    }
}
