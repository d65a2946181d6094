use tracing::info;

use crate::models::{BalanceResult, Session};
use crate::utils::format_currency;

pub fn get_balance(session: &Session) -> BalanceResult {
    BalanceResult {
        balance: format_currency(session.balance()),
        initial_balance: format_currency(session.initial_balance()),
    }
}

/// Put the wallet back to its starting amount
pub fn reset_balance(session: &mut Session) -> f64 {
    let previous = session.balance();
    let restored = session.reset();
    info!("Wallet reset from {:.2} to {:.2}", previous, restored);
    restored
}

pub fn render_balance(result: &BalanceResult) -> String {
    format!(
        "🏦 Wallet Balance\nAvailable: {}\n(starting balance {})",
        result.balance, result.initial_balance
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_balance_returns_initial() {
        let mut session = Session::create(500_000.00);
        session.debit(1234.56);
        assert_eq!(reset_balance(&mut session), 500_000.00);
        assert_eq!(session.balance(), 500_000.00);
    }

    #[test]
    fn test_render_balance() {
        let mut session = Session::create(500_000.00);
        session.debit(100.0);
        let rendered = render_balance(&get_balance(&session));
        assert!(rendered.contains("$499,900.00"));
        assert!(rendered.contains("$500,000.00"));
    }
}
