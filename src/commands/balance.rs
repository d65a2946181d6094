use crate::api::scorer::FraudScorer;
use crate::app::App;
use crate::services::balance_service;
use crate::utils::format_currency;

use super::CommandError;

pub fn execute<S: FraudScorer>(app: &mut App<S>, args: &[&str]) -> Result<String, CommandError> {
    if args.first() == Some(&"help") {
        return Ok("💰 Balance Command\n\
                   Usage: `balance` (aliases: `bal`, `wallet`)\n\
                   Shows the mock wallet balance for this session."
            .to_string());
    }

    let result = balance_service::get_balance(&app.session);
    Ok(balance_service::render_balance(&result))
}

pub fn reset<S: FraudScorer>(app: &mut App<S>, args: &[&str]) -> Result<String, CommandError> {
    if !args.is_empty() {
        return Err(CommandError::Usage("reset"));
    }

    let restored = app.reset_balance();
    Ok(format!("🔄 Wallet reset. Balance: {}", format_currency(restored)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::scorer::mock::MockScorer;
    use crate::config::Config;

    #[test]
    fn test_reset_rejects_arguments() {
        let mut app = App::new(MockScorer::new(), &Config::default());
        assert_eq!(reset(&mut app, &["now"]), Err(CommandError::Usage("reset")));
    }

    #[test]
    fn test_reset_restores_initial_balance() {
        let mut app = App::new(MockScorer::new(), &Config::default());
        app.session.debit(10.0);
        let text = reset(&mut app, &[]).unwrap();
        assert!(text.contains("$500,000.00"));
        assert_eq!(app.session.balance(), 500_000.0);
    }
}
