pub mod balance;
pub mod help;
pub mod history;
pub mod pay;

use thiserror::Error;
use tracing::warn;

use crate::api::scorer::FraudScorer;
use crate::app::App;

#[derive(Debug, Error, PartialEq)]
pub enum CommandError {
    #[error("Unknown command '{0}'. Type `help` for the list of commands.")]
    UnknownCommand(String),

    #[error("Usage: {0}")]
    Usage(&'static str),

    #[error("'{0}' is not a valid amount")]
    InvalidAmount(String),

    #[error("Amount must be greater than zero")]
    NonPositiveAmount,

    #[error("Amount must be at least $0.01")]
    BelowMinimumAmount,
}

/// What the session loop should do after a line of input
#[derive(Debug, PartialEq)]
pub enum Reply {
    Output(String),
    Quit,
    Nothing,
}

/// Parse and run one line of user input
pub async fn handle_line<S: FraudScorer>(app: &mut App<S>, line: &str) -> Reply {
    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.is_empty() {
        return Reply::Nothing;
    }

    let command = parts[0].to_lowercase();
    let args = &parts[1..];

    let result = match command.as_str() {
        "balance" | "bal" | "wallet" => balance::execute(app, args),
        "reset" => balance::reset(app, args),
        "pay" | "send" | "submit" => pay::execute(app, args).await,
        "history" | "ledger" | "hist" => history::execute(app, args).await,
        "refresh" => history::refresh(app, args).await,
        "help" | "?" => Ok(help::execute(args)),
        "quit" | "exit" => return Reply::Quit,
        _ => Err(CommandError::UnknownCommand(parts[0].to_string())),
    };

    match result {
        Ok(output) => Reply::Output(output),
        Err(e) => {
            warn!("Command {} failed: {}", command, e);
            Reply::Output(format!("❌ {}", e))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::scorer::mock::MockScorer;
    use crate::config::Config;

    fn app() -> App<MockScorer> {
        let config = Config {
            rng_seed: Some(1),
            ..Config::default()
        };
        App::new(MockScorer::answering(0, 0.01), &config)
    }

    #[tokio::test]
    async fn test_blank_and_quit() {
        let mut app = app();
        assert_eq!(handle_line(&mut app, "   ").await, Reply::Nothing);
        assert_eq!(handle_line(&mut app, "quit").await, Reply::Quit);
        assert_eq!(handle_line(&mut app, "EXIT").await, Reply::Quit);
    }

    #[tokio::test]
    async fn test_unknown_command_is_reported() {
        let mut app = app();
        match handle_line(&mut app, "withdraw 10").await {
            Reply::Output(text) => assert!(text.contains("Unknown command 'withdraw'")),
            other => panic!("unexpected reply {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_aliases_route_to_same_command() {
        let mut app = app();
        let a = handle_line(&mut app, "balance").await;
        let b = handle_line(&mut app, "bal").await;
        assert_eq!(a, b);
    }

    #[tokio::test]
    async fn test_pay_then_balance() {
        let mut app = app();
        handle_line(&mut app, "pay 100 Coffee Shop").await;
        match handle_line(&mut app, "wallet").await {
            Reply::Output(text) => assert!(text.contains("$499,900.00")),
            other => panic!("unexpected reply {:?}", other),
        }
    }
}
