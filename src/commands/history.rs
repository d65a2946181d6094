use std::time::Instant;

use crate::api::scorer::FraudScorer;
use crate::app::App;
use crate::services::history_service;

use super::CommandError;

pub async fn execute<S: FraudScorer>(app: &mut App<S>, args: &[&str]) -> Result<String, CommandError> {
    if args.first() == Some(&"help") {
        return Ok("📈 History Command\n\
                   Usage: `history` (aliases: `ledger`, `hist`)\n\
                   Lists every processed transaction, newest first. Results are cached \
                   briefly; use `refresh` to fetch again."
            .to_string());
    }

    let view = app.history(Instant::now()).await;
    Ok(history_service::render_history(&view))
}

pub async fn refresh<S: FraudScorer>(app: &mut App<S>, args: &[&str]) -> Result<String, CommandError> {
    if !args.is_empty() {
        return Err(CommandError::Usage("refresh"));
    }

    let view = app.refresh_history(Instant::now()).await;
    Ok(format!(
        "🔄 Refreshing history...\n{}",
        history_service::render_history(&view)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::scorer::mock::{record, MockScorer};
    use crate::config::Config;

    #[tokio::test]
    async fn test_history_lists_newest_first() {
        let scorer = MockScorer::new();
        scorer.set_history(Ok(vec![record(1, 10.0, 0, 0.02), record(2, 15_000.0, 1, 0.92)]));
        let mut app = App::new(scorer, &Config::default());

        let text = execute(&mut app, &[]).await.unwrap();
        let fraud_at = text.find("FRAUD").unwrap();
        let genuine_at = text.find("Genuine").unwrap();
        assert!(fraud_at < genuine_at);
    }

    #[tokio::test]
    async fn test_refresh_bypasses_cache() {
        let mut app = App::new(MockScorer::new(), &Config::default());
        execute(&mut app, &[]).await.unwrap();
        execute(&mut app, &[]).await.unwrap();
        assert_eq!(app.scorer.history_calls(), 1);

        let text = refresh(&mut app, &[]).await.unwrap();
        assert!(text.contains("No transaction history found"));
        assert_eq!(app.scorer.history_calls(), 2);
    }
}
