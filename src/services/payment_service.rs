use rand::Rng;
use tracing::{error, info, warn};

use crate::api::scorer::{ApiError, FraudScorer, TransactionPayload};
use crate::models::transaction::{is_payable_amount, MIN_AMOUNT};
use crate::models::{Outcome, Session, TransactionRequest};
use crate::services::feature_service::{synthesize_features, TriggerSet};
use crate::utils::{format_currency, format_percent};

/// Evaluate one payment against the wallet and the remote scorer.
///
/// Order matters: the funds check short-circuits before any randomness is
/// drawn or any request is made. A trigger hit only changes which features
/// are synthesized; whether the payment is denied is up to the scorer.
pub async fn evaluate_and_submit<S, R>(
    scorer: &S,
    rng: &mut R,
    triggers: &TriggerSet,
    session: &mut Session,
    request: &TransactionRequest,
) -> Outcome
where
    S: FraudScorer + ?Sized,
    R: Rng + ?Sized,
{
    if !is_payable_amount(request.amount) {
        return Outcome::UnexpectedError(format!(
            "Amount must be whole cents of at least {:.2}, got {}",
            MIN_AMOUNT, request.amount
        ));
    }

    if !session.can_afford(request.amount) {
        info!(
            "Insufficient funds: requested {:.2}, available {:.2}",
            request.amount,
            session.balance()
        );
        return Outcome::InsufficientFunds {
            requested: request.amount,
            available: session.balance(),
        };
    }

    let is_secret_fraud = triggers.matches(&request.merchant_name, request.amount);
    let payload = TransactionPayload {
        time: request.timestamp_seconds,
        amount: request.amount,
        features: synthesize_features(is_secret_fraud, rng),
    };

    let prediction = match scorer.predict(&payload).await {
        Ok(prediction) => prediction,
        Err(ApiError::Connection(detail)) => {
            error!("Could not reach scorer at {}: {}", scorer.base_url(), detail);
            return Outcome::ConnectionError(detail);
        }
        Err(ApiError::Http { status, body }) => {
            warn!("Scorer rejected submission with status {}", status);
            return Outcome::ApiError { status, body };
        }
        Err(e) => {
            warn!("Submission failed: {}", e);
            return Outcome::UnexpectedError(e.to_string());
        }
    };

    if prediction.is_fraud() {
        warn!(
            "Transaction denied (probability {:.4})",
            prediction.probability_fraud
        );
        return Outcome::Denied {
            probability_fraud: prediction.probability_fraud,
        };
    }

    let new_balance = session.debit(request.amount);
    info!(
        "Transaction approved: debited {:.2}, balance now {:.2}",
        request.amount, new_balance
    );
    Outcome::Approved {
        probability_fraud: prediction.probability_fraud,
        new_balance,
    }
}

/// User-facing text for an outcome
pub fn outcome_message(outcome: &Outcome, api_url: &str) -> String {
    match outcome {
        Outcome::InsufficientFunds {
            requested,
            available,
        } => format!(
            "❌ Insufficient funds\n\nAmount: {}\nAvailable: {}",
            format_currency(*requested),
            format_currency(*available)
        ),
        Outcome::Denied { probability_fraud } => format!(
            "🚨 Transaction DENIED: High Fraud Risk! (Probability: {})\n\
             This transaction has been flagged and saved to the ledger for review.",
            format_percent(*probability_fraud)
        ),
        Outcome::Approved {
            probability_fraud,
            new_balance,
        } => format!(
            "✅ Transaction Approved (Fraud Probability: {})\nNew balance: {}",
            format_percent(*probability_fraud),
            format_currency(*new_balance)
        ),
        Outcome::ConnectionError(_) => format!(
            "⚠️ Connection Error: Could not connect to the API at {}.",
            api_url
        ),
        Outcome::ApiError { status, body } => {
            format!("❌ Error from API ({}): {}", status, body)
        }
        Outcome::UnexpectedError(detail) => {
            format!("❌ An error occurred during submission: {}", detail)
        }
    }
}
