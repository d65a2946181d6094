use chrono::Utc;

use crate::api::scorer::FraudScorer;
use crate::app::App;
use crate::models::transaction::{round_to_cents, MIN_AMOUNT};
use crate::models::TransactionRequest;
use crate::services::payment_service;

use super::CommandError;

pub const DEFAULT_CARDHOLDER: &str = "John M. Doe";

const USAGE: &str = "pay <amount> <merchant name> [--cardholder <name>]";

/// Parsed form fields of a payment
#[derive(Debug, PartialEq)]
pub struct PaymentForm {
    pub amount: f64,
    pub merchant: String,
    pub cardholder: String,
}

/// Accepts `1500`, `1,500.00` and `$1,500.00`, rounded to cents
pub fn parse_amount(raw: &str) -> Result<f64, CommandError> {
    let cleaned: String = raw.chars().filter(|c| *c != '$' && *c != ',').collect();
    let amount = cleaned
        .parse::<f64>()
        .map_err(|_| CommandError::InvalidAmount(raw.to_string()))?;

    if !amount.is_finite() {
        return Err(CommandError::InvalidAmount(raw.to_string()));
    }
    if amount <= 0.0 {
        return Err(CommandError::NonPositiveAmount);
    }

    let amount = round_to_cents(amount);
    if amount < MIN_AMOUNT {
        return Err(CommandError::BelowMinimumAmount);
    }
    Ok(amount)
}

pub fn parse_form(args: &[&str]) -> Result<PaymentForm, CommandError> {
    let (amount_arg, rest) = args.split_first().ok_or(CommandError::Usage(USAGE))?;
    let amount = parse_amount(amount_arg)?;

    let (merchant_words, cardholder_words) = match rest.iter().position(|a| *a == "--cardholder") {
        Some(i) => (&rest[..i], &rest[i + 1..]),
        None => (rest, &[][..]),
    };

    if merchant_words.is_empty() {
        return Err(CommandError::Usage(USAGE));
    }

    let cardholder = if cardholder_words.is_empty() {
        DEFAULT_CARDHOLDER.to_string()
    } else {
        cardholder_words.join(" ")
    };

    Ok(PaymentForm {
        amount,
        merchant: merchant_words.join(" "),
        cardholder,
    })
}

pub async fn execute<S: FraudScorer>(app: &mut App<S>, args: &[&str]) -> Result<String, CommandError> {
    if args.first() == Some(&"help") {
        return Ok(format!(
            "💳 Pay Command\nUsage: `{}` (aliases: `send`, `submit`)\n\
             Submits a mock card payment for real-time fraud analysis.\n\
             Example: `pay 199.99 Amazon Web Services --cardholder Jane Roe`",
            USAGE
        ));
    }

    let form = parse_form(args)?;
    let request = TransactionRequest::new(form.amount, form.merchant, form.cardholder, Utc::now());

    println!("⏳ Processing transaction... Contacting bank...");
    let outcome = app.submit(&request).await;

    Ok(payment_service::outcome_message(&outcome, app.scorer.base_url()))
}
