//! Runtime configuration
//!
//! Read from the process environment after `.env` has been loaded. Every
//! setting has a default so the simulator runs with no environment at all.

use std::collections::HashMap;
use std::time::Duration;
use thiserror::Error;

use crate::api::scorer::ScorerClient;
use crate::models::Session;
use crate::services::feature_service::{TriggerSet, DEFAULT_TRIGGER_AMOUNTS, DEFAULT_TRIGGER_MERCHANTS};
use crate::services::history_service::DEFAULT_HISTORY_TTL;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{var} must be a number, got '{value}'")]
    InvalidNumber { var: &'static str, value: String },

    #[error("{var} must be a non-negative finite amount, got {value}")]
    InvalidAmount { var: &'static str, value: f64 },

    #[error("{var} must not be empty")]
    Empty { var: &'static str },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub api_url: String,
    pub initial_balance: f64,
    pub triggers: TriggerSet,
    pub history_ttl: Duration,
    pub rng_seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: ScorerClient::DEFAULT_BASE_URL.to_string(),
            initial_balance: Session::DEFAULT_INITIAL_BALANCE,
            triggers: TriggerSet::default(),
            history_ttl: DEFAULT_HISTORY_TTL,
            rng_seed: None,
        }
    }
}

impl Config {
    /// Load from the real process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(&std::env::vars().collect())
    }

    /// Load from an explicit variable map
    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let mut config = Config::default();
        let get = |key| lookup(vars, key);

        if let Some(url) = get("SCORER_API_URL") {
            config.api_url = url.trim_end_matches('/').to_string();
            if config.api_url.is_empty() {
                return Err(ConfigError::Empty { var: "SCORER_API_URL" });
            }
        }

        if let Some(raw) = get("INITIAL_BALANCE") {
            let value = parse_f64("INITIAL_BALANCE", raw)?;
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidAmount {
                    var: "INITIAL_BALANCE",
                    value,
                });
            }
            config.initial_balance = value;
        }

        let merchants = get("TRIGGER_MERCHANTS").map(split_list);
        let amounts = match get("TRIGGER_AMOUNTS") {
            Some(raw) => Some(
                split_list(raw)
                    .iter()
                    .map(|a| parse_f64("TRIGGER_AMOUNTS", a))
                    .collect::<Result<Vec<f64>, _>>()?,
            ),
            None => None,
        };
        if merchants.is_some() || amounts.is_some() {
            config.triggers = TriggerSet::new(
                merchants.unwrap_or_else(|| DEFAULT_TRIGGER_MERCHANTS.iter().map(|m| m.to_string()).collect()),
                &amounts.unwrap_or_else(|| DEFAULT_TRIGGER_AMOUNTS.to_vec()),
            );
        }

        if let Some(raw) = get("HISTORY_CACHE_TTL_SECS") {
            let secs = raw.parse::<u64>().map_err(|_| ConfigError::InvalidNumber {
                var: "HISTORY_CACHE_TTL_SECS",
                value: raw.to_string(),
            })?;
            config.history_ttl = Duration::from_secs(secs);
        }

        if let Some(raw) = get("RNG_SEED") {
            config.rng_seed = Some(raw.parse::<u64>().map_err(|_| ConfigError::InvalidNumber {
                var: "RNG_SEED",
                value: raw.to_string(),
            })?);
        }

        Ok(config)
    }
}

/// Trimmed value of a variable, treating blank as unset
fn lookup<'a>(vars: &'a HashMap<String, String>, key: &str) -> Option<&'a str> {
    vars.get(key).map(|v| v.trim()).filter(|v| !v.is_empty())
}

fn parse_f64(var: &'static str, raw: &str) -> Result<f64, ConfigError> {
    raw.parse::<f64>().map_err(|_| ConfigError::InvalidNumber {
        var,
        value: raw.to_string(),
    })
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .collect()
}
