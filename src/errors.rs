use thiserror::Error;

use crate::ledger::AccountId;

pub type Result<T> = std::result::Result<T, ForecastError>;

/// Error type that captures every failure of a forecast run.
#[derive(Debug, Error)]
pub enum ForecastError {
    #[error("date range yielded no dates")]
    EmptyRange,
    #[error("date offset of {0} days from the reference is out of range")]
    DateOutOfRange(i64),
    #[error("amount overflow: {0}")]
    AmountOverflow(String),
    #[error("invalid currency code `{0}`")]
    InvalidCurrency(String),
    #[error("invalid account: {0}")]
    InvalidAccount(String),
    #[error("invalid balance: {0}")]
    InvalidBalance(String),
    #[error("invalid rule: {0}")]
    InvalidRule(String),
    #[error("account not found: {0}")]
    AccountNotFound(AccountId),
    #[error("source unavailable while {context}: {source}")]
    SourceUnavailable {
        context: String,
        #[source]
        source: Box<ForecastError>,
    },
    #[error("generating account balances for rule `{rule}`: {source}")]
    Generation {
        rule: String,
        #[source]
        source: Box<ForecastError>,
    },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Writing separated values: {0}")]
    Csv(#[from] csv::Error),
}

impl ForecastError {
    pub fn source_unavailable(context: impl Into<String>, source: ForecastError) -> Self {
        ForecastError::SourceUnavailable {
            context: context.into(),
            source: Box::new(source),
        }
    }

    pub fn generation(rule: impl Into<String>, source: ForecastError) -> Self {
        ForecastError::Generation {
            rule: rule.into(),
            source: Box::new(source),
        }
    }
}
