use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Balance;
use crate::{
    currency::CurrencyCode,
    errors::{ForecastError, Result},
};

/// Opaque identifier assigned by the account store.
pub type AccountId = u64;

/// Represents a financial account whose balances feed the forecast report.
///
/// Real accounts carry the identifier and opened instant assigned by the
/// store. Synthetic accounts built from recurring rules carry neither.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Account {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<AccountId>,
    name: String,
    currency: CurrencyCode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    opened: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    closed: Option<DateTime<Utc>>,
}

impl Account {
    /// Creates an open account that exists from `opened` onwards.
    pub fn new(
        name: impl Into<String>,
        currency: CurrencyCode,
        opened: DateTime<Utc>,
    ) -> Result<Self> {
        let account = Self {
            id: None,
            name: name.into(),
            currency,
            opened: Some(opened),
            closed: None,
        };
        account.validate()?;
        Ok(account)
    }

    /// Creates an account with no lifecycle bounds.
    pub fn unbounded(name: impl Into<String>, currency: CurrencyCode) -> Result<Self> {
        let account = Self {
            id: None,
            name: name.into(),
            currency,
            opened: None,
            closed: None,
        };
        account.validate()?;
        Ok(account)
    }

    pub fn with_id(mut self, id: AccountId) -> Self {
        self.id = Some(id);
        self
    }

    /// Marks the account closed at `at`. Closing before the opened instant is rejected.
    pub fn close(mut self, at: DateTime<Utc>) -> Result<Self> {
        self.closed = Some(at);
        self.validate()?;
        Ok(self)
    }

    pub fn id(&self) -> Option<AccountId> {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn currency(&self) -> &CurrencyCode {
        &self.currency
    }

    pub fn opened(&self) -> Option<DateTime<Utc>> {
        self.opened
    }

    pub fn closed(&self) -> Option<DateTime<Utc>> {
        self.closed
    }

    pub fn is_open(&self) -> bool {
        self.closed.is_none()
    }

    /// Checks the invariants that deserialisation cannot enforce on its own.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(ForecastError::InvalidAccount("name must not be empty".into()));
        }
        if let (Some(opened), Some(closed)) = (self.opened, self.closed) {
            if closed < opened {
                return Err(ForecastError::InvalidAccount(format!(
                    "account `{}` closed at {} before it was opened at {}",
                    self.name, closed, opened
                )));
            }
        }
        Ok(())
    }

    /// Rejects balances dated outside the account lifecycle.
    pub fn validate_balance(&self, balance: &Balance) -> Result<()> {
        let before_open = self.opened.is_some_and(|opened| balance.date < opened);
        let after_close = self.closed.is_some_and(|closed| balance.date > closed);
        if before_open || after_close {
            return Err(ForecastError::InvalidBalance(format!(
                "balance dated {} is outside the lifecycle of account `{}`",
                balance.date, self.name
            )));
        }
        Ok(())
    }
}
