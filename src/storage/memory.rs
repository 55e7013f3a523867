use super::AccountSource;
use crate::{
    errors::{ForecastError, Result},
    ledger::{Account, AccountId, Balances},
};

/// Account source held entirely in memory, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    entries: Vec<(Account, Balances)>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an account, assigning one past the highest identifier in use
    /// when it has none.
    ///
    /// An account carrying an identifier that is already taken is rejected.
    pub fn insert(&mut self, account: Account, balances: Balances) -> Result<AccountId> {
        let id = match account.id() {
            Some(id) if self.contains(id) => {
                return Err(ForecastError::InvalidAccount(format!(
                    "identifier {id} is already used by another account"
                )))
            }
            Some(id) => id,
            None => {
                self.entries
                    .iter()
                    .filter_map(|(account, _)| account.id())
                    .max()
                    .unwrap_or(0)
                    + 1
            }
        };
        self.entries.push((account.with_id(id), balances));
        Ok(id)
    }

    fn contains(&self, id: AccountId) -> bool {
        self.entries
            .iter()
            .any(|(account, _)| account.id() == Some(id))
    }
}

impl AccountSource for MemorySource {
    fn select_accounts(&self) -> Result<Vec<Account>> {
        Ok(self.entries.iter().map(|(account, _)| account.clone()).collect())
    }

    fn select_account_balances(&self, id: AccountId) -> Result<Balances> {
        self.entries
            .iter()
            .find(|(account, _)| account.id() == Some(id))
            .map(|(_, balances)| balances.clone())
            .ok_or(ForecastError::AccountNotFound(id))
    }
}
