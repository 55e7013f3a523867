pub mod json_backend;
pub mod memory;

use crate::{
    errors::Result,
    ledger::{Account, AccountId, Balances},
};

/// Read-only access to real accounts and their balance series.
pub trait AccountSource: Send + Sync {
    /// Every stored account, in store order.
    fn select_accounts(&self) -> Result<Vec<Account>>;

    fn select_account_balances(&self, id: AccountId) -> Result<Balances>;
}

pub use json_backend::JsonStore;
pub use memory::MemorySource;
