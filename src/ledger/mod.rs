//! Account and balance models shared by the store, the filters and the report.

pub mod account;
pub mod balance;

pub use account::{Account, AccountId};
pub use balance::{Balance, Balances};

/// An account paired with its full balance series, real or synthetic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountBalances {
    pub account: Account,
    pub balances: Balances,
}

impl AccountBalances {
    pub fn new(account: Account, balances: Balances) -> Self {
        Self { account, balances }
    }

    pub fn name(&self) -> &str {
        self.account.name()
    }
}
