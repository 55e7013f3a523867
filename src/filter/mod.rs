//! Composable predicates over accounts and balances.

pub mod account;
pub mod balance;

pub use account::AccountCondition;
pub use balance::BalanceCondition;
