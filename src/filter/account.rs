use chrono::{DateTime, Utc};

use crate::{forecast::axis::DateAxis, ledger::Account};

/// Pure predicate over an account's lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountCondition {
    /// Opened at or before the instant. Accounts without an opened bound always qualify.
    Existed(DateTime<Utc>),
    /// Still open, or closed at or after the instant.
    NotClosedBefore(DateTime<Utc>),
    /// Every condition holds. Stops at the first one that fails.
    And(Vec<AccountCondition>),
}

impl AccountCondition {
    /// Keeps accounts that existed by the last axis date and were not closed
    /// before the first one.
    pub fn overlapping(axis: &DateAxis) -> Self {
        AccountCondition::And(vec![
            AccountCondition::Existed(axis.last()),
            AccountCondition::NotClosedBefore(axis.first()),
        ])
    }

    pub fn holds(&self, account: &Account) -> bool {
        match self {
            AccountCondition::Existed(at) => account.opened().map_or(true, |opened| opened <= *at),
            AccountCondition::NotClosedBefore(at) => {
                account.closed().map_or(true, |closed| closed >= *at)
            }
            AccountCondition::And(conditions) => {
                conditions.iter().all(|condition| condition.holds(account))
            }
        }
    }

    /// Stable filter: retained accounts keep their relative order.
    pub fn filter(&self, accounts: &[Account]) -> Vec<Account> {
        accounts
            .iter()
            .filter(|account| self.holds(account))
            .cloned()
            .collect()
    }
}
