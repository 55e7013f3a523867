use chrono::{DateTime, Utc};

use super::rules::RecurringRule;
use crate::{
    currency::CurrencyCode,
    errors::{ForecastError, Result},
    ledger::{Account, AccountBalances, Balance, Balances},
};

/// Builds the synthetic account for `rule` with one balance per date.
pub fn build_account_balances(
    rule: &RecurringRule,
    dates: &[DateTime<Utc>],
) -> Result<AccountBalances> {
    let currency = CurrencyCode::parse(&rule.key.currency)?;
    let account = Account::unbounded(rule.key.name.clone(), currency)?;
    rule.generator.validate()?;

    let balances: Balances = dates
        .iter()
        .map(|date| Balance::new(*date, rule.generator.generate_amount(*date)))
        .collect();
    Ok(AccountBalances::new(account, balances))
}

/// Builds every rule in declaration order. The first failure aborts the batch.
pub fn build_all(rules: &[RecurringRule], dates: &[DateTime<Utc>]) -> Result<Vec<AccountBalances>> {
    rules
        .iter()
        .map(|rule| {
            build_account_balances(rule, dates)
                .map_err(|err| ForecastError::generation(rule.label(), err))
        })
        .collect()
}
