use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{ForecastError, Result};

/// A dated amount in minor currency units. Currency comes from the owning account.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Balance {
    pub date: DateTime<Utc>,
    pub amount: i64,
}

impl Balance {
    pub fn new(date: DateTime<Utc>, amount: i64) -> Self {
        Self { date, amount }
    }
}

/// Ordered balance series for a single account. Duplicate dates are kept.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct Balances(Vec<Balance>);

impl Balances {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, balance: Balance) {
        self.0.push(balance);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Balance> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Balance] {
        &self.0
    }

    /// Adds up every amount in the series. An empty series sums to zero.
    pub fn sum(&self) -> Result<i64> {
        self.0.iter().try_fold(0i64, |acc, balance| {
            acc.checked_add(balance.amount).ok_or_else(|| {
                ForecastError::AmountOverflow(format!(
                    "balance of {} on {} does not fit the running sum",
                    balance.amount, balance.date
                ))
            })
        })
    }
}

impl From<Vec<Balance>> for Balances {
    fn from(balances: Vec<Balance>) -> Self {
        Self(balances)
    }
}

impl FromIterator<Balance> for Balances {
    fn from_iter<I: IntoIterator<Item = Balance>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Balances {
    type Item = Balance;
    type IntoIter = std::vec::IntoIter<Balance>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Balances {
    type Item = &'a Balance;
    type IntoIter = std::slice::Iter<'a, Balance>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn sum_of_empty_series_is_zero() {
        assert_eq!(Balances::new().sum().unwrap(), 0);
    }

    #[test]
    fn sum_keeps_duplicate_dates() {
        let date = Utc.with_ymd_and_hms(2024, 2, 29, 12, 0, 0).unwrap();
        let balances: Balances = vec![Balance::new(date, -1500), Balance::new(date, -1500)].into();
        assert_eq!(balances.len(), 2);
        assert_eq!(balances.sum().unwrap(), -3000);
    }

    #[test]
    fn sum_past_i64_is_an_error() {
        let date = Utc.with_ymd_and_hms(2024, 2, 29, 12, 0, 0).unwrap();
        let balances: Balances = vec![Balance::new(date, i64::MAX), Balance::new(date, 1)].into();
        assert!(matches!(balances.sum(), Err(ForecastError::AmountOverflow(_))));

        let balances: Balances =
            vec![Balance::new(date, i64::MAX), Balance::new(date, -1), Balance::new(date, 1)].into();
        assert_eq!(balances.sum().unwrap(), i64::MAX);
    }
}
