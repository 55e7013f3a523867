use chrono::{DateTime, Utc};

use crate::ledger::{Balance, Balances};

/// Predicate over a balance's date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BalanceCondition {
    /// Dated strictly after the cutoff.
    After(DateTime<Utc>),
    Not(Box<BalanceCondition>),
}

impl BalanceCondition {
    /// Selects balances dated on or before `cutoff`.
    pub fn not_after(cutoff: DateTime<Utc>) -> Self {
        BalanceCondition::Not(Box::new(BalanceCondition::After(cutoff)))
    }

    pub fn holds(&self, balance: &Balance) -> bool {
        match self {
            BalanceCondition::After(cutoff) => balance.date > *cutoff,
            BalanceCondition::Not(inner) => !inner.holds(balance),
        }
    }

    pub fn filter(&self, balances: &Balances) -> Balances {
        balances
            .iter()
            .filter(|balance| self.holds(balance))
            .copied()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn not_after_includes_the_cutoff_itself() {
        let cutoff = Utc.with_ymd_and_hms(2024, 1, 31, 23, 59, 59).unwrap();
        let balances: Balances = vec![
            Balance::new(cutoff - Duration::days(1), -1500),
            Balance::new(cutoff, -1500),
            Balance::new(cutoff + Duration::seconds(1), 99),
        ]
        .into();

        let kept = BalanceCondition::not_after(cutoff).filter(&balances);
        assert_eq!(kept.len(), 2);
        assert_eq!(kept.sum().unwrap(), -3000);

        let later = BalanceCondition::After(cutoff).filter(&balances);
        assert_eq!(later.sum().unwrap(), 99);
    }

    #[test]
    fn nothing_matching_sums_to_zero() {
        let cutoff = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
        let balances: Balances = vec![Balance::new(cutoff + Duration::days(1), 5)].into();
        assert_eq!(BalanceCondition::not_after(cutoff).filter(&balances).sum().unwrap(), 0);
    }
}
