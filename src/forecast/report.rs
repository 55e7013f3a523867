use chrono::{DateTime, Utc};

use super::axis::DateAxis;
use crate::{
    errors::{ForecastError, Result},
    filter::BalanceCondition,
    ledger::AccountBalances,
};

const DATE_HEADER: &str = "date";
const TOTAL_HEADER: &str = "total";
const ROW_DATE_FORMAT: &str = "%Y%m%d";

/// Rectangular grid of report cells, header row first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    rows: Vec<Vec<String>>,
}

impl Report {
    /// Builds the header and one row per axis date.
    ///
    /// Each account cell sums every balance dated on or before the row date.
    /// The last cell adds the account cells as plain integers, whatever
    /// their currencies. A cell or total past the `i64` range fails with
    /// `AmountOverflow`.
    pub fn assemble(accounts: &[AccountBalances], axis: &DateAxis) -> Result<Self> {
        let mut rows = Vec::with_capacity(axis.len() + 1);
        rows.push(header(accounts));
        for date in axis.iter() {
            rows.push(row(*date, accounts)?);
        }
        Ok(Self { rows })
    }

    pub fn header(&self) -> &[String] {
        &self.rows[0]
    }

    /// Dated rows, without the header.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows[1..]
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.rows[0].len()
    }

    pub fn into_rows(self) -> Vec<Vec<String>> {
        self.rows
    }
}

fn header(accounts: &[AccountBalances]) -> Vec<String> {
    let mut cells = Vec::with_capacity(accounts.len() + 2);
    cells.push(DATE_HEADER.to_string());
    cells.extend(accounts.iter().map(|entry| entry.name().to_string()));
    cells.push(TOTAL_HEADER.to_string());
    cells
}

fn row(date: DateTime<Utc>, accounts: &[AccountBalances]) -> Result<Vec<String>> {
    let cutoff = BalanceCondition::not_after(date);
    let mut cells = Vec::with_capacity(accounts.len() + 2);
    cells.push(date.format(ROW_DATE_FORMAT).to_string());
    let mut total = 0i64;
    for entry in accounts {
        let amount = cutoff.filter(&entry.balances).sum()?;
        cells.push(amount.to_string());
        total = total.checked_add(amount).ok_or_else(|| {
            ForecastError::AmountOverflow(format!(
                "total for {} does not fit after `{}`",
                date.format(ROW_DATE_FORMAT),
                entry.name()
            ))
        })?;
    }
    cells.push(total.to_string());
    Ok(cells)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        currency::CurrencyCode,
        ledger::{Account, Balance, Balances},
    };
    use chrono::{Duration, TimeZone};

    #[test]
    fn report_without_accounts_has_date_and_total_only() {
        let now = Utc.with_ymd_and_hms(2024, 12, 31, 6, 0, 0).unwrap();
        let axis = DateAxis::build(now, 0, 1).unwrap();
        let report = Report::assemble(&[], &axis).unwrap();
        assert_eq!(report.header(), &["date", "total"]);
        assert_eq!(report.rows()[0], vec!["20241231", "0"]);
        assert_eq!(report.rows()[1], vec!["20250101", "0"]);
    }

    #[test]
    fn totals_ignore_currency() {
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let axis = DateAxis::build(now, 1, 0).unwrap();
        let opened = now - Duration::days(10);
        let gbp = Account::new("GBP", CurrencyCode::parse("GBP").unwrap(), opened).unwrap();
        let eur = Account::new("EUR", CurrencyCode::parse("EUR").unwrap(), opened).unwrap();
        let accounts = vec![
            AccountBalances::new(gbp, Balances::from(vec![Balance::new(opened, 250)])),
            AccountBalances::new(eur, Balances::from(vec![Balance::new(now, 750)])),
        ];

        let report = Report::assemble(&accounts, &axis).unwrap();
        assert_eq!(report.row_count(), 3);
        assert_eq!(report.column_count(), 4);
        assert_eq!(report.rows()[0], vec!["20240430", "250", "0", "250"]);
        assert_eq!(report.rows()[1], vec!["20240501", "250", "750", "1000"]);
    }

    #[test]
    fn total_past_i64_is_an_error() {
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let axis = DateAxis::build(now, 0, 0).unwrap();
        let opened = now - Duration::days(1);
        let gbp = CurrencyCode::parse("GBP").unwrap();
        let accounts = vec![
            AccountBalances::new(
                Account::new("big", gbp.clone(), opened).unwrap(),
                Balances::from(vec![Balance::new(opened, i64::MAX)]),
            ),
            AccountBalances::new(
                Account::new("more", gbp, opened).unwrap(),
                Balances::from(vec![Balance::new(opened, 1)]),
            ),
        ];
        assert!(matches!(
            Report::assemble(&accounts, &axis),
            Err(ForecastError::AmountOverflow(_))
        ));
    }
}
