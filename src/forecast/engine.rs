use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use super::{axis::DateAxis, report::Report, synthetic};
use crate::{
    config::ForecastConfig,
    errors::{ForecastError, Result},
    filter::AccountCondition,
    ledger::AccountBalances,
    storage::AccountSource,
};

/// Runs the forecast pipeline against an account source.
pub struct ForecastEngine<'a, S: AccountSource + ?Sized> {
    source: &'a S,
    config: &'a ForecastConfig,
}

impl<'a, S: AccountSource + ?Sized> ForecastEngine<'a, S> {
    pub fn new(source: &'a S, config: &'a ForecastConfig) -> Self {
        Self { source, config }
    }

    /// Produces the report for the window around `reference`.
    ///
    /// Real accounts come first in source order, then one synthetic account
    /// per rule in declaration order. Synthetic balances only cover axis
    /// dates strictly after `reference`. Any failure aborts the run.
    pub fn run(&self, reference: DateTime<Utc>) -> Result<Report> {
        self.config.validate()?;
        let axis = DateAxis::build(
            reference,
            i64::from(self.config.historic_days),
            i64::from(self.config.forecast_days),
        )?;
        debug!(
            dates = axis.len(),
            first = %axis.first(),
            last = %axis.last(),
            "built date axis"
        );

        let mut entries = self.real_account_balances(&axis)?;
        let real_count = entries.len();

        let futures = axis.after(reference);
        entries.extend(synthetic::build_all(&self.config.rules, &futures)?);
        debug!(
            rules = self.config.rules.len(),
            projected_dates = futures.len(),
            "generated synthetic accounts"
        );

        let report = Report::assemble(&entries, &axis)?;
        info!(
            real_accounts = real_count,
            synthetic_accounts = entries.len() - real_count,
            rows = report.row_count(),
            "forecast report assembled"
        );
        Ok(report)
    }

    fn real_account_balances(&self, axis: &DateAxis) -> Result<Vec<AccountBalances>> {
        let accounts = self
            .source
            .select_accounts()
            .map_err(|err| ForecastError::source_unavailable("selecting accounts", err))?;
        let condition = AccountCondition::overlapping(axis);
        for skipped in accounts.iter().filter(|account| !condition.holds(account)) {
            warn!(
                account = skipped.name(),
                opened = ?skipped.opened(),
                closed = ?skipped.closed(),
                "skipping account outside the report window"
            );
        }
        let selected = condition.filter(&accounts);
        debug!(
            total = accounts.len(),
            retained = selected.len(),
            "filtered accounts to date axis"
        );

        let mut entries = Vec::with_capacity(selected.len());
        for account in selected {
            let id = account.id().ok_or_else(|| {
                ForecastError::InvalidAccount(format!(
                    "account `{}` from source has no identifier",
                    account.name()
                ))
            })?;
            let balances = self.source.select_account_balances(id).map_err(|err| {
                ForecastError::source_unavailable(
                    format!("selecting balances for account {id} (`{}`)", account.name()),
                    err,
                )
            })?;
            entries.push(AccountBalances::new(account, balances));
        }
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        currency::CurrencyCode,
        ledger::{Account, Balances},
        storage::MemorySource,
    };
    use chrono::{Duration, TimeZone};
    use std::{
        io,
        sync::{Arc, Mutex},
    };

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn skipped_accounts_are_logged_as_warnings() {
        let now = Utc.with_ymd_and_hms(2025, 3, 14, 15, 9, 26).unwrap();
        let gbp = CurrencyCode::parse("GBP").unwrap();
        let mut source = MemorySource::new();
        source
            .insert(
                Account::new("Checking", gbp.clone(), now - Duration::days(10)).unwrap(),
                Balances::new(),
            )
            .unwrap();
        source
            .insert(
                Account::new("Later", gbp, now + Duration::days(30)).unwrap(),
                Balances::new(),
            )
            .unwrap();
        let config = ForecastConfig {
            historic_days: 1,
            forecast_days: 1,
            rules: Vec::new(),
        };

        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_max_level(tracing::Level::WARN)
            .with_ansi(false)
            .finish();
        let report = tracing::subscriber::with_default(subscriber, || {
            ForecastEngine::new(&source, &config).run(now)
        })
        .unwrap();

        assert_eq!(report.header(), &["date", "Checking", "total"]);
        let text = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
        assert!(text.contains("WARN"));
        assert!(text.contains("skipping account outside the report window"));
        assert!(text.contains("Later"));
        assert!(!text.contains("Checking"));
    }
}
