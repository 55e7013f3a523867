#![allow(dead_code)]

use chrono::{DateTime, Duration, TimeZone, Utc};
use mon_forecast::{
    currency::CurrencyCode,
    ledger::{Account, Balance, Balances},
};

/// Reference instant used across the suite. Deliberately not midnight aligned.
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 14, 15, 9, 26).unwrap()
}

pub fn day(offset: i64) -> DateTime<Utc> {
    fixed_now() + Duration::days(offset)
}

pub fn currency(code: &str) -> CurrencyCode {
    CurrencyCode::parse(code).expect("valid currency code")
}

pub fn open_account(name: &str, opened: DateTime<Utc>) -> Account {
    Account::new(name, currency("GBP"), opened).expect("valid account")
}

pub fn closed_account(name: &str, opened: DateTime<Utc>, closed: DateTime<Utc>) -> Account {
    open_account(name, opened).close(closed).expect("valid close")
}

pub fn balances(entries: &[(DateTime<Utc>, i64)]) -> Balances {
    entries
        .iter()
        .map(|(date, amount)| Balance::new(*date, *amount))
        .collect()
}
