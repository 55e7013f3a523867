mod common;

use common::{day, fixed_now, open_account};
use mon_forecast::{
    config::ForecastConfig,
    errors::ForecastError,
    forecast::{ForecastEngine, RecurringRule},
    ledger::Balance,
    storage::{AccountSource, JsonStore},
};
use tempfile::TempDir;

#[test]
fn store_survives_reopen() {
    let temp = TempDir::new().expect("temp dir");
    let path = temp.path().join("store.json");

    {
        let mut store = JsonStore::open(&path).expect("open empty store");
        let checking = store
            .insert_account(open_account("Checking", day(-30)))
            .expect("insert account");
        let id = checking.id().expect("assigned id");
        store
            .insert_balance(id, Balance::new(day(-1), 1200))
            .expect("insert balance");
        store
            .insert_balance(id, Balance::new(day(-1), 300))
            .expect("insert duplicate dated balance");
    }

    let store = JsonStore::open(&path).expect("reopen store");
    let accounts = store.select_accounts().unwrap();
    assert_eq!(accounts.len(), 1);
    assert_eq!(accounts[0].name(), "Checking");
    assert_eq!(accounts[0].currency().as_str(), "GBP");
    let series = store.select_account_balances(accounts[0].id().unwrap()).unwrap();
    assert_eq!(series.len(), 2);
    assert_eq!(series.sum().unwrap(), 1500);
}

#[test]
fn select_account_reports_missing_ids() {
    let temp = TempDir::new().unwrap();
    let store = JsonStore::open(temp.path().join("store.json")).unwrap();
    assert!(matches!(
        store.select_account(12),
        Err(ForecastError::AccountNotFound(12))
    ));
}

#[test]
fn corrupt_store_is_an_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("store.json");
    std::fs::write(&path, "{ not json").unwrap();
    assert!(matches!(JsonStore::open(&path), Err(ForecastError::Serde(_))));

    std::fs::write(
        &path,
        r#"{"accounts":[{"account":{"id":1,"name":"x","currency":"EURO"}}]}"#,
    )
    .unwrap();
    assert!(JsonStore::open(&path).is_err());

    std::fs::write(
        &path,
        r#"{"accounts":[{"account":{"name":"anonymous","currency":"EUR"}}]}"#,
    )
    .unwrap();
    assert!(matches!(
        JsonStore::open(&path),
        Err(ForecastError::InvalidAccount(_))
    ));
}

#[test]
fn engine_reads_from_json_store() {
    let temp = TempDir::new().unwrap();
    let mut store = JsonStore::open(temp.path().join("store.json")).unwrap();
    let account = store
        .insert_account(open_account("Checking", day(-3)))
        .unwrap();
    for (date, amount) in [(day(-3), 700), (fixed_now(), 300)] {
        store
            .insert_balance(account.id().unwrap(), Balance::new(date, amount))
            .unwrap();
    }
    let config = ForecastConfig {
        historic_days: 1,
        forecast_days: 1,
        rules: vec![RecurringRule::pinned_monthly("energy bill", "EUR", -3150, 15)],
    };

    let report = ForecastEngine::new(&store, &config).run(fixed_now()).unwrap();
    assert_eq!(report.header(), &["date", "Checking", "energy bill", "total"]);
    assert_eq!(report.rows()[0], vec!["20250313", "700", "0", "700"]);
    assert_eq!(report.rows()[1], vec!["20250314", "1000", "0", "1000"]);
    assert_eq!(report.rows()[2], vec!["20250315", "1000", "-3150", "-2150"]);
}
