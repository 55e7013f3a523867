#![doc(test(attr(deny(warnings))))]

//! Mon Forecast builds a date-indexed balance report that blends recorded
//! account balances with balances projected from recurring cost rules.

pub mod cli;
pub mod config;
pub mod currency;
pub mod errors;
pub mod filter;
pub mod forecast;
pub mod ledger;
pub mod output;
pub mod storage;
pub mod utils;

pub use errors::{ForecastError, Result};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup debug log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::debug!("Mon Forecast tracing initialized.");
    });
}
