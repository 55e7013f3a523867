use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{ForecastError, Result};

/// Rule for producing a synthetic amount on any date.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "variant", rename_all = "snake_case")]
pub enum AmountGenerator {
    /// The same amount on every date.
    ConstantDaily { amount: i64 },
    /// The amount once a month on `day_of_month`, zero on other days.
    ///
    /// Months shorter than `day_of_month` pay on their last day instead.
    PinnedMonthly { amount: i64, day_of_month: u32 },
}

impl AmountGenerator {
    pub fn generate_amount(&self, date: DateTime<Utc>) -> i64 {
        match *self {
            AmountGenerator::ConstantDaily { amount } => amount,
            AmountGenerator::PinnedMonthly {
                amount,
                day_of_month,
            } => {
                let pay_day = day_of_month.min(days_in_month(date.year(), date.month()));
                if date.day() == pay_day {
                    amount
                } else {
                    0
                }
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        match *self {
            AmountGenerator::ConstantDaily { .. } => Ok(()),
            AmountGenerator::PinnedMonthly { day_of_month, .. } => {
                if (1..=31).contains(&day_of_month) {
                    Ok(())
                } else {
                    Err(ForecastError::InvalidRule(format!(
                        "day of month must be between 1 and 31, got {day_of_month}"
                    )))
                }
            }
        }
    }
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let next_month = if month == 12 { 1 } else { month + 1 };
    let next_year = if month == 12 { year + 1 } else { year };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .map(|first_next| (first_next - Duration::days(1)).day())
        .unwrap_or(28)
}
