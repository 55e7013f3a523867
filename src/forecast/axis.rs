use chrono::{DateTime, Duration, Utc};

use crate::errors::{ForecastError, Result};

/// Report dates spaced exactly one day apart around a reference instant.
///
/// Every date keeps the reference instant's time of day; nothing is aligned
/// to midnight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateAxis {
    dates: Vec<DateTime<Utc>>,
}

impl DateAxis {
    /// Builds `now + 24h * i` for every `i` in `-historic_days..=forecast_days`.
    ///
    /// Fails with `DateOutOfRange` when either end of the window falls
    /// outside the representable calendar.
    pub fn build(now: DateTime<Utc>, historic_days: i64, forecast_days: i64) -> Result<Self> {
        let start = historic_days
            .checked_neg()
            .ok_or(ForecastError::DateOutOfRange(historic_days))?;
        if start > forecast_days {
            return Err(ForecastError::EmptyRange);
        }
        shift(now, start)?;
        shift(now, forecast_days)?;
        let dates = (start..=forecast_days)
            .map(|offset| shift(now, offset))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { dates })
    }

    pub fn first(&self) -> DateTime<Utc> {
        self.dates[0]
    }

    pub fn last(&self) -> DateTime<Utc> {
        self.dates[self.dates.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    pub fn dates(&self) -> &[DateTime<Utc>] {
        &self.dates
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DateTime<Utc>> {
        self.dates.iter()
    }

    /// Dates strictly after `pivot`, in axis order.
    pub fn after(&self, pivot: DateTime<Utc>) -> Vec<DateTime<Utc>> {
        self.dates
            .iter()
            .copied()
            .filter(|date| *date > pivot)
            .collect()
    }
}

fn shift(now: DateTime<Utc>, offset: i64) -> Result<DateTime<Utc>> {
    Duration::try_days(offset)
        .and_then(|delta| now.checked_add_signed(delta))
        .ok_or(ForecastError::DateOutOfRange(offset))
}
