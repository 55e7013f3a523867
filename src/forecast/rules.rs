use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::generator::AmountGenerator;

/// Identifies a recurring rule and the synthetic account it produces.
///
/// The currency stays a raw string here; it is validated when the synthetic
/// account is built.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct RuleKey {
    pub name: String,
    pub currency: String,
}

impl RuleKey {
    pub fn new(name: impl Into<String>, currency: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            currency: currency.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecurringRule {
    #[serde(flatten)]
    pub key: RuleKey,
    #[serde(flatten)]
    pub generator: AmountGenerator,
}

impl RecurringRule {
    pub fn new(key: RuleKey, generator: AmountGenerator) -> Self {
        Self { key, generator }
    }

    pub fn constant_daily(name: &str, currency: &str, amount: i64) -> Self {
        Self::new(
            RuleKey::new(name, currency),
            AmountGenerator::ConstantDaily { amount },
        )
    }

    pub fn pinned_monthly(name: &str, currency: &str, amount: i64, day_of_month: u32) -> Self {
        Self::new(
            RuleKey::new(name, currency),
            AmountGenerator::PinnedMonthly {
                amount,
                day_of_month,
            },
        )
    }

    pub fn label(&self) -> String {
        format!("{} ({})", self.key.name, self.key.currency)
    }
}

static DEFAULT_RULES: Lazy<Vec<RecurringRule>> = Lazy::new(|| {
    vec![
        RecurringRule::constant_daily("daily spending", "GBP", -1500),
        // 10000 a month, spread over the days
        RecurringRule::constant_daily("bills", "GBP", -322),
        RecurringRule::pinned_monthly("storage", "EUR", -7900, 1),
        RecurringRule::pinned_monthly("health insurance", "EUR", -10250, 27),
        RecurringRule::pinned_monthly("energy bill", "EUR", -3150, 12),
        // charged every six weeks, approximated monthly
        RecurringRule::pinned_monthly("ABN Amro bank account", "EUR", -155, 19),
        RecurringRule::pinned_monthly("ABN Maandpremie", "EUR", -1461, 3),
        RecurringRule::pinned_monthly("O2 Phone Bill", "GBP", -3000, 17),
        // a tenner a week
        RecurringRule::constant_daily("John & Emily Registration", "EUR", -142),
    ]
});

/// Built-in recurring costs, in column order.
pub fn default_rules() -> Vec<RecurringRule> {
    DEFAULT_RULES.clone()
}
