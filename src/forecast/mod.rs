//! Forecast report engine: date axis, recurring rules, synthetic accounts and
//! report assembly.

pub mod axis;
pub mod engine;
pub mod generator;
pub mod report;
pub mod rules;
pub mod synthetic;

pub use axis::DateAxis;
pub use engine::ForecastEngine;
pub use generator::AmountGenerator;
pub use report::Report;
pub use rules::{default_rules, RecurringRule, RuleKey};
