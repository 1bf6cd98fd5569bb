use crate::value_objects::CsvRow;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub const PORTFOLIO_VALUE_FIELD: &str = "portfolio_value";
pub const RETURN_PCT_FIELD: &str = "return_pct";
pub const CYCLE_COUNT_FIELD: &str = "cycle_count";
pub const TIMESTAMP_FIELD: &str = "timestamp";

/// Values used when a snapshot row lacks a field or holds a non-numeric one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct PortfolioDefaults {
    pub value: f64,
    pub return_pct: f64,
    pub cycles: u64,
}

impl Default for PortfolioDefaults {
    fn default() -> Self {
        Self {
            value: 10_000.0,
            return_pct: 0.0,
            cycles: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioSnapshot {
    pub value: f64,
    #[serde(rename = "return")]
    pub return_pct: f64,
    pub cycles: u64,
    /// Passed through as written by the trading process; never re-parsed.
    pub timestamp: String,
}

impl PortfolioSnapshot {
    pub fn from_row(row: &CsvRow, defaults: &PortfolioDefaults) -> Self {
        Self {
            value: finite_field(row, PORTFOLIO_VALUE_FIELD, defaults.value),
            return_pct: finite_field(row, RETURN_PCT_FIELD, defaults.return_pct),
            cycles: numeric_field(row, CYCLE_COUNT_FIELD, defaults.cycles),
            timestamp: row.get(TIMESTAMP_FIELD).cloned().unwrap_or_default(),
        }
    }
}

fn numeric_field<T: FromStr + Copy>(row: &CsvRow, field: &str, default: T) -> T {
    let Some(raw) = row.get(field) else {
        return default;
    };
    match raw.trim().parse::<T>() {
        Ok(value) => value,
        Err(_) => {
            tracing::warn!(field, raw = %raw, "non-numeric snapshot field, using default");
            default
        }
    }
}

fn finite_field(row: &CsvRow, field: &str, default: f64) -> f64 {
    let value = numeric_field(row, field, default);
    if value.is_finite() {
        return value;
    }
    tracing::warn!(field, "non-finite snapshot field, using default");
    default
}
