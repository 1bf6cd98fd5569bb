use crate::entities::live_data::LiveDataDocument;
use crate::services::uptime::calculate_uptime;
use crate::value_objects::lookup::Lookup;
use crate::value_objects::portfolio_snapshot::{PortfolioDefaults, PortfolioSnapshot};
use crate::value_objects::row_count::RowCount;
use crate::value_objects::CsvRow;
use chrono::{NaiveDateTime, Timelike};

/// Exact layout of the start-time file.
pub const START_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const START_TIME_ISO_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";
const LAST_UPDATE_MICROS_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// Everything read from disk for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct SnapshotInputs {
    pub portfolio_row: Lookup<CsvRow>,
    pub decisions: RowCount,
    pub start_time: Lookup<NaiveDateTime>,
}

pub fn parse_start_time(raw: &str) -> Result<NaiveDateTime, String> {
    let trimmed = raw.trim();
    NaiveDateTime::parse_from_str(trimmed, START_TIME_FORMAT)
        .map_err(|err| format!("invalid start time {trimmed:?}: {err}"))
}

pub fn assemble_document(
    inputs: &SnapshotInputs,
    defaults: &PortfolioDefaults,
    now: NaiveDateTime,
) -> LiveDataDocument {
    let start_time = inputs.start_time.as_found().copied();
    let portfolio = inputs
        .portfolio_row
        .as_found()
        .map(|row| PortfolioSnapshot::from_row(row, defaults));

    LiveDataDocument {
        is_running: start_time.is_some(),
        start_time: start_time.map(|ts| ts.format(START_TIME_ISO_FORMAT).to_string()),
        uptime: calculate_uptime(start_time, now),
        portfolio,
        total_decisions: inputs.decisions.data_rows(),
        last_update: format_last_update(now),
    }
}

/// Microsecond precision, fraction omitted when it truncates to zero.
pub fn format_last_update(now: NaiveDateTime) -> String {
    if now.nanosecond() / 1_000 == 0 {
        return now.format(START_TIME_ISO_FORMAT).to_string();
    }
    now.format(LAST_UPDATE_MICROS_FORMAT).to_string()
}
