use crate::value_objects::portfolio_snapshot::PortfolioSnapshot;
use crate::value_objects::uptime::UptimeReport;
use serde::{Deserialize, Serialize};

/// The JSON document polled by the dashboard. Replaced wholesale on every run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveDataDocument {
    pub is_running: bool,
    pub start_time: Option<String>,
    pub uptime: UptimeReport,
    pub portfolio: Option<PortfolioSnapshot>,
    pub total_decisions: u64,
    pub last_update: String,
}

impl LiveDataDocument {
    pub fn to_json_pretty(&self) -> Result<String, String> {
        serde_json::to_string_pretty(self)
            .map_err(|err| format!("failed to serialize live data: {err}"))
    }
}
