use serde::{Deserialize, Serialize};

const SECONDS_PER_HOUR: u64 = 3_600;
const SECONDS_PER_MINUTE: u64 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UptimeReport {
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
    /// Elapsed hours rounded to two decimals.
    pub total_hours: f64,
}

impl UptimeReport {
    pub fn zero() -> Self {
        Self::default()
    }

    pub fn from_elapsed_seconds(elapsed: u64) -> Self {
        Self {
            hours: elapsed / SECONDS_PER_HOUR,
            minutes: (elapsed % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE,
            seconds: elapsed % SECONDS_PER_MINUTE,
            total_hours: round_to_cents(elapsed as f64 / SECONDS_PER_HOUR as f64),
        }
    }

    pub fn total_seconds(&self) -> u64 {
        self.hours * SECONDS_PER_HOUR + self.minutes * SECONDS_PER_MINUTE + self.seconds
    }

    pub fn is_zero(&self) -> bool {
        self.total_seconds() == 0 && self.total_hours == 0.0
    }
}

/// Rounds on the exact decimal expansion of `value`, so a double sitting just
/// below a half-cent rounds down rather than being nudged up by `* 100.0`.
fn round_to_cents(value: f64) -> f64 {
    format!("{value:.2}").parse().unwrap_or(value)
}
