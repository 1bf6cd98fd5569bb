use crate::value_objects::uptime::UptimeReport;
use chrono::NaiveDateTime;

/// Elapsed time between `start` and `now`, truncated to whole seconds.
///
/// A start time in the future yields the zero report rather than negative
/// components.
pub fn calculate_uptime(start: Option<NaiveDateTime>, now: NaiveDateTime) -> UptimeReport {
    let Some(start) = start else {
        return UptimeReport::zero();
    };

    let elapsed = (now - start).num_seconds();
    if elapsed < 0 {
        tracing::warn!(
            start = %start,
            now = %now,
            "start time is in the future, reporting zero uptime"
        );
        return UptimeReport::zero();
    }

    UptimeReport::from_elapsed_seconds(elapsed as u64)
}
