use chrono::{Duration, NaiveDate, NaiveDateTime};
use proptest::prelude::*;
use safe_domain::services::uptime::calculate_uptime;
use safe_domain::value_objects::row_count::RowCount;
use safe_domain::value_objects::uptime::UptimeReport;

fn epoch() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .expect("valid timestamp")
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    #[test]
    fn uptime_components_recombine_to_elapsed(elapsed in 0u64..10_000_000) {
        let report = UptimeReport::from_elapsed_seconds(elapsed);
        prop_assert!(report.minutes < 60);
        prop_assert!(report.seconds < 60);
        prop_assert_eq!(report.total_seconds(), elapsed);
        prop_assert!((report.total_hours - elapsed as f64 / 3600.0).abs() <= 0.005 + 1e-9);
    }

    #[test]
    fn uptime_from_clock_matches_whole_seconds(secs in 0i64..5_000_000, millis in 0i64..1000) {
        let now = epoch() + Duration::seconds(secs) + Duration::milliseconds(millis);
        let report = calculate_uptime(Some(epoch()), now);
        prop_assert_eq!(report.total_seconds(), secs as u64);
    }

    #[test]
    fn future_start_never_goes_negative(ahead in 1i64..5_000_000) {
        let report = calculate_uptime(Some(epoch() + Duration::seconds(ahead)), epoch());
        prop_assert!(report.is_zero());
    }

    #[test]
    fn row_count_is_lines_minus_header(lines in 0u64..1_000_000) {
        let count = RowCount::Counted { lines };
        prop_assert_eq!(count.data_rows(), lines.saturating_sub(1));
    }
}
