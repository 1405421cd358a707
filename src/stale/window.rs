use chrono::{DateTime, Duration, SubsecRound, Utc};

/// Second-resolution rendering used for thresholds in logs
pub const CANONICAL_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// `now` minus `staleness_days` calendar days, truncated to whole seconds.
///
/// Everything stays in UTC; request timestamps are compared against this
/// value without stripping or reinterpreting offsets. `None` when the result
/// falls before the earliest date chrono can represent.
pub fn compute_threshold(now: DateTime<Utc>, staleness_days: u32) -> Option<DateTime<Utc>> {
    let window = Duration::try_days(i64::from(staleness_days))?;
    now.checked_sub_signed(window).map(|t| t.trunc_subsecs(0))
}

/// Render a timestamp as `YYYY-MM-DD HH:MM:SS`
pub fn canonical(ts: &DateTime<Utc>) -> String {
    ts.format(CANONICAL_FORMAT).to_string()
}

/// True when `created_at` is strictly after the threshold (at second resolution).
pub fn is_recent(created_at: &DateTime<Utc>, threshold: &DateTime<Utc>) -> bool {
    created_at.trunc_subsecs(0) > *threshold
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_threshold_subtracts_days() {
        let now = Utc.with_ymd_and_hms(2024, 3, 10, 12, 30, 0).unwrap();
        let threshold = compute_threshold(now, 7).unwrap();
        assert_eq!(threshold, Utc.with_ymd_and_hms(2024, 3, 3, 12, 30, 0).unwrap());
    }

    #[test]
    fn test_threshold_drops_subseconds() {
        let now = Utc.with_ymd_and_hms(2024, 3, 10, 12, 30, 5).unwrap()
            + Duration::milliseconds(750);
        let threshold = compute_threshold(now, 1).unwrap();
        assert_eq!(threshold, Utc.with_ymd_and_hms(2024, 3, 9, 12, 30, 5).unwrap());
    }

    #[test]
    fn test_threshold_crosses_month_boundary() {
        let now = Utc.with_ymd_and_hms(2024, 3, 2, 0, 0, 0).unwrap();
        let threshold = compute_threshold(now, 2).unwrap();
        assert_eq!(canonical(&threshold), "2024-02-29 00:00:00");
    }

    #[test]
    fn test_threshold_out_of_range() {
        let now = Utc.with_ymd_and_hms(2024, 3, 2, 0, 0, 0).unwrap();
        assert!(compute_threshold(now, u32::MAX).is_none());
    }

    #[test]
    fn test_canonical_format() {
        let ts = Utc.with_ymd_and_hms(2023, 11, 5, 9, 4, 3).unwrap();
        assert_eq!(canonical(&ts), "2023-11-05 09:04:03");
    }

    #[test]
    fn test_is_recent_strictly_after() {
        let threshold = Utc.with_ymd_and_hms(2024, 3, 3, 12, 0, 0).unwrap();
        let after = threshold + Duration::seconds(1);
        let before = threshold - Duration::seconds(1);

        assert!(is_recent(&after, &threshold));
        assert!(!is_recent(&threshold, &threshold));
        assert!(!is_recent(&before, &threshold));
    }

    #[test]
    fn test_is_recent_ignores_subseconds() {
        // Same second as the threshold is not "after" it
        let threshold = Utc.with_ymd_and_hms(2024, 3, 3, 12, 0, 0).unwrap();
        let created = threshold + Duration::milliseconds(900);
        assert!(!is_recent(&created, &threshold));
    }
}
