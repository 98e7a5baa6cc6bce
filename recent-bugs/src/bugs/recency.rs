//! Client-side recency filtering.

use super::BugRecord;
use chrono::{Duration, Local, NaiveDateTime};

/// Returns true if `bug` is active and was created within the last
/// `horizon_days` days of the local wall-clock time.
#[must_use]
pub fn is_recent(bug: &BugRecord, horizon_days: u32) -> bool {
    is_recent_at(bug, horizon_days, Local::now().naive_local())
}

/// Same as [`is_recent`], evaluated at `now` instead of the current time.
///
/// The creation timestamp keeps its wall-clock fields and drops its offset
/// before being compared with `now - horizon_days`. The cutoff is inclusive.
/// A horizon reaching past the earliest representable date keeps every
/// active bug.
#[must_use]
pub fn is_recent_at(bug: &BugRecord, horizon_days: u32, now: NaiveDateTime) -> bool {
    if bug.status.is_inactive() {
        return false;
    }

    match now.checked_sub_signed(Duration::days(i64::from(horizon_days))) {
        Some(cutoff) => bug.date_created.naive_local() >= cutoff,
        None => true,
    }
}

/// Keeps the bugs for which [`is_recent_at`] holds, preserving their order.
#[must_use]
pub fn filter_recent(bugs: Vec<BugRecord>, horizon_days: u32, now: NaiveDateTime) -> Vec<BugRecord> {
    bugs.into_iter()
        .filter(|bug| is_recent_at(bug, horizon_days, now))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bugs::{BugStatus, Importance};
    use chrono::{DateTime, FixedOffset, NaiveDate};

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2013, 6, 10)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn bug(status: BugStatus, created: &str) -> BugRecord {
        BugRecord {
            title: Some("Sample bug".to_string()),
            importance: Importance::High,
            status,
            date_created: DateTime::<FixedOffset>::parse_from_rfc3339(created).unwrap(),
            web_link: "https://bugs.launchpad.net/sample/+bug/1".to_string(),
            bug_link: "https://api.launchpad.net/1.0/bugs/1".to_string(),
            assignee_link: None,
            bug_target_name: "sample".to_string(),
        }
    }

    #[test]
    fn inactive_statuses_are_never_recent() {
        for status in BugStatus::INACTIVE {
            let fresh = bug(status, "2013-06-10T11:59:00+00:00");
            assert!(!is_recent_at(&fresh, 2, now()));
            assert!(!is_recent_at(&fresh, 10_000, now()));
        }
    }

    #[test]
    fn cutoff_is_inclusive() {
        let at_cutoff = bug(BugStatus::New, "2013-06-08T12:00:00+00:00");
        assert!(is_recent_at(&at_cutoff, 2, now()));
    }

    #[test]
    fn one_day_past_horizon_is_not_recent() {
        let stale = bug(BugStatus::New, "2013-06-07T12:00:00+00:00");
        assert!(!is_recent_at(&stale, 2, now()));
    }

    #[test]
    fn offset_is_stripped_not_converted() {
        // 12:00 at +05:00 is 07:00 UTC, but only the wall-clock fields count.
        let created = bug(BugStatus::Confirmed, "2013-06-10T12:00:00+05:00");
        assert!(is_recent_at(&created, 0, now()));
    }

    #[test]
    fn zero_horizon_keeps_bugs_created_since_now() {
        let earlier = bug(BugStatus::New, "2013-06-10T11:00:00+00:00");
        assert!(!is_recent_at(&earlier, 0, now()));
    }

    #[test]
    fn horizon_past_earliest_date_keeps_active_bugs() {
        let ancient = bug(BugStatus::New, "1970-01-01T00:00:00+00:00");
        assert!(is_recent_at(&ancient, u32::MAX, now()));

        let closed = bug(BugStatus::Expired, "2013-06-10T08:00:00+00:00");
        assert!(!is_recent_at(&closed, u32::MAX, now()));
    }

    #[test]
    fn filtering_is_idempotent_and_keeps_order() {
        let bugs = vec![
            bug(BugStatus::Triaged, "2013-06-10T08:00:00+00:00"),
            bug(BugStatus::FixCommitted, "2013-06-10T08:00:00+00:00"),
            bug(BugStatus::New, "2013-05-01T08:00:00+00:00"),
            bug(BugStatus::InProgress, "2013-06-09T08:00:00+00:00"),
        ];

        let once = filter_recent(bugs, 2, now());
        let twice = filter_recent(once.clone(), 2, now());

        assert_eq!(once.len(), 2);
        assert_eq!(once[0].status, BugStatus::Triaged);
        assert_eq!(once[1].status, BugStatus::InProgress);
        assert_eq!(once, twice);
    }
}
