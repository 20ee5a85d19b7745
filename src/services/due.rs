//! Due-date classification.
//!
//! All calendar math here is UTC. This module is the only place that
//! compares due dates against the clock; the reminder generator and
//! the task summary both go through it.

use chrono::{DateTime, Utc};

/// Reminder window in hours: a task is reminder-eligible while it is
/// due strictly in the future and at most this far out.
pub const REMINDER_WINDOW_HOURS: f64 = 24.0;

/// Hours until `due`, fractional; negative once past due.
pub fn hours_until(due: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    (due - now).num_milliseconds() as f64 / 3_600_000.0
}

/// Urgency tier for a task inside the reminder window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Urgency {
    /// Due within the hour.
    Immediate,
    /// Due within a few hours; carries the rounded hour count.
    Soon(i64),
    /// Due later today; carries the rounded hour count.
    Upcoming(i64),
    /// Due inside the window but more than twelve hours out.
    Tomorrow,
}

/// Classify a due date against the reminder window.
///
/// Returns `None` for anything due right now, past due, or more than
/// 24 hours out. Overdue tasks never re-enter the window; they are
/// surfaced through the task summary, not through reminders.
pub fn classify(due: DateTime<Utc>, now: DateTime<Utc>) -> Option<Urgency> {
    let hours = hours_until(due, now);
    if hours <= 0.0 || hours > REMINDER_WINDOW_HOURS {
        return None;
    }

    // First match wins.
    let urgency = if hours <= 1.0 {
        Urgency::Immediate
    } else if hours <= 3.0 {
        Urgency::Soon(hours.round() as i64)
    } else if hours <= 12.0 {
        Urgency::Upcoming(hours.round() as i64)
    } else {
        Urgency::Tomorrow
    };
    Some(urgency)
}

/// Reminder text for a task title at the given urgency.
pub fn reminder_message(title: &str, urgency: Urgency) -> String {
    match urgency {
        Urgency::Immediate => {
            format!("Urgent: \"{}\" is due in less than an hour!", title)
        }
        Urgency::Soon(hours) => {
            format!("Reminder: \"{}\" is due in {} hours", title, hours)
        }
        Urgency::Upcoming(hours) => {
            format!("Upcoming: \"{}\" is due in {} hours", title, hours)
        }
        Urgency::Tomorrow => format!("Reminder: \"{}\" is due tomorrow", title),
    }
}

/// True when `due` falls on the same UTC calendar date as `now`.
pub fn is_due_today(due: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    due.date_naive() == now.date_naive()
}

/// True when `due` is strictly in the past.
pub fn is_overdue(due: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    due < now
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use rstest::rstest;

    fn at(hours_from_now: i64, minutes: i64) -> (DateTime<Utc>, DateTime<Utc>) {
        let now = Utc::now();
        (now + Duration::hours(hours_from_now) + Duration::minutes(minutes), now)
    }

    #[test]
    fn test_past_due_is_outside_window() {
        let (due, now) = at(-2, 0);
        assert!(classify(due, now).is_none());
    }

    #[test]
    fn test_due_exactly_now_is_outside_window() {
        let now = Utc::now();
        assert!(classify(now, now).is_none());
    }

    #[test]
    fn test_25_hours_out_is_outside_window() {
        let (due, now) = at(25, 0);
        assert!(classify(due, now).is_none());
    }

    #[test]
    fn test_half_hour_is_immediate() {
        let (due, now) = at(0, 30);
        assert_eq!(classify(due, now), Some(Urgency::Immediate));
        let message = reminder_message("Report", Urgency::Immediate);
        assert!(message.contains("Urgent"));
    }

    #[test]
    fn test_two_hours_is_soon() {
        let (due, now) = at(2, 0);
        assert_eq!(classify(due, now), Some(Urgency::Soon(2)));
        assert_eq!(
            reminder_message("Report", Urgency::Soon(2)),
            "Reminder: \"Report\" is due in 2 hours"
        );
    }

    #[test]
    fn test_six_hours_is_upcoming() {
        let (due, now) = at(6, 0);
        assert_eq!(classify(due, now), Some(Urgency::Upcoming(6)));
        assert!(reminder_message("Report", Urgency::Upcoming(6)).starts_with("Upcoming"));
    }

    #[test]
    fn test_twenty_hours_is_tomorrow() {
        let (due, now) = at(20, 0);
        assert_eq!(classify(due, now), Some(Urgency::Tomorrow));
        assert_eq!(
            reminder_message("Report", Urgency::Tomorrow),
            "Reminder: \"Report\" is due tomorrow"
        );
    }

    #[test]
    fn test_window_edge_is_inclusive() {
        // 24h exactly is still inside; a minute past it is not.
        let now = Utc::now();
        assert_eq!(
            classify(now + Duration::hours(24), now),
            Some(Urgency::Tomorrow)
        );
        assert!(classify(now + Duration::hours(24) + Duration::minutes(1), now).is_none());
    }

    #[rstest]
    #[case(1, Urgency::Immediate)]
    #[case(3, Urgency::Soon(3))]
    #[case(12, Urgency::Upcoming(12))]
    #[case(13, Urgency::Tomorrow)]
    fn test_tier_boundaries(#[case] hours: i64, #[case] expected: Urgency) {
        let now = Utc::now();
        assert_eq!(classify(now + Duration::hours(hours), now), Some(expected));
    }

    #[test]
    fn test_is_due_today_compares_utc_dates() {
        let now = Utc.with_ymd_and_hms(2026, 8, 7, 22, 0, 0).unwrap();
        let tonight = Utc.with_ymd_and_hms(2026, 8, 7, 23, 59, 0).unwrap();
        let tomorrow = Utc.with_ymd_and_hms(2026, 8, 8, 0, 1, 0).unwrap();
        let this_morning = Utc.with_ymd_and_hms(2026, 8, 7, 1, 0, 0).unwrap();

        assert!(is_due_today(tonight, now));
        assert!(is_due_today(this_morning, now));
        assert!(!is_due_today(tomorrow, now));
    }

    #[test]
    fn test_is_overdue() {
        let now = Utc::now();
        assert!(is_overdue(now - Duration::seconds(1), now));
        assert!(!is_overdue(now, now));
        assert!(!is_overdue(now + Duration::seconds(1), now));
    }
}
