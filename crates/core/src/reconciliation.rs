//! Date math and report types for the booking auto-completion job.
//!
//! The job itself lives in the API crate (it needs the database); this
//! module holds everything that can be computed without I/O: the travel
//! window arithmetic, the guide availability rule, the audit note format,
//! and the structured run report.

use chrono::NaiveDate;
use serde::Serialize;

use crate::types::{DbId, Timestamp};

/// Compute a booking's end date: travel date plus tour duration in days.
pub fn end_date(travel_date: NaiveDate, duration_days: i32) -> NaiveDate {
    travel_date + chrono::Duration::days(duration_days as i64)
}

/// A booking is eligible for auto-completion only once its end date is
/// strictly before today. An end date of today is still in the travel
/// window.
pub fn is_past_travel_window(end: NaiveDate, today: NaiveDate) -> bool {
    end < today
}

/// Whole days elapsed since the end date. Zero or negative means the
/// window has not passed.
pub fn days_past_end(end: NaiveDate, today: NaiveDate) -> i64 {
    (today - end).num_days()
}

/// A guide is free iff it holds no assignment in {assigned, in_progress}
/// on a booking still in {pending, confirmed}.
pub fn guide_is_free(active_assignments: i64) -> bool {
    active_assignments == 0
}

/// Append an auto-completion audit line to an assignment's notes,
/// preserving any prior content.
pub fn append_completion_note(existing: Option<&str>, completed_at: Timestamp) -> String {
    let line = format!(
        "Auto-completed on {}",
        completed_at.format("%Y-%m-%d %H:%M:%S UTC")
    );
    match existing {
        Some(notes) if !notes.trim().is_empty() => format!("{notes}\n{line}"),
        _ => line,
    }
}

// ---------------------------------------------------------------------------
// Run report
// ---------------------------------------------------------------------------

/// One booking closed out by a reconciliation run.
#[derive(Debug, Clone, Serialize)]
pub struct CompletedBooking {
    pub booking_id: DbId,
    pub booking_reference: String,
    pub guide_name: String,
    pub travel_date: NaiveDate,
    pub end_date: NaiveDate,
    pub days_past_end: i64,
    /// The guide's status after re-deriving availability
    /// (`"available"` or `"busy"`).
    pub guide_status_updated: String,
}

/// Outcome of one reconciliation run.
///
/// The batch is best-effort: `total_checked` always reflects the candidate
/// count, `completed_count` may be lower when individual items failed, and
/// every failure appears in `errors`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ReconciliationReport {
    pub completed_count: i64,
    pub total_checked: i64,
    pub completed_bookings: Vec<CompletedBooking>,
    pub errors: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn end_date_adds_duration() {
        assert_eq!(end_date(date(2026, 3, 10), 3), date(2026, 3, 13));
    }

    #[test]
    fn end_date_handles_month_rollover() {
        assert_eq!(end_date(date(2026, 1, 30), 5), date(2026, 2, 4));
    }

    #[test]
    fn window_is_strictly_before_today() {
        let today = date(2026, 6, 15);
        assert!(is_past_travel_window(date(2026, 6, 14), today));
        // Ending today is not past the window.
        assert!(!is_past_travel_window(today, today));
        assert!(!is_past_travel_window(date(2026, 6, 16), today));
    }

    #[test]
    fn days_past_end_counts_whole_days() {
        let today = date(2026, 6, 15);
        assert_eq!(days_past_end(date(2026, 6, 8), today), 7);
        assert_eq!(days_past_end(today, today), 0);
    }

    #[test]
    fn guide_freed_only_at_zero_active_assignments() {
        assert!(guide_is_free(0));
        assert!(!guide_is_free(1));
        assert!(!guide_is_free(2));
    }

    #[test]
    fn completion_note_preserves_prior_notes() {
        let at = Utc.with_ymd_and_hms(2026, 6, 15, 9, 30, 0).unwrap();
        let note = append_completion_note(Some("Customer requested early pickup"), at);
        assert_eq!(
            note,
            "Customer requested early pickup\nAuto-completed on 2026-06-15 09:30:00 UTC"
        );
    }

    #[test]
    fn completion_note_on_empty_notes() {
        let at = Utc.with_ymd_and_hms(2026, 6, 15, 9, 30, 0).unwrap();
        assert_eq!(
            append_completion_note(None, at),
            "Auto-completed on 2026-06-15 09:30:00 UTC"
        );
        assert_eq!(
            append_completion_note(Some("  "), at),
            "Auto-completed on 2026-06-15 09:30:00 UTC"
        );
    }
}
