//! Timeline scheduling.
//!
//! Turns an ordered set of phase durations and a package start date into a
//! strictly sequential, non-overlapping schedule. Phases never run in
//! parallel in this model.

use chrono::NaiveDate;
use wp_core::error::ValidationErrors;
use wp_core::traits::Id;
use wp_core::{WpError, WpResult};

use crate::calendar;

/// Scheduling input for one phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhaseSpan {
    pub phase_id: Id,
    pub position: i32,
    pub duration_days: i64,
}

/// Computed window for one phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhaseWindow {
    pub phase_id: Id,
    pub starts_on: NaiveDate,
    pub ends_on: NaiveDate,
    pub duration_days: i64,
}

/// Full package schedule, windows in sequence order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    pub windows: Vec<PhaseWindow>,
    pub completes_on: NaiveDate,
}

/// Lay phases out sequentially from the package start date.
///
/// Spans are stable-sorted by position (duplicate positions keep their
/// insertion order, they are not an error). Each phase with duration n ≥ 1
/// occupies an inclusive window of exactly n business days; the next phase
/// starts the following business day. Zero-duration phases collapse to a
/// point at the cursor and consume no schedule time, so they introduce no
/// gap. With no phases the package completes on its start date.
pub fn schedule_phases(starts_on: NaiveDate, spans: &[PhaseSpan]) -> WpResult<Schedule> {
    let mut ordered: Vec<&PhaseSpan> = spans.iter().collect();
    ordered.sort_by_key(|s| s.position);

    let mut windows = Vec::with_capacity(spans.len());
    let mut cursor = starts_on;

    for span in ordered {
        if span.duration_days < 0 {
            let mut errors = ValidationErrors::new();
            errors.add(
                "duration_days",
                format!("phase {} has negative duration", span.phase_id),
            );
            return Err(WpError::InvalidInput(errors));
        }

        let window = if span.duration_days == 0 {
            PhaseWindow {
                phase_id: span.phase_id,
                starts_on: cursor,
                ends_on: cursor,
                duration_days: 0,
            }
        } else {
            let phase_start = cursor;
            let phase_end = calendar::add_business_days(phase_start, span.duration_days - 1)?;
            cursor = calendar::next_business_day(phase_end);
            PhaseWindow {
                phase_id: span.phase_id,
                starts_on: phase_start,
                ends_on: phase_end,
                duration_days: span.duration_days,
            }
        };
        windows.push(window);
    }

    let completes_on = windows.last().map(|w| w.ends_on).unwrap_or(starts_on);

    Ok(Schedule {
        windows,
        completes_on,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn span(phase_id: Id, position: i32, duration_days: i64) -> PhaseSpan {
        PhaseSpan {
            phase_id,
            position,
            duration_days,
        }
    }

    #[test]
    fn test_two_phase_work_week_scenario() {
        // package starts Monday 2024-01-01; a 5-day phase fills the work
        // week, a 3-day phase follows across the weekend
        let schedule =
            schedule_phases(date(2024, 1, 1), &[span(1, 1, 5), span(2, 2, 3)]).unwrap();

        assert_eq!(schedule.windows[0].starts_on, date(2024, 1, 1));
        assert_eq!(schedule.windows[0].ends_on, date(2024, 1, 5));
        assert_eq!(schedule.windows[1].starts_on, date(2024, 1, 8));
        assert_eq!(schedule.windows[1].ends_on, date(2024, 1, 10));
        assert_eq!(schedule.completes_on, date(2024, 1, 10));
    }

    #[test]
    fn test_no_phases_completes_immediately() {
        let schedule = schedule_phases(date(2024, 1, 1), &[]).unwrap();
        assert!(schedule.windows.is_empty());
        assert_eq!(schedule.completes_on, date(2024, 1, 1));
    }

    #[test]
    fn test_sorts_by_position() {
        let schedule =
            schedule_phases(date(2024, 1, 1), &[span(2, 5, 3), span(1, 1, 5)]).unwrap();
        assert_eq!(schedule.windows[0].phase_id, 1);
        assert_eq!(schedule.windows[1].phase_id, 2);
    }

    #[test]
    fn test_duplicate_positions_keep_insertion_order() {
        let schedule = schedule_phases(
            date(2024, 1, 1),
            &[span(7, 1, 1), span(8, 1, 1), span(9, 1, 1)],
        )
        .unwrap();
        let ids: Vec<Id> = schedule.windows.iter().map(|w| w.phase_id).collect();
        assert_eq!(ids, vec![7, 8, 9]);
    }

    #[test]
    fn test_zero_duration_phase_consumes_no_time() {
        let schedule = schedule_phases(
            date(2024, 1, 1),
            &[span(1, 1, 2), span(2, 2, 0), span(3, 3, 2)],
        )
        .unwrap();

        // phase 1: Mon-Tue; phase 2 collapses onto Wednesday's cursor;
        // phase 3 still starts Wednesday, no gap
        assert_eq!(schedule.windows[0].ends_on, date(2024, 1, 2));
        assert_eq!(schedule.windows[1].starts_on, date(2024, 1, 3));
        assert_eq!(schedule.windows[1].ends_on, date(2024, 1, 3));
        assert_eq!(schedule.windows[2].starts_on, date(2024, 1, 3));
        assert_eq!(schedule.windows[2].ends_on, date(2024, 1, 4));
    }

    #[test]
    fn test_single_day_phases_advance_one_day_each() {
        let schedule =
            schedule_phases(date(2024, 1, 4), &[span(1, 1, 1), span(2, 2, 1)]).unwrap();
        // Thursday, then Friday
        assert_eq!(schedule.windows[0].starts_on, date(2024, 1, 4));
        assert_eq!(schedule.windows[0].ends_on, date(2024, 1, 4));
        assert_eq!(schedule.windows[1].starts_on, date(2024, 1, 5));
        assert_eq!(schedule.windows[1].ends_on, date(2024, 1, 5));
    }

    #[test]
    fn test_negative_duration_is_fatal() {
        let err = schedule_phases(date(2024, 1, 1), &[span(1, 1, -3)]).unwrap_err();
        assert!(matches!(err, WpError::InvalidInput(_)));
    }

    #[test]
    fn test_window_weekday_count_matches_duration() {
        // every duration 0..=30 from a weekday start spans exactly that many
        // business days, inclusive
        for duration in 1..=30 {
            let schedule = schedule_phases(date(2024, 3, 4), &[span(1, 1, duration)]).unwrap();
            let window = &schedule.windows[0];
            assert!(window.starts_on <= window.ends_on);
            assert_eq!(
                calendar::business_days_between(window.starts_on, window.ends_on),
                duration,
                "duration {duration}"
            );
        }
    }

    #[test]
    fn test_sequential_phases_never_overlap() {
        let durations = [3, 1, 7, 2, 10, 1];
        let spans: Vec<PhaseSpan> = durations
            .iter()
            .enumerate()
            .map(|(i, d)| span(i as Id, i as i32, *d))
            .collect();
        let schedule = schedule_phases(date(2024, 1, 1), &spans).unwrap();

        for pair in schedule.windows.windows(2) {
            assert_eq!(
                pair[1].starts_on,
                calendar::next_business_day(pair[0].ends_on)
            );
            assert!(pair[1].starts_on > pair[0].ends_on);
        }
        assert_eq!(
            schedule.completes_on,
            schedule.windows.last().unwrap().ends_on
        );
    }
}
