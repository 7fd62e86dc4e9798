//! Plant care scheduling (watering and nutrient tracks).
//!
//! Each track is an interval in days plus the date the action was last
//! performed. Due status is derived on every read and never stored. Marking
//! a track done (resetting its last date to "now") is a store mutation and
//! lives in the API layer; this module only computes.

use chrono::Days;
use serde::Serialize;

use crate::types::Timestamp;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Shortest allowed care interval in days.
pub const MIN_INTERVAL_DAYS: i32 = 1;

/// Longest allowed care interval in days.
pub const MAX_INTERVAL_DAYS: i32 = 365;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CareError {
    #[error("Interval must be between {MIN_INTERVAL_DAYS} and {MAX_INTERVAL_DAYS} days, got {0}")]
    InvalidInterval(i32),

    #[error("Last care date {last} is later than the current time {now}")]
    InvalidDate { last: Timestamp, now: Timestamp },
}

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// The two independent care tracks a plant has.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CareTrack {
    Watering,
    Nutrient,
}

impl CareTrack {
    pub fn label(self) -> &'static str {
        match self {
            Self::Watering => "watering",
            Self::Nutrient => "nutrient",
        }
    }
}

/// Derived due status for one care track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CareStatus {
    pub next_due_date: Timestamp,
    pub is_due: bool,
}

/// Due status for both tracks of a plant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlantCare {
    pub watering: CareStatus,
    pub nutrient: CareStatus,
}

impl PlantCare {
    /// True when at least one track needs attention.
    pub fn any_due(&self) -> bool {
        self.watering.is_due || self.nutrient.is_due
    }
}

// ---------------------------------------------------------------------------
// Computation
// ---------------------------------------------------------------------------

/// Validate that an interval lies within `[MIN_INTERVAL_DAYS, MAX_INTERVAL_DAYS]`.
pub fn validate_interval(interval_days: i32) -> Result<(), CareError> {
    if (MIN_INTERVAL_DAYS..=MAX_INTERVAL_DAYS).contains(&interval_days) {
        Ok(())
    } else {
        Err(CareError::InvalidInterval(interval_days))
    }
}

/// Validate that a last-care date does not lie in the future.
pub fn validate_last_date(last_date: Timestamp, now: Timestamp) -> Result<(), CareError> {
    if last_date > now {
        return Err(CareError::InvalidDate {
            last: last_date,
            now,
        });
    }
    Ok(())
}

/// Compute the due status of a single care track.
///
/// A track that has never been performed is due immediately, with
/// `next_due_date == now`. Otherwise the next due date is `last_date` plus
/// `interval_days` calendar days and the track is due once `now` reaches it.
pub fn care_status(
    last_date: Option<Timestamp>,
    interval_days: i32,
    now: Timestamp,
) -> Result<CareStatus, CareError> {
    validate_interval(interval_days)?;

    let Some(last_date) = last_date else {
        return Ok(CareStatus {
            next_due_date: now,
            is_due: true,
        });
    };

    validate_last_date(last_date, now)?;

    // Interval was validated positive above, so the cast is lossless.
    let next_due_date = last_date
        .checked_add_days(Days::new(interval_days as u64))
        .ok_or(CareError::InvalidDate {
            last: last_date,
            now,
        })?;

    Ok(CareStatus {
        next_due_date,
        is_due: now >= next_due_date,
    })
}

/// Compute both care tracks for a plant.
pub fn plant_care(
    last_watered_at: Option<Timestamp>,
    watering_interval_days: i32,
    last_fed_at: Option<Timestamp>,
    nutrient_interval_days: i32,
    now: Timestamp,
) -> Result<PlantCare, CareError> {
    Ok(PlantCare {
        watering: care_status(last_watered_at, watering_interval_days, now)?,
        nutrient: care_status(last_fed_at, nutrient_interval_days, now)?,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use chrono::{Duration, TimeZone, Utc};

    use super::*;

    fn at(y: i32, m: u32, d: u32) -> Timestamp {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    // -- never performed -----------------------------------------------------

    #[test]
    fn never_cared_for_is_due_now() {
        let now = at(2024, 3, 15);
        for interval in [MIN_INTERVAL_DAYS, 7, 30, MAX_INTERVAL_DAYS] {
            let status = care_status(None, interval, now).unwrap();
            assert!(status.is_due);
            assert_eq!(status.next_due_date, now);
        }
    }

    // -- next due date -------------------------------------------------------

    #[test]
    fn next_due_is_last_plus_interval() {
        let last = at(2024, 1, 1);
        let now = at(2024, 1, 2);
        let status = care_status(Some(last), 10, now).unwrap();
        assert_eq!(status.next_due_date, at(2024, 1, 11));
        assert!(!status.is_due);
    }

    #[test]
    fn calendar_days_cross_month_and_leap_day() {
        let last = at(2024, 2, 20);
        let status = care_status(Some(last), 10, last).unwrap();
        assert_eq!(status.next_due_date, at(2024, 3, 1));
    }

    #[test]
    fn max_interval_spans_a_year() {
        let last = at(2023, 1, 1);
        let status = care_status(Some(last), MAX_INTERVAL_DAYS, last).unwrap();
        assert_eq!(status.next_due_date, at(2024, 1, 1));
    }

    #[test]
    fn weekly_watering_due_on_the_eighth() {
        let status = care_status(Some(at(2024, 1, 1)), 7, at(2024, 1, 8)).unwrap();
        assert!(status.is_due);
        assert_eq!(status.next_due_date, at(2024, 1, 8));
    }

    // -- boundaries ----------------------------------------------------------

    #[test]
    fn due_exactly_at_next_due_date() {
        let last = at(2024, 5, 1);
        let next = at(2024, 5, 4);
        assert!(care_status(Some(last), 3, next).unwrap().is_due);
    }

    #[test]
    fn not_due_one_day_before() {
        let last = at(2024, 5, 1);
        let day_before = at(2024, 5, 4) - Duration::days(1);
        assert!(!care_status(Some(last), 3, day_before).unwrap().is_due);
    }

    #[test]
    fn not_due_one_second_before() {
        let last = at(2024, 5, 1);
        let almost = at(2024, 5, 4) - Duration::seconds(1);
        assert!(!care_status(Some(last), 3, almost).unwrap().is_due);
    }

    #[test]
    fn overdue_stays_due() {
        let status = care_status(Some(at(2024, 1, 1)), 2, at(2024, 6, 1)).unwrap();
        assert!(status.is_due);
        assert_eq!(status.next_due_date, at(2024, 1, 3));
    }

    #[test]
    fn cared_for_just_now_is_not_due() {
        let now = at(2024, 1, 1);
        let status = care_status(Some(now), 1, now).unwrap();
        assert!(!status.is_due);
    }

    // -- errors --------------------------------------------------------------

    #[test]
    fn zero_interval_rejected() {
        assert_matches!(
            care_status(None, 0, at(2024, 1, 1)),
            Err(CareError::InvalidInterval(0))
        );
    }

    #[test]
    fn interval_above_max_rejected() {
        assert_matches!(
            care_status(Some(at(2024, 1, 1)), 366, at(2024, 1, 2)),
            Err(CareError::InvalidInterval(366))
        );
    }

    #[test]
    fn negative_interval_rejected() {
        assert!(validate_interval(-7).is_err());
    }

    #[test]
    fn future_last_date_rejected() {
        let now = at(2024, 1, 1);
        let future = now + Duration::hours(1);
        assert_matches!(
            care_status(Some(future), 7, now),
            Err(CareError::InvalidDate { .. })
        );
    }

    #[test]
    fn interval_checked_before_date() {
        let now = at(2024, 1, 1);
        let future = now + Duration::days(1);
        assert_matches!(
            care_status(Some(future), 0, now),
            Err(CareError::InvalidInterval(0))
        );
    }

    // -- plant_care ----------------------------------------------------------

    #[test]
    fn tracks_are_independent() {
        let now = at(2024, 1, 10);
        let care = plant_care(Some(at(2024, 1, 9)), 3, None, 30, now).unwrap();
        assert!(!care.watering.is_due);
        assert!(care.nutrient.is_due);
        assert!(care.any_due());
    }

    #[test]
    fn nothing_due_when_both_recent() {
        let now = at(2024, 1, 10);
        let care = plant_care(Some(now), 3, Some(now), 30, now).unwrap();
        assert!(!care.any_due());
    }

    #[test]
    fn care_error_becomes_validation_error() {
        let err: crate::error::CoreError = CareError::InvalidInterval(0).into();
        assert_matches!(err, crate::error::CoreError::Validation(msg) if msg.contains("between 1 and 365"));
    }
}
