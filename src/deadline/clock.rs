//! Adjudication clock: local time parsing, timezone lookup, and
//! calendar-day deadline arithmetic.
//!
//! Deadlines are always pinned to a wall-clock time in the game's zone.
//! Day offsets are applied to the local calendar date, never as multiples
//! of 24 hours, so 14:00 stays 14:00 across daylight-saving changes.

use std::str::FromStr;

use chrono::{
    DateTime, Days, NaiveDate, NaiveDateTime, NaiveTime, Offset, TimeDelta, TimeZone, Utc,
};
use chrono_tz::Tz;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::DeadlineError;

// ============================================================================
// Adjudication Time
// ============================================================================

/// Wall-clock adjudication time, written `HH:MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct AdjuTime(NaiveTime);

impl AdjuTime {
    /// Creates an adjudication time, or `None` if out of range.
    #[must_use]
    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(Self)
    }

    /// Clock time as a [`NaiveTime`].
    #[must_use]
    pub const fn as_naive(self) -> NaiveTime {
        self.0
    }
}

impl FromStr for AdjuTime {
    type Err = DeadlineError;

    /// Parses exactly two colon-separated integers. Minutes must be in
    /// `0..=59` and hours in `0..=23`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DeadlineError::InvalidTimeFormat(s.to_string());

        let mut parts = s.split(':');
        let (Some(hour), Some(minute), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(invalid());
        };
        let hour: u32 = hour.trim().parse().map_err(|_| invalid())?;
        let minute: u32 = minute.trim().parse().map_err(|_| invalid())?;

        Self::from_hm(hour, minute).ok_or_else(invalid)
    }
}

impl std::fmt::Display for AdjuTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format("%H:%M"))
    }
}

// ============================================================================
// Timezones
// ============================================================================

/// Resolves an IANA timezone identifier such as `America/Los_Angeles`.
///
/// # Errors
///
/// Returns [`DeadlineError::InvalidTimezone`] if the identifier is not in
/// the bundled tz database.
pub fn parse_timezone(timezone_id: &str) -> Result<Tz, DeadlineError> {
    timezone_id
        .trim()
        .parse::<Tz>()
        .map_err(|_| DeadlineError::InvalidTimezone(timezone_id.to_string()))
}

// ============================================================================
// Deadline Computation
// ============================================================================

/// How the deadline date is anchored before the day offset is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum DeadlineAnchor {
    /// The reference instant's calendar date in the game's zone. The
    /// adjudication time may already have passed on that date.
    #[default]
    Today,
    /// The date of the next time the game's clock reads the adjudication
    /// time, strictly after the reference instant.
    NextOccurrence,
}

/// Direct-offset deadline from string inputs.
///
/// Takes the calendar date of `reference` in `timezone_id`, moves it by
/// `days_until` days (zero and negative offsets are allowed), and pins the
/// clock to `local_time`. No check is made against the reference instant.
///
/// # Errors
///
/// Returns [`DeadlineError::InvalidTimeFormat`] for a malformed
/// `local_time`, [`DeadlineError::InvalidTimezone`] for an unknown zone,
/// and [`DeadlineError::DateOutOfRange`] if the offset leaves the
/// supported calendar.
pub fn compute_deadline(
    days_until: i64,
    local_time: &str,
    timezone_id: &str,
    reference: DateTime<Utc>,
) -> Result<DateTime<Tz>, DeadlineError> {
    let time: AdjuTime = local_time.parse()?;
    let tz = parse_timezone(timezone_id)?;
    offset_deadline(days_until, time, tz, reference)
}

/// Direct-offset deadline from parsed inputs. See [`compute_deadline`].
///
/// # Errors
///
/// Returns [`DeadlineError::DateOutOfRange`] if the offset leaves the
/// supported calendar.
pub fn offset_deadline(
    days_until: i64,
    time: AdjuTime,
    tz: Tz,
    reference: DateTime<Utc>,
) -> Result<DateTime<Tz>, DeadlineError> {
    let today = reference.with_timezone(&tz).date_naive();
    at_offset(today, days_until, time, tz)
}

/// First instant strictly after `reference` at which the clock in `tz`
/// reads `time`.
///
/// # Errors
///
/// Returns [`DeadlineError::DateOutOfRange`] at the edge of the supported
/// calendar.
pub fn next_occurrence(
    time: AdjuTime,
    tz: Tz,
    reference: DateTime<Utc>,
) -> Result<DateTime<Tz>, DeadlineError> {
    let today = reference.with_timezone(&tz).date_naive();
    let mut offset = 0;
    loop {
        let candidate = at_offset(today, offset, time, tz)?;
        if candidate > reference {
            return Ok(candidate);
        }
        offset += 1;
    }
}

/// Deadline for a chosen anchor.
///
/// [`DeadlineAnchor::Today`] is [`offset_deadline`].
/// [`DeadlineAnchor::NextOccurrence`] applies `days_until` to the date of
/// [`next_occurrence`].
///
/// # Errors
///
/// Returns [`DeadlineError::DateOutOfRange`] if the result leaves the
/// supported calendar.
pub fn resolve_deadline(
    anchor: DeadlineAnchor,
    days_until: i64,
    time: AdjuTime,
    tz: Tz,
    reference: DateTime<Utc>,
) -> Result<DateTime<Tz>, DeadlineError> {
    let deadline = match anchor {
        DeadlineAnchor::Today => offset_deadline(days_until, time, tz, reference)?,
        DeadlineAnchor::NextOccurrence => {
            let first = next_occurrence(time, tz, reference)?;
            at_offset(first.date_naive(), days_until, time, tz)?
        }
    };
    trace!(?anchor, days_until, %time, %tz, %deadline, "computed deadline");
    Ok(deadline)
}

fn at_offset(
    date: NaiveDate,
    days: i64,
    time: AdjuTime,
    tz: Tz,
) -> Result<DateTime<Tz>, DeadlineError> {
    let magnitude = Days::new(days.unsigned_abs());
    let shifted = if days >= 0 {
        date.checked_add_days(magnitude)
    } else {
        date.checked_sub_days(magnitude)
    }
    .ok_or_else(|| out_of_range(date, days))?;

    localize(tz, shifted.and_time(time.as_naive())).ok_or_else(|| out_of_range(date, days))
}

/// Maps a local wall-clock reading to an instant.
///
/// Repeated readings (clocks set back) take the earlier instant. Readings
/// skipped by a forward jump use the offset in force before the jump, so
/// 02:30 in a one-hour gap lands on 03:30. Returns `None` when the
/// instant falls outside the supported calendar.
fn localize(tz: Tz, local: NaiveDateTime) -> Option<DateTime<Tz>> {
    if let Some(instant) = tz.from_local_datetime(&local).earliest() {
        return Some(instant);
    }
    let earlier = local.checked_sub_signed(TimeDelta::days(1)).unwrap_or(local);
    let before = tz.offset_from_utc_datetime(&earlier).fix();
    local
        .checked_sub_offset(before)
        .map(|utc| utc.and_utc().with_timezone(&tz))
}

fn out_of_range(date: NaiveDate, days: i64) -> DeadlineError {
    DeadlineError::DateOutOfRange {
        from: date.to_string(),
        days,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    fn la() -> Tz {
        parse_timezone("America/Los_Angeles").unwrap()
    }

    fn local(tz: Tz, y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
        tz.with_ymd_and_hms(y, mo, d, h, mi, 0)
            .single()
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test]
    fn parse_adju_time() {
        let t: AdjuTime = "14:00".parse().unwrap();
        assert_eq!(t.as_naive().hour(), 14);
        assert_eq!(t.as_naive().minute(), 0);
        assert_eq!(t.to_string(), "14:00");
        assert_eq!("7:5".parse::<AdjuTime>().unwrap().to_string(), "07:05");
        assert_eq!(" 9 : 30 ".parse::<AdjuTime>().unwrap().to_string(), "09:30");
    }

    #[test]
    fn parse_adju_time_rejects_garbage() {
        for bad in ["25:99", "14", "14:00:00", "", ":", "ab:cd", "-1:00", "12:60", "24:00"] {
            assert_eq!(
                bad.parse::<AdjuTime>(),
                Err(DeadlineError::InvalidTimeFormat(bad.to_string())),
                "input {bad:?}"
            );
        }
    }

    #[test]
    fn parse_timezone_rejects_unknown() {
        assert_eq!(
            parse_timezone("Mars/Olympus_Mons"),
            Err(DeadlineError::InvalidTimezone("Mars/Olympus_Mons".to_string()))
        );
        assert!(parse_timezone("Europe/London").is_ok());
        assert!(parse_timezone("UTC").is_ok());
    }

    #[test]
    fn one_day_offset_keeps_clock_time() {
        let reference = local(la(), 2026, 1, 1, 13, 50);
        let deadline = compute_deadline(1, "14:00", "America/Los_Angeles", reference).unwrap();
        assert_eq!(deadline.date_naive(), NaiveDate::from_ymd_opt(2026, 1, 2).unwrap());
        assert_eq!((deadline.hour(), deadline.minute()), (14, 0));
    }

    #[test]
    fn zero_offset_may_be_in_the_past() {
        let reference = local(la(), 2026, 1, 1, 18, 0);
        let deadline = compute_deadline(0, "14:00", "America/Los_Angeles", reference).unwrap();
        assert!(deadline < reference);
        assert_eq!(deadline.day(), 1);
    }

    #[test]
    fn negative_offset_goes_back() {
        let reference = local(la(), 2026, 3, 1, 9, 0);
        let deadline = compute_deadline(-2, "14:00", "America/Los_Angeles", reference).unwrap();
        assert_eq!(deadline.date_naive(), NaiveDate::from_ymd_opt(2026, 2, 27).unwrap());
    }

    #[test]
    fn anchor_uses_local_date_not_utc_date() {
        // 2026-01-01 20:00 in Los Angeles is already 2026-01-02 in UTC.
        let reference = local(la(), 2026, 1, 1, 20, 0);
        assert_eq!(reference.day(), 2);
        let deadline = compute_deadline(1, "14:00", "America/Los_Angeles", reference).unwrap();
        assert_eq!(deadline.date_naive(), NaiveDate::from_ymd_opt(2026, 1, 2).unwrap());
    }

    #[test]
    fn offset_across_spring_forward_keeps_wall_clock() {
        // US clocks go forward on 2026-03-08.
        let reference = local(la(), 2026, 3, 7, 12, 0);
        let deadline = compute_deadline(2, "14:00", "America/Los_Angeles", reference).unwrap();
        assert_eq!(deadline.date_naive(), NaiveDate::from_ymd_opt(2026, 3, 9).unwrap());
        assert_eq!((deadline.hour(), deadline.minute()), (14, 0));
        let elapsed = deadline.with_timezone(&Utc) - reference;
        assert_eq!(elapsed, TimeDelta::hours(2 * 24 - 1 + 2));
    }

    #[test]
    fn skipped_local_time_moves_forward() {
        let reference = local(la(), 2026, 3, 7, 12, 0);
        let deadline = compute_deadline(1, "02:30", "America/Los_Angeles", reference).unwrap();
        assert_eq!(deadline.date_naive(), NaiveDate::from_ymd_opt(2026, 3, 8).unwrap());
        assert_eq!((deadline.hour(), deadline.minute()), (3, 30));
    }

    #[test]
    fn repeated_local_time_takes_earlier_instant() {
        // US clocks go back on 2026-11-01; 01:30 happens twice.
        let reference = local(la(), 2026, 10, 31, 12, 0);
        let deadline = compute_deadline(1, "01:30", "America/Los_Angeles", reference).unwrap();
        assert_eq!(deadline.with_timezone(&Utc).hour(), 8);
    }

    #[test]
    fn compute_deadline_validates_inputs() {
        let now = Utc::now();
        assert_eq!(
            compute_deadline(1, "25:99", "America/Los_Angeles", now),
            Err(DeadlineError::InvalidTimeFormat("25:99".to_string()))
        );
        assert_eq!(
            compute_deadline(1, "14:00", "Not/AZone", now),
            Err(DeadlineError::InvalidTimezone("Not/AZone".to_string()))
        );
    }

    #[test]
    fn huge_offset_is_out_of_range() {
        let now = Utc::now();
        let err = compute_deadline(i64::MAX, "14:00", "UTC", now).unwrap_err();
        assert!(matches!(err, DeadlineError::DateOutOfRange { .. }));
        let err = compute_deadline(i64::MIN, "14:00", "UTC", now).unwrap_err();
        assert!(matches!(err, DeadlineError::DateOutOfRange { .. }));
    }

    #[test]
    fn last_calendar_day_behind_utc_is_out_of_range() {
        // 23:00 in Los Angeles on the last supported date is past the end
        // of the calendar in UTC.
        let reference = local(la(), 2026, 1, 1, 13, 50);
        let days = (NaiveDate::MAX - NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()).num_days();
        let err = compute_deadline(days, "23:00", "America/Los_Angeles", reference).unwrap_err();
        assert!(matches!(err, DeadlineError::DateOutOfRange { days: d, .. } if d == days));
    }

    #[test]
    fn next_occurrence_later_today() {
        let reference = local(la(), 2026, 1, 1, 13, 50);
        let next = next_occurrence("14:00".parse().unwrap(), la(), reference).unwrap();
        assert_eq!(next.with_timezone(&Utc) - reference, TimeDelta::minutes(10));
    }

    #[test]
    fn next_occurrence_rolls_to_tomorrow() {
        let reference = local(la(), 2026, 1, 1, 14, 0);
        let next = next_occurrence("14:00".parse().unwrap(), la(), reference).unwrap();
        assert_eq!(next.date_naive(), NaiveDate::from_ymd_opt(2026, 1, 2).unwrap());
        assert!(next > reference);
    }

    #[test]
    fn anchors_differ_only_when_time_has_passed() {
        let time: AdjuTime = "14:00".parse().unwrap();
        let before = local(la(), 2026, 1, 1, 13, 50);
        assert_eq!(
            resolve_deadline(DeadlineAnchor::Today, 1, time, la(), before).unwrap(),
            resolve_deadline(DeadlineAnchor::NextOccurrence, 1, time, la(), before).unwrap()
        );

        let after = local(la(), 2026, 1, 1, 15, 0);
        let today = resolve_deadline(DeadlineAnchor::Today, 1, time, la(), after).unwrap();
        let next = resolve_deadline(DeadlineAnchor::NextOccurrence, 1, time, la(), after).unwrap();
        assert_eq!(today.day(), 2);
        assert_eq!(next.day(), 3);
    }

    #[test]
    fn next_occurrence_is_within_a_day() {
        let time: AdjuTime = "00:00".parse().unwrap();
        let tz = parse_timezone("Asia/Tokyo").unwrap();
        for hour in 0..24 {
            let reference = local(tz, 2026, 6, 15, hour, 30);
            let next = next_occurrence(time, tz, reference).unwrap();
            assert!(next > reference);
            assert!(next.with_timezone(&Utc) - reference <= TimeDelta::hours(24));
        }
    }

    #[test]
    fn next_occurrence_across_dst_changes() {
        let time: AdjuTime = "14:00".parse().unwrap();
        // Half-hour steps over the US spring-forward and fall-back weekends.
        for start in [(3, 7), (10, 31)] {
            let first = local(la(), 2026, start.0, start.1, 0, 0);
            for step in 0..96 {
                let reference = first + TimeDelta::minutes(30 * step);
                let next = next_occurrence(time, la(), reference).unwrap();
                assert!(next > reference, "{reference}");
                assert!(next.with_timezone(&Utc) - reference <= TimeDelta::hours(25));
                assert_eq!((next.hour(), next.minute()), (14, 0));
            }
        }
    }
}
