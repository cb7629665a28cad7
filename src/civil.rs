// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Civil (calendar-field) date-times and the capability trait the converters
//! read them through.
//!
//! [`CivilDateTime`] stores the raw fields of a UTC calendar reading using
//! astronomical year numbering (year 0 exists, year −1 is 2 BC). Dates up to
//! [`GREGORIAN_REFORM`] are reckoned in the proleptic Julian calendar, later
//! ones in the Gregorian calendar.
//!
//! Construction through [`CivilDateTime::new`] performs **no** validation:
//! the Meeus algorithms tolerate over- and under-flowed fields and so does
//! this type. [`CivilDateTime::try_new`] and [`CivilDateTime::validate`] form
//! the separate checked layer.

use crate::error::CalendarError;
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Timelike, Utc};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Last instant reckoned in the Julian calendar: 1582-10-15T12:00:00Z.
///
/// Instants strictly after it receive the Gregorian correction.
pub const GREGORIAN_REFORM: CivilDateTime = CivilDateTime::new(1582, 10, 15, 12, 0, 0);

const NANOS_PER_SECOND: u32 = 1_000_000_000;

/// Calendar fields of a UTC instant.
///
/// Field order is significant: the derived ordering compares year, then
/// month, day, hour, minute, second and nanosecond, which is the instant
/// ordering for well-formed values.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CivilDateTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    pub nanosecond: u32,
}

impl CivilDateTime {
    // ── constructors ──────────────────────────────────────────────────

    /// Build from raw fields without any range check.
    #[inline]
    pub const fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            nanosecond: 0,
        }
    }

    /// Midnight UTC of the given date, unchecked.
    #[inline]
    pub const fn from_ymd(year: i32, month: u32, day: u32) -> Self {
        Self::new(year, month, day, 0, 0, 0)
    }

    /// Build from fields and reject anything that is not a real calendar
    /// reading (see [`validate`](Self::validate)).
    pub fn try_new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Result<Self, CalendarError> {
        let civil = Self::new(year, month, day, hour, minute, second);
        civil.validate()?;
        Ok(civil)
    }

    /// Replace the sub-second part.
    #[inline]
    pub const fn with_nanosecond(mut self, nanosecond: u32) -> Self {
        self.nanosecond = nanosecond;
        self
    }

    // ── derived values ────────────────────────────────────────────────

    /// Day of month with the time of day folded in as a fraction.
    ///
    /// `day + (hour + (minute + second / 60) / 60) / 24`, where `second`
    /// includes the nanosecond part.
    #[inline]
    pub fn fractional_day(&self) -> f64 {
        let seconds = self.second as f64 + self.nanosecond as f64 / NANOS_PER_SECOND as f64;
        self.day as f64 + (self.hour as f64 + (self.minute as f64 + seconds / 60.0) / 60.0) / 24.0
    }

    /// `true` when this instant is reckoned in the Gregorian calendar.
    #[inline]
    pub fn is_gregorian(&self) -> bool {
        *self > GREGORIAN_REFORM
    }

    // ── validation ────────────────────────────────────────────────────

    /// Check every field against the calendar in force at this date.
    pub fn validate(&self) -> Result<(), CalendarError> {
        let max = days_in_month(self.year, self.month)
            .ok_or(CalendarError::MonthOutOfRange(self.month))?;
        if self.day == 0 || self.day > max {
            return Err(CalendarError::DayOutOfRange {
                year: self.year,
                month: self.month,
                day: self.day,
                max,
            });
        }
        if self.hour >= 24 || self.minute >= 60 || self.second >= 60 {
            return Err(CalendarError::TimeOutOfRange {
                hour: self.hour,
                minute: self.minute,
                second: self.second,
            });
        }
        if self.nanosecond >= NANOS_PER_SECOND {
            return Err(CalendarError::NanosecondOutOfRange(self.nanosecond));
        }
        Ok(())
    }
}

/// Leap-year rule of the calendar in force for `year`.
///
/// Julian (every fourth year) up to 1582, Gregorian afterwards.
#[inline]
pub fn is_leap_year(year: i32) -> bool {
    if year <= GREGORIAN_REFORM.year {
        year.rem_euclid(4) == 0
    } else {
        (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
    }
}

/// Number of days in `month` of `year`, or `None` for a month outside 1..=12.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Some(31),
        4 | 6 | 9 | 11 => Some(30),
        2 if is_leap_year(year) => Some(29),
        2 => Some(28),
        _ => None,
    }
}

impl fmt::Display for CivilDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )?;
        if self.nanosecond != 0 {
            write!(f, ".{:09}", self.nanosecond)?;
        }
        f.write_str("Z")
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// CalendarDate capability
// ═══════════════════════════════════════════════════════════════════════════

/// Anything that can present its UTC calendar fields.
///
/// The converters only ever read fields through this trait, so they are
/// independent of the date/time library a caller uses. Implementations copy
/// fields verbatim and do not re-label them between calendars.
pub trait CalendarDate {
    /// The UTC calendar fields of this value.
    fn civil(&self) -> CivilDateTime;
}

impl CalendarDate for CivilDateTime {
    #[inline]
    fn civil(&self) -> CivilDateTime {
        *self
    }
}

impl CalendarDate for NaiveDateTime {
    /// Naive values are read as UTC.
    fn civil(&self) -> CivilDateTime {
        CivilDateTime::new(
            self.year(),
            self.month(),
            self.day(),
            self.hour(),
            self.minute(),
            self.second(),
        )
        .with_nanosecond(self.nanosecond())
    }
}

impl CalendarDate for DateTime<Utc> {
    #[inline]
    fn civil(&self) -> CivilDateTime {
        self.naive_utc().civil()
    }
}

// ── chrono bridges ────────────────────────────────────────────────────────

impl TryFrom<CivilDateTime> for NaiveDateTime {
    type Error = CalendarError;

    fn try_from(civil: CivilDateTime) -> Result<Self, Self::Error> {
        NaiveDate::from_ymd_opt(civil.year, civil.month, civil.day)
            .and_then(|date| {
                date.and_hms_nano_opt(civil.hour, civil.minute, civil.second, civil.nanosecond)
            })
            .ok_or_else(|| {
                log::debug!("chrono rejected calendar fields {civil}");
                CalendarError::NotRepresentable(civil)
            })
    }
}

impl TryFrom<CivilDateTime> for DateTime<Utc> {
    type Error = CalendarError;

    #[inline]
    fn try_from(civil: CivilDateTime) -> Result<Self, Self::Error> {
        NaiveDateTime::try_from(civil).map(|naive| naive.and_utc())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn reform_instant_is_not_gregorian() {
        assert!(!GREGORIAN_REFORM.is_gregorian());
        assert!(GREGORIAN_REFORM.with_nanosecond(1_000).is_gregorian());
        assert!(CivilDateTime::new(1582, 10, 15, 12, 0, 1).is_gregorian());
        assert!(!CivilDateTime::new(1582, 10, 4, 23, 59, 59).is_gregorian());
    }

    #[test]
    fn ordering_follows_field_order() {
        let a = CivilDateTime::new(-44, 3, 15, 0, 0, 0);
        let b = CivilDateTime::new(-44, 3, 15, 0, 0, 1);
        let c = CivilDateTime::new(33, 1, 1, 0, 0, 0);
        assert!(a < b && b < c);
    }

    #[test]
    fn fractional_day_folds_time_of_day() {
        let civil = CivilDateTime::new(1957, 10, 4, 19, 26, 24);
        assert!((civil.fractional_day() - 4.81).abs() < 1e-12);
        let noon = CivilDateTime::new(2000, 1, 1, 12, 0, 0);
        assert_eq!(noon.fractional_day(), 1.5);
    }

    #[test]
    fn leap_rule_switches_at_reform() {
        assert!(is_leap_year(1500));
        assert!(is_leap_year(-4));
        assert!(is_leap_year(0));
        assert!(!is_leap_year(-1));
        assert!(!is_leap_year(1700));
        assert!(is_leap_year(2000));
        assert_eq!(days_in_month(1900, 2), Some(28));
        assert_eq!(days_in_month(1300, 2), Some(29));
        assert_eq!(days_in_month(2023, 13), None);
    }

    #[test]
    fn validate_reports_the_offending_field() {
        assert_eq!(
            CivilDateTime::try_new(2024, 0, 1, 0, 0, 0),
            Err(CalendarError::MonthOutOfRange(0))
        );
        assert_eq!(
            CivilDateTime::try_new(2023, 2, 29, 0, 0, 0),
            Err(CalendarError::DayOutOfRange {
                year: 2023,
                month: 2,
                day: 29,
                max: 28
            })
        );
        assert!(matches!(
            CivilDateTime::try_new(2023, 6, 1, 24, 0, 0),
            Err(CalendarError::TimeOutOfRange { hour: 24, .. })
        ));
        assert_eq!(
            CivilDateTime::from_ymd(2023, 6, 1)
                .with_nanosecond(1_000_000_000)
                .validate(),
            Err(CalendarError::NanosecondOutOfRange(1_000_000_000))
        );
        assert!(CivilDateTime::try_new(1500, 2, 29, 6, 0, 0).is_ok());
    }

    #[test]
    fn chrono_fields_are_read_verbatim() {
        let dt = Utc.with_ymd_and_hms(1957, 10, 4, 19, 26, 24).unwrap();
        assert_eq!(dt.civil(), CivilDateTime::new(1957, 10, 4, 19, 26, 24));

        let naive = NaiveDate::from_ymd_opt(-584, 5, 28)
            .unwrap()
            .and_hms_milli_opt(15, 7, 12, 250)
            .unwrap();
        assert_eq!(
            naive.civil(),
            CivilDateTime::new(-584, 5, 28, 15, 7, 12).with_nanosecond(250_000_000)
        );
    }

    #[test]
    fn chrono_bridge_roundtrips_and_rejects_julian_leap_day() {
        let civil = CivilDateTime::new(2024, 2, 29, 23, 59, 59).with_nanosecond(5);
        let dt = DateTime::<Utc>::try_from(civil).expect("representable");
        assert_eq!(dt.civil(), civil);

        let julian_only = CivilDateTime::from_ymd(1500, 2, 29);
        assert_eq!(
            NaiveDateTime::try_from(julian_only),
            Err(CalendarError::NotRepresentable(julian_only))
        );
    }

    #[test]
    fn display_uses_astronomical_years() {
        assert_eq!(
            CivilDateTime::new(333, 1, 27, 12, 0, 0).to_string(),
            "0333-01-27T12:00:00Z"
        );
        assert_eq!(
            GREGORIAN_REFORM.with_nanosecond(1_000).to_string(),
            "1582-10-15T12:00:00.000001000Z"
        );
        assert_eq!(CivilDateTime::from_ymd(-584, 5, 28).to_string(), "-584-05-28T00:00:00Z");
    }
}
