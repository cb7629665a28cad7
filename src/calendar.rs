// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! # Civil calendar ↔ Julian Date
//!
//! Both directions follow Chapter 7 of *Jean Meeus, Astronomical Algorithms
//! (2nd ed. 1998)*, keeping every integer truncation of the published
//! procedure.
//!
//! ## Calendar cut-over
//! The two directions switch calendars at slightly different points:
//!
//! * [`datetime_to_jd`] applies the Gregorian correction only to instants
//!   strictly after [`GREGORIAN_REFORM`](crate::GREGORIAN_REFORM)
//!   (1582-10-15T12:00:00Z).
//! * [`jd_to_datetime`] decodes Gregorian fields for `JD ≥ 2299160.5`.
//!
//! A JD in `[2299160.5, 2299161.0]` therefore decodes to a Gregorian morning
//! of 1582-10-15 that encodes back ten days later.
//!
//! ## Lossy boundary
//! Decoding truncates the time of day stage by stage (hours, minutes,
//! seconds), so `JD → civil → JD` loses up to one second and
//! `civil → JD → civil` drops sub-second parts.
//!
//! ## Malformed input
//! Fields are not validated. Over- or under-flowed values (day 32, hour 25)
//! flow through the arithmetic and yield a defined JD. Use
//! [`CivilDateTime::validate`] first when that matters.

use crate::civil::{CalendarDate, CivilDateTime};
use crate::julian_date::JulianDate;
use qtty::Centuries;

/// First integer day (`Z`) decoded in the Gregorian calendar.
const GREGORIAN_DAY_NUMBER: f64 = 2_299_161.0;

/// Julian Date of a civil UTC date-time.
pub fn datetime_to_jd<D: CalendarDate + ?Sized>(datetime: &D) -> JulianDate {
    let civil = datetime.civil();

    // January and February count as months 13 and 14 of the previous year.
    let (mut year, mut month) = (civil.year as f64, civil.month as f64);
    if civil.month < 3 {
        year -= 1.0;
        month += 12.0;
    }

    let day = civil.fractional_day();
    let a = (year / 100.0).floor();
    let b = if civil.is_gregorian() {
        2.0 - a + (a / 4.0).floor()
    } else {
        0.0
    };

    JulianDate::new(
        (365.25 * (year + 4716.0)).floor() + (30.6001 * (month + 1.0)).floor() + day + b - 1524.5,
    )
}

/// Civil UTC date-time of a Julian Date.
///
/// The time of day is truncated to whole seconds; `nanosecond` is always 0.
pub fn jd_to_datetime(jd: JulianDate) -> CivilDateTime {
    let jd = jd.value() + 0.5;
    let z = jd.floor();
    let f = jd - z;

    let a = if z >= GREGORIAN_DAY_NUMBER {
        let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
        z + 1.0 + alpha - (alpha / 4.0).floor()
    } else {
        z
    };

    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day_of_month = b - d - (30.6001 * e).floor() + f;
    let day = day_of_month.floor();

    let hours = (day_of_month - day) * 24.0;
    let hour = hours.floor();
    let minutes = (hours - hour) * 60.0;
    let minute = minutes.floor();
    let second = ((minutes - minute) * 60.0).floor();

    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
    let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };

    CivilDateTime::new(
        year as i32,
        month as u32,
        day as u32,
        hour as u32,
        minute as u32,
        second as u32,
    )
}

/// Julian centuries since J2000.0 of a Julian Date.
#[inline]
pub fn jd_to_t(jd: JulianDate) -> Centuries {
    jd.julian_centuries()
}

/// Julian centuries since J2000.0 of a civil UTC date-time.
#[inline]
pub fn datetime_to_t<D: CalendarDate + ?Sized>(datetime: &D) -> Centuries {
    jd_to_t(datetime_to_jd(datetime))
}

// ── conversions ───────────────────────────────────────────────────────────

impl CivilDateTime {
    /// Julian Date of this reading; see [`datetime_to_jd`].
    #[inline]
    pub fn to_julian_date(&self) -> JulianDate {
        datetime_to_jd(self)
    }
}

impl JulianDate {
    /// Civil UTC reading of this Julian Date; see [`jd_to_datetime`].
    #[inline]
    pub fn to_civil(&self) -> CivilDateTime {
        jd_to_datetime(*self)
    }
}

impl From<CivilDateTime> for JulianDate {
    #[inline]
    fn from(civil: CivilDateTime) -> Self {
        datetime_to_jd(&civil)
    }
}

impl From<JulianDate> for CivilDateTime {
    #[inline]
    fn from(jd: JulianDate) -> Self {
        jd_to_datetime(jd)
    }
}
