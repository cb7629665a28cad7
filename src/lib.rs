// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Calendar ↔ Julian Date conversion and the time arguments derived from it.
//!
//! This crate provides the numeric time plumbing that positional-astronomy
//! formulas start from. Every function is pure and synchronous.
//!
//! # Operations
//!
//! | Function | Result |
//! |----------|--------|
//! | [`datetime_to_jd`] | Julian Date of a civil UTC date-time |
//! | [`jd_to_datetime`] | civil UTC date-time of a Julian Date |
//! | [`jd_to_t`] | Julian centuries `T` since J2000.0 |
//! | [`datetime_to_t`] | `T` straight from a civil date-time |
//! | [`delta_t`] | **ΔT = TT − UT** in seconds, `None` before −1999 |
//! | [`approx_k`] | seed lunation number `k` |
//! | [`k_to_t`] | `T` spanned by `k` mean lunations |
//!
//! # Core types
//!
//! - [`CivilDateTime`] — raw UTC calendar fields, astronomical year numbering.
//! - [`CalendarDate`] — trait through which the converters read any
//!   date-time value (implemented for `CivilDateTime` and chrono's
//!   `DateTime<Utc>` / `NaiveDateTime`).
//! - [`JulianDate`] — a point on the Julian Day axis.
//!
//! # Calendars
//!
//! Dates up to [`GREGORIAN_REFORM`] (1582-10-15T12:00:00Z) are reckoned in
//! the proleptic Julian calendar, later ones in the Gregorian calendar.
//!
//! ```rust
//! use epochal::{datetime_to_jd, jd_to_datetime, CivilDateTime};
//!
//! let sputnik = CivilDateTime::new(1957, 10, 4, 19, 26, 24);
//! let jd = datetime_to_jd(&sputnik);
//! assert!((jd.value() - 2_436_116.31).abs() < 1e-6);
//! assert_eq!(jd_to_datetime(jd).day, 4);
//! ```

mod calendar;
mod civil;
mod delta_t;
mod error;
mod julian_date;
mod lunation;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use calendar::{datetime_to_jd, datetime_to_t, jd_to_datetime, jd_to_t};
pub use civil::{days_in_month, is_leap_year, CalendarDate, CivilDateTime, GREGORIAN_REFORM};
pub use delta_t::{decimal_year, delta_t, delta_t_for_year, julian_ephemeris_day, MODEL_START_YEAR};
pub use error::CalendarError;
pub use julian_date::JulianDate;
pub use lunation::{approx_k, k_to_t, LUNATIONS_PER_CENTURY, LUNATIONS_PER_YEAR, LUNATION_EPOCH_YEAR};
