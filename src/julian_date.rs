// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Julian Date value type.
//!
//! [`JulianDate`] stores a single [`Days`] quantity counted from noon UTC,
//! 1 January 4713 BC (proleptic Julian calendar). Day boundaries fall at
//! noon. The struct is `Copy` and layout-identical to an `f64`.
//!
//! Calendar conversions live in [`crate::calendar`]; this module only holds
//! the value type, its epoch constants and the linear maps derived from it.

use crate::calendar::{datetime_to_jd, jd_to_datetime};
use crate::error::CalendarError;
use chrono::{DateTime, Utc};
use qtty::*;
use std::ops::{Add, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A point on the continuous Julian Day axis.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct JulianDate {
    quantity: Days,
}

impl JulianDate {
    /// J2000.0 epoch: 2000-01-01T12:00:00 (JD 2 451 545.0).
    pub const J2000: Self = Self::new(2_451_545.0);

    /// One Julian year expressed in days.
    pub const JULIAN_YEAR: Days = Days::new(365.25);

    /// One Julian century expressed in days.
    pub const JULIAN_CENTURY: Days = Days::new(36_525.0);

    // ── constructors ──────────────────────────────────────────────────

    /// Create from a raw day count.
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self {
            quantity: Days::new(value),
        }
    }

    /// Create from a [`Days`] quantity.
    #[inline]
    pub const fn from_days(days: Days) -> Self {
        Self { quantity: days }
    }

    // ── accessors ─────────────────────────────────────────────────────

    /// The underlying quantity in days.
    #[inline]
    pub const fn quantity(&self) -> Days {
        self.quantity
    }

    /// The underlying scalar value in days.
    #[inline]
    pub const fn value(&self) -> f64 {
        self.quantity.value()
    }

    // ── epoch-relative measures ───────────────────────────────────────

    /// Julian centuries since J2000.0, `T = (JD − 2451545) / 36525`.
    #[inline]
    pub fn julian_centuries(&self) -> Centuries {
        Centuries::new((self.value() - Self::J2000.value()) / Self::JULIAN_CENTURY.value())
    }

    /// Julian years since J2000.0.
    #[inline]
    pub fn julian_years(&self) -> JulianYears {
        JulianYears::new((self.value() - Self::J2000.value()) / Self::JULIAN_YEAR.value())
    }

    // ── UTC helpers ───────────────────────────────────────────────────

    /// Julian Date of a `chrono::DateTime<Utc>`.
    ///
    /// The calendar fields are read verbatim, so pre-reform chrono values are
    /// interpreted as Julian-calendar readings. No ΔT is applied.
    #[inline]
    pub fn from_utc(datetime: DateTime<Utc>) -> Self {
        datetime_to_jd(&datetime)
    }

    /// Convert back to a `chrono::DateTime<Utc>`.
    ///
    /// Seconds are truncated. Fails when chrono cannot hold the decoded
    /// fields.
    pub fn to_utc(&self) -> Result<DateTime<Utc>, CalendarError> {
        DateTime::<Utc>::try_from(jd_to_datetime(*self))
    }
}

// ── Display ───────────────────────────────────────────────────────────────

impl std::fmt::Display for JulianDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "JD {}", self.quantity)
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl Serialize for JulianDate {
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: Serializer,
    {
        serializer.serialize_f64(self.value())
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for JulianDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let v = f64::deserialize(deserializer)?;
        Ok(Self::new(v))
    }
}

// ── Arithmetic ────────────────────────────────────────────────────────────

impl Add<Days> for JulianDate {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Days) -> Self::Output {
        Self::from_days(self.quantity + rhs)
    }
}

impl Sub<Days> for JulianDate {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Days) -> Self::Output {
        Self::from_days(self.quantity - rhs)
    }
}

impl Sub for JulianDate {
    type Output = Days;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.quantity - rhs.quantity
    }
}

// ── From/Into ─────────────────────────────────────────────────────────────

impl From<Days> for JulianDate {
    #[inline]
    fn from(days: Days) -> Self {
        Self::from_days(days)
    }
}

impl From<JulianDate> for Days {
    #[inline]
    fn from(jd: JulianDate) -> Self {
        jd.quantity
    }
}

impl From<Centuries> for JulianDate {
    fn from(centuries: Centuries) -> Self {
        // `Centuries` are interpreted as Julian centuries relative to J2000.
        Self::J2000 + Days::new(centuries.value() * Self::JULIAN_CENTURY.value())
    }
}

impl From<JulianDate> for Centuries {
    fn from(jd: JulianDate) -> Self {
        jd.julian_centuries()
    }
}
