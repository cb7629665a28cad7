// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Lunation seeds for new-moon searches (Meeus ch. 49).
//!
//! `k` counts mean synodic months since the new moon of 2000-01-06; integer
//! values are new moons. [`approx_k`] is deliberately coarse: it only seeds
//! an iterative search done elsewhere.

use crate::civil::CalendarDate;
use qtty::Centuries;

/// Mean synodic months per Julian year.
pub const LUNATIONS_PER_YEAR: f64 = 12.3685;

/// Mean synodic months per Julian century.
pub const LUNATIONS_PER_CENTURY: f64 = 1236.85;

/// Fractional year at which `k = 0`.
pub const LUNATION_EPOCH_YEAR: f64 = 2000.0;

/// Approximate lunation number `k` of a civil date.
///
/// Uses the coarse fractional year `year + month / 12 + day / 365.25`.
#[inline]
pub fn approx_k<D: CalendarDate + ?Sized>(datetime: &D) -> f64 {
    let civil = datetime.civil();
    let year = civil.year as f64 + civil.month as f64 / 12.0 + civil.day as f64 / 365.25;
    (year - LUNATION_EPOCH_YEAR) * LUNATIONS_PER_YEAR
}

/// Julian centuries since J2000.0 spanned by `k` mean lunations.
#[inline]
pub fn k_to_t(k: f64) -> Centuries {
    Centuries::new(k / LUNATIONS_PER_CENTURY)
}
