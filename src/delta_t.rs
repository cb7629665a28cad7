// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! # ΔT (Delta T) — TT − UT estimate
//!
//! This module implements the piecewise polynomial expressions for
//! **ΔT = TT − UT** published by Espenak & Meeus for the *Five Millennium
//! Canon of Solar Eclipses* (NASA/TP-2006-214141).
//!
//! The model is evaluated on a fractional year centred in the month,
//! `y = year + (month − 0.5) / 12`, and dispatched over an ordered table of
//! right-open segments. Adjacent segments are separate empirical fits, so the
//! estimate jumps slightly at every boundary; those jumps are part of the
//! published model.
//!
//! ## Quick Example
//! ```rust
//! use epochal::{delta_t, CivilDateTime};
//!
//! let dt = delta_t(&CivilDateTime::from_ymd(2000, 1, 1)).expect("modelled year");
//! assert!(dt.value() > 63.0 && dt.value() < 64.0);
//! ```
//!
//! ## Valid Time Range
//! Years before −1999 are outside the canon and yield `None`. From 2150 on
//! the long-term parabola is extrapolated without bound.
//!
//! ## Scientific References
//! * Espenak & Meeus (2006): *Five Millennium Canon of Solar Eclipses*.
//! * Morrison & Stephenson (2004): "Historical values of the Earth's clock error".

use crate::calendar::datetime_to_jd;
use crate::civil::CalendarDate;
use crate::julian_date::JulianDate;
use qtty::{Day, Seconds};

/// Earliest fractional year covered by the model.
pub const MODEL_START_YEAR: f64 = -1999.0;

/// One right-open piece of the ΔT model: valid for `y < until`.
struct Segment {
    until: f64,
    label: &'static str,
    model: fn(f64) -> Seconds,
}

/// Segments in ascending order; the first whose `until` exceeds `y` applies.
#[rustfmt::skip]
const SEGMENTS: [Segment; 14] = [
    Segment { until: -500.0, label: "-1999..-500", model: long_term },
    Segment { until: 500.0, label: "-500..500", model: antiquity },
    Segment { until: 1600.0, label: "500..1600", model: medieval },
    Segment { until: 1700.0, label: "1600..1700", model: seventeenth_century },
    Segment { until: 1800.0, label: "1700..1800", model: eighteenth_century },
    Segment { until: 1860.0, label: "1800..1860", model: early_nineteenth_century },
    Segment { until: 1900.0, label: "1860..1900", model: late_nineteenth_century },
    Segment { until: 1920.0, label: "1900..1920", model: early_twentieth_century },
    Segment { until: 1941.0, label: "1920..1941", model: interwar },
    Segment { until: 1961.0, label: "1941..1961", model: mid_twentieth_century },
    Segment { until: 1986.0, label: "1961..1986", model: late_twentieth_century },
    Segment { until: 2005.0, label: "1986..2005", model: turn_of_millennium },
    Segment { until: 2050.0, label: "2005..2050", model: near_future },
    Segment { until: 2150.0, label: "2050..2150", model: far_future },
];

// ------------------------------------------------------------------------------------
// ΔT Approximation Sections by Time Interval
// ------------------------------------------------------------------------------------

/// Evaluates `c[0] + c[1]·x + c[2]·x² + …`.
#[inline]
fn polynomial(x: f64, coefficients: &[f64]) -> f64 {
    coefficients.iter().rev().fold(0.0, |acc, c| acc * x + c)
}

/// **Years < −500 and ≥ 2150**
/// Long-term parabola of Morrison & Stephenson (2004).
#[inline]
fn long_term(y: f64) -> Seconds {
    let u = (y - 1820.0) / 100.0;
    Seconds::new(-20.0 + 32.0 * u * u)
}

/// **Years −500 to 500**
#[inline]
fn antiquity(y: f64) -> Seconds {
    const C: [f64; 7] = [
        10_583.6,
        -1_014.41,
        33.783_11,
        -5.952_053,
        -0.179_845_2,
        0.022_174_192,
        0.009_031_652_1,
    ];
    Seconds::new(polynomial(y / 100.0, &C))
}

/// **Years 500 to 1600**
#[inline]
fn medieval(y: f64) -> Seconds {
    const C: [f64; 7] = [
        1_574.2,
        -556.01,
        71.234_72,
        0.319_781,
        -0.850_346_3,
        -0.005_050_998,
        0.008_357_207_3,
    ];
    Seconds::new(polynomial((y - 1000.0) / 100.0, &C))
}

/// **Years 1600 to 1700**
#[inline]
fn seventeenth_century(y: f64) -> Seconds {
    const C: [f64; 4] = [120.0, -0.9808, -0.015_32, 1.0 / 7_129.0];
    Seconds::new(polynomial(y - 1600.0, &C))
}

/// **Years 1700 to 1800**
#[inline]
fn eighteenth_century(y: f64) -> Seconds {
    const C: [f64; 5] = [8.83, 0.1603, -0.005_928_5, 0.000_133_36, -1.0 / 1_174_000.0];
    Seconds::new(polynomial(y - 1700.0, &C))
}

/// **Years 1800 to 1860**
#[inline]
fn early_nineteenth_century(y: f64) -> Seconds {
    const C: [f64; 8] = [
        13.72,
        -0.332_447,
        0.006_861_2,
        0.004_111_6,
        -0.000_374_36,
        0.000_012_127_2,
        -0.000_000_169_9,
        0.000_000_000_875,
    ];
    Seconds::new(polynomial(y - 1800.0, &C))
}

/// **Years 1860 to 1900**
#[inline]
fn late_nineteenth_century(y: f64) -> Seconds {
    const C: [f64; 6] = [
        7.62,
        0.5737,
        -0.251_754,
        0.016_806_68,
        -0.000_447_362_4,
        1.0 / 233_174.0,
    ];
    Seconds::new(polynomial(y - 1860.0, &C))
}

/// **Years 1900 to 1920**
#[inline]
fn early_twentieth_century(y: f64) -> Seconds {
    const C: [f64; 5] = [-2.79, 1.494_119, -0.059_893_9, 0.006_196_6, -0.000_197];
    Seconds::new(polynomial(y - 1900.0, &C))
}

/// **Years 1920 to 1941**
#[inline]
fn interwar(y: f64) -> Seconds {
    const C: [f64; 4] = [21.20, 0.844_93, -0.076_100, 0.002_093_6];
    Seconds::new(polynomial(y - 1920.0, &C))
}

/// **Years 1941 to 1961**
#[inline]
fn mid_twentieth_century(y: f64) -> Seconds {
    const C: [f64; 4] = [29.07, 0.407, -1.0 / 233.0, 1.0 / 2_547.0];
    Seconds::new(polynomial(y - 1950.0, &C))
}

/// **Years 1961 to 1986**
#[inline]
fn late_twentieth_century(y: f64) -> Seconds {
    const C: [f64; 4] = [45.45, 1.067, -1.0 / 260.0, -1.0 / 718.0];
    Seconds::new(polynomial(y - 1975.0, &C))
}

/// **Years 1986 to 2005**
#[inline]
fn turn_of_millennium(y: f64) -> Seconds {
    const C: [f64; 6] = [
        63.86,
        0.3345,
        -0.060_374,
        0.001_727_5,
        0.000_651_814,
        0.000_023_735_99,
    ];
    Seconds::new(polynomial(y - 2000.0, &C))
}

/// **Years 2005 to 2050**
#[inline]
fn near_future(y: f64) -> Seconds {
    const C: [f64; 3] = [62.92, 0.322_17, 0.005_589];
    Seconds::new(polynomial(y - 2000.0, &C))
}

/// **Years 2050 to 2150**
/// Long-term parabola with a linear term closing the gap to 2050.
#[inline]
fn far_future(y: f64) -> Seconds {
    long_term(y) - Seconds::new(0.5628 * (2150.0 - y))
}

// ------------------------------------------------------------------------------------

/// Month-centred fractional year used by the ΔT model.
///
/// `year + (month_index + 0.5) / 12` with a 0-based month index.
#[inline]
pub fn decimal_year<D: CalendarDate + ?Sized>(datetime: &D) -> f64 {
    let civil = datetime.civil();
    civil.year as f64 + (civil.month as f64 - 1.0 + 0.5) / 12.0
}

/// Returns **ΔT** in seconds for a fractional year, or `None` before −1999.
pub fn delta_t_for_year(y: f64) -> Option<Seconds> {
    if y < MODEL_START_YEAR {
        log::debug!("ΔT requested for year {y:.3}, before the modelled range");
        return None;
    }
    let dt = match SEGMENTS.iter().find(|segment| y < segment.until) {
        Some(segment) => {
            log::trace!("ΔT segment {} for year {y:.3}", segment.label);
            (segment.model)(y)
        }
        None => long_term(y),
    };
    Some(dt)
}

/// Returns **ΔT = TT − UT** in seconds for a civil UTC date-time.
///
/// `None` signals that no estimate exists (years before −1999); callers
/// must handle it before using the value.
#[inline]
pub fn delta_t<D: CalendarDate + ?Sized>(datetime: &D) -> Option<Seconds> {
    delta_t_for_year(decimal_year(datetime))
}

/// Julian Ephemeris Day (TT axis) of a civil UTC date-time.
///
/// Adds ΔT to the UT Julian Date; `None` wherever ΔT is undefined.
pub fn julian_ephemeris_day<D: CalendarDate + ?Sized>(datetime: &D) -> Option<JulianDate> {
    let dt = delta_t(datetime)?;
    Some(datetime_to_jd(datetime) + dt.to::<Day>())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::civil::CivilDateTime;
    use qtty::Days;

    fn assert_close(y: f64, expected: f64) {
        let dt = delta_t_for_year(y).expect("modelled year");
        assert!(
            (dt - Seconds::new(expected)).abs() < Seconds::new(1e-6),
            "ΔT({y}) = {dt}, expected {expected}"
        );
    }

    #[test]
    fn undefined_before_model_start() {
        assert!(delta_t_for_year(-1999.000_001).is_none());
        assert!(delta_t_for_year(-5000.0).is_none());
        assert!(delta_t(&CivilDateTime::from_ymd(-2500, 1, 1)).is_none());
        assert!(delta_t_for_year(MODEL_START_YEAR).is_some());
    }

    #[test]
    fn segment_samples() {
        assert_close(-1999.0, 46_651.2352);
        assert_close(-1000.0, 25_427.68);
        assert_close(0.0, 10_583.6);
        assert_close(1000.0, 1_574.2);
        assert_close(1650.0, 50.194_015_991_022_6);
        assert_close(1750.0, 13.370_070_272_572_4);
        assert_close(1850.0, 7.106_9);
        assert_close(1880.0, -5.008_486_988_497_85);
        assert_close(1910.0, 10.3884);
        assert_close(1930.0, 24.1329);
        assert_close(1950.0, 29.07);
        assert_close(1975.0, 45.45);
        assert_close(2000.0, 63.86);
        assert_close(2020.0, 71.599);
        assert_close(2100.0, 202.74);
        assert_close(2500.0, 1_459.68);
    }

    #[test]
    fn segment_starts() {
        assert_close(-500.0, 17_203.656_339_062_5);
        assert_close(500.0, 5_710.044_670_312_5);
        assert_close(1600.0, 120.0);
        assert_close(1700.0, 8.83);
        assert_close(1800.0, 13.72);
        assert_close(1860.0, 7.62);
        assert_close(1900.0, -2.79);
        assert_close(1920.0, 21.2);
        assert_close(1941.0, 24.773_141_433_749_38);
        assert_close(1961.0, 33.579_880_865_652_46);
        assert_close(1986.0, 54.877_737_538_24);
        assert_close(2005.0, 64.670_575);
        assert_close(2050.0, 93.0);
        assert_close(2150.0, 328.48);
    }

    #[test]
    fn boundaries_are_discontinuous() {
        let below = delta_t_for_year(1900.0 - 1e-9).unwrap();
        let at = delta_t_for_year(1900.0).unwrap();
        assert!((below - at).abs() > Seconds::new(0.05), "{below} vs {at}");

        let below = delta_t_for_year(1600.0 - 1e-9).unwrap();
        let at = delta_t_for_year(1600.0).unwrap();
        assert!((below - at).abs() > Seconds::new(0.2), "{below} vs {at}");
    }

    #[test]
    fn fallback_matches_long_term_parabola() {
        for y in [2150.0, 2400.0, 3000.0] {
            assert_eq!(delta_t_for_year(y), Some(long_term(y)));
        }
        assert_eq!(delta_t_for_year(-1500.0), Some(long_term(-1500.0)));
    }

    #[test]
    fn decimal_year_is_month_centred() {
        let january = decimal_year(&CivilDateTime::from_ymd(2000, 1, 31));
        assert!((january - (2000.0 + 0.5 / 12.0)).abs() < 1e-12);
        let december = decimal_year(&CivilDateTime::from_ymd(-500, 12, 1));
        assert!((december - (-500.0 + 11.5 / 12.0)).abs() < 1e-12);
    }

    #[test]
    fn delta_t_2000() {
        let dt = delta_t(&CivilDateTime::from_ymd(2000, 1, 15)).unwrap();
        assert!(dt > Seconds::new(63.0) && dt < Seconds::new(64.0), "ΔT = {dt}");
    }

    #[test]
    fn ephemeris_day_adds_delta_t() {
        let civil = CivilDateTime::new(2000, 1, 1, 12, 0, 0);
        let jde = julian_ephemeris_day(&civil).unwrap();
        let offset = (jde - JulianDate::J2000).to::<qtty::Second>();
        let expected = delta_t(&civil).unwrap();
        assert!((offset - expected).abs() < Seconds::new(1e-4));
        assert!((jde - JulianDate::J2000) > Days::new(0.0));

        assert!(julian_ephemeris_day(&CivilDateTime::from_ymd(-3000, 6, 1)).is_none());
    }
}
