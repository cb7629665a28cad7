// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Error types for the opt-in validation layer and the chrono bridges.
//!
//! The conversion algorithms themselves never fail; see [`crate::calendar`].

use crate::civil::CivilDateTime;
use thiserror::Error;

/// Errors raised when checking or bridging calendar fields.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalendarError {
    /// Month outside `1..=12`.
    #[error("month {0} is outside 1..=12")]
    MonthOutOfRange(u32),

    /// Day outside the length of its month.
    #[error("day {day} is outside 1..={max} for {year}-{month:02}")]
    DayOutOfRange {
        year: i32,
        month: u32,
        day: u32,
        max: u32,
    },

    /// Hour, minute or second outside a UTC clock reading.
    #[error("{hour:02}:{minute:02}:{second:02} is not a valid time of day")]
    TimeOutOfRange { hour: u32, minute: u32, second: u32 },

    /// Sub-second part of one second or more.
    #[error("nanosecond {0} is not below 1_000_000_000")]
    NanosecondOutOfRange(u32),

    /// chrono refused the fields (range limits or a Julian-only leap day).
    #[error("{0} cannot be represented as a chrono date-time")]
    NotRepresentable(CivilDateTime),
}
