// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Calendar-date normalization for exercise logs.
//!
//! Every date stored in a log, returned to a client, or compared by the
//! log filter goes through [`normalize`] first. The canonical text form is
//! fixed and locale-independent, e.g. `Mon Jan 01 2024`.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Output format for canonical dates.
pub const CANONICAL_FORMAT: &str = "%a %b %d %Y";

/// Date-only input layouts, tried in order.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    CANONICAL_FORMAT,
    "%b %d %Y",
    "%B %d, %Y",
    "%B %d %Y",
    "%d %B %Y",
];

/// Timestamp layouts without an offset. Only the date part is kept.
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M"];

/// A calendar date with no time or timezone component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CanonicalDate(NaiveDate);

impl CanonicalDate {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Today's date in UTC.
    pub fn today() -> Self {
        Self(Utc::now().date_naive())
    }

    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for CanonicalDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(CANONICAL_FORMAT))
    }
}

impl Serialize for CanonicalDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CanonicalDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_date(&raw).map_err(serde::de::Error::custom)
    }
}

/// Input that could not be read as a calendar date.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Cast to date failed for value \"{input}\"")]
pub struct DateParseError {
    pub input: String,
}

/// Normalize an optional date input, using today's UTC date when absent.
pub fn normalize(input: Option<&str>) -> Result<CanonicalDate, DateParseError> {
    normalize_at(input, CanonicalDate::today())
}

/// Normalize an optional date input against an explicit "today".
///
/// Empty or whitespace-only input counts as absent.
pub fn normalize_at(
    input: Option<&str>,
    today: CanonicalDate,
) -> Result<CanonicalDate, DateParseError> {
    match input.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(today),
        Some(raw) => parse_date(raw),
    }
}

/// Parse a present date input into its canonical form.
pub fn parse_date(input: &str) -> Result<CanonicalDate, DateParseError> {
    let trimmed = input.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        // Keep the date as written rather than shifting it into UTC.
        return Ok(CanonicalDate(dt.date_naive()));
    }

    if let Ok(dt) = DateTime::parse_from_rfc2822(trimmed) {
        return Ok(CanonicalDate(dt.date_naive()));
    }

    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(CanonicalDate(dt.date()));
        }
    }

    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
        .map(CanonicalDate)
        .ok_or_else(|| DateParseError {
            input: input.to_string(),
        })
}

/// A `from`/`to` filter bound after normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Bound {
    /// The caller did not supply the bound.
    Absent,
    /// The bound parsed and constrains the log.
    Applied(CanonicalDate),
    /// The bound was supplied but did not parse; it is treated as absent.
    Ignored(String),
}

impl Bound {
    pub fn date(&self) -> Option<CanonicalDate> {
        match self {
            Bound::Applied(date) => Some(*date),
            Bound::Absent | Bound::Ignored(_) => None,
        }
    }
}

/// Resolve a raw query-string bound.
pub fn resolve_bound(raw: Option<&str>) -> Bound {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => Bound::Absent,
        Some(value) => match parse_date(value) {
            Ok(date) => Bound::Applied(date),
            Err(_) => {
                tracing::debug!(bound = value, "Ignoring unparseable date bound");
                Bound::Ignored(value.to_string())
            }
        },
    }
}
