// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Exercise log filtering and response shaping.
//!
//! Filters apply in a fixed order: `from`, then `to`, then `limit`. None of
//! them re-sorts the log, so output order is the order entries were added.

use crate::models::{Exercise, User};
use crate::time_utils::{resolve_bound, Bound, CanonicalDate};
use serde::Serialize;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Normalized `from`/`to`/`limit` parameters of a log query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogQuery {
    pub from: Bound,
    pub to: Bound,
    pub limit: Option<usize>,
}

impl LogQuery {
    /// Build a query from raw query-string values.
    ///
    /// Unparseable bounds and non-positive limits are dropped, not rejected.
    pub fn from_raw(from: Option<&str>, to: Option<&str>, limit: Option<&str>) -> Self {
        Self {
            from: resolve_bound(from),
            to: resolve_bound(to),
            limit: parse_limit(limit),
        }
    }
}

/// Parse a `limit` value. Only positive integers apply.
pub fn parse_limit(raw: Option<&str>) -> Option<usize> {
    let value = raw?.trim();
    match value.parse::<u64>() {
        Ok(0) | Err(_) => {
            if !value.is_empty() {
                tracing::debug!(limit = value, "Ignoring non-positive or invalid limit");
            }
            None
        }
        Ok(n) => Some(usize::try_from(n).unwrap_or(usize::MAX)),
    }
}

/// Filter a log by inclusive date bounds and cap its length.
///
/// The input is never modified; the result is a new vector.
pub fn filter_log(
    log: &[Exercise],
    from: Option<CanonicalDate>,
    to: Option<CanonicalDate>,
    limit: Option<usize>,
) -> Vec<Exercise> {
    let mut filtered: Vec<Exercise> = log.to_vec();

    if let Some(from) = from {
        filtered.retain(|exercise| exercise.date >= from);
    }
    if let Some(to) = to {
        filtered.retain(|exercise| exercise.date <= to);
    }
    if let Some(limit) = limit.filter(|&n| n >= 1) {
        filtered.truncate(limit);
    }

    filtered
}

/// Response body for `GET /api/exercise/log`.
#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ExerciseLogResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    pub count: usize,
    pub log: Vec<Exercise>,
}

/// Assemble the log response. `from`/`to` appear only when supplied.
pub fn compose_log_response(
    user: &User,
    log: Vec<Exercise>,
    from: Option<CanonicalDate>,
    to: Option<CanonicalDate>,
) -> ExerciseLogResponse {
    ExerciseLogResponse {
        id: user.id.clone(),
        username: user.username.clone(),
        from: from.map(|d| d.to_string()),
        to: to.map(|d| d.to_string()),
        count: log.len(),
        log,
    }
}

/// Run a whole log query against a loaded user.
pub fn query_log(user: &User, query: &LogQuery) -> ExerciseLogResponse {
    let from = query.from.date();
    let to = query.to.date();
    let log = filter_log(&user.log, from, to, query.limit);
    compose_log_response(user, log, from, to)
}
