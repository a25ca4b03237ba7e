// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Exercise log entry model.

use crate::time_utils::CanonicalDate;
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// One entry in a user's exercise log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Exercise {
    pub description: String,
    /// Unit-agnostic duration (minutes or seconds, per caller convention)
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub duration: i64,
    /// Canonical calendar date, e.g. `Mon Jan 01 2024`
    #[cfg_attr(feature = "binding-generation", ts(type = "string"))]
    pub date: CanonicalDate,
}
