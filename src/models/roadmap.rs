// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Study roadmap step model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::time_utils::lenient;

/// One week-sized step of the preparation roadmap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapStep {
    pub id: String,
    pub title: String,
    pub description: String,
    pub week: u32,
    /// Phase name ("Foundation", ...)
    pub phase: String,
    pub completed: bool,
    pub xp: u32,
    #[serde(default)]
    pub tasks: Vec<String>,
    #[serde(default)]
    pub resources: Vec<String>,
    #[serde(
        default,
        deserialize_with = "lenient::option_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub completed_at: Option<DateTime<Utc>>,
}
