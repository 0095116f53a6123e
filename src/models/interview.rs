// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Mock interview session model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::time_utils::lenient;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InterviewKind {
    Behavioral,
    Technical,
    SystemDesign,
}

/// A saved mock interview answer. Its score is granted as XP on save.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterviewSession {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: InterviewKind,
    pub question: String,
    pub answer: String,
    pub score: u32,
    pub feedback: String,
    /// Answer duration in seconds
    #[serde(rename = "duration")]
    pub duration_secs: u32,
    #[serde(deserialize_with = "lenient::timestamp")]
    pub date: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateInterviewSession {
    pub kind: InterviewKind,
    pub question: String,
    pub answer: String,
    pub score: u32,
    pub feedback: String,
    pub duration_secs: u32,
}
