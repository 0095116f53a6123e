// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Job listing model for the application pipeline.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::time_utils::lenient;

/// Where a listing sits in the application pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JobStatus {
    NotApplied,
    Saved,
    Applied,
    Interview,
    Rejected,
    Offer,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub salary: String,
    /// Employment type ("Full-time", ...)
    #[serde(rename = "type")]
    pub employment_type: String,
    pub experience: String,
    pub description: String,
    #[serde(default)]
    pub requirements: Vec<String>,
    pub status: JobStatus,
    pub match_score: u8,
    /// Human readable posting age as listed ("2 days ago")
    pub posted_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(
        rename = "appliedDate",
        default,
        deserialize_with = "lenient::option_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub applied_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateJob {
    pub title: String,
    pub company: String,
    pub location: String,
    pub salary: String,
    pub employment_type: String,
    pub experience: String,
    pub description: String,
    pub requirements: Vec<String>,
    pub match_score: u8,
    pub posted_date: String,
    pub url: Option<String>,
}

impl Job {
    pub(crate) fn from_create(id: String, input: CreateJob) -> Self {
        Self {
            id,
            title: input.title,
            company: input.company,
            location: input.location,
            salary: input.salary,
            employment_type: input.employment_type,
            experience: input.experience,
            description: input.description,
            requirements: input.requirements,
            status: JobStatus::NotApplied,
            match_score: input.match_score.min(100),
            posted_date: input.posted_date,
            url: input.url,
            applied_at: None,
            notes: None,
        }
    }

    pub fn requires(&self, skill: &str) -> bool {
        self.requirements.iter().any(|r| r == skill)
    }
}
