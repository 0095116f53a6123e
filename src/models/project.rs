// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Portfolio project model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::time_utils::lenient;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    Planning,
    InProgress,
    Completed,
}

/// A portfolio project with its self-assessed quality scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    pub description: String,
    pub status: ProjectStatus,
    /// Percent complete (0-100)
    pub progress: u8,
    #[serde(default)]
    pub tech_stack: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_commit: Option<String>,
    pub readme_score: u8,
    pub test_coverage: u8,
    /// Overall interview-readiness score (0-100)
    #[serde(rename = "faangReadiness")]
    pub readiness: u8,
    #[serde(deserialize_with = "lenient::timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(
        default,
        deserialize_with = "lenient::option_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub completed_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateProject {
    pub name: String,
    pub description: String,
    pub status: ProjectStatus,
    pub progress: u8,
    pub tech_stack: Vec<String>,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    pub readme_score: u8,
    pub test_coverage: u8,
    pub readiness: u8,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateProject {
    pub name: Option<String>,
    pub description: Option<String>,
    pub status: Option<ProjectStatus>,
    pub progress: Option<u8>,
    pub tech_stack: Option<Vec<String>>,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    pub last_commit: Option<String>,
    pub readme_score: Option<u8>,
    pub test_coverage: Option<u8>,
    pub readiness: Option<u8>,
}

impl UpdateProject {
    pub fn status(status: ProjectStatus) -> Self {
        Self {
            status: Some(status),
            ..Default::default()
        }
    }
}

impl Project {
    pub(crate) fn from_create(id: String, input: CreateProject, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: input.name,
            description: input.description,
            status: input.status,
            progress: input.progress.min(100),
            tech_stack: input.tech_stack,
            github_url: input.github_url,
            live_url: input.live_url,
            last_commit: None,
            readme_score: input.readme_score,
            test_coverage: input.test_coverage,
            readiness: input.readiness,
            created_at: now,
            completed_at: None,
        }
    }

    pub(crate) fn apply(&mut self, update: UpdateProject) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(status) = update.status {
            self.status = status;
        }
        if let Some(progress) = update.progress {
            self.progress = progress.min(100);
        }
        if let Some(tech_stack) = update.tech_stack {
            self.tech_stack = tech_stack;
        }
        if let Some(url) = update.github_url {
            self.github_url = Some(url);
        }
        if let Some(url) = update.live_url {
            self.live_url = Some(url);
        }
        if let Some(commit) = update.last_commit {
            self.last_commit = Some(commit);
        }
        if let Some(score) = update.readme_score {
            self.readme_score = score;
        }
        if let Some(coverage) = update.test_coverage {
            self.test_coverage = coverage;
        }
        if let Some(readiness) = update.readiness {
            self.readiness = readiness;
        }
    }
}
