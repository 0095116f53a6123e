// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Daily planner task model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::time_utils::lenient;

/// Task priority as shown in the planner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

/// A planner task. Completing it grants `xp`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    pub completed: bool,
    /// Free-form category ("DSA", "System Design", ...)
    pub category: String,
    pub priority: Priority,
    /// Estimated effort in minutes
    #[serde(rename = "estimatedTime")]
    pub estimated_minutes: u32,
    /// Reward granted on completion
    pub xp: u32,
    #[serde(
        default,
        deserialize_with = "lenient::option_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub due_date: Option<NaiveDate>,
    #[serde(deserialize_with = "lenient::timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(
        default,
        deserialize_with = "lenient::option_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub completed_at: Option<DateTime<Utc>>,
}

/// Fields supplied by the caller when creating a task.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateTask {
    pub title: String,
    pub category: String,
    pub priority: Priority,
    pub estimated_minutes: u32,
    pub xp: u32,
    pub completed: bool,
    pub due_date: Option<NaiveDate>,
}

/// Partial update; `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateTask {
    pub title: Option<String>,
    pub category: Option<String>,
    pub priority: Option<Priority>,
    pub estimated_minutes: Option<u32>,
    pub xp: Option<u32>,
    pub completed: Option<bool>,
    pub due_date: Option<NaiveDate>,
}

impl UpdateTask {
    pub fn completed(completed: bool) -> Self {
        Self {
            completed: Some(completed),
            ..Default::default()
        }
    }
}

impl Task {
    pub(crate) fn from_create(id: String, input: CreateTask, now: DateTime<Utc>) -> Self {
        Self {
            id,
            title: input.title,
            completed: input.completed,
            category: input.category,
            priority: input.priority,
            estimated_minutes: input.estimated_minutes,
            xp: input.xp,
            due_date: input.due_date,
            created_at: now,
            completed_at: input.completed.then_some(now),
        }
    }

    /// Merge a partial update into this task.
    pub(crate) fn apply(&mut self, update: UpdateTask) {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(category) = update.category {
            self.category = category;
        }
        if let Some(priority) = update.priority {
            self.priority = priority;
        }
        if let Some(minutes) = update.estimated_minutes {
            self.estimated_minutes = minutes;
        }
        if let Some(xp) = update.xp {
            self.xp = xp;
        }
        if let Some(completed) = update.completed {
            self.completed = completed;
        }
        if let Some(due) = update.due_date {
            self.due_date = Some(due);
        }
    }
}
