// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Coding problem tracker model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::time_utils::lenient;

/// Problem difficulty. Determines the solve reward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// XP granted for solving a problem of this difficulty.
    pub fn reward(self) -> u32 {
        match self {
            Difficulty::Easy => 10,
            Difficulty::Medium => 20,
            Difficulty::Hard => 30,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProblemStatus {
    Solved,
    Attempted,
    NotStarted,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestCase {
    pub input: String,
    pub output: String,
}

/// A tracked practice problem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Problem {
    pub id: String,
    pub title: String,
    pub difficulty: Difficulty,
    /// Where the problem lives ("LeetCode", ...)
    pub platform: String,
    pub status: ProblemStatus,
    pub attempts: u32,
    /// Minutes spent so far
    pub time_spent: u32,
    /// Date of the last attempt; the solve date once solved
    #[serde(deserialize_with = "lenient::date")]
    pub date: NaiveDate,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solution: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub test_cases: Vec<TestCase>,
}

impl Problem {
    pub fn is_solved(&self) -> bool {
        self.status == ProblemStatus::Solved
    }

    pub(crate) fn from_create(id: String, input: CreateProblem) -> Self {
        Self {
            id,
            title: input.title,
            difficulty: input.difficulty,
            platform: input.platform,
            status: input.status,
            attempts: input.attempts,
            time_spent: input.time_spent,
            date: input.date,
            tags: input.tags,
            solution: input.solution,
            notes: input.notes,
            code: input.code,
            test_cases: input.test_cases,
        }
    }

    pub(crate) fn apply(&mut self, update: UpdateProblem) {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(difficulty) = update.difficulty {
            self.difficulty = difficulty;
        }
        if let Some(platform) = update.platform {
            self.platform = platform;
        }
        if let Some(status) = update.status {
            self.status = status;
        }
        if let Some(attempts) = update.attempts {
            self.attempts = attempts;
        }
        if let Some(time_spent) = update.time_spent {
            self.time_spent = time_spent;
        }
        if let Some(date) = update.date {
            self.date = date;
        }
        if let Some(tags) = update.tags {
            self.tags = tags;
        }
        if let Some(solution) = update.solution {
            self.solution = Some(solution);
        }
        if let Some(notes) = update.notes {
            self.notes = Some(notes);
        }
        if let Some(code) = update.code {
            self.code = Some(code);
        }
        if let Some(test_cases) = update.test_cases {
            self.test_cases = test_cases;
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateProblem {
    pub title: String,
    pub difficulty: Difficulty,
    pub platform: String,
    pub status: ProblemStatus,
    pub attempts: u32,
    pub time_spent: u32,
    pub date: NaiveDate,
    pub tags: Vec<String>,
    pub solution: Option<String>,
    pub notes: Option<String>,
    pub code: Option<String>,
    pub test_cases: Vec<TestCase>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateProblem {
    pub title: Option<String>,
    pub difficulty: Option<Difficulty>,
    pub platform: Option<String>,
    pub status: Option<ProblemStatus>,
    pub attempts: Option<u32>,
    pub time_spent: Option<u32>,
    pub date: Option<NaiveDate>,
    pub tags: Option<Vec<String>>,
    pub solution: Option<String>,
    pub notes: Option<String>,
    pub code: Option<String>,
    pub test_cases: Option<Vec<TestCase>>,
}

impl UpdateProblem {
    pub fn status(status: ProblemStatus) -> Self {
        Self {
            status: Some(status),
            ..Default::default()
        }
    }
}
