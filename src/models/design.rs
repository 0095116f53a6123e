// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! System design study topic and its quiz.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub id: String,
    pub question: String,
    pub options: Vec<String>,
    /// Index into `options` of the right answer
    pub correct: usize,
    pub explanation: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Quiz {
    #[serde(default)]
    pub questions: Vec<QuizQuestion>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<u32>,
    #[serde(default)]
    pub completed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemDesignTopic {
    pub id: String,
    pub title: String,
    pub description: String,
    pub completed: bool,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub quiz: Quiz,
    pub xp: u32,
}

/// Partial update of a topic.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateTopic {
    pub notes: Option<String>,
    pub completed: Option<bool>,
}

impl SystemDesignTopic {
    pub(crate) fn apply(&mut self, update: UpdateTopic) {
        if let Some(notes) = update.notes {
            self.notes = notes;
        }
        if let Some(completed) = update.completed {
            self.completed = completed;
        }
    }
}
