// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Learning resource model.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Book,
    Course,
    Video,
    Article,
    Github,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: ResourceKind,
    pub category: String,
    pub url: String,
    pub description: String,
    /// Star rating (1-5)
    pub rating: u8,
    pub completed: bool,
    pub bookmarked: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateResource {
    pub title: String,
    pub kind: ResourceKind,
    pub category: String,
    pub url: String,
    pub description: String,
    pub rating: u8,
    pub bookmarked: bool,
}

impl Resource {
    pub(crate) fn from_create(id: String, input: CreateResource) -> Self {
        Self {
            id,
            title: input.title,
            kind: input.kind,
            category: input.category,
            url: input.url,
            description: input.description,
            rating: input.rating.min(5),
            completed: false,
            bookmarked: input.bookmarked,
        }
    }
}
