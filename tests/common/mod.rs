// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use chrono::{DateTime, Duration, NaiveDate, Utc};
use prep_tracker::db::MemoryStore;
use prep_tracker::models::{
    CreateJob, CreatePost, CreateProblem, CreateProject, CreateReply, CreateResource, CreateTask,
    Difficulty, Priority, ProblemStatus, ProjectStatus, ResourceKind, Snapshot,
};
use prep_tracker::services::{seed, ProgressStore};
use prep_tracker::time_utils::{utc_midnight, Clock, FixedClock};
use std::sync::Arc;

/// Noon UTC on 2024-03-01, the instant every test store starts at.
#[allow(dead_code)]
pub fn test_now() -> DateTime<Utc> {
    utc_midnight(2024, 3, 1) + Duration::hours(12)
}

#[allow(dead_code)]
pub fn days_ago(days: i64) -> NaiveDate {
    (test_now() - Duration::days(days)).date_naive()
}

/// A store over an empty snapshot, backed by memory and a fixed clock.
#[allow(dead_code)]
pub fn empty_store() -> (ProgressStore, Arc<MemoryStore>, FixedClock) {
    store_with(Snapshot::empty())
}

/// A store over the built-in defaults.
#[allow(dead_code)]
pub fn seeded_store() -> (ProgressStore, Arc<MemoryStore>, FixedClock) {
    let clock = FixedClock::new(test_now());
    store_with(seed::default_snapshot(clock.today()))
}

#[allow(dead_code)]
pub fn store_with(state: Snapshot) -> (ProgressStore, Arc<MemoryStore>, FixedClock) {
    let memory = Arc::new(MemoryStore::new());
    let clock = FixedClock::new(test_now());
    let store = ProgressStore::with_state(state, memory.clone(), Arc::new(clock.clone()));
    (store, memory, clock)
}

#[allow(dead_code)]
pub fn new_task(xp: u32) -> CreateTask {
    CreateTask {
        title: "Review heaps".to_string(),
        category: "Study".to_string(),
        priority: Priority::Medium,
        estimated_minutes: 30,
        xp,
        completed: false,
        due_date: None,
    }
}

#[allow(dead_code)]
pub fn new_problem(difficulty: Difficulty, status: ProblemStatus, date: NaiveDate) -> CreateProblem {
    CreateProblem {
        title: "Merge Intervals".to_string(),
        difficulty,
        platform: "LeetCode".to_string(),
        status,
        attempts: 1,
        time_spent: 25,
        date,
        tags: vec!["Array".to_string(), "Sorting".to_string()],
        solution: None,
        notes: None,
        code: None,
        test_cases: Vec::new(),
    }
}

#[allow(dead_code)]
pub fn new_project(status: ProjectStatus) -> CreateProject {
    CreateProject {
        name: "URL Shortener".to_string(),
        description: "Hash-based short links".to_string(),
        status,
        progress: 40,
        tech_stack: vec!["Rust".to_string()],
        github_url: None,
        live_url: None,
        readme_score: 60,
        test_coverage: 50,
        readiness: 55,
    }
}

#[allow(dead_code)]
pub fn new_job(requirements: &[&str]) -> CreateJob {
    CreateJob {
        title: "Backend Engineer".to_string(),
        company: "Acme".to_string(),
        location: "Remote".to_string(),
        salary: "$150k".to_string(),
        employment_type: "Full-time".to_string(),
        experience: "2+ years".to_string(),
        description: "Build services".to_string(),
        requirements: requirements.iter().map(|r| r.to_string()).collect(),
        match_score: 0,
        posted_date: "2024-02-28".to_string(),
        url: None,
    }
}

#[allow(dead_code)]
pub fn new_resource() -> CreateResource {
    CreateResource {
        title: "Designing Data-Intensive Applications".to_string(),
        kind: ResourceKind::Book,
        category: "System Design".to_string(),
        url: "https://dataintensive.net".to_string(),
        description: "Storage and stream processing".to_string(),
        rating: 5,
        bookmarked: false,
    }
}

#[allow(dead_code)]
pub fn new_post() -> CreatePost {
    CreatePost {
        title: "Mock interview partners?".to_string(),
        content: "Looking for weekly practice".to_string(),
        author: "Sam".to_string(),
        author_id: "sam".to_string(),
        category: "General".to_string(),
        tags: vec!["mock".to_string()],
    }
}

#[allow(dead_code)]
pub fn new_reply() -> CreateReply {
    CreateReply {
        content: "Count me in".to_string(),
        author: "Ari".to_string(),
        author_id: "ari".to_string(),
    }
}
