// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Derived, read-only dashboard analytics.
//!
//! Everything is recomputed from the snapshot on demand; nothing is cached.

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::models::{Job, Snapshot};
use crate::services::flavor::FlavorProvider;

/// Length of the weekly summary window.
pub const WEEK_WINDOW_DAYS: i64 = 7;
/// Number of days in the activity calendar.
pub const CALENDAR_DAYS: i64 = 30;

// ─── Weekly Summary ──────────────────────────────────────────

/// Accomplishments in the trailing week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct WeeklySummary {
    pub tasks_completed: u32,
    pub problems_solved: u32,
    /// Task rewards plus difficulty rewards of problems solved in the window
    pub xp_earned: u32,
    /// Whole hours of all-time study
    pub study_hours: u32,
}

/// Summarize tasks completed and problems solved since `now - 7 days`.
pub fn weekly_summary(snapshot: &Snapshot, now: DateTime<Utc>) -> WeeklySummary {
    let week_ago = now - Duration::days(WEEK_WINDOW_DAYS);

    let (tasks_completed, task_xp) = snapshot
        .tasks
        .iter()
        .filter(|t| t.completed && t.completed_at.is_some_and(|at| at >= week_ago))
        .fold((0u32, 0u32), |(n, xp), t| (n + 1, xp.saturating_add(t.xp)));

    let (problems_solved, problem_xp) = snapshot
        .problems
        .iter()
        .filter(|p| p.is_solved() && p.date.and_time(NaiveTime::MIN).and_utc() >= week_ago)
        .fold((0u32, 0u32), |(n, xp), p| {
            (n + 1, xp.saturating_add(p.difficulty.reward()))
        });

    WeeklySummary {
        tasks_completed,
        problems_solved,
        xp_earned: task_xp.saturating_add(problem_xp),
        study_hours: snapshot.progress.study_hours(),
    }
}

// ─── Skills ──────────────────────────────────────────────────

/// A skill rating decorated with a display-only trend delta.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct SkillProgress {
    pub skill: String,
    pub score: u32,
    /// Cosmetic; not persisted and not derived from history
    pub change: u32,
}

pub fn skill_progress(
    skills: &BTreeMap<String, u32>,
    flavor: &dyn FlavorProvider,
) -> Vec<SkillProgress> {
    skills
        .iter()
        .map(|(skill, score)| SkillProgress {
            skill: skill.clone(),
            score: *score,
            change: flavor.skill_delta(skill),
        })
        .collect()
}

// ─── Activity Calendar ───────────────────────────────────────

/// Heat-map bucket for one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum ActivityLevel {
    None,
    Low,
    Medium,
    High,
}

impl ActivityLevel {
    pub fn from_count(count: u32) -> Self {
        match count {
            0 => ActivityLevel::None,
            1 => ActivityLevel::Low,
            2 | 3 => ActivityLevel::Medium,
            _ => ActivityLevel::High,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct DailyActivity {
    /// "YYYY-MM-DD"
    pub date: String,
    /// Tasks completed plus problems solved that day
    pub activity: u32,
    pub level: ActivityLevel,
}

/// Activity for each of the 30 days ending `today`, oldest first.
pub fn daily_activity(snapshot: &Snapshot, today: NaiveDate) -> Vec<DailyActivity> {
    let mut counts: HashMap<NaiveDate, u32> = HashMap::new();

    let task_days = snapshot
        .tasks
        .iter()
        .filter(|t| t.completed)
        .filter_map(|t| t.completed_at.map(|at| at.date_naive()));
    let problem_days = snapshot
        .problems
        .iter()
        .filter(|p| p.is_solved())
        .map(|p| p.date);
    for day in task_days.chain(problem_days) {
        *counts.entry(day).or_insert(0) += 1;
    }

    (0..CALENDAR_DAYS)
        .rev()
        .map(|offset| {
            let day = today - Duration::days(offset);
            let activity = counts.get(&day).copied().unwrap_or(0);
            DailyActivity {
                date: day.format("%Y-%m-%d").to_string(),
                activity,
                level: ActivityLevel::from_count(activity),
            }
        })
        .collect()
}

// ─── Job Matching ────────────────────────────────────────────

/// Fixed-formula fit between a listing and the self-rated skills.
///
/// Average of the algorithms, system design and React ratings, plus
/// bonuses for requirements the user is already strong in. Capped at 100.
pub fn job_match_score(job: &Job, skills: &BTreeMap<String, u32>) -> u8 {
    let rating = |name: &str| skills.get(name).copied().unwrap_or(0);
    let dsa = rating("Arrays & Strings");
    let system_design = rating("System Design");
    let frontend = rating("React");

    let mut score = (f64::from(dsa) + f64::from(system_design) + f64::from(frontend)) / 3.0;
    if job.requires("React") && frontend > 70 {
        score += 10.0;
    }
    if job.requires("System Design") && system_design > 60 {
        score += 15.0;
    }
    if job.requires("Algorithms") && dsa > 70 {
        score += 20.0;
    }

    score.round().min(100.0) as u8
}
