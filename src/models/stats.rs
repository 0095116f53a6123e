//! Gamification counters: experience points, badges, streak and study time.
//!
//! These are updated eagerly by every rewarding store operation; nothing
//! here runs on a timer.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::time_utils::lenient;

/// Badge names as constants.
pub mod badges {
    pub const PROJECT_COMPLETED: &str = "Project Completed";
    pub const INTERVIEW_SCHEDULED: &str = "Interview Scheduled";
    pub const JOB_OFFER_RECEIVED: &str = "Job Offer Received";
    pub const ROADMAP_PROGRESS: &str = "Roadmap Progress";
    pub const XP_MASTER: &str = "XP Master";
    pub const XP_LEGEND: &str = "XP Legend";
    pub const WEEK_WARRIOR: &str = "Week Warrior";
    pub const MONTH_MASTER: &str = "Month Master";
}

/// Fixed reward amounts and thresholds.
pub mod rewards {
    pub const PROJECT_COMPLETED_XP: u32 = 100;
    pub const JOB_APPLIED_XP: u32 = 25;
    pub const JOB_INTERVIEW_XP: u32 = 50;
    pub const JOB_OFFER_XP: u32 = 200;
    pub const RESOURCE_COMPLETED_XP: u32 = 20;
    pub const COMMUNITY_POST_XP: u32 = 15;
    pub const COMMUNITY_REPLY_XP: u32 = 10;

    pub const XP_MASTER_THRESHOLD: u32 = 1000;
    pub const XP_LEGEND_THRESHOLD: u32 = 5000;
    pub const WEEK_WARRIOR_STREAK: u32 = 7;
    pub const MONTH_MASTER_STREAK: u32 = 30;

    /// Study minutes per experience point
    pub const STUDY_MINUTES_PER_XP: u32 = 10;
    pub const POMODORO_MINUTES: u32 = 25;
    pub const POMODORO_BONUS_XP: u32 = 10;
}

/// Progress counters persisted alongside the collections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressStats {
    // ─── Experience ──────────────────────────────────────────────
    /// Cumulative experience points; only `reset` lowers it
    #[serde(rename = "totalXP", default)]
    pub total_xp: u32,
    /// Unlocked badges in unlock order, each at most once
    #[serde(default)]
    pub badges: Vec<String>,

    // ─── Streak ──────────────────────────────────────────────────
    #[serde(default)]
    pub current_streak: u32,
    /// UTC date of the most recent rewarding action
    #[serde(default, deserialize_with = "lenient::option_date")]
    pub last_active_date: Option<NaiveDate>,

    // ─── Study Time ──────────────────────────────────────────────
    /// Accumulated focused study, in minutes
    #[serde(rename = "studyTime", default)]
    pub study_minutes: u32,
}

impl ProgressStats {
    pub fn has_badge(&self, badge: &str) -> bool {
        self.badges.iter().any(|b| b == badge)
    }

    /// Insert a badge.
    ///
    /// Returns `true` if the badge is new, `false` if it was already held.
    pub fn add_badge(&mut self, badge: &str) -> bool {
        if self.has_badge(badge) {
            return false;
        }
        self.badges.push(badge.to_string());
        true
    }

    /// Add experience points and unlock any threshold badge now reached.
    ///
    /// Returns the badges unlocked by this call.
    pub fn add_xp(&mut self, amount: u32) -> Vec<&'static str> {
        self.total_xp = self.total_xp.saturating_add(amount);

        let mut unlocked = Vec::new();
        if self.total_xp >= rewards::XP_MASTER_THRESHOLD && self.add_badge(badges::XP_MASTER) {
            unlocked.push(badges::XP_MASTER);
        }
        if self.total_xp >= rewards::XP_LEGEND_THRESHOLD && self.add_badge(badges::XP_LEGEND) {
            unlocked.push(badges::XP_LEGEND);
        }
        unlocked
    }

    /// Update the streak for a rewarding action on `today`.
    ///
    /// Same day: unchanged. Day after the last active date: +1. Anything
    /// else (gap, first activity, clock moved backwards): restarts at 1.
    /// Returns the streak badges unlocked by this call.
    pub fn record_activity(&mut self, today: NaiveDate) -> Vec<&'static str> {
        match self.last_active_date {
            Some(last) if last == today => {}
            Some(last) if last.succ_opt() == Some(today) => {
                self.current_streak = self.current_streak.saturating_add(1);
            }
            _ => self.current_streak = 1,
        }
        self.last_active_date = Some(today);

        let mut unlocked = Vec::new();
        if self.current_streak >= rewards::WEEK_WARRIOR_STREAK
            && self.add_badge(badges::WEEK_WARRIOR)
        {
            unlocked.push(badges::WEEK_WARRIOR);
        }
        if self.current_streak >= rewards::MONTH_MASTER_STREAK
            && self.add_badge(badges::MONTH_MASTER)
        {
            unlocked.push(badges::MONTH_MASTER);
        }
        unlocked
    }

    /// Add study minutes.
    ///
    /// Returns the experience points those minutes are worth; the caller
    /// grants them so threshold badges are checked in one place.
    pub fn add_study_minutes(&mut self, minutes: u32) -> u32 {
        self.study_minutes = self.study_minutes.saturating_add(minutes);
        minutes / rewards::STUDY_MINUTES_PER_XP
    }

    /// Whole hours of accumulated study time.
    pub fn study_hours(&self) -> u32 {
        self.study_minutes / 60
    }
}
