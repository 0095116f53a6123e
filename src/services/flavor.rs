// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Cosmetic display flavor: skill trend deltas and canned interview feedback.
//!
//! Nothing here is domain logic. The store never holds a provider; callers
//! pass one to the few read paths that decorate their output with it.

use rand::seq::SliceRandom;
use rand::Rng;

/// Canned feedback shown after a mock interview answer.
pub const INTERVIEW_FEEDBACK: [&str; 5] = [
    "Good structure! Try to be more specific with metrics and outcomes.",
    "Great use of the STAR method. Consider adding more technical details.",
    "Excellent storytelling. Make sure to highlight your specific contributions.",
    "Well organized response. Could benefit from more concrete examples.",
    "Strong answer! Remember to quantify your impact where possible.",
];

/// Source of display-only flavor values.
pub trait FlavorProvider {
    /// Trend delta shown next to a skill rating.
    fn skill_delta(&self, skill: &str) -> u32;

    /// Feedback sentence for a scored interview answer.
    fn interview_feedback(&self) -> String;
}

/// Random flavor for the live dashboard.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomFlavor;

impl FlavorProvider for RandomFlavor {
    fn skill_delta(&self, _skill: &str) -> u32 {
        rand::thread_rng().gen_range(1..=10)
    }

    fn interview_feedback(&self) -> String {
        INTERVIEW_FEEDBACK
            .choose(&mut rand::thread_rng())
            .copied()
            .unwrap_or(INTERVIEW_FEEDBACK[0])
            .to_string()
    }
}

/// Deterministic flavor for tests and snapshots.
#[derive(Debug, Clone)]
pub struct FixedFlavor {
    pub delta: u32,
    pub feedback: String,
}

impl Default for FixedFlavor {
    fn default() -> Self {
        Self {
            delta: 5,
            feedback: INTERVIEW_FEEDBACK[0].to_string(),
        }
    }
}

impl FlavorProvider for FixedFlavor {
    fn skill_delta(&self, _skill: &str) -> u32 {
        self.delta
    }

    fn interview_feedback(&self) -> String {
        self.feedback.clone()
    }
}
