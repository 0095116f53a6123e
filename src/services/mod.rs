// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod analytics;
pub mod flavor;
pub mod interview;
pub mod seed;
pub mod store;

pub use analytics::{ActivityLevel, DailyActivity, SkillProgress, WeeklySummary};
pub use flavor::{FixedFlavor, FlavorProvider, RandomFlavor};
pub use interview::score_answer;
pub use store::ProgressStore;
