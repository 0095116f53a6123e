// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Heuristic scoring of mock interview answers.

use crate::models::InterviewKind;

const BASE_SCORE: u32 = 50;
const LENGTH_BONUS: u32 = 10;
const KEYWORD_BONUS: u32 = 5;
const MAX_SCORE: u32 = 100;

/// Keywords that signal a STAR-structured behavioral answer.
const STAR_KEYWORDS: [&str; 7] = [
    "situation",
    "task",
    "action",
    "result",
    "challenge",
    "accomplished",
    "learned",
];

const TECHNICAL_KEYWORDS: [&str; 6] = [
    "scalable",
    "performance",
    "database",
    "architecture",
    "algorithm",
    "complexity",
];

/// Score an answer from 0 to 100.
///
/// Base 50, +10 past 100 characters, +10 more past 300, and +5 per distinct
/// keyword for behavioral (STAR) and technical answers. System design
/// answers are scored on length only.
pub fn score_answer(kind: InterviewKind, answer: &str) -> u32 {
    let length = answer.chars().count();
    let mut score = BASE_SCORE;
    if length > 100 {
        score += LENGTH_BONUS;
    }
    if length > 300 {
        score += LENGTH_BONUS;
    }

    let keywords: &[&str] = match kind {
        InterviewKind::Behavioral => &STAR_KEYWORDS,
        InterviewKind::Technical => &TECHNICAL_KEYWORDS,
        InterviewKind::SystemDesign => &[],
    };
    let lowered = answer.to_lowercase();
    let hits = keywords.iter().filter(|k| lowered.contains(*k)).count() as u32;
    score += hits * KEYWORD_BONUS;

    score.min(MAX_SCORE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_answer_gets_base_score() {
        assert_eq!(score_answer(InterviewKind::SystemDesign, "Use a cache."), 50);
    }

    #[test]
    fn test_star_keywords_count_once_each() {
        let answer = "The situation was tough. The result, and the result again.";
        // situation + result
        assert_eq!(score_answer(InterviewKind::Behavioral, answer), 60);
    }

    #[test]
    fn test_keywords_only_apply_to_matching_kind() {
        let answer = "A scalable database architecture";
        assert_eq!(score_answer(InterviewKind::Technical, answer), 65);
        assert_eq!(score_answer(InterviewKind::Behavioral, answer), 50);
    }

    #[test]
    fn test_length_bonuses() {
        let medium = "x".repeat(150);
        let long = "x".repeat(350);
        assert_eq!(score_answer(InterviewKind::SystemDesign, &medium), 60);
        assert_eq!(score_answer(InterviewKind::SystemDesign, &long), 70);
    }

    #[test]
    fn test_score_is_capped() {
        let answer = format!(
            "{} situation task action result challenge accomplished learned",
            "x".repeat(400)
        );
        assert_eq!(score_answer(InterviewKind::Behavioral, &answer), 100);
    }
}
