// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use chrono::Duration;
use prep_tracker::models::{
    badges, CreateInterviewSession, Difficulty, InterviewKind, JobStatus, ProblemStatus,
    ProgressStats, ProjectStatus, Snapshot, UpdateProblem, UpdateProject, UpdateTask, UpdateTopic,
};
use prep_tracker::services::seed::{self, DEFAULT_TOTAL_XP};
use prep_tracker::services::FixedFlavor;
use prep_tracker::time_utils::Clock;

mod common;
use common::{
    days_ago, empty_store, new_job, new_problem, new_project, new_resource, new_task, seeded_store,
    store_with,
};

#[test]
fn test_task_completion_rewards_once_per_transition() {
    let (mut store, _, clock) = empty_store();
    let id = store.add_task(new_task(30));
    assert_eq!(store.total_xp(), 0);

    assert!(store.update_task(&id, UpdateTask::completed(true)));
    assert_eq!(store.total_xp(), 30);
    assert_eq!(store.current_streak(), 1);
    assert_eq!(store.task(&id).unwrap().completed_at, Some(clock.now()));

    // Already completed: no second award.
    store.update_task(&id, UpdateTask::completed(true));
    assert_eq!(store.total_xp(), 30);

    // Un-completing keeps the points and clears the timestamp.
    assert!(store.toggle_task(&id));
    let task = store.task(&id).unwrap();
    assert!(!task.completed);
    assert!(task.completed_at.is_none());
    assert_eq!(store.total_xp(), 30);

    store.toggle_task(&id);
    assert_eq!(store.total_xp(), 60);
}

#[test]
fn test_task_edit_without_completion_grants_nothing() {
    let (mut store, _, _) = empty_store();
    let id = store.add_task(new_task(30));

    let update = UpdateTask {
        title: Some("Review tries".to_string()),
        xp: Some(45),
        ..Default::default()
    };
    assert!(store.update_task(&id, update));

    let task = store.task(&id).unwrap();
    assert_eq!(task.title, "Review tries");
    assert_eq!(task.xp, 45);
    assert_eq!(store.total_xp(), 0);
    assert!(store.progress().last_active_date.is_none());
}

#[test]
fn test_new_records_are_prepended() {
    let (mut store, _, _) = empty_store();
    let first = store.add_task(new_task(10));
    let second = store.add_task(new_task(20));
    assert_ne!(first, second);

    let ids: Vec<&str> = store.tasks().iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec![second.as_str(), first.as_str()]);
}

#[test]
fn test_problem_solve_rewards_by_difficulty_and_dates_today() {
    let (mut store, _, clock) = empty_store();
    let id = store.add_problem(new_problem(
        Difficulty::Medium,
        ProblemStatus::Attempted,
        days_ago(5),
    ));
    assert_eq!(store.total_xp(), 0);

    assert!(store.update_problem(&id, UpdateProblem::status(ProblemStatus::Solved)));
    assert_eq!(store.total_xp(), 20);
    assert_eq!(store.problem(&id).unwrap().date, clock.today());

    store.update_problem(&id, UpdateProblem::status(ProblemStatus::Solved));
    assert_eq!(store.total_xp(), 20);
}

#[test]
fn test_problem_solve_keeps_explicit_date() {
    let (mut store, _, _) = empty_store();
    let id = store.add_problem(new_problem(
        Difficulty::Easy,
        ProblemStatus::NotStarted,
        days_ago(5),
    ));

    let update = UpdateProblem {
        status: Some(ProblemStatus::Solved),
        date: Some(days_ago(2)),
        ..Default::default()
    };
    store.update_problem(&id, update);

    assert_eq!(store.problem(&id).unwrap().date, days_ago(2));
    assert_eq!(store.total_xp(), 10);
}

#[test]
fn test_problem_added_solved_is_rewarded() {
    let (mut store, _, _) = empty_store();
    store.add_problem(new_problem(Difficulty::Hard, ProblemStatus::Solved, days_ago(0)));

    assert_eq!(store.total_xp(), 30);
    assert_eq!(store.current_streak(), 1);
}

#[test]
fn test_project_completion_grants_xp_and_badge_once() {
    let (mut store, _, _) = empty_store();
    let id = store.add_project(new_project(ProjectStatus::InProgress));

    assert!(store.update_project(&id, UpdateProject::status(ProjectStatus::Completed)));
    assert_eq!(store.total_xp(), 100);
    assert!(store.progress().has_badge(badges::PROJECT_COMPLETED));
    assert!(store.project(&id).unwrap().completed_at.is_some());

    store.update_project(&id, UpdateProject::status(ProjectStatus::Completed));
    assert_eq!(store.total_xp(), 100);
    assert_eq!(
        store
            .badges()
            .iter()
            .filter(|b| *b == badges::PROJECT_COMPLETED)
            .count(),
        1
    );
}

#[test]
fn test_job_pipeline_rewards() {
    let (mut store, _, clock) = empty_store();
    let id = store.add_job(new_job(&["Rust"]));
    assert_eq!(store.job(&id).unwrap().status, JobStatus::NotApplied);

    store.update_job_status(&id, JobStatus::Saved);
    assert_eq!(store.total_xp(), 0);

    store.update_job_status(&id, JobStatus::Applied);
    assert_eq!(store.total_xp(), 25);
    assert_eq!(store.job(&id).unwrap().applied_at, Some(clock.now()));

    // Same status again is not a transition.
    store.update_job_status(&id, JobStatus::Applied);
    assert_eq!(store.total_xp(), 25);

    store.update_job_status(&id, JobStatus::Interview);
    assert_eq!(store.total_xp(), 75);
    assert!(store.progress().has_badge(badges::INTERVIEW_SCHEDULED));

    store.update_job_status(&id, JobStatus::Offer);
    assert_eq!(store.total_xp(), 275);
    assert!(store.progress().has_badge(badges::JOB_OFFER_RECEIVED));

    // Job rewards do not count as streak activity.
    assert_eq!(store.current_streak(), 0);
}

#[test]
fn test_job_note_and_delete() {
    let (mut store, _, _) = empty_store();
    let id = store.add_job(new_job(&[]));

    assert!(store.add_job_note(&id, "Recruiter call Friday"));
    assert_eq!(
        store.job(&id).unwrap().notes.as_deref(),
        Some("Recruiter call Friday")
    );

    assert!(store.delete_job(&id));
    assert!(store.jobs().is_empty());
    assert!(!store.delete_job(&id));
}

#[test]
fn test_roadmap_step_completion_on_seeded_state() {
    let (mut store, _, _) = seeded_store();
    assert_eq!(store.total_xp(), DEFAULT_TOTAL_XP);

    assert!(store.complete_roadmap_step("2"));
    assert_eq!(store.total_xp(), DEFAULT_TOTAL_XP + 120);
    assert!(store.progress().has_badge(badges::ROADMAP_PROGRESS));
    // Past the first threshold already; the next award unlocks it.
    assert!(store.progress().has_badge(badges::XP_MASTER));

    let step = store
        .roadmap_steps()
        .iter()
        .find(|s| s.id == "2")
        .unwrap();
    assert!(step.completed);
    assert!(step.completed_at.is_some());

    store.complete_roadmap_step("2");
    assert_eq!(store.total_xp(), DEFAULT_TOTAL_XP + 120);
}

#[test]
fn test_unknown_ids_are_silent_noops() {
    let (mut store, memory, _) = seeded_store();
    let before = store.snapshot().clone();

    assert!(!store.update_task("missing", UpdateTask::completed(true)));
    assert!(!store.toggle_task("missing"));
    assert!(!store.update_problem("missing", UpdateProblem::status(ProblemStatus::Solved)));
    assert!(!store.update_project("missing", UpdateProject::status(ProjectStatus::Completed)));
    assert!(!store.update_job_status("missing", JobStatus::Offer));
    assert!(!store.complete_roadmap_step("missing"));
    assert!(!store.mark_resource_complete("missing"));
    assert!(!store.complete_system_design_quiz("missing", 90));
    assert!(!store.delete_task("missing"));

    assert_eq!(store.snapshot(), &before);
    assert_eq!(memory.write_count(), 0);
}

#[test]
fn test_streak_follows_calendar_days() {
    let (mut store, _, clock) = empty_store();
    let id = store.add_task(new_task(5));
    store.toggle_task(&id);
    assert_eq!(store.current_streak(), 1);

    clock.advance(Duration::days(1));
    store.add_problem(new_problem(Difficulty::Easy, ProblemStatus::Solved, clock.today()));
    assert_eq!(store.current_streak(), 2);

    // Same day again.
    store.record_activity();
    assert_eq!(store.current_streak(), 2);

    clock.advance(Duration::days(3));
    store.record_activity();
    assert_eq!(store.current_streak(), 1);
}

#[test]
fn test_week_warrior_unlocks_at_seven_days() {
    let mut state = Snapshot::empty();
    state.progress = ProgressStats {
        current_streak: 6,
        last_active_date: Some(days_ago(1)),
        ..Default::default()
    };
    let (mut store, _, _) = store_with(state);

    store.record_activity();

    assert_eq!(store.current_streak(), 7);
    assert!(store.progress().has_badge(badges::WEEK_WARRIOR));
}

#[test]
fn test_xp_threshold_badges() {
    let (mut store, _, _) = empty_store();
    store.add_xp(999);
    assert!(!store.progress().has_badge(badges::XP_MASTER));

    store.add_xp(1);
    assert!(store.progress().has_badge(badges::XP_MASTER));

    store.add_xp(4000);
    assert!(store.progress().has_badge(badges::XP_LEGEND));
    assert_eq!(store.badges(), &[badges::XP_MASTER, badges::XP_LEGEND]);
}

#[test]
fn test_add_badge_is_idempotent() {
    let (mut store, memory, _) = empty_store();
    assert!(store.add_badge("Night Owl"));
    assert!(!store.add_badge("Night Owl"));
    assert_eq!(store.badges(), &["Night Owl"]);
    assert_eq!(memory.write_count(), 1);
}

#[test]
fn test_study_time_and_pomodoro() {
    let (mut store, _, _) = empty_store();
    store.add_study_time(45);
    assert_eq!(store.study_minutes(), 45);
    assert_eq!(store.total_xp(), 4);

    store.complete_pomodoro();
    assert_eq!(store.study_minutes(), 70);
    assert_eq!(store.total_xp(), 4 + 2 + 10);
}

#[test]
fn test_interview_session_grants_score_once() {
    let (mut store, _, _) = empty_store();
    store.add_interview_session(CreateInterviewSession {
        kind: InterviewKind::Technical,
        question: "Design a rate limiter".to_string(),
        answer: "Token bucket".to_string(),
        score: 72,
        feedback: "Solid".to_string(),
        duration_secs: 300,
    });

    assert_eq!(store.total_xp(), 72);
    assert_eq!(store.interview_sessions().len(), 1);
    assert_eq!(store.current_streak(), 1);
}

#[test]
fn test_recorded_answer_is_scored_with_flavor_feedback() {
    let (mut store, _, _) = empty_store();
    let flavor = FixedFlavor {
        delta: 3,
        feedback: "Quantify the impact.".to_string(),
    };

    let answer = "The situation was a failing deploy; my action was a rollback and the result was zero downtime.";
    store.record_interview_answer(
        InterviewKind::Behavioral,
        "Tell me about an outage",
        answer,
        120,
        &flavor,
    );

    let session = &store.interview_sessions()[0];
    // base 50 + situation, action, result
    assert_eq!(session.score, 65);
    assert_eq!(session.feedback, "Quantify the impact.");
    assert_eq!(session.duration_secs, 120);
    assert_eq!(store.total_xp(), 65);
}

#[test]
fn test_resource_completion_rewards_once() {
    let (mut store, _, _) = empty_store();
    let id = store.add_resource(new_resource());

    assert!(store.toggle_resource_bookmark(&id));
    assert!(store.resources()[0].bookmarked);

    assert!(store.mark_resource_complete(&id));
    store.mark_resource_complete(&id);
    assert_eq!(store.total_xp(), 20);
    assert!(store.resources()[0].completed);

    assert!(store.delete_resource(&id));
    assert!(store.resources().is_empty());
}

#[test]
fn test_system_design_topic_and_quiz() {
    let (mut store, _, _) = seeded_store();
    let base = store.total_xp();

    let update = UpdateTopic {
        notes: Some("Round robin vs least connections".to_string()),
        completed: Some(true),
    };
    assert!(store.update_system_design_topic("1", update));
    assert_eq!(store.total_xp(), base + 50);

    // Every quiz submission is rewarded.
    assert!(store.complete_system_design_quiz("1", 80));
    assert!(store.complete_system_design_quiz("1", 100));
    assert_eq!(store.total_xp(), base + 150);

    let topic = &store.system_design_topics()[0];
    assert_eq!(topic.quiz.score, Some(100));
    assert!(topic.quiz.completed);
    assert_eq!(topic.notes, "Round robin vs least connections");
}

#[test]
fn test_skills_and_reset() {
    let (mut store, _, clock) = seeded_store();
    store.update_skill("Rust", 40);
    store.add_xp(500);
    store.delete_job("1");
    assert_eq!(store.skills().get("Rust"), Some(&40));

    store.reset();

    assert_eq!(store.snapshot(), &seed::default_snapshot(clock.today()));
    assert!(store.skills().get("Rust").is_none());
}

#[test]
fn test_every_effective_mutation_is_saved() {
    let (mut store, memory, _) = empty_store();
    let id = store.add_task(new_task(10));
    store.toggle_task(&id);
    store.update_skill("Graphs", 60);

    assert_eq!(memory.write_count(), 3);
    let saved = Snapshot::from_json(&memory.blob().unwrap()).unwrap();
    assert_eq!(&saved, store.snapshot());
}

#[test]
fn test_solve_pays_difficulty_held_before_the_patch() {
    let (mut store, _, _) = empty_store();
    let id = store.add_problem(new_problem(
        Difficulty::Easy,
        ProblemStatus::Attempted,
        days_ago(1),
    ));

    let update = UpdateProblem {
        status: Some(ProblemStatus::Solved),
        difficulty: Some(Difficulty::Hard),
        ..Default::default()
    };
    store.update_problem(&id, update);

    assert_eq!(store.total_xp(), 10);
    assert_eq!(store.problem(&id).unwrap().difficulty, Difficulty::Hard);
}

#[test]
fn test_completion_pays_xp_held_before_the_patch() {
    let (mut store, _, _) = empty_store();
    let id = store.add_task(new_task(30));

    let update = UpdateTask {
        completed: Some(true),
        xp: Some(500),
        ..Default::default()
    };
    store.update_task(&id, update);

    assert_eq!(store.total_xp(), 30);
    assert_eq!(store.task(&id).unwrap().xp, 500);
}
