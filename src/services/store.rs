// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! The progress store: single owner of every collection and counter.
//!
//! Each mutator:
//! 1. Applies the change to the in-memory snapshot
//! 2. Grants rewards for transitions into a rewarding state
//! 3. Saves the full snapshot through the persistence adapter
//!
//! Mutations against unknown ids are silent no-ops (logged at debug) and
//! do not trigger a save.

use std::sync::Arc;

use crate::db::SnapshotStore;
use crate::error::Result;
use crate::models::{
    badges, rewards, CommunityPost, CommunityReply, CreateInterviewSession, CreateJob, CreatePost,
    CreateProblem, CreateProject, CreateReply, CreateResource, CreateTask, InterviewKind,
    InterviewSession, Job, JobStatus, Problem, ProgressStats, Project, ProjectStatus, Resource,
    Resume, ResumeSection, RoadmapStep, Snapshot, SystemDesignTopic, Task, UpdateProblem,
    UpdateProject, UpdateTask, UpdateTopic, User, Votable, Vote,
};
use crate::services::analytics::{self, DailyActivity, SkillProgress, WeeklySummary};
use crate::services::flavor::FlavorProvider;
use crate::services::interview::score_answer;
use crate::services::seed;
use crate::time_utils::Clock;

fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Remove the record with `id`. Returns `true` if one was removed.
fn remove_by_id<T>(items: &mut Vec<T>, id: &str, key: impl Fn(&T) -> &str) -> bool {
    let before = items.len();
    items.retain(|item| key(item) != id);
    items.len() != before
}

/// Application-wide progress store.
pub struct ProgressStore {
    state: Snapshot,
    persistence: Arc<dyn SnapshotStore>,
    clock: Arc<dyn Clock>,
}

impl ProgressStore {
    /// Build the store from the last saved snapshot.
    ///
    /// Reads persistence exactly once. An empty, corrupt or unsupported
    /// snapshot falls back to the built-in defaults.
    pub fn open(persistence: Arc<dyn SnapshotStore>, clock: Arc<dyn Clock>) -> Self {
        let state = match persistence.load() {
            Some(snapshot) => {
                tracing::info!(
                    version = snapshot.version,
                    total_xp = snapshot.progress.total_xp,
                    tasks = snapshot.tasks.len(),
                    problems = snapshot.problems.len(),
                    "Loaded saved snapshot"
                );
                snapshot
            }
            None => {
                tracing::info!("No usable snapshot, seeding defaults");
                seed::default_snapshot(clock.today())
            }
        };
        Self::with_state(state, persistence, clock)
    }

    /// Build the store around an explicit state without reading persistence.
    pub fn with_state(
        state: Snapshot,
        persistence: Arc<dyn SnapshotStore>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            state,
            persistence,
            clock,
        }
    }

    // ─── Read Access ─────────────────────────────────────────────

    pub fn snapshot(&self) -> &Snapshot {
        &self.state
    }

    pub fn into_snapshot(self) -> Snapshot {
        self.state
    }

    pub fn user(&self) -> Option<&User> {
        self.state.user.as_ref()
    }

    pub fn progress(&self) -> &ProgressStats {
        &self.state.progress
    }

    pub fn total_xp(&self) -> u32 {
        self.state.progress.total_xp
    }

    pub fn current_streak(&self) -> u32 {
        self.state.progress.current_streak
    }

    pub fn badges(&self) -> &[String] {
        &self.state.progress.badges
    }

    pub fn study_minutes(&self) -> u32 {
        self.state.progress.study_minutes
    }

    pub fn tasks(&self) -> &[Task] {
        &self.state.tasks
    }

    pub fn task(&self, id: &str) -> Option<&Task> {
        self.state.tasks.iter().find(|t| t.id == id)
    }

    pub fn problems(&self) -> &[Problem] {
        &self.state.problems
    }

    pub fn problem(&self, id: &str) -> Option<&Problem> {
        self.state.problems.iter().find(|p| p.id == id)
    }

    pub fn projects(&self) -> &[Project] {
        &self.state.projects
    }

    pub fn project(&self, id: &str) -> Option<&Project> {
        self.state.projects.iter().find(|p| p.id == id)
    }

    pub fn jobs(&self) -> &[Job] {
        &self.state.jobs
    }

    pub fn job(&self, id: &str) -> Option<&Job> {
        self.state.jobs.iter().find(|j| j.id == id)
    }

    pub fn roadmap_steps(&self) -> &[RoadmapStep] {
        &self.state.roadmap_steps
    }

    pub fn interview_sessions(&self) -> &[InterviewSession] {
        &self.state.interview_sessions
    }

    pub fn resources(&self) -> &[Resource] {
        &self.state.resources
    }

    pub fn community_posts(&self) -> &[CommunityPost] {
        &self.state.community_posts
    }

    pub fn community_post(&self, id: &str) -> Option<&CommunityPost> {
        self.state.community_posts.iter().find(|p| p.id == id)
    }

    pub fn system_design_topics(&self) -> &[SystemDesignTopic] {
        &self.state.system_design_topics
    }

    pub fn resume(&self) -> &Resume {
        &self.state.resume
    }

    pub fn skills(&self) -> &std::collections::BTreeMap<String, u32> {
        &self.state.skills
    }

    // ─── Persistence ─────────────────────────────────────────────

    /// Write the full snapshot now.
    pub fn save(&self) -> Result<()> {
        self.persistence.save(&self.state)
    }

    /// Save after a mutation. Failures are logged, never surfaced.
    fn persist(&self) {
        if let Err(e) = self.save() {
            tracing::warn!(
                error = %e,
                recoverable = e.is_recoverable(),
                "Failed to persist snapshot"
            );
        }
    }

    // ─── Gamification ────────────────────────────────────────────

    fn grant_xp(&mut self, amount: u32) {
        let unlocked = self.state.progress.add_xp(amount);
        tracing::info!(
            xp = amount,
            total_xp = self.state.progress.total_xp,
            "Experience points awarded"
        );
        for badge in unlocked {
            tracing::info!(badge, "Badge unlocked");
        }
    }

    fn grant_badge(&mut self, badge: &str) {
        if self.state.progress.add_badge(badge) {
            tracing::info!(badge, "Badge unlocked");
        }
    }

    fn touch_streak(&mut self) {
        let today = self.clock.today();
        let before = self.state.progress.current_streak;
        let unlocked = self.state.progress.record_activity(today);
        if self.state.progress.current_streak != before {
            tracing::info!(
                streak = self.state.progress.current_streak,
                previous = before,
                "Streak updated"
            );
        }
        for badge in unlocked {
            tracing::info!(badge, "Badge unlocked");
        }
    }

    /// Add experience points directly.
    pub fn add_xp(&mut self, amount: u32) {
        self.grant_xp(amount);
        self.persist();
    }

    /// Unlock a named badge. Returns `false` if it was already held.
    pub fn add_badge(&mut self, badge: &str) -> bool {
        let added = self.state.progress.add_badge(badge);
        if added {
            tracing::info!(badge, "Badge unlocked");
            self.persist();
        }
        added
    }

    /// Count today as active for the streak.
    pub fn record_activity(&mut self) {
        self.touch_streak();
        self.persist();
    }

    /// Log focused study time; every 10 minutes is worth one point.
    pub fn add_study_time(&mut self, minutes: u32) {
        let xp = self.state.progress.add_study_minutes(minutes);
        tracing::debug!(minutes, total = self.state.progress.study_minutes, "Study time added");
        self.grant_xp(xp);
        self.persist();
    }

    /// A finished focus timer: its study minutes plus a completion bonus.
    pub fn complete_pomodoro(&mut self) {
        let xp = self
            .state
            .progress
            .add_study_minutes(rewards::POMODORO_MINUTES);
        self.grant_xp(xp + rewards::POMODORO_BONUS_XP);
        self.persist();
    }

    /// Discard everything and restore the built-in defaults.
    pub fn reset(&mut self) {
        tracing::warn!(
            total_xp = self.state.progress.total_xp,
            "Resetting store to defaults"
        );
        self.state = seed::default_snapshot(self.clock.today());
        self.persist();
    }

    // ─── User ────────────────────────────────────────────────────

    pub fn set_user(&mut self, user: Option<User>) {
        self.state.user = user;
        self.persist();
    }

    // ─── Tasks ───────────────────────────────────────────────────

    /// Add a task at the front of the list. Returns its id.
    pub fn add_task(&mut self, input: CreateTask) -> String {
        let id = new_id();
        let task = Task::from_create(id.clone(), input, self.clock.now());
        self.state.tasks.insert(0, task);
        tracing::debug!(task_id = %id, "Task added");
        self.persist();
        id
    }

    /// Merge `update` into a task.
    ///
    /// Completing a task grants the `xp` it had before this update and
    /// stamps the completion time.
    /// Un-completing clears the timestamp but keeps granted points.
    pub fn update_task(&mut self, id: &str, update: UpdateTask) -> bool {
        let now = self.clock.now();
        let Some(task) = self.state.tasks.iter_mut().find(|t| t.id == id) else {
            tracing::debug!(task_id = id, "Ignoring update for unknown task");
            return false;
        };

        let was_completed = task.completed;
        let xp = task.xp;
        task.apply(update);
        let reward = match (was_completed, task.completed) {
            (false, true) => {
                task.completed_at = Some(now);
                Some(xp)
            }
            (true, false) => {
                task.completed_at = None;
                None
            }
            _ => None,
        };

        if let Some(xp) = reward {
            tracing::info!(task_id = id, xp, "Task completed");
            self.grant_xp(xp);
            self.touch_streak();
        }
        self.persist();
        true
    }

    /// Flip a task's completed flag.
    pub fn toggle_task(&mut self, id: &str) -> bool {
        match self.task(id).map(|t| t.completed) {
            Some(completed) => self.update_task(id, UpdateTask::completed(!completed)),
            None => {
                tracing::debug!(task_id = id, "Ignoring toggle for unknown task");
                false
            }
        }
    }

    pub fn delete_task(&mut self, id: &str) -> bool {
        self.delete(id, "task", |s| &mut s.tasks, |t| t.id.as_str())
    }

    // ─── Problems ────────────────────────────────────────────────

    /// Add a problem. Logging one that is already solved grants its reward.
    pub fn add_problem(&mut self, input: CreateProblem) -> String {
        let id = new_id();
        let problem = Problem::from_create(id.clone(), input);
        let reward = problem.is_solved().then(|| problem.difficulty.reward());
        self.state.problems.insert(0, problem);
        tracing::debug!(problem_id = %id, "Problem added");

        if let Some(xp) = reward {
            tracing::info!(problem_id = %id, xp, "Problem solved");
            self.grant_xp(xp);
            self.touch_streak();
        }
        self.persist();
        id
    }

    /// Merge `update` into a problem.
    ///
    /// Moving into `solved` grants 10/20/30 points by the difficulty the
    /// problem had before this update. Without an explicit date the solve is
    /// dated today.
    pub fn update_problem(&mut self, id: &str, update: UpdateProblem) -> bool {
        let today = self.clock.today();
        let Some(problem) = self.state.problems.iter_mut().find(|p| p.id == id) else {
            tracing::debug!(problem_id = id, "Ignoring update for unknown problem");
            return false;
        };

        let was_solved = problem.is_solved();
        let difficulty = problem.difficulty;
        let dated = update.date.is_some();
        problem.apply(update);

        let reward = if !was_solved && problem.is_solved() {
            if !dated {
                problem.date = today;
            }
            Some(difficulty.reward())
        } else {
            None
        };

        if let Some(xp) = reward {
            tracing::info!(problem_id = id, xp, "Problem solved");
            self.grant_xp(xp);
            self.touch_streak();
        }
        self.persist();
        true
    }

    pub fn delete_problem(&mut self, id: &str) -> bool {
        self.delete(id, "problem", |s| &mut s.problems, |p| p.id.as_str())
    }

    // ─── Projects ────────────────────────────────────────────────

    pub fn add_project(&mut self, input: CreateProject) -> String {
        let id = new_id();
        let project = Project::from_create(id.clone(), input, self.clock.now());
        self.state.projects.insert(0, project);
        tracing::debug!(project_id = %id, "Project added");
        self.persist();
        id
    }

    /// Merge `update` into a project.
    ///
    /// Moving into `completed` grants 100 points and the
    /// "Project Completed" badge, and stamps the completion time.
    pub fn update_project(&mut self, id: &str, update: UpdateProject) -> bool {
        let now = self.clock.now();
        let Some(project) = self.state.projects.iter_mut().find(|p| p.id == id) else {
            tracing::debug!(project_id = id, "Ignoring update for unknown project");
            return false;
        };

        let was_completed = project.status == ProjectStatus::Completed;
        project.apply(update);
        let completed_now = !was_completed && project.status == ProjectStatus::Completed;
        if completed_now {
            project.completed_at = Some(now);
        }

        if completed_now {
            tracing::info!(project_id = id, "Project completed");
            self.grant_xp(rewards::PROJECT_COMPLETED_XP);
            self.grant_badge(badges::PROJECT_COMPLETED);
            self.touch_streak();
        }
        self.persist();
        true
    }

    pub fn delete_project(&mut self, id: &str) -> bool {
        self.delete(id, "project", |s| &mut s.projects, |p| p.id.as_str())
    }

    // ─── Jobs ────────────────────────────────────────────────────

    pub fn add_job(&mut self, input: CreateJob) -> String {
        let id = new_id();
        self.state.jobs.insert(0, Job::from_create(id.clone(), input));
        tracing::debug!(job_id = %id, "Job added");
        self.persist();
        id
    }

    /// Move a listing through the pipeline.
    ///
    /// Entering `applied` grants 25 and stamps the application time,
    /// `interview` grants 50 plus a badge, `offer` grants 200 plus a badge.
    /// Setting the current status again changes nothing.
    pub fn update_job_status(&mut self, id: &str, status: JobStatus) -> bool {
        let now = self.clock.now();
        let Some(job) = self.state.jobs.iter_mut().find(|j| j.id == id) else {
            tracing::debug!(job_id = id, "Ignoring status change for unknown job");
            return false;
        };
        if job.status == status {
            return true;
        }

        let previous = job.status;
        job.status = status;
        if status == JobStatus::Applied {
            job.applied_at = Some(now);
        }
        tracing::info!(job_id = id, ?previous, ?status, "Job status changed");

        match status {
            JobStatus::Applied => self.grant_xp(rewards::JOB_APPLIED_XP),
            JobStatus::Interview => {
                self.grant_xp(rewards::JOB_INTERVIEW_XP);
                self.grant_badge(badges::INTERVIEW_SCHEDULED);
            }
            JobStatus::Offer => {
                self.grant_xp(rewards::JOB_OFFER_XP);
                self.grant_badge(badges::JOB_OFFER_RECEIVED);
            }
            JobStatus::NotApplied | JobStatus::Saved | JobStatus::Rejected => {}
        }
        self.persist();
        true
    }

    pub fn add_job_note(&mut self, id: &str, note: impl Into<String>) -> bool {
        let Some(job) = self.state.jobs.iter_mut().find(|j| j.id == id) else {
            tracing::debug!(job_id = id, "Ignoring note for unknown job");
            return false;
        };
        job.notes = Some(note.into());
        self.persist();
        true
    }

    pub fn delete_job(&mut self, id: &str) -> bool {
        self.delete(id, "job", |s| &mut s.jobs, |j| j.id.as_str())
    }

    // ─── Roadmap ─────────────────────────────────────────────────

    /// Mark a roadmap step done. Only the first completion is rewarded.
    pub fn complete_roadmap_step(&mut self, id: &str) -> bool {
        let now = self.clock.now();
        let Some(step) = self.state.roadmap_steps.iter_mut().find(|s| s.id == id) else {
            tracing::debug!(step_id = id, "Ignoring completion of unknown roadmap step");
            return false;
        };
        if step.completed {
            return true;
        }

        step.completed = true;
        step.completed_at = Some(now);
        let xp = step.xp;
        tracing::info!(step_id = id, xp, "Roadmap step completed");

        self.grant_xp(xp);
        self.grant_badge(badges::ROADMAP_PROGRESS);
        self.touch_streak();
        self.persist();
        true
    }

    // ─── Interview Sessions ──────────────────────────────────────

    /// Save a scored session. Its score is granted as points once.
    pub fn add_interview_session(&mut self, input: CreateInterviewSession) -> String {
        let id = new_id();
        let session = InterviewSession {
            id: id.clone(),
            kind: input.kind,
            question: input.question,
            answer: input.answer,
            score: input.score,
            feedback: input.feedback,
            duration_secs: input.duration_secs,
            date: self.clock.now(),
        };
        let score = session.score;
        self.state.interview_sessions.insert(0, session);
        tracing::info!(session_id = %id, score, "Interview session saved");

        self.grant_xp(score);
        self.touch_streak();
        self.persist();
        id
    }

    /// Score a free-text answer, attach canned feedback and save it.
    pub fn record_interview_answer(
        &mut self,
        kind: InterviewKind,
        question: impl Into<String>,
        answer: impl Into<String>,
        duration_secs: u32,
        flavor: &dyn FlavorProvider,
    ) -> String {
        let answer = answer.into();
        let score = score_answer(kind, &answer);
        self.add_interview_session(CreateInterviewSession {
            kind,
            question: question.into(),
            answer,
            score,
            feedback: flavor.interview_feedback(),
            duration_secs,
        })
    }

    // ─── Resources ───────────────────────────────────────────────

    pub fn add_resource(&mut self, input: CreateResource) -> String {
        let id = new_id();
        self.state
            .resources
            .insert(0, Resource::from_create(id.clone(), input));
        tracing::debug!(resource_id = %id, "Resource added");
        self.persist();
        id
    }

    pub fn toggle_resource_bookmark(&mut self, id: &str) -> bool {
        let Some(resource) = self.state.resources.iter_mut().find(|r| r.id == id) else {
            tracing::debug!(resource_id = id, "Ignoring bookmark for unknown resource");
            return false;
        };
        resource.bookmarked = !resource.bookmarked;
        self.persist();
        true
    }

    /// Mark a resource finished. Only the first completion is rewarded.
    pub fn mark_resource_complete(&mut self, id: &str) -> bool {
        let Some(resource) = self.state.resources.iter_mut().find(|r| r.id == id) else {
            tracing::debug!(resource_id = id, "Ignoring completion of unknown resource");
            return false;
        };
        if resource.completed {
            return true;
        }

        resource.completed = true;
        tracing::info!(resource_id = id, "Resource completed");
        self.grant_xp(rewards::RESOURCE_COMPLETED_XP);
        self.touch_streak();
        self.persist();
        true
    }

    pub fn delete_resource(&mut self, id: &str) -> bool {
        self.delete(id, "resource", |s| &mut s.resources, |r| r.id.as_str())
    }

    // ─── Community ───────────────────────────────────────────────

    pub fn add_community_post(&mut self, input: CreatePost) -> String {
        let id = new_id();
        let post = CommunityPost::from_create(id.clone(), input, self.clock.now());
        self.state.community_posts.insert(0, post);
        tracing::info!(post_id = %id, "Community post created");

        self.grant_xp(rewards::COMMUNITY_POST_XP);
        self.persist();
        id
    }

    /// Cast the local user's vote on a post.
    pub fn vote_community_post(&mut self, id: &str, vote: Vote) -> bool {
        let Some(post) = self.state.community_posts.iter_mut().find(|p| p.id == id) else {
            tracing::debug!(post_id = id, "Ignoring vote on unknown post");
            return false;
        };
        post.cast_vote(vote);
        self.persist();
        true
    }

    /// Append a reply to a post. Returns `None` if the post does not exist.
    pub fn add_community_reply(&mut self, post_id: &str, input: CreateReply) -> Option<String> {
        let now = self.clock.now();
        let Some(post) = self
            .state
            .community_posts
            .iter_mut()
            .find(|p| p.id == post_id)
        else {
            tracing::debug!(post_id, "Ignoring reply to unknown post");
            return None;
        };

        let id = new_id();
        post.replies
            .push(CommunityReply::from_create(id.clone(), input, now));
        tracing::info!(post_id, reply_id = %id, "Community reply added");

        self.grant_xp(rewards::COMMUNITY_REPLY_XP);
        self.persist();
        Some(id)
    }

    /// Cast the local user's vote on a reply.
    pub fn vote_community_reply(&mut self, post_id: &str, reply_id: &str, vote: Vote) -> bool {
        let Some(reply) = self
            .state
            .community_posts
            .iter_mut()
            .find(|p| p.id == post_id)
            .and_then(|p| p.replies.iter_mut().find(|r| r.id == reply_id))
        else {
            tracing::debug!(post_id, reply_id, "Ignoring vote on unknown reply");
            return false;
        };
        reply.cast_vote(vote);
        self.persist();
        true
    }

    pub fn delete_community_post(&mut self, id: &str) -> bool {
        self.delete(id, "community post", |s| &mut s.community_posts, |p| p.id.as_str())
    }

    // ─── System Design ───────────────────────────────────────────

    /// Merge `update` into a topic. Completing it grants the topic's `xp`.
    pub fn update_system_design_topic(&mut self, id: &str, update: UpdateTopic) -> bool {
        let Some(topic) = self
            .state
            .system_design_topics
            .iter_mut()
            .find(|t| t.id == id)
        else {
            tracing::debug!(topic_id = id, "Ignoring update for unknown topic");
            return false;
        };

        let was_completed = topic.completed;
        topic.apply(update);
        let reward = (!was_completed && topic.completed).then_some(topic.xp);

        if let Some(xp) = reward {
            tracing::info!(topic_id = id, xp, "System design topic completed");
            self.grant_xp(xp);
            self.touch_streak();
        }
        self.persist();
        true
    }

    /// Record a quiz submission: stores the score, completes the quiz and
    /// the topic, and grants the topic's `xp`.
    pub fn complete_system_design_quiz(&mut self, id: &str, score: u32) -> bool {
        let Some(topic) = self
            .state
            .system_design_topics
            .iter_mut()
            .find(|t| t.id == id)
        else {
            tracing::debug!(topic_id = id, "Ignoring quiz for unknown topic");
            return false;
        };

        topic.quiz.score = Some(score);
        topic.quiz.completed = true;
        topic.completed = true;
        let xp = topic.xp;
        tracing::info!(topic_id = id, score, xp, "System design quiz submitted");

        self.grant_xp(xp);
        self.touch_streak();
        self.persist();
        true
    }

    // ─── Resume & Skills ─────────────────────────────────────────

    pub fn update_resume(&mut self, section: ResumeSection) {
        self.state.resume.replace_section(section);
        self.persist();
    }

    pub fn update_skill(&mut self, skill: impl Into<String>, score: u32) {
        self.state.skills.insert(skill.into(), score);
        self.persist();
    }

    // ─── Analytics ───────────────────────────────────────────────

    pub fn weekly_summary(&self) -> WeeklySummary {
        analytics::weekly_summary(&self.state, self.clock.now())
    }

    pub fn skill_progress(&self, flavor: &dyn FlavorProvider) -> Vec<SkillProgress> {
        analytics::skill_progress(&self.state.skills, flavor)
    }

    pub fn daily_activity(&self) -> Vec<DailyActivity> {
        analytics::daily_activity(&self.state, self.clock.today())
    }

    /// Fit score of a listing against the current skill ratings.
    pub fn job_match_score(&self, job_id: &str) -> Option<u8> {
        self.job(job_id)
            .map(|job| analytics::job_match_score(job, &self.state.skills))
    }

    // ─── Helpers ─────────────────────────────────────────────────

    fn delete<T>(
        &mut self,
        id: &str,
        kind: &'static str,
        collection: impl FnOnce(&mut Snapshot) -> &mut Vec<T>,
        key: impl Fn(&T) -> &str,
    ) -> bool {
        let removed = remove_by_id(collection(&mut self.state), id, key);
        if removed {
            tracing::debug!(kind, id, "Record deleted");
            self.persist();
        } else {
            tracing::debug!(kind, id, "Ignoring delete of unknown record");
        }
        removed
    }
}
