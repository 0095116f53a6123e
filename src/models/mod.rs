// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod community;
pub mod design;
pub mod interview;
pub mod job;
pub mod problem;
pub mod project;
pub mod resource;
pub mod resume;
pub mod roadmap;
pub mod snapshot;
pub mod stats;
pub mod task;
pub mod user;

pub use community::{CommunityPost, CommunityReply, CreatePost, CreateReply, Votable, Vote};
pub use design::{Quiz, QuizQuestion, SystemDesignTopic, UpdateTopic};
pub use interview::{CreateInterviewSession, InterviewKind, InterviewSession};
pub use job::{CreateJob, Job, JobStatus};
pub use problem::{CreateProblem, Difficulty, Problem, ProblemStatus, TestCase, UpdateProblem};
pub use project::{CreateProject, Project, ProjectStatus, UpdateProject};
pub use resource::{CreateResource, Resource, ResourceKind};
pub use resume::{
    Education, Experience, PersonalInfo, Resume, ResumeProject, ResumeSection, SkillGroups,
};
pub use roadmap::RoadmapStep;
pub use snapshot::{Snapshot, CURRENT_SCHEMA_VERSION};
pub use stats::{badges, rewards, ProgressStats};
pub use task::{CreateTask, Priority, Task, UpdateTask};
pub use user::{ExperienceLevel, Timeline, User};
