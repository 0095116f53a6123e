//! Persisted snapshot layout and schema versioning.
//!
//! The whole store is written as one JSON document under one key. Field
//! names follow the dashboard's camelCase layout so the view layer can read
//! the blob directly.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::{
    CommunityPost, InterviewSession, Job, Problem, ProgressStats, Project, Resource, Resume,
    RoadmapStep, SystemDesignTopic, Task, User,
};

/// Schema version written by this build.
pub const CURRENT_SCHEMA_VERSION: u32 = 1;

/// Full store state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    /// Schema version; absent in blobs written before versioning (0)
    #[serde(default)]
    pub version: u32,
    #[serde(default)]
    pub user: Option<User>,
    #[serde(flatten)]
    pub progress: ProgressStats,

    // ─── Collections (newest first) ──────────────────────────────
    #[serde(default)]
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub problems: Vec<Problem>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub jobs: Vec<Job>,
    #[serde(default)]
    pub roadmap_steps: Vec<RoadmapStep>,
    #[serde(default)]
    pub interview_sessions: Vec<InterviewSession>,
    #[serde(default)]
    pub resources: Vec<Resource>,
    #[serde(default)]
    pub community_posts: Vec<CommunityPost>,
    #[serde(default)]
    pub system_design_topics: Vec<SystemDesignTopic>,

    // ─── Documents ───────────────────────────────────────────────
    #[serde(rename = "resumeData", default)]
    pub resume: Resume,
    /// Skill name -> self-rated score (0-100)
    #[serde(default)]
    pub skills: BTreeMap<String, u32>,
}

impl Default for Snapshot {
    fn default() -> Self {
        Self::empty()
    }
}

impl Snapshot {
    /// A blank state: no user, zero counters, empty collections.
    pub fn empty() -> Self {
        Self {
            version: CURRENT_SCHEMA_VERSION,
            user: None,
            progress: ProgressStats::default(),
            tasks: Vec::new(),
            problems: Vec::new(),
            projects: Vec::new(),
            jobs: Vec::new(),
            roadmap_steps: Vec::new(),
            interview_sessions: Vec::new(),
            resources: Vec::new(),
            community_posts: Vec::new(),
            system_design_topics: Vec::new(),
            resume: Resume::default(),
            skills: BTreeMap::new(),
        }
    }

    pub fn from_json(blob: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(blob)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Bring a decoded snapshot up to the current schema.
    ///
    /// Returns `None` for snapshots written by a newer schema; those are
    /// discarded rather than partially understood.
    pub fn migrate(mut self) -> Option<Self> {
        match self.version {
            v if v > CURRENT_SCHEMA_VERSION => None,
            0 => {
                // Legacy date encodings were already normalized by the
                // lenient field decoders; the next save writes them as v1.
                self.version = CURRENT_SCHEMA_VERSION;
                Some(self)
            }
            _ => Some(self),
        }
    }
}
