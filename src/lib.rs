// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Prep-Tracker: progress store for a technical interview preparation dashboard
//!
//! This crate owns every collection the dashboard edits (problems, projects,
//! tasks, jobs, roadmap steps, interview sessions, resources, community
//! posts, system design topics, resume, skills), applies the XP, badge and
//! streak rules on each mutation, derives analytics, and persists the whole
//! state as one versioned JSON snapshot.

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod services;
pub mod time_utils;

use std::sync::Arc;

use config::Config;
use db::{FileStore, SnapshotStore, WriteBehindStore};
use error::Result;
use services::ProgressStore;
use time_utils::Clock;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub store: ProgressStore,
    /// Present when saves go through the asynchronous writer
    pub writer: Option<Arc<WriteBehindStore>>,
}

impl AppState {
    /// Open the snapshot named by `config` and build the store over it.
    ///
    /// With `write_behind` enabled this must run inside a Tokio runtime.
    pub fn open(config: Config, clock: Arc<dyn Clock>) -> Result<Self> {
        let file: Arc<dyn SnapshotStore> = Arc::new(FileStore::from_config(&config)?);

        let mut writer = None;
        let persistence: Arc<dyn SnapshotStore> = if config.write_behind {
            let queued = Arc::new(WriteBehindStore::spawn(file)?);
            writer = Some(queued.clone());
            queued
        } else {
            file
        };

        tracing::info!(
            path = %config.state_path().display(),
            write_behind = config.write_behind,
            "Opening progress store"
        );
        let store = ProgressStore::open(persistence, clock);

        Ok(Self {
            config,
            store,
            writer,
        })
    }

    /// Wait until every queued save has reached disk.
    pub async fn flush(&self) -> Result<()> {
        match &self.writer {
            Some(writer) => writer.flush().await,
            None => Ok(()),
        }
    }
}

/// Initialize structured JSON logging.
///
/// Safe to call more than once; later calls are ignored.
pub fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("prep_tracker=debug,info"));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(format)
        .try_init();
}
