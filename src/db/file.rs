// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! JSON file snapshot store.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::db::SnapshotStore;
use crate::error::{AppError, Result};

/// Snapshot slot backed by a single file.
///
/// Writes land in a sibling temp file that is renamed over the target, so
/// readers see either the previous snapshot or the new one.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Open the slot at `path`, creating its parent directory.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                AppError::Persistence(format!(
                    "Failed to create data directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
        tracing::info!(path = %path.display(), "Using file snapshot store");
        Ok(Self { path })
    }

    /// Open the slot named by the configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.state_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl SnapshotStore for FileStore {
    fn read_blob(&self) -> Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(blob) => Ok(Some(blob)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::Persistence(format!(
                "Failed to read {}: {}",
                self.path.display(),
                e
            ))),
        }
    }

    fn write_blob(&self, blob: &str) -> Result<()> {
        let tmp = self.temp_path();
        fs::write(&tmp, blob).map_err(|e| {
            AppError::Persistence(format!("Failed to write {}: {}", tmp.display(), e))
        })?;
        fs::rename(&tmp, &self.path).map_err(|e| {
            AppError::Persistence(format!(
                "Failed to replace {}: {}",
                self.path.display(),
                e
            ))
        })?;
        tracing::debug!(path = %self.path.display(), bytes = blob.len(), "Snapshot written");
        Ok(())
    }
}
