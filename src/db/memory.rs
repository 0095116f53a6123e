// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-process snapshot slot for tests and throwaway sessions.

use std::sync::Mutex;

use crate::db::SnapshotStore;
use crate::error::Result;

/// Snapshot slot held in memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    blob: Mutex<Option<String>>,
    writes: Mutex<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A slot that already holds `blob`, which need not be valid JSON.
    pub fn with_blob(blob: impl Into<String>) -> Self {
        Self {
            blob: Mutex::new(Some(blob.into())),
            writes: Mutex::new(0),
        }
    }

    /// Current raw contents.
    pub fn blob(&self) -> Option<String> {
        self.blob.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Number of writes since creation.
    pub fn write_count(&self) -> usize {
        *self.writes.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl SnapshotStore for MemoryStore {
    fn read_blob(&self) -> Result<Option<String>> {
        Ok(self.blob())
    }

    fn write_blob(&self, blob: &str) -> Result<()> {
        *self.blob.lock().unwrap_or_else(|e| e.into_inner()) = Some(blob.to_string());
        *self.writes.lock().unwrap_or_else(|e| e.into_inner()) += 1;
        Ok(())
    }
}
