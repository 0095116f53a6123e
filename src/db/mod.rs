// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Persistence layer: one opaque snapshot blob under one well-known key.

pub mod file;
pub mod memory;
pub mod write_behind;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use write_behind::WriteBehindStore;

use crate::error::Result;
use crate::models::Snapshot;

/// A key-value slot holding the serialized store.
///
/// Implementors only move opaque strings; decoding, schema migration and
/// recovery from corrupt blobs live in the provided `load`/`save` methods.
pub trait SnapshotStore: Send + Sync {
    /// Read the raw blob, `None` if nothing has been written yet.
    fn read_blob(&self) -> Result<Option<String>>;

    /// Replace the blob. Last write wins.
    fn write_blob(&self, blob: &str) -> Result<()>;

    /// Load the last saved snapshot.
    ///
    /// Returns `None` when the slot is empty, unreadable, unparseable or
    /// written by a newer schema. Failures are logged, never propagated;
    /// the caller seeds defaults instead.
    fn load(&self) -> Option<Snapshot> {
        let blob = match self.read_blob() {
            Ok(Some(blob)) => blob,
            Ok(None) => {
                tracing::debug!("No saved snapshot");
                return None;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read snapshot, using defaults");
                return None;
            }
        };

        let snapshot = match Snapshot::from_json(&blob) {
            Ok(snapshot) => snapshot,
            Err(e) => {
                tracing::warn!(error = %e, bytes = blob.len(), "Discarding malformed snapshot");
                return None;
            }
        };

        let version = snapshot.version;
        let migrated = snapshot.migrate();
        if migrated.is_none() {
            tracing::warn!(version, "Discarding snapshot from a newer schema");
        }
        migrated
    }

    /// Serialize and write the whole snapshot.
    fn save(&self, snapshot: &Snapshot) -> Result<()> {
        let blob = snapshot.to_json()?;
        self.write_blob(&blob)
    }
}
