// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Ordered asynchronous snapshot writer.
//!
//! Mutations serialize their snapshot synchronously and hand the blob to a
//! single writer task over an unbounded channel. One consumer draining one
//! FIFO queue means writes reach the inner store in call order, so an older
//! snapshot can never overwrite a newer one.

use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};

use crate::db::SnapshotStore;
use crate::error::{AppError, Result};

enum WriteCommand {
    Write(String),
    Flush(oneshot::Sender<()>),
}

/// Snapshot store that defers writes to a background task.
pub struct WriteBehindStore {
    inner: Arc<dyn SnapshotStore>,
    tx: mpsc::UnboundedSender<WriteCommand>,
}

impl WriteBehindStore {
    /// Start the writer task on the current Tokio runtime.
    pub fn spawn(inner: Arc<dyn SnapshotStore>) -> Result<Self> {
        let handle = tokio::runtime::Handle::try_current().map_err(|e| {
            AppError::Internal(anyhow::anyhow!(
                "Write-behind persistence requires a Tokio runtime: {}",
                e
            ))
        })?;

        let (tx, rx) = mpsc::unbounded_channel();
        handle.spawn(run_writer(inner.clone(), rx));
        tracing::info!("Write-behind snapshot writer started");

        Ok(Self { inner, tx })
    }

    /// Wait until every write queued before this call has been applied.
    pub async fn flush(&self) -> Result<()> {
        let (ack_tx, ack_rx) = oneshot::channel();
        self.tx
            .send(WriteCommand::Flush(ack_tx))
            .map_err(|_| AppError::WriterClosed)?;
        ack_rx.await.map_err(|_| AppError::WriterClosed)
    }
}

impl SnapshotStore for WriteBehindStore {
    /// Reads go straight to the inner store; flush first to observe queued writes.
    fn read_blob(&self) -> Result<Option<String>> {
        self.inner.read_blob()
    }

    fn write_blob(&self, blob: &str) -> Result<()> {
        self.tx
            .send(WriteCommand::Write(blob.to_string()))
            .map_err(|_| AppError::WriterClosed)
    }
}

async fn run_writer(inner: Arc<dyn SnapshotStore>, mut rx: mpsc::UnboundedReceiver<WriteCommand>) {
    while let Some(command) = rx.recv().await {
        match command {
            WriteCommand::Write(blob) => {
                let store = inner.clone();
                // Awaited before the next command is taken, which keeps order.
                match tokio::task::spawn_blocking(move || store.write_blob(&blob)).await {
                    Ok(Ok(())) => {}
                    Ok(Err(e)) => {
                        tracing::warn!(error = %e, "Deferred snapshot write failed");
                    }
                    Err(e) => {
                        tracing::error!(error = %e, "Snapshot write task panicked");
                    }
                }
            }
            WriteCommand::Flush(ack) => {
                let _ = ack.send(());
            }
        }
    }
    tracing::debug!("Write-behind snapshot writer stopped");
}
