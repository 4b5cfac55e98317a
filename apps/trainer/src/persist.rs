//! JSON file persistence with ordered background writes.
//!
//! Mutations apply in memory first; full snapshots are queued to a
//! dedicated writer task. The channel's FIFO delivery is what guarantees
//! kelvin updates for a passage never land on disk out of order, and the
//! caller never waits on the disk.

use std::path::{Path, PathBuf};

use cloze_core::types::Passage;
use tokio::sync::{mpsc, oneshot};

use crate::store::StoreError;

/// File holding the passage collection: a bare JSON array, the same
/// shape the export format uses.
pub const PASSAGES_FILE: &str = "passages.json";
/// File holding persisted settings.
pub const SETTINGS_FILE: &str = "settings.json";

/// Default data directory, alongside other local app data.
pub fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("cloze-trainer")
}

enum WriteJob {
    Write { path: PathBuf, contents: String },
    Flush(oneshot::Sender<()>),
}

/// Handle to the background writer task.
#[derive(Clone)]
pub struct Persister {
    tx: mpsc::UnboundedSender<WriteJob>,
}

impl Persister {
    /// Spawn the writer task. Requires a running tokio runtime.
    pub fn spawn() -> Self {
        let (tx, mut rx) = mpsc::unbounded_channel();
        tokio::spawn(async move {
            while let Some(job) = rx.recv().await {
                match job {
                    WriteJob::Write { path, contents } => {
                        if let Err(err) = write_atomic(&path, &contents).await {
                            tracing::error!(path = %path.display(), %err, "persistence write failed");
                        }
                    }
                    WriteJob::Flush(ack) => {
                        let _ = ack.send(());
                    }
                }
            }
        });
        Self { tx }
    }

    /// Queue a write behind every previously queued one. Never blocks.
    pub fn schedule(&self, path: PathBuf, contents: String) {
        if self.tx.send(WriteJob::Write { path, contents }).is_err() {
            tracing::error!("persistence writer is gone; write dropped");
        }
    }

    /// Resolve once every previously queued write has been applied.
    pub async fn flush(&self) {
        let (ack, done) = oneshot::channel();
        if self.tx.send(WriteJob::Flush(ack)).is_ok() {
            let _ = done.await;
        }
    }
}

/// Write via a temp file and rename, so readers never see a torn file.
async fn write_atomic(path: &Path, contents: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }
    let tmp = path.with_extension("json.tmp");
    tokio::fs::write(&tmp, contents).await?;
    tokio::fs::rename(&tmp, path).await
}

/// Load the passage array from `dir`; a missing file is an empty
/// collection, anything else unreadable is an error.
pub fn load_passages(dir: &Path) -> Result<Vec<Passage>, StoreError> {
    let path = dir.join(PASSAGES_FILE);
    match std::fs::read_to_string(&path) {
        Ok(contents) => Ok(serde_json::from_str(&contents)?),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
        Err(err) => Err(err.into()),
    }
}
