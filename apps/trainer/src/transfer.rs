//! Passage import and export.
//!
//! The interchange format is a JSON array of passage records, the same
//! shape the store persists. Import is all-or-nothing: the payload is
//! parsed completely before anything is merged, so a malformed file
//! leaves the existing collection untouched.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use cloze_core::types::Passage;
use serde::Serialize;
use thiserror::Error;

use crate::store::PassageStore;

#[derive(Debug, Error)]
pub enum TransferError {
    #[error("import payload is not a passage array: {0}")]
    InvalidFormat(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Outcome of an import: how many records were added, and how many were
/// skipped because their id was already present.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ImportReport {
    pub imported: usize,
    pub skipped: usize,
}

/// Serialize the full collection as a pretty-printed JSON array.
pub fn export_json(store: &PassageStore) -> String {
    serde_json::to_string_pretty(store.list()).expect("passage array serializes")
}

/// File name for an export created on `date`.
pub fn export_file_name(date: NaiveDate) -> String {
    format!("cloze-passages-{}.json", date.format("%Y-%m-%d"))
}

/// Write the collection to `dir` under a dated file name.
pub async fn export_to_file(store: &PassageStore, dir: &Path) -> Result<PathBuf, TransferError> {
    let path = dir.join(export_file_name(chrono::Local::now().date_naive()));
    tokio::fs::create_dir_all(dir).await?;
    tokio::fs::write(&path, export_json(store)).await?;
    tracing::info!(path = %path.display(), count = store.list().len(), "passages exported");
    Ok(path)
}

/// Merge a JSON payload into the store.
///
/// Records whose id is already present are skipped, never overwritten.
pub fn import_json(
    store: &mut PassageStore,
    payload: &str,
) -> Result<ImportReport, TransferError> {
    let incoming: Vec<Passage> = serde_json::from_str(payload)?;
    let (imported, skipped) = store.admit(incoming);
    tracing::info!(imported, skipped, "passages imported");
    Ok(ImportReport { imported, skipped })
}

/// Read and merge an export file from disk.
pub async fn import_from_file(
    store: &mut PassageStore,
    path: &Path,
) -> Result<ImportReport, TransferError> {
    let payload = tokio::fs::read_to_string(path).await?;
    import_json(store, &payload)
}
