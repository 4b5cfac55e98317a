//! Application layer for the cloze memorization trainer.
//!
//! Hosts embed this crate for passage storage, JSON persistence with
//! ordered writes, import/export, persisted settings, and the quiz
//! service that drives `cloze-core` sessions. Rendering and input belong
//! to the embedding UI.

pub mod persist;
pub mod quiz;
pub mod settings;
pub mod state;
pub mod store;
pub mod transfer;

pub use persist::{default_data_dir, Persister};
pub use quiz::{reset_progress, start_session, submit_attempt, test_at_k, ServiceError};
pub use settings::Settings;
pub use state::AppState;
pub use store::{PassageStore, PassageUpdate, StoreError};
pub use transfer::{
    export_file_name, export_json, export_to_file, import_from_file, import_json, ImportReport,
    TransferError,
};
