//! Persisted application settings.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::persist::{Persister, SETTINGS_FILE};
use crate::store::StoreError;

/// Settings that survive restarts.
///
/// Only the theme flag for now; the visual theme itself lives in the
/// embedding UI.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub dark_mode: bool,
}

impl Settings {
    /// Load settings from `dir`; a missing file yields the defaults.
    pub fn load(dir: &Path) -> Result<Self, StoreError> {
        let path = dir.join(SETTINGS_FILE);
        match std::fs::read_to_string(&path) {
            Ok(contents) => Ok(serde_json::from_str(&contents)?),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(err.into()),
        }
    }

    /// Queue a settings write behind any pending passage writes.
    pub fn save(&self, dir: &Path, persister: &Persister) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => persister.schedule(dir.join(SETTINGS_FILE), json),
            Err(err) => tracing::error!(%err, "failed to serialize settings"),
        }
    }
}
