//! Shared test harness for trainer integration tests.

use std::path::PathBuf;

use cloze_core::types::MatchConfig;
use cloze_trainer::{PassageStore, Persister};
use uuid::Uuid;

/// A unique temp data dir plus a live writer task.
pub struct TestContext {
    pub dir: PathBuf,
    pub persister: Persister,
}

impl TestContext {
    pub fn new() -> Self {
        let dir = std::env::temp_dir().join(format!("cloze-trainer-test-{}", Uuid::new_v4()));
        Self {
            dir,
            persister: Persister::spawn(),
        }
    }

    pub fn open_store(&self) -> PassageStore {
        PassageStore::open(self.dir.clone(), self.persister.clone()).expect("open store")
    }
}

impl Drop for TestContext {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.dir);
    }
}

/// All three strictness flags off.
#[allow(dead_code)]
pub fn lenient() -> MatchConfig {
    MatchConfig::default()
}

/// A passage record shaped like an export file entry.
#[allow(dead_code)]
pub fn passage_json(id: &str, title: &str, text: &str, kelvin: usize) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "title": title,
        "text": text,
        "caseSensitive": false,
        "exactPunctuation": false,
        "diacriticSensitive": false,
        "kelvin": kelvin,
    })
}
