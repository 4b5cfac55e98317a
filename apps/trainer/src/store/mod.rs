//! Passage store: the in-memory collection plus scheduled persistence.

pub mod error;

pub use error::StoreError;

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use cloze_core::types::{word_count, MatchConfig, Passage};
use uuid::Uuid;

use crate::persist::{self, Persister, PASSAGES_FILE};

type Result<T> = std::result::Result<T, StoreError>;

/// Optional metadata updates for a passage.
///
/// Text is deliberately absent: changing text goes through
/// [`PassageStore::edit_text`] because it resets quiz progress, and that
/// reset must never fire from a generic field update.
#[derive(Debug, Clone, Default)]
pub struct PassageUpdate {
    pub title: Option<String>,
    pub case_sensitive: Option<bool>,
    pub exact_punctuation: Option<bool>,
    pub diacritic_sensitive: Option<bool>,
}

/// Passage collection backed by a JSON file.
///
/// Every mutation applies in memory and schedules a snapshot write before
/// returning; the background writer applies snapshots in order.
pub struct PassageStore {
    dir: PathBuf,
    passages: Vec<Passage>,
    persister: Persister,
}

impl PassageStore {
    /// Open the store in `dir`, loading any existing passage file.
    pub fn open(dir: PathBuf, persister: Persister) -> Result<Self> {
        let passages = persist::load_passages(&dir)?;
        tracing::debug!(count = passages.len(), dir = %dir.display(), "passage store opened");
        Ok(Self {
            dir,
            passages,
            persister,
        })
    }

    pub fn data_dir(&self) -> &Path {
        &self.dir
    }

    pub fn list(&self) -> &[Passage] {
        &self.passages
    }

    pub fn get(&self, id: &str) -> Result<&Passage> {
        self.passages
            .iter()
            .find(|passage| passage.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    /// Create a passage. Kelvin starts at the full word count: every word
    /// blanked until the user earns disclosure.
    pub fn create(&mut self, title: &str, text: &str, config: MatchConfig) -> Result<String> {
        let title = title.trim();
        if title.is_empty() {
            return Err(StoreError::EmptyTitle);
        }
        let count = word_count(text);
        if count == 0 {
            return Err(StoreError::EmptyText);
        }

        let id = Uuid::new_v4().to_string();
        self.passages.push(Passage {
            id: id.clone(),
            title: title.to_string(),
            text: text.to_string(),
            case_sensitive: config.case_sensitive,
            exact_punctuation: config.exact_punctuation,
            diacritic_sensitive: config.diacritic_sensitive,
            kelvin: count,
        });
        tracing::info!(%id, words = count, "passage created");
        self.schedule_save();
        Ok(id)
    }

    /// Update title or comparison flags. Never touches text or kelvin.
    pub fn update_meta(&mut self, id: &str, update: PassageUpdate) -> Result<()> {
        let title = match update.title {
            Some(title) => {
                let title = title.trim().to_string();
                if title.is_empty() {
                    return Err(StoreError::EmptyTitle);
                }
                Some(title)
            }
            None => None,
        };

        let passage = self.get_mut(id)?;
        if let Some(title) = title {
            passage.title = title;
        }
        if let Some(value) = update.case_sensitive {
            passage.case_sensitive = value;
        }
        if let Some(value) = update.exact_punctuation {
            passage.exact_punctuation = value;
        }
        if let Some(value) = update.diacritic_sensitive {
            passage.diacritic_sensitive = value;
        }
        self.schedule_save();
        Ok(())
    }

    /// Replace a passage's text, resetting kelvin to the new word count.
    ///
    /// Saving unchanged text is a no-op so an edit screen re-saving the
    /// same passage does not wipe progress.
    pub fn edit_text(&mut self, id: &str, new_text: &str) -> Result<()> {
        let count = word_count(new_text);
        if count == 0 {
            return Err(StoreError::EmptyText);
        }

        let passage = self.get_mut(id)?;
        if passage.text == new_text {
            return Ok(());
        }
        passage.text = new_text.to_string();
        passage.kelvin = count;
        tracing::info!(%id, words = count, "passage text replaced, progress reset");
        self.schedule_save();
        Ok(())
    }

    pub fn delete(&mut self, id: &str) -> Result<()> {
        let before = self.passages.len();
        self.passages.retain(|passage| passage.id != id);
        if self.passages.len() == before {
            return Err(StoreError::NotFound(id.to_string()));
        }
        tracing::info!(%id, "passage deleted");
        self.schedule_save();
        Ok(())
    }

    /// Set a passage's kelvin, clamped to `[0, word_count]`. Returns the
    /// value actually stored.
    pub fn set_kelvin(&mut self, id: &str, value: usize) -> Result<usize> {
        let passage = self.get_mut(id)?;
        let clamped = value.min(passage.word_count());
        passage.kelvin = clamped;
        self.schedule_save();
        Ok(clamped)
    }

    /// Admit passages from an import batch, skipping any id already
    /// present. Admitted kelvin values are clamped to the passage's word
    /// count so the store invariant holds even for hand-edited files.
    pub(crate) fn admit(&mut self, incoming: Vec<Passage>) -> (usize, usize) {
        let mut seen: HashSet<String> = self.passages.iter().map(|p| p.id.clone()).collect();
        let mut imported = 0;
        let mut skipped = 0;

        for mut passage in incoming {
            if !seen.insert(passage.id.clone()) {
                skipped += 1;
                continue;
            }
            passage.kelvin = passage.kelvin.min(passage.word_count());
            self.passages.push(passage);
            imported += 1;
        }

        if imported > 0 {
            self.schedule_save();
        }
        (imported, skipped)
    }

    fn get_mut(&mut self, id: &str) -> Result<&mut Passage> {
        self.passages
            .iter_mut()
            .find(|passage| passage.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    fn schedule_save(&self) {
        match serde_json::to_string_pretty(&self.passages) {
            Ok(json) => self.persister.schedule(self.dir.join(PASSAGES_FILE), json),
            Err(err) => tracing::error!(%err, "failed to serialize passages"),
        }
    }
}
