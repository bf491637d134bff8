//! In-memory draft store.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::{parse_stored, DraftStore};
use crate::{error::Result, models::ReservationDraft};

/// Keeps the serialized draft in a shared cell.
///
/// Clones share the same cell, so a test can hand one clone to the wizard and
/// inspect the stored value through another.
#[derive(Debug, Clone, Default)]
pub struct MemoryDraftStore {
    raw: Arc<Mutex<Option<String>>>,
}

impl MemoryDraftStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with a raw stored value, valid or not.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            raw: Arc::new(Mutex::new(Some(raw.into()))),
        }
    }

    /// The raw stored value, if any.
    pub fn raw(&self) -> Option<String> {
        self.cell().clone()
    }

    fn cell(&self) -> MutexGuard<'_, Option<String>> {
        self.raw.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl DraftStore for MemoryDraftStore {
    fn load(&self) -> Result<Option<ReservationDraft>> {
        match self.cell().as_deref() {
            Some(raw) => parse_stored(raw),
            None => Ok(None),
        }
    }

    fn save(&self, draft: &ReservationDraft) -> Result<()> {
        let json = serde_json::to_string(draft)?;
        *self.cell() = Some(json);
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        *self.cell() = None;
        Ok(())
    }
}
