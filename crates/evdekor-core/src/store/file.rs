//! JSON file draft store.

use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use super::{parse_stored, DraftStore, STORAGE_KEY};
use crate::{
    error::{FileSystemResultExt, Result, WizardError},
    models::ReservationDraft,
};

/// Stores the draft as a single JSON document on disk.
#[derive(Debug, Clone)]
pub struct FileDraftStore {
    path: PathBuf,
}

impl FileDraftStore {
    /// Creates a store backed by the given file. The file and its parent
    /// directories are created on first save.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Creates a store at the default location.
    ///
    /// # Errors
    ///
    /// Returns `WizardError::XdgDirectory` if the data directory cannot be
    /// resolved.
    pub fn at_default_location() -> Result<Self> {
        Ok(Self::new(Self::default_path()?))
    }

    /// Returns the default draft path following the XDG Base Directory
    /// specification: `$XDG_DATA_HOME/evdekor/evdekor-reservation-data.json`.
    pub fn default_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("evdekor")
            .place_data_file(format!("{STORAGE_KEY}.json"))
            .map_err(|e| WizardError::XdgDirectory(e.to_string()))
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DraftStore for FileDraftStore {
    fn load(&self) -> Result<Option<ReservationDraft>> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => parse_stored(&raw),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).fs_context(&self.path),
        }
    }

    fn save(&self, draft: &ReservationDraft) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).fs_context(parent)?;
        }
        let json = serde_json::to_string(draft)?;
        fs::write(&self.path, json).fs_context(&self.path)
    }

    fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Err(e) if e.kind() != ErrorKind::NotFound => Err(e).fs_context(&self.path),
            _ => Ok(()),
        }
    }
}
