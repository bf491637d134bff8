//! Media preview references.
//!
//! Selected images are shown through short-lived preview handles. Handles are
//! created by a [`PreviewBackend`] and must be revoked when they are replaced or
//! when the wizard goes away; [`PreviewManager`] owns that bookkeeping.

use std::{
    collections::BTreeSet,
    fmt,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use log::debug;

use crate::models::MediaFile;

/// Opaque handle that lets a selected file be displayed without uploading it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PreviewRef(String);

impl PreviewRef {
    pub fn new(uri: impl Into<String>) -> Self {
        Self(uri.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PreviewRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Creates and revokes preview handles.
pub trait PreviewBackend: Send {
    /// Create one handle for a file.
    fn create(&mut self, file: &MediaFile) -> PreviewRef;

    /// Release a handle created by this backend.
    fn revoke(&mut self, preview: &PreviewRef);
}

#[derive(Debug, Default)]
struct Ledger {
    next_id: u64,
    live: BTreeSet<PreviewRef>,
    created: usize,
    revoked: usize,
}

/// Default backend minting `preview://<n>/<file name>` handles.
///
/// Clones share one ledger, so the number of live and revoked handles can be
/// observed after the backend has been handed to a wizard.
#[derive(Debug, Clone, Default)]
pub struct LocalPreviewBackend {
    ledger: Arc<Mutex<Ledger>>,
}

impl LocalPreviewBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handles created and not yet revoked.
    pub fn live(&self) -> Vec<PreviewRef> {
        self.ledger().live.iter().cloned().collect()
    }

    /// Total handles ever created.
    pub fn created(&self) -> usize {
        self.ledger().created
    }

    /// Total handles revoked.
    pub fn revoked(&self) -> usize {
        self.ledger().revoked
    }

    fn ledger(&self) -> MutexGuard<'_, Ledger> {
        self.ledger.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl PreviewBackend for LocalPreviewBackend {
    fn create(&mut self, file: &MediaFile) -> PreviewRef {
        let mut ledger = self.ledger();
        ledger.next_id += 1;
        ledger.created += 1;
        let preview = PreviewRef::new(format!("preview://{}/{}", ledger.next_id, file.name));
        ledger.live.insert(preview.clone());
        preview
    }

    fn revoke(&mut self, preview: &PreviewRef) {
        let mut ledger = self.ledger();
        if ledger.live.remove(preview) {
            ledger.revoked += 1;
        }
    }
}

/// Owns the current preview list and releases it on replacement and drop.
pub struct PreviewManager {
    backend: Box<dyn PreviewBackend>,
    previews: Vec<PreviewRef>,
}

impl PreviewManager {
    pub fn new(backend: Box<dyn PreviewBackend>) -> Self {
        Self {
            backend,
            previews: Vec::new(),
        }
    }

    /// Replace the preview list with one handle per file. Every previous
    /// handle is revoked before any new one is created.
    pub fn replace(&mut self, files: &[MediaFile]) {
        self.release_all();
        self.previews = files.iter().map(|file| self.backend.create(file)).collect();
        debug!("Created {} media preview(s)", self.previews.len());
    }

    /// Revoke every outstanding handle.
    pub fn release_all(&mut self) {
        if self.previews.is_empty() {
            return;
        }
        debug!("Releasing {} media preview(s)", self.previews.len());
        for preview in self.previews.drain(..) {
            self.backend.revoke(&preview);
        }
    }

    /// Current handles, in selection order.
    pub fn previews(&self) -> &[PreviewRef] {
        &self.previews
    }

    pub fn len(&self) -> usize {
        self.previews.len()
    }

    pub fn is_empty(&self) -> bool {
        self.previews.is_empty()
    }
}

impl Default for PreviewManager {
    fn default() -> Self {
        Self::new(Box::new(LocalPreviewBackend::new()))
    }
}

impl fmt::Debug for PreviewManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PreviewManager")
            .field("previews", &self.previews)
            .finish_non_exhaustive()
    }
}

impl Drop for PreviewManager {
    fn drop(&mut self) {
        self.release_all();
    }
}
