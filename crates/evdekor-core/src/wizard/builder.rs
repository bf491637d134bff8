//! Builder for creating and configuring Wizard instances.

use std::{
    path::{Path, PathBuf},
    sync::Arc,
    time::Duration,
};

use log::{debug, info, warn};

use super::{Wizard, WizardState};
use crate::{
    error::Result,
    models::ReservationDraft,
    preview::{LocalPreviewBackend, PreviewBackend, PreviewManager},
    store::{DraftStore, FileDraftStore},
    transport::{HttpTransport, SubmitTransport, DEFAULT_ENDPOINT},
};

/// Builder for creating and configuring Wizard instances.
///
/// Explicit collaborators win over path and endpoint settings: a store given
/// through [`WizardBuilder::with_store`] makes `with_draft_path` irrelevant, a
/// transport given through [`WizardBuilder::with_transport`] does the same for
/// the endpoint and timeout.
#[derive(Default)]
pub struct WizardBuilder {
    draft_path: Option<PathBuf>,
    endpoint: Option<String>,
    timeout: Option<Duration>,
    store: Option<Box<dyn DraftStore>>,
    transport: Option<Arc<dyn SubmitTransport>>,
    preview_backend: Option<Box<dyn PreviewBackend>>,
}

impl WizardBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom draft file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/evdekor/evdekor-reservation-data.json`
    pub fn with_draft_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.draft_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Sets the submission endpoint. Defaults to [`DEFAULT_ENDPOINT`].
    pub fn with_endpoint<S: Into<String>>(mut self, endpoint: Option<S>) -> Self {
        if let Some(endpoint) = endpoint {
            self.endpoint = Some(endpoint.into());
        }
        self
    }

    /// Sets a request timeout for the HTTP transport.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_store(mut self, store: impl DraftStore + 'static) -> Self {
        self.store = Some(Box::new(store));
        self
    }

    pub fn with_transport(mut self, transport: impl SubmitTransport + 'static) -> Self {
        self.transport = Some(Arc::new(transport));
        self
    }

    pub fn with_preview_backend(mut self, backend: impl PreviewBackend + 'static) -> Self {
        self.preview_backend = Some(Box::new(backend));
        self
    }

    /// Builds the wizard and restores any stored draft.
    ///
    /// A stored draft that cannot be read or parsed is logged and replaced by
    /// an empty one.
    ///
    /// # Errors
    ///
    /// Returns `WizardError::XdgDirectory` if no store or draft path is given
    /// and the default location cannot be resolved
    /// Returns `WizardError::Configuration` if the HTTP transport cannot be
    /// created
    pub fn build(self) -> Result<Wizard> {
        let store: Box<dyn DraftStore> = match (self.store, self.draft_path) {
            (Some(store), _) => store,
            (None, Some(path)) => Box::new(FileDraftStore::new(path)),
            (None, None) => Box::new(FileDraftStore::at_default_location()?),
        };

        let transport: Arc<dyn SubmitTransport> = match self.transport {
            Some(transport) => transport,
            None => {
                let endpoint = self
                    .endpoint
                    .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
                debug!("Submitting to {endpoint}");
                Arc::new(HttpTransport::new(endpoint, self.timeout)?)
            }
        };

        let backend = self
            .preview_backend
            .unwrap_or_else(|| Box::new(LocalPreviewBackend::new()));

        let draft = restore(store.as_ref());
        Ok(Wizard::new(
            WizardState::new(draft),
            store,
            transport,
            PreviewManager::new(backend),
        ))
    }
}

fn restore(store: &dyn DraftStore) -> ReservationDraft {
    match store.load() {
        Ok(Some(draft)) => {
            info!("Restored saved reservation draft");
            draft
        }
        Ok(None) => ReservationDraft::default(),
        Err(e) => {
            warn!("Ignoring unreadable reservation draft: {e}");
            ReservationDraft::default()
        }
    }
}
