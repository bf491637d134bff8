//! Reservation wizard driver.
//!
//! [`Wizard`] couples the pure [`machine`] with its collaborators: a
//! [`DraftStore`] for persistence, a [`PreviewManager`] for media previews and
//! a [`SubmitTransport`] for the final request. Every public operation is one
//! event fed through [`machine::apply`]; the returned effects are executed
//! here.
//!
//! ```text
//! ┌──────────────┐ event ┌─────────────────┐ effects ┌──────────────────────┐
//! │ CLI / caller │──────▶│ machine::apply  │────────▶│ store / previews /   │
//! │              │       │ (pure)          │         │ transport (Wizard)   │
//! └──────────────┘       └─────────────────┘         └──────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use evdekor_core::{models::Field, store::MemoryDraftStore, WizardBuilder};
//!
//! # async fn example() -> evdekor_core::Result<()> {
//! let mut wizard = WizardBuilder::new()
//!     .with_store(MemoryDraftStore::new())
//!     .build()?;
//!
//! wizard.set_raw(Field::Service, "anahtar-teslim")?;
//! assert!(wizard.advance());
//! # Ok(())
//! # }
//! ```
//!
//! # Cancellation
//!
//! Dropping the future returned by [`Wizard::submit`] before the response
//! arrives abandons the attempt: the status returns to idle and the draft and
//! step are kept. Dropping the wizard releases every preview handle.

use std::sync::Arc;

use log::{error, info, warn};

use crate::{
    error::{Result, WizardError},
    models::{
        Field, FieldValue, MediaFile, ReservationDraft, StepDescriptor, SubmissionPayload,
        SubmitStatus,
    },
    preview::{PreviewManager, PreviewRef},
    store::DraftStore,
    transport::SubmitTransport,
    validation::ValidationErrors,
};

pub mod builder;
pub mod machine;

#[cfg(test)]
mod tests;

pub use builder::WizardBuilder;
pub use machine::{apply, Effect, Transition, WizardEvent, WizardState};

/// A running reservation wizard.
pub struct Wizard {
    state: WizardState,
    store: Box<dyn DraftStore>,
    transport: Arc<dyn SubmitTransport>,
    previews: PreviewManager,
    pending: Option<SubmissionPayload>,
}

impl Wizard {
    pub(crate) fn new(
        state: WizardState,
        store: Box<dyn DraftStore>,
        transport: Arc<dyn SubmitTransport>,
        previews: PreviewManager,
    ) -> Self {
        Self {
            state,
            store,
            transport,
            previews,
            pending: None,
        }
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn draft(&self) -> &ReservationDraft {
        &self.state.draft
    }

    pub fn step_index(&self) -> usize {
        self.state.step_index
    }

    pub fn current_step(&self) -> &'static StepDescriptor {
        self.state.current_step()
    }

    pub fn submit_status(&self) -> SubmitStatus {
        self.state.submit_status
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.state.errors
    }

    /// Live preview handles for the selected media.
    pub fn previews(&self) -> &[PreviewRef] {
        self.previews.previews()
    }

    /// Feed one event through the machine and run its effects.
    pub fn dispatch(&mut self, event: WizardEvent) {
        let Transition { state, effects } = apply(std::mem::take(&mut self.state), event);
        self.state = state;
        for effect in effects {
            self.run(effect);
        }
    }

    fn run(&mut self, effect: Effect) {
        match effect {
            Effect::PersistDraft => {
                if let Err(e) = self.store.save(&self.state.draft) {
                    warn!("Failed to persist reservation draft: {e}");
                }
            }
            Effect::ClearDraft => {
                if let Err(e) = self.store.clear() {
                    warn!("Failed to clear stored reservation draft: {e}");
                }
            }
            Effect::ReplacePreviews => self.previews.replace(&self.state.media),
            Effect::ReleasePreviews => self.previews.release_all(),
            Effect::Submit(payload) => self.pending = Some(payload),
        }
    }

    /// Set a field to a typed value.
    pub fn set_field(&mut self, field: Field, value: impl Into<FieldValue>) {
        self.dispatch(WizardEvent::SetField {
            field,
            value: value.into(),
        });
    }

    /// Set a field from its textual form (see [`Field::parse_value`]).
    ///
    /// # Errors
    ///
    /// Returns `WizardError::InvalidInput` if the text cannot be converted to
    /// the field's value kind.
    pub fn set_raw(&mut self, field: Field, raw: &str) -> Result<()> {
        let value = field.parse_value(raw)?;
        self.set_field(field, value);
        Ok(())
    }

    /// Validate the current step and move forward. Returns whether the step
    /// changed; on `false` the blocking messages are in [`Wizard::errors`].
    pub fn advance(&mut self) -> bool {
        let before = self.state.step_index;
        self.dispatch(WizardEvent::Advance);
        self.state.step_index != before
    }

    /// Move one step back without validation.
    pub fn retreat(&mut self) {
        self.dispatch(WizardEvent::Retreat);
    }

    /// Replace the media selection and its previews.
    pub fn select_media(&mut self, files: Vec<MediaFile>) {
        self.dispatch(WizardEvent::SelectMedia(files));
    }

    /// Discard the draft, the stored copy and the previews.
    pub fn reset(&mut self) {
        self.dispatch(WizardEvent::Reset);
    }

    /// Abandon a submission that has not completed.
    pub fn cancel_submission(&mut self) {
        self.pending = None;
        self.dispatch(WizardEvent::SubmitCancelled);
    }

    /// Validate the full draft and send it.
    ///
    /// Returns the settled status: `Success` after the endpoint accepted the
    /// payload (the wizard is then back on the first step with an empty
    /// draft), `Error` when the request failed (draft and step untouched).
    ///
    /// # Errors
    ///
    /// * `WizardError::NotAtTerminalStep` - called before the summary step
    /// * `WizardError::SubmissionInFlight` - a previous attempt is unresolved
    /// * `WizardError::Validation` - the draft has failing fields
    pub async fn submit(&mut self) -> Result<SubmitStatus> {
        if self.pending.is_none() {
            if self.state.submit_status == SubmitStatus::Submitting {
                return Err(WizardError::SubmissionInFlight);
            }
            if !self.state.is_terminal() {
                return Err(WizardError::NotAtTerminalStep {
                    step: self.current_step().id.as_str(),
                });
            }
            self.dispatch(WizardEvent::SubmitRequested);
        }

        let Some(payload) = self.pending.take() else {
            return Err(WizardError::Validation(self.state.errors.clone()));
        };

        info!(
            "Submitting reservation for '{}' with {} image(s)",
            payload.draft.service, payload.media_count
        );
        let transport = Arc::clone(&self.transport);
        let in_flight = InFlight::new(&mut self.state.submit_status);
        let outcome = transport.submit(&payload).await;
        in_flight.settle();

        match outcome {
            Ok(()) => {
                info!("Reservation accepted");
                self.dispatch(WizardEvent::SubmitSucceeded);
            }
            Err(e) => {
                error!("Reservation submission failed: {e}");
                self.dispatch(WizardEvent::SubmitFailed {
                    message: e.to_string(),
                });
            }
        }
        Ok(self.state.submit_status)
    }
}

/// Returns an unresolved submission to idle if its future is dropped.
struct InFlight<'a> {
    status: &'a mut SubmitStatus,
    settled: bool,
}

impl<'a> InFlight<'a> {
    fn new(status: &'a mut SubmitStatus) -> Self {
        Self {
            status,
            settled: false,
        }
    }

    fn settle(mut self) {
        self.settled = true;
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if !self.settled && *self.status == SubmitStatus::Submitting {
            warn!("Submission cancelled before a response arrived");
            *self.status = SubmitStatus::Idle;
        }
    }
}
