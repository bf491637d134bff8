//! Pure transition function of the reservation wizard.
//!
//! [`apply`] takes the whole [`WizardState`] and one [`WizardEvent`] and
//! returns the next state together with the side effects the driver must run.
//! Nothing here touches storage, previews or the network, so the machine can
//! be exercised by feeding it event sequences.

use log::{debug, warn};

use crate::{
    models::{
        Field, FieldValue, MediaFile, ReservationDraft, StepDescriptor, StepId, StepState,
        SubmissionPayload, SubmitStatus, LAST_STEP, STEPS,
    },
    validation::{self, ValidationErrors},
};

/// Everything the wizard knows at one point in time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WizardState {
    /// Index into [`STEPS`], always within `0..=LAST_STEP`
    pub step_index: usize,
    /// Persisted form values
    pub draft: ReservationDraft,
    /// Selected images; mirrored by the preview list, never persisted
    pub media: Vec<MediaFile>,
    pub submit_status: SubmitStatus,
    /// Field errors from the last advance or submit attempt
    pub errors: ValidationErrors,
    /// Message of the last failed submission
    pub last_error: Option<String>,
}

impl WizardState {
    /// Fresh state on the first step around a (possibly restored) draft.
    pub fn new(draft: ReservationDraft) -> Self {
        Self {
            draft,
            ..Default::default()
        }
    }

    pub fn current_step(&self) -> &'static StepDescriptor {
        &STEPS[self.step_index]
    }

    /// Whether the current step is the summary step, which submits instead of
    /// advancing.
    pub fn is_terminal(&self) -> bool {
        self.step_index == LAST_STEP
    }

    /// Indicator state of the step at `index`.
    pub fn step_state(&self, index: usize) -> StepState {
        StepState::of(index, self.step_index)
    }

    /// Payload for the current draft and media selection.
    pub fn payload(&self) -> SubmissionPayload {
        SubmissionPayload::new(self.draft.clone(), self.media.len())
    }
}

/// Discrete user or transport actions.
#[derive(Debug, Clone, PartialEq)]
pub enum WizardEvent {
    /// A form field changed
    SetField { field: Field, value: FieldValue },
    /// "Next" pressed
    Advance,
    /// "Back" pressed
    Retreat,
    /// Files picked in the media step; replaces the previous selection
    SelectMedia(Vec<MediaFile>),
    /// "Submit" pressed on the summary step
    SubmitRequested,
    /// The endpoint accepted the payload
    SubmitSucceeded,
    /// The request failed or was rejected
    SubmitFailed { message: String },
    /// The in-flight request was abandoned
    SubmitCancelled,
    /// Discard the draft and start over
    Reset,
}

/// Work the driver performs after a transition.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Write the draft to the store
    PersistDraft,
    /// Delete the stored draft
    ClearDraft,
    /// Rebuild the preview list from `state.media`
    ReplacePreviews,
    /// Revoke every preview handle
    ReleasePreviews,
    /// Send exactly one request with this payload
    Submit(SubmissionPayload),
}

/// Result of [`apply`].
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub state: WizardState,
    pub effects: Vec<Effect>,
}

impl Transition {
    fn without_effects(state: WizardState) -> Self {
        Self {
            state,
            effects: Vec::new(),
        }
    }

    fn with(state: WizardState, effects: Vec<Effect>) -> Self {
        Self { state, effects }
    }
}

/// Compute the next state for an event.
pub fn apply(state: WizardState, event: WizardEvent) -> Transition {
    match event {
        WizardEvent::SetField { field, value } => set_field(state, field, value),
        WizardEvent::Advance => advance(state),
        WizardEvent::Retreat => retreat(state),
        WizardEvent::SelectMedia(files) => select_media(state, files),
        WizardEvent::SubmitRequested => request_submit(state),
        WizardEvent::SubmitSucceeded => submit_succeeded(state),
        WizardEvent::SubmitFailed { message } => submit_failed(state, message),
        WizardEvent::SubmitCancelled => submit_cancelled(state),
        WizardEvent::Reset => Transition::with(
            WizardState::default(),
            vec![Effect::ClearDraft, Effect::ReleasePreviews],
        ),
    }
}

/// A settled submission falls back to idle on the next edit.
fn touch(state: &mut WizardState) {
    if state.submit_status.is_settled() {
        state.submit_status = SubmitStatus::Idle;
        state.last_error = None;
    }
}

fn set_field(mut state: WizardState, field: Field, value: FieldValue) -> Transition {
    if let Err(e) = state.draft.set(field, value) {
        warn!("Ignoring edit: {e}");
        return Transition::without_effects(state);
    }
    touch(&mut state);

    // The edited field's message is stale, and a service change may have
    // waived fields that still carry one.
    let draft = &state.draft;
    state
        .errors
        .0
        .retain(|error| error.field != field && validation::is_applicable(error.field, draft));

    Transition::with(state, vec![Effect::PersistDraft])
}

fn advance(mut state: WizardState) -> Transition {
    if state.is_terminal() {
        return Transition::without_effects(state);
    }

    let step = state.current_step();
    if step.has_fields() {
        let errors = validation::validate_fields(&state.draft, step.fields);
        if !errors.is_empty() {
            debug!("Step '{}' blocked by {} field(s)", step.id.as_str(), errors.len());
            state.errors = errors;
            return Transition::without_effects(state);
        }
    }
    state.errors = ValidationErrors::default();

    let mut next = state.step_index + 1;
    if STEPS[next].id == StepId::Space && state.draft.waives_space() {
        next += 1;
    }
    state.step_index = next.min(LAST_STEP);
    Transition::without_effects(state)
}

fn retreat(mut state: WizardState) -> Transition {
    state.step_index = state.step_index.saturating_sub(1);
    state.errors = ValidationErrors::default();
    Transition::without_effects(state)
}

fn select_media(mut state: WizardState, files: Vec<MediaFile>) -> Transition {
    state.media = files;
    touch(&mut state);
    Transition::with(state, vec![Effect::ReplacePreviews])
}

fn request_submit(mut state: WizardState) -> Transition {
    if state.submit_status == SubmitStatus::Submitting {
        debug!("Submission already in flight, ignoring");
        return Transition::without_effects(state);
    }
    if !state.is_terminal() {
        debug!("Submit requested on step '{}', ignoring", state.current_step().id.as_str());
        return Transition::without_effects(state);
    }

    let errors = validation::validate_draft(&state.draft);
    if !errors.is_empty() {
        state.errors = errors;
        return Transition::without_effects(state);
    }

    state.errors = ValidationErrors::default();
    state.last_error = None;
    state.submit_status = SubmitStatus::Submitting;
    let payload = state.payload();
    Transition::with(state, vec![Effect::Submit(payload)])
}

fn submit_succeeded(state: WizardState) -> Transition {
    if state.submit_status != SubmitStatus::Submitting {
        return Transition::without_effects(state);
    }
    let state = WizardState {
        submit_status: SubmitStatus::Success,
        ..Default::default()
    };
    Transition::with(state, vec![Effect::ClearDraft, Effect::ReleasePreviews])
}

fn submit_failed(mut state: WizardState, message: String) -> Transition {
    if state.submit_status != SubmitStatus::Submitting {
        return Transition::without_effects(state);
    }
    state.submit_status = SubmitStatus::Error;
    state.last_error = Some(message);
    Transition::without_effects(state)
}

fn submit_cancelled(mut state: WizardState) -> Transition {
    if state.submit_status == SubmitStatus::Submitting {
        state.submit_status = SubmitStatus::Idle;
    }
    Transition::without_effects(state)
}
