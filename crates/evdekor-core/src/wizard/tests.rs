//! Tests for the wizard module.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::*;
use crate::{
    error::WizardError,
    models::{StepId, StepState, LAST_STEP, STEPS},
    preview::LocalPreviewBackend,
    store::MemoryDraftStore,
};

/// Records every payload and optionally rejects it.
#[derive(Clone, Default)]
struct RecordingTransport {
    sent: Arc<Mutex<Vec<SubmissionPayload>>>,
    reject: bool,
}

impl RecordingTransport {
    fn rejecting() -> Self {
        Self {
            reject: true,
            ..Default::default()
        }
    }

    fn sent(&self) -> Vec<SubmissionPayload> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl SubmitTransport for RecordingTransport {
    async fn submit(&self, payload: &SubmissionPayload) -> Result<()> {
        self.sent.lock().unwrap().push(payload.clone());
        if self.reject {
            Err(WizardError::transport("endpoint responded with 500"))
        } else {
            Ok(())
        }
    }
}

/// Never answers.
struct StalledTransport;

#[async_trait]
impl SubmitTransport for StalledTransport {
    async fn submit(&self, _payload: &SubmissionPayload) -> Result<()> {
        std::future::pending().await
    }
}

/// Rejects every write.
struct ReadOnlyStore;

impl DraftStore for ReadOnlyStore {
    fn load(&self) -> Result<Option<ReservationDraft>> {
        Ok(None)
    }

    fn save(&self, _draft: &ReservationDraft) -> Result<()> {
        Err(WizardError::Configuration {
            message: "read-only".to_string(),
        })
    }

    fn clear(&self) -> Result<()> {
        Ok(())
    }
}

struct Fixture {
    wizard: Wizard,
    store: MemoryDraftStore,
    transport: RecordingTransport,
    previews: LocalPreviewBackend,
}

fn fixture_with(store: MemoryDraftStore, transport: RecordingTransport) -> Fixture {
    let previews = LocalPreviewBackend::new();
    let wizard = WizardBuilder::new()
        .with_store(store.clone())
        .with_transport(transport.clone())
        .with_preview_backend(previews.clone())
        .build()
        .expect("Failed to build wizard");
    Fixture {
        wizard,
        store,
        transport,
        previews,
    }
}

fn fixture() -> Fixture {
    fixture_with(MemoryDraftStore::new(), RecordingTransport::default())
}

fn valid_draft() -> ReservationDraft {
    ReservationDraft {
        service: "anahtar-teslim".to_string(),
        district: "muratpasa".to_string(),
        area_size: "120".to_string(),
        room_count: "4".to_string(),
        description: "Salon, mutfak ve iki yatak odası yenilenecek.".to_string(),
        schedule_date: "2024-06-01".to_string(),
        schedule_slot: "haftaici-sabah".to_string(),
        full_name: "Ayşe Yılmaz".to_string(),
        phone: "0532 123 45 67".to_string(),
        email: "ayse@example.com".to_string(),
        consent: true,
        ..Default::default()
    }
}

fn stored(draft: &ReservationDraft) -> MemoryDraftStore {
    MemoryDraftStore::with_raw(serde_json::to_string(draft).unwrap())
}

fn walk_to_summary(wizard: &mut Wizard) {
    while !wizard.state().is_terminal() {
        assert!(wizard.advance(), "blocked on {:?}", wizard.errors());
    }
}

fn images(names: &[&str]) -> Vec<MediaFile> {
    names.iter().map(|name| MediaFile::new(*name)).collect()
}

#[test]
fn test_new_wizard_starts_on_first_step() {
    let Fixture { wizard, .. } = fixture();

    assert_eq!(wizard.step_index(), 0);
    assert_eq!(wizard.current_step().id, StepId::Service);
    assert_eq!(wizard.submit_status(), SubmitStatus::Idle);
    assert_eq!(wizard.draft(), &ReservationDraft::default());
}

#[test]
fn test_custom_furniture_clears_and_waives_space() {
    let Fixture { mut wizard, .. } = fixture();
    wizard.set_field(Field::AreaSize, "80");
    wizard.set_field(Field::RoomCount, "3");

    wizard.set_field(Field::Service, "ozel-mobilya");

    assert!(wizard.draft().area_size.is_empty());
    assert!(wizard.draft().room_count.is_empty());

    wizard.set_field(Field::District, "kepez");
    assert!(wizard.advance());
    assert!(wizard.advance());
    assert_eq!(wizard.current_step().id, StepId::Details);
}

#[test]
fn test_space_step_is_required_for_other_services() {
    let Fixture { mut wizard, .. } = fixture();
    wizard.set_field(Field::Service, "mermer");
    wizard.set_field(Field::District, "aksu");
    assert!(wizard.advance());
    assert!(wizard.advance());

    assert_eq!(wizard.current_step().id, StepId::Space);
    assert!(!wizard.advance());
    assert!(wizard.errors().contains(Field::AreaSize));
    assert!(wizard.errors().contains(Field::RoomCount));
}

#[test]
fn test_switching_to_custom_furniture_drops_stale_space_errors() {
    let Fixture { mut wizard, .. } = fixture();
    wizard.set_field(Field::Service, "mermer");
    wizard.set_field(Field::District, "aksu");
    wizard.advance();
    wizard.advance();
    assert!(!wizard.advance());

    wizard.set_field(Field::Service, "ozel-mobilya");

    assert!(wizard.errors().is_empty());
}

#[test]
fn test_district_other_requires_free_text() {
    let Fixture { mut wizard, .. } = fixture();
    wizard.set_field(Field::Service, "mermer");
    assert!(wizard.advance());

    wizard.set_field(Field::District, "other");
    assert!(!wizard.advance());
    assert_eq!(
        wizard.errors().get(Field::DistrictOther),
        Some("Lütfen bölgenizi yazın")
    );

    wizard.set_field(Field::DistrictOther, "Lara");
    assert!(wizard.advance());
}

#[test]
fn test_district_other_text_is_ignored_for_listed_districts() {
    let mut draft = valid_draft();
    draft.district = "konyaalti".to_string();
    draft.district_other.clear();
    let Fixture { mut wizard, .. } = fixture_with(stored(&draft), RecordingTransport::default());

    walk_to_summary(&mut wizard);
    assert!(wizard.errors().is_empty());
}

#[test]
fn test_short_phone_blocks_contact_step() {
    let mut draft = valid_draft();
    draft.phone = "0532".to_string();
    let Fixture { mut wizard, .. } = fixture_with(stored(&draft), RecordingTransport::default());

    while wizard.current_step().id != StepId::Contact {
        assert!(wizard.advance());
    }
    let before = wizard.step_index();

    assert!(!wizard.advance());
    assert_eq!(wizard.step_index(), before);
    assert_eq!(
        wizard.errors().get(Field::Phone),
        Some("Geçerli bir telefon numarası girin")
    );
}

#[test]
fn test_all_failing_fields_of_a_step_are_reported() {
    let Fixture { mut wizard, .. } = fixture();
    wizard.set_field(Field::Service, "mutfak-yenileme");
    wizard.set_field(Field::District, "kepez");
    wizard.advance();
    wizard.advance();
    wizard.set_field(Field::AreaSize, "80");
    wizard.set_field(Field::RoomCount, "2");
    assert!(wizard.advance());

    wizard.set_field(Field::Description, "kısa");
    wizard.set_field(Field::Expectations, FieldValue::List(vec!["speed".into(), "luck".into()]));
    assert!(!wizard.advance());
    assert_eq!(wizard.errors().len(), 2);
}

#[test]
fn test_editing_a_field_drops_only_its_error() {
    let contact = STEPS
        .iter()
        .position(|step| step.id == StepId::Contact)
        .unwrap();
    let state = WizardState {
        step_index: contact,
        ..WizardState::default()
    };
    let blocked = apply(state, WizardEvent::Advance).state;
    assert_eq!(blocked.errors.len(), 3);

    let edited = apply(
        blocked,
        WizardEvent::SetField {
            field: Field::Phone,
            value: "0532 123 45 67".into(),
        },
    );
    assert_eq!(edited.effects, vec![Effect::PersistDraft]);
    assert_eq!(edited.state.errors.len(), 2);
    assert!(!edited.state.errors.contains(Field::Phone));
}

#[test]
fn test_retreat_at_first_step_is_noop() {
    let Fixture { mut wizard, .. } = fixture();
    wizard.retreat();
    assert_eq!(wizard.step_index(), 0);

    let state = WizardState::default();
    let transition = apply(state.clone(), WizardEvent::Retreat);
    assert_eq!(transition.state, state);
    assert!(transition.effects.is_empty());
}

#[test]
fn test_advance_at_terminal_step_does_not_move() {
    let Fixture { mut wizard, .. } =
        fixture_with(stored(&valid_draft()), RecordingTransport::default());
    walk_to_summary(&mut wizard);

    assert!(!wizard.advance());
    assert_eq!(wizard.step_index(), LAST_STEP);
}

#[test]
fn test_retreat_skips_no_validation() {
    let Fixture { mut wizard, .. } = fixture();
    wizard.set_field(Field::Service, "banyo-yenileme");
    wizard.advance();
    assert_eq!(wizard.step_index(), 1);

    wizard.set_field(Field::Service, "");
    wizard.retreat();
    assert_eq!(wizard.step_index(), 0);
    assert!(wizard.errors().is_empty());
}

#[test]
fn test_step_indicator_is_derived_from_index() {
    let state = WizardState {
        step_index: 3,
        ..WizardState::default()
    };
    assert_eq!(state.step_state(0), StepState::Completed);
    assert_eq!(state.step_state(3), StepState::Current);
    assert_eq!(state.step_state(LAST_STEP), StepState::Pending);
}

#[test]
fn test_every_edit_is_persisted() {
    let Fixture {
        mut wizard, store, ..
    } = fixture();

    wizard.set_field(Field::FullName, "Ayşe Yılmaz");
    let restored: ReservationDraft = serde_json::from_str(&store.raw().unwrap()).unwrap();
    assert_eq!(restored.full_name, "Ayşe Yılmaz");

    wizard.set_field(Field::Consent, true);
    let restored: ReservationDraft = serde_json::from_str(&store.raw().unwrap()).unwrap();
    assert!(restored.consent);
}

#[test]
fn test_persist_then_restore_round_trips() {
    let Fixture {
        mut wizard, store, ..
    } = fixture();
    let draft = valid_draft();
    for field in Field::ALL {
        match field {
            Field::Consent => wizard.set_field(field, draft.consent),
            Field::Expectations => wizard.set_field(field, FieldValue::List(vec!["trust".into()])),
            field => wizard.set_field(field, draft.text(field).unwrap_or_default()),
        }
    }
    wizard.select_media(images(&["salon.jpg"]));
    let expected = wizard.draft().clone();
    drop(wizard);

    let Fixture { wizard, .. } = fixture_with(store, RecordingTransport::default());
    assert_eq!(wizard.draft(), &expected);
    assert!(wizard.state().media.is_empty());
}

#[test]
fn test_unreadable_draft_falls_back_to_defaults() {
    let Fixture { wizard, .. } = fixture_with(
        MemoryDraftStore::with_raw("{not json"),
        RecordingTransport::default(),
    );
    assert_eq!(wizard.draft(), &ReservationDraft::default());
}

#[test]
fn test_partial_stored_draft_merges_over_defaults() {
    let Fixture { wizard, .. } = fixture_with(
        MemoryDraftStore::with_raw(r#"{"service":"mermer","phone":"0532 000 00 00"}"#),
        RecordingTransport::default(),
    );
    assert_eq!(wizard.draft().service, "mermer");
    assert_eq!(wizard.draft().phone, "0532 000 00 00");
    assert!(!wizard.draft().consent);
}

#[test]
fn test_failed_save_does_not_block_edits() {
    let mut wizard = WizardBuilder::new()
        .with_store(ReadOnlyStore)
        .with_transport(RecordingTransport::default())
        .build()
        .unwrap();

    wizard.set_field(Field::Service, "mermer");
    assert_eq!(wizard.draft().service, "mermer");
}

#[test]
fn test_selecting_media_replaces_previews() {
    let Fixture {
        mut wizard,
        previews,
        ..
    } = fixture();

    wizard.select_media(images(&["a.jpg", "b.jpg", "c.jpg"]));
    assert_eq!(wizard.previews().len(), 3);

    wizard.select_media(images(&["d.jpg"]));
    assert_eq!(wizard.previews().len(), 1);
    assert_eq!(previews.live().len(), 1);
    assert_eq!(previews.revoked(), 3);
}

#[test]
fn test_dropping_wizard_releases_previews() {
    let Fixture {
        mut wizard,
        previews,
        ..
    } = fixture();
    wizard.select_media(images(&["a.jpg", "b.jpg"]));

    drop(wizard);
    assert!(previews.live().is_empty());
    assert_eq!(previews.revoked(), 2);
}

#[test]
fn test_media_is_never_persisted() {
    let Fixture {
        mut wizard, store, ..
    } = fixture();
    wizard.set_field(Field::Service, "mermer");
    wizard.select_media(images(&["a.jpg"]));

    let raw = store.raw().unwrap();
    assert!(!raw.contains("a.jpg"));
    assert!(!raw.contains("media"));
}

#[tokio::test]
async fn test_valid_draft_submits_once_and_resets() {
    let Fixture {
        mut wizard,
        store,
        transport,
        previews,
    } = fixture_with(stored(&valid_draft()), RecordingTransport::default());
    walk_to_summary(&mut wizard);
    wizard.select_media(images(&["salon.jpg", "mutfak.png"]));

    let status = wizard.submit().await.unwrap();

    assert_eq!(status, SubmitStatus::Success);
    let sent = transport.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].draft, valid_draft());
    assert_eq!(sent[0].media_count, 2);

    assert_eq!(wizard.step_index(), 0);
    assert_eq!(wizard.draft(), &ReservationDraft::default());
    assert!(store.raw().is_none());
    assert!(previews.live().is_empty());
}

#[tokio::test]
async fn test_failed_submission_keeps_draft_and_step() {
    let Fixture {
        mut wizard, store, ..
    } = fixture_with(stored(&valid_draft()), RecordingTransport::rejecting());
    walk_to_summary(&mut wizard);

    let status = wizard.submit().await.unwrap();

    assert_eq!(status, SubmitStatus::Error);
    assert_eq!(wizard.step_index(), LAST_STEP);
    assert_eq!(wizard.draft(), &valid_draft());
    assert!(store.raw().is_some());
    assert_eq!(
        wizard.state().last_error.as_deref(),
        Some("Submission failed: endpoint responded with 500")
    );
}

#[tokio::test]
async fn test_edit_after_failure_returns_to_idle() {
    let Fixture { mut wizard, .. } =
        fixture_with(stored(&valid_draft()), RecordingTransport::rejecting());
    walk_to_summary(&mut wizard);
    wizard.submit().await.unwrap();

    wizard.set_field(Field::Email, "ayse.yilmaz@example.com");

    assert_eq!(wizard.submit_status(), SubmitStatus::Idle);
    assert!(wizard.state().last_error.is_none());
}

#[tokio::test]
async fn test_submit_before_summary_is_rejected() {
    let Fixture {
        mut wizard,
        transport,
        ..
    } = fixture_with(stored(&valid_draft()), RecordingTransport::default());

    let err = wizard.submit().await.unwrap_err();

    assert!(matches!(err, WizardError::NotAtTerminalStep { step: "service" }));
    assert!(transport.sent().is_empty());
}

#[tokio::test]
async fn test_invalid_draft_is_not_sent() {
    let Fixture {
        mut wizard,
        transport,
        ..
    } = fixture_with(stored(&valid_draft()), RecordingTransport::default());
    walk_to_summary(&mut wizard);
    wizard.set_field(Field::Consent, false);

    let err = wizard.submit().await.unwrap_err();

    match err {
        WizardError::Validation(errors) => assert!(errors.contains(Field::Consent)),
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(wizard.submit_status(), SubmitStatus::Idle);
    assert!(transport.sent().is_empty());
}

#[test]
fn test_submit_request_while_submitting_is_ignored() {
    let state = WizardState {
        step_index: LAST_STEP,
        draft: valid_draft(),
        ..WizardState::default()
    };
    let first = apply(state, WizardEvent::SubmitRequested);
    assert_eq!(first.state.submit_status, SubmitStatus::Submitting);
    assert_eq!(first.effects.len(), 1);

    let second = apply(first.state.clone(), WizardEvent::SubmitRequested);
    assert_eq!(second.state, first.state);
    assert!(second.effects.is_empty());
}

#[test]
fn test_late_outcome_without_submission_is_ignored() {
    let state = WizardState::new(valid_draft());
    let transition = apply(state.clone(), WizardEvent::SubmitSucceeded);
    assert_eq!(transition.state, state);
    assert!(transition.effects.is_empty());
}

#[tokio::test]
async fn test_dropped_submission_returns_to_idle() {
    let mut wizard = WizardBuilder::new()
        .with_store(stored(&valid_draft()))
        .with_transport(StalledTransport)
        .build()
        .unwrap();
    walk_to_summary(&mut wizard);

    tokio::select! {
        biased;
        _ = wizard.submit() => panic!("stalled transport answered"),
        () = std::future::ready(()) => {}
    }

    assert_eq!(wizard.submit_status(), SubmitStatus::Idle);
    assert_eq!(wizard.step_index(), LAST_STEP);
    assert_eq!(wizard.draft(), &valid_draft());
}

#[test]
fn test_cancel_submission_returns_to_idle() {
    let mut wizard = WizardBuilder::new()
        .with_store(stored(&valid_draft()))
        .with_transport(RecordingTransport::default())
        .build()
        .unwrap();
    walk_to_summary(&mut wizard);
    wizard.dispatch(WizardEvent::SubmitRequested);
    assert_eq!(wizard.submit_status(), SubmitStatus::Submitting);

    wizard.cancel_submission();

    assert_eq!(wizard.submit_status(), SubmitStatus::Idle);
    assert_eq!(wizard.draft(), &valid_draft());
}

#[test]
fn test_reset_clears_everything() {
    let Fixture {
        mut wizard,
        store,
        previews,
        ..
    } = fixture_with(stored(&valid_draft()), RecordingTransport::default());
    wizard.advance();
    wizard.select_media(images(&["a.jpg"]));

    wizard.reset();

    assert_eq!(wizard.state(), &WizardState::default());
    assert!(store.raw().is_none());
    assert!(previews.live().is_empty());
}

#[test]
fn test_set_raw_rejects_mismatched_value() {
    let Fixture { mut wizard, .. } = fixture();
    let err = wizard.set_raw(Field::Consent, "belki").unwrap_err();
    assert!(matches!(err, WizardError::InvalidInput { .. }));
    assert!(!wizard.draft().consent);
}
