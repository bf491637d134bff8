//! Field validation rules.
//!
//! Every field has one pure predicate returning the message of its first
//! failing rule. Fields whose requirement depends on another field are listed
//! in [`CONDITIONAL_RULES`]; when the condition does not hold the field is not
//! checked at all, so a stale value there can never block progress.
//!
//! Validation is eager and exhaustive over the requested fields: every failing
//! field is reported, not just the first one.

use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

use crate::{
    catalog::{self, DISTRICT_OTHER},
    models::{Field, ReservationDraft},
};

const MIN_AREA_SIZE: f64 = 5.0;
const MIN_ROOM_COUNT: f64 = 1.0;
const MIN_DESCRIPTION_CHARS: usize = 20;
const MIN_FULL_NAME_CHARS: usize = 3;

/// A failed rule, keyed by the field it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: Field,
    pub message: &'static str,
}

/// All failures of one validation pass, in form order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(pub Vec<FieldError>);

impl ValidationErrors {
    /// Check if the pass found no failures.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of failing fields.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Message recorded for a field, if it failed.
    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.0
            .iter()
            .find(|error| error.field == field)
            .map(|error| error.message)
    }

    /// Whether the field failed.
    pub fn contains(&self, field: Field) -> bool {
        self.get(field).is_some()
    }

    /// Get an iterator over the failures.
    pub fn iter(&self) -> std::slice::Iter<'_, FieldError> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a FieldError;
    type IntoIter = std::slice::Iter<'a, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// A requirement that only holds under a condition on other fields.
pub struct ConditionalRule {
    pub fields: &'static [Field],
    pub applies: fn(&ReservationDraft) -> bool,
}

/// Cross-field conditions.
pub static CONDITIONAL_RULES: [ConditionalRule; 2] = [
    ConditionalRule {
        fields: &[Field::DistrictOther],
        applies: |draft| draft.district == DISTRICT_OTHER,
    },
    ConditionalRule {
        fields: &[Field::AreaSize, Field::RoomCount],
        applies: |draft| !draft.waives_space(),
    },
];

/// Whether the field is currently required to pass its rule.
pub fn is_applicable(field: Field, draft: &ReservationDraft) -> bool {
    CONDITIONAL_RULES
        .iter()
        .filter(|rule| rule.fields.contains(&field))
        .all(|rule| (rule.applies)(draft))
}

/// Validate a subset of fields, typically the fields of one step.
pub fn validate_fields(draft: &ReservationDraft, fields: &[Field]) -> ValidationErrors {
    let mut errors: Vec<FieldError> = fields
        .iter()
        .copied()
        .filter(|field| is_applicable(*field, draft))
        .filter_map(|field| check(field, draft).map(|message| FieldError { field, message }))
        .collect();
    errors.sort_by_key(|error| error.field);
    errors.dedup_by_key(|error| error.field);
    ValidationErrors(errors)
}

/// Validate the whole draft, as done before submission.
pub fn validate_draft(draft: &ReservationDraft) -> ValidationErrors {
    validate_fields(draft, &Field::ALL)
}

/// Run the single-field rule chain, returning the first failure.
pub fn check(field: Field, draft: &ReservationDraft) -> Option<&'static str> {
    match field {
        Field::Service => check_service(&draft.service),
        Field::District => check_district(&draft.district),
        Field::DistrictOther => required(&draft.district_other, "Lütfen bölgenizi yazın"),
        Field::AreaSize => required(&draft.area_size, "Metrekare bilgisini girin").or_else(|| {
            at_least(
                &draft.area_size,
                MIN_AREA_SIZE,
                "Metrekare bilgisi minimum 5 olmalıdır",
            )
        }),
        Field::RoomCount => required(&draft.room_count, "Oda/alan sayısını girin").or_else(|| {
            at_least(
                &draft.room_count,
                MIN_ROOM_COUNT,
                "Alan sayısı en az 1 olmalıdır",
            )
        }),
        Field::Description => min_chars(
            &draft.description,
            MIN_DESCRIPTION_CHARS,
            "En az 20 karakter ile beklentilerinizi yazın",
        ),
        Field::Expectations => check_expectations(&draft.expectations),
        Field::ScheduleDate => check_date(&draft.schedule_date),
        Field::ScheduleSlot => check_slot(&draft.schedule_slot),
        Field::FullName => min_chars(
            &draft.full_name,
            MIN_FULL_NAME_CHARS,
            "Lütfen adınızı ve soyadınızı yazın",
        ),
        Field::Phone => check_phone(&draft.phone),
        Field::Email => check_email(&draft.email),
        Field::Consent => (!draft.consent).then_some("KVKK onayını işaretleyin"),
    }
}

fn required(value: &str, message: &'static str) -> Option<&'static str> {
    value.trim().is_empty().then_some(message)
}

fn min_chars(value: &str, min: usize, message: &'static str) -> Option<&'static str> {
    (value.chars().count() < min).then_some(message)
}

fn at_least(value: &str, min: f64, message: &'static str) -> Option<&'static str> {
    let passes = value
        .trim()
        .parse::<f64>()
        .is_ok_and(|number| number.is_finite() && number >= min);
    (!passes).then_some(message)
}

fn check_service(value: &str) -> Option<&'static str> {
    required(value, "Lütfen hizmet seçin").or_else(|| {
        catalog::find_service(value)
            .is_none()
            .then_some("Geçerli bir hizmet seçin")
    })
}

fn check_district(value: &str) -> Option<&'static str> {
    required(value, "Lütfen bölge seçin").or_else(|| {
        catalog::find_district(value)
            .is_none()
            .then_some("Geçerli bir bölge seçin")
    })
}

fn check_expectations(values: &[String]) -> Option<&'static str> {
    values
        .iter()
        .any(|value| catalog::find_expectation(value).is_none())
        .then_some("Listede olmayan bir beklenti seçildi")
}

fn check_date(value: &str) -> Option<&'static str> {
    required(value, "Tarih seçin").or_else(|| {
        value
            .trim()
            .parse::<jiff::civil::Date>()
            .is_err()
            .then_some("Tarihi YYYY-AA-GG biçiminde girin")
    })
}

fn check_slot(value: &str) -> Option<&'static str> {
    required(value, "Zaman dilimi seçin").or_else(|| {
        catalog::find_slot(value)
            .is_none()
            .then_some("Geçerli bir zaman dilimi seçin")
    })
}

fn check_phone(value: &str) -> Option<&'static str> {
    (!phone_pattern().is_match(value.trim())).then_some("Geçerli bir telefon numarası girin")
}

fn check_email(value: &str) -> Option<&'static str> {
    let valid = email_pattern().is_match(value) && !value.starts_with('.') && !value.contains("..");
    (!valid).then_some("Geçerli bir e-posta girin")
}

fn phone_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[0-9+\s()-]{10,}$").expect("phone pattern compiles"))
}

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$")
            .expect("email pattern compiles")
    })
}
