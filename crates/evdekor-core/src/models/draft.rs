//! Reservation draft model and field addressing.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{
    catalog::ServiceKind,
    error::{Result, WizardError},
};

/// The persisted form state of a reservation request.
///
/// Every text field starts empty and `consent` starts false, so the default
/// draft never passes validation. `#[serde(default)]` lets a stored draft that
/// predates a field still load, with the missing field taking its default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReservationDraft {
    /// Selected service slug
    pub service: String,
    /// Selected district value, or `"other"`
    pub district: String,
    /// Free-text district, only meaningful when `district == "other"`
    pub district_other: String,
    /// Area in square meters, as typed
    pub area_size: String,
    /// Number of rooms/areas, as typed
    pub room_count: String,
    /// Free-text project description
    pub description: String,
    /// Selected expectation option values
    pub expectations: Vec<String>,
    /// Preferred date, `YYYY-MM-DD`
    pub schedule_date: String,
    /// Preferred time window
    pub schedule_slot: String,
    pub full_name: String,
    pub phone: String,
    pub email: String,
    /// Informed-consent (KVKK) acknowledgment
    pub consent: bool,
}

impl ReservationDraft {
    /// The selected service, if the slug is a catalog member.
    pub fn service_kind(&self) -> Option<ServiceKind> {
        self.service.parse().ok()
    }

    /// Whether the selected service waives the space step.
    pub fn waives_space(&self) -> bool {
        self.service_kind().is_some_and(|kind| kind.waives_space())
    }

    /// Borrow the text value of a field. `None` for non-text fields.
    pub fn text(&self, field: Field) -> Option<&str> {
        let value = match field {
            Field::Service => &self.service,
            Field::District => &self.district,
            Field::DistrictOther => &self.district_other,
            Field::AreaSize => &self.area_size,
            Field::RoomCount => &self.room_count,
            Field::Description => &self.description,
            Field::ScheduleDate => &self.schedule_date,
            Field::ScheduleSlot => &self.schedule_slot,
            Field::FullName => &self.full_name,
            Field::Phone => &self.phone,
            Field::Email => &self.email,
            Field::Expectations | Field::Consent => return None,
        };
        Some(value)
    }

    /// Assign a value to a field.
    ///
    /// Selecting a service that waives the space step clears `area_size` and
    /// `room_count` so no stale dimensions survive the switch.
    ///
    /// # Errors
    ///
    /// Returns `WizardError::InvalidInput` when the value kind does not match
    /// the field (for example text assigned to `consent`).
    pub fn set(&mut self, field: Field, value: FieldValue) -> Result<()> {
        match (field, value) {
            (Field::Consent, FieldValue::Flag(flag)) => self.consent = flag,
            (Field::Expectations, FieldValue::List(values)) => self.expectations = values,
            (Field::Service, FieldValue::Text(text)) => {
                self.service = text;
                if self.waives_space() {
                    self.area_size.clear();
                    self.room_count.clear();
                }
            }
            (field, FieldValue::Text(text)) if field.is_text() => {
                if let Some(slot) = self.text_mut(field) {
                    *slot = text;
                }
            }
            (field, value) => {
                return Err(WizardError::invalid_input(field.as_str())
                    .with_reason(format!("expected {}, got {}", field.kind(), value.kind())));
            }
        }
        Ok(())
    }

    fn text_mut(&mut self, field: Field) -> Option<&mut String> {
        let value = match field {
            Field::Service => &mut self.service,
            Field::District => &mut self.district,
            Field::DistrictOther => &mut self.district_other,
            Field::AreaSize => &mut self.area_size,
            Field::RoomCount => &mut self.room_count,
            Field::Description => &mut self.description,
            Field::ScheduleDate => &mut self.schedule_date,
            Field::ScheduleSlot => &mut self.schedule_slot,
            Field::FullName => &mut self.full_name,
            Field::Phone => &mut self.phone,
            Field::Email => &mut self.email,
            Field::Expectations | Field::Consent => return None,
        };
        Some(value)
    }
}

/// Addressable draft fields, in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Service,
    District,
    DistrictOther,
    AreaSize,
    RoomCount,
    Description,
    Expectations,
    ScheduleDate,
    ScheduleSlot,
    FullName,
    Phone,
    Email,
    Consent,
}

impl Field {
    /// Every field in form order.
    pub const ALL: [Field; 13] = [
        Field::Service,
        Field::District,
        Field::DistrictOther,
        Field::AreaSize,
        Field::RoomCount,
        Field::Description,
        Field::Expectations,
        Field::ScheduleDate,
        Field::ScheduleSlot,
        Field::FullName,
        Field::Phone,
        Field::Email,
        Field::Consent,
    ];

    /// Payload/storage key of the field.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Service => "service",
            Field::District => "district",
            Field::DistrictOther => "districtOther",
            Field::AreaSize => "areaSize",
            Field::RoomCount => "roomCount",
            Field::Description => "description",
            Field::Expectations => "expectations",
            Field::ScheduleDate => "scheduleDate",
            Field::ScheduleSlot => "scheduleSlot",
            Field::FullName => "fullName",
            Field::Phone => "phone",
            Field::Email => "email",
            Field::Consent => "consent",
        }
    }

    /// Customer-facing label.
    pub fn label(&self) -> &'static str {
        match self {
            Field::Service => "Hizmet",
            Field::District => "Bölge",
            Field::DistrictOther => "Diğer bölge",
            Field::AreaSize => "Alan büyüklüğü (m²)",
            Field::RoomCount => "Oda / alan sayısı",
            Field::Description => "Proje detayı",
            Field::Expectations => "Beklentiler",
            Field::ScheduleDate => "Tercih edilen tarih",
            Field::ScheduleSlot => "Zaman dilimi",
            Field::FullName => "Ad Soyad",
            Field::Phone => "Telefon",
            Field::Email => "E-posta",
            Field::Consent => "KVKK onayı",
        }
    }

    fn is_text(&self) -> bool {
        !matches!(self, Field::Expectations | Field::Consent)
    }

    fn kind(&self) -> &'static str {
        match self {
            Field::Consent => "a flag",
            Field::Expectations => "a list",
            _ => "text",
        }
    }

    /// Parse a raw command-line value into the shape this field stores.
    ///
    /// `consent` accepts `true/false`, `yes/no`, `evet/hayır` and `1/0`;
    /// `expectations` takes a comma-separated list.
    ///
    /// # Errors
    ///
    /// Returns `WizardError::InvalidInput` for an unrecognized flag value.
    pub fn parse_value(&self, raw: &str) -> Result<FieldValue> {
        match self {
            Field::Consent => match raw.trim().to_lowercase().as_str() {
                "true" | "yes" | "evet" | "1" => Ok(FieldValue::Flag(true)),
                "false" | "no" | "hayır" | "hayir" | "0" => Ok(FieldValue::Flag(false)),
                other => Err(WizardError::invalid_input(self.as_str())
                    .with_reason(format!("'{other}' is not a yes/no value"))),
            },
            Field::Expectations => Ok(FieldValue::List(
                raw.split(',')
                    .map(str::trim)
                    .filter(|value| !value.is_empty())
                    .map(String::from)
                    .collect(),
            )),
            _ => Ok(FieldValue::Text(raw.to_string())),
        }
    }
}

impl FromStr for Field {
    type Err = WizardError;

    /// Accepts the camelCase key as well as kebab/snake spellings.
    fn from_str(s: &str) -> Result<Self> {
        let wanted: String = s
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_lowercase();
        Field::ALL
            .into_iter()
            .find(|field| field.as_str().to_lowercase() == wanted)
            .ok_or_else(|| {
                WizardError::invalid_input("field").with_reason(format!("unknown field '{s}'"))
            })
    }
}

/// A typed value for [`ReservationDraft::set`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
    List(Vec<String>),
}

impl FieldValue {
    fn kind(&self) -> &'static str {
        match self {
            FieldValue::Text(_) => "text",
            FieldValue::Flag(_) => "a flag",
            FieldValue::List(_) => "a list",
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Flag(value)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(values: Vec<String>) -> Self {
        FieldValue::List(values)
    }
}
