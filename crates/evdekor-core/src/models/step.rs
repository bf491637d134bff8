//! Wizard step definitions.

use serde::{Deserialize, Serialize};

use super::Field;

/// Identifier of a wizard screen.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum StepId {
    Service,
    District,
    Space,
    Details,
    Media,
    Schedule,
    Contact,
    Summary,
}

impl StepId {
    pub fn as_str(&self) -> &'static str {
        match self {
            StepId::Service => "service",
            StepId::District => "district",
            StepId::Space => "space",
            StepId::Details => "details",
            StepId::Media => "media",
            StepId::Schedule => "schedule",
            StepId::Contact => "contact",
            StepId::Summary => "summary",
        }
    }
}

/// One screen of the wizard and the fields it must validate before leaving.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepDescriptor {
    pub id: StepId,
    pub title: &'static str,
    pub fields: &'static [Field],
}

impl StepDescriptor {
    /// Steps without fields (media upload) advance without validation.
    pub fn has_fields(&self) -> bool {
        !self.fields.is_empty()
    }
}

/// Number of steps in the wizard.
pub const STEP_COUNT: usize = 8;

/// The fixed step sequence.
pub static STEPS: [StepDescriptor; STEP_COUNT] = [
    StepDescriptor {
        id: StepId::Service,
        title: "Hizmet Seçimi",
        fields: &[Field::Service],
    },
    StepDescriptor {
        id: StepId::District,
        title: "Bölge Seçimi",
        fields: &[Field::District, Field::DistrictOther],
    },
    StepDescriptor {
        id: StepId::Space,
        title: "Alan Bilgisi",
        fields: &[Field::AreaSize, Field::RoomCount],
    },
    StepDescriptor {
        id: StepId::Details,
        title: "Detaylar",
        fields: &[Field::Description, Field::Expectations],
    },
    StepDescriptor {
        id: StepId::Media,
        title: "Medya",
        fields: &[],
    },
    StepDescriptor {
        id: StepId::Schedule,
        title: "Zamanlama",
        fields: &[Field::ScheduleDate, Field::ScheduleSlot],
    },
    StepDescriptor {
        id: StepId::Contact,
        title: "İletişim",
        fields: &[Field::FullName, Field::Phone, Field::Email],
    },
    StepDescriptor {
        id: StepId::Summary,
        title: "Özet & Onay",
        fields: &[Field::Consent],
    },
];

/// Index of the last (submit) step.
pub const LAST_STEP: usize = STEP_COUNT - 1;

/// Index of the step a field belongs to.
pub fn step_of(field: Field) -> usize {
    STEPS
        .iter()
        .position(|step| step.fields.contains(&field))
        .unwrap_or(LAST_STEP)
}

/// Indicator state of a step relative to the current one.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StepState {
    /// Not reached yet
    Pending,
    /// The step on screen
    Current,
    /// Already passed
    Completed,
}

impl StepState {
    /// Derive the state purely from index comparison.
    pub fn of(index: usize, current: usize) -> Self {
        match index.cmp(&current) {
            std::cmp::Ordering::Less => StepState::Completed,
            std::cmp::Ordering::Equal => StepState::Current,
            std::cmp::Ordering::Greater => StepState::Pending,
        }
    }

    /// Icon used by step indicators.
    ///
    /// ```rust
    /// use evdekor_core::models::StepState;
    ///
    /// assert_eq!(StepState::Completed.icon(), "✓");
    /// assert_eq!(StepState::Current.icon(), "➤");
    /// assert_eq!(StepState::Pending.icon(), "○");
    /// ```
    pub fn icon(&self) -> &'static str {
        match self {
            StepState::Completed => "✓",
            StepState::Current => "➤",
            StepState::Pending => "○",
        }
    }
}
