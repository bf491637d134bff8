//! Static content consumed by the wizard.
//!
//! Services, districts, schedule slots and expectation options are fixed,
//! ordered lists. The validation engine checks membership against them and the
//! summary step resolves labels from them.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Sentinel district value that unlocks the free-text district field.
pub const DISTRICT_OTHER: &str = "other";

/// Type-safe enumeration of the services a reservation can request.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ServiceKind {
    /// Complete turnkey renovation
    #[serde(rename = "anahtar-teslim")]
    Turnkey,
    /// Stone and marble work
    #[serde(rename = "mermer")]
    Marble,
    /// Workshop-built furniture, no on-site dimensions needed
    #[serde(rename = "ozel-mobilya")]
    CustomFurniture,
    /// Kitchen renovation
    #[serde(rename = "mutfak-yenileme")]
    KitchenRenovation,
    /// Bathroom renovation
    #[serde(rename = "banyo-yenileme")]
    BathroomRenovation,
}

impl ServiceKind {
    /// Every service in catalog order.
    pub const ALL: [ServiceKind; 5] = [
        ServiceKind::Turnkey,
        ServiceKind::Marble,
        ServiceKind::CustomFurniture,
        ServiceKind::KitchenRenovation,
        ServiceKind::BathroomRenovation,
    ];

    /// Slug used in drafts and submission payloads.
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceKind::Turnkey => "anahtar-teslim",
            ServiceKind::Marble => "mermer",
            ServiceKind::CustomFurniture => "ozel-mobilya",
            ServiceKind::KitchenRenovation => "mutfak-yenileme",
            ServiceKind::BathroomRenovation => "banyo-yenileme",
        }
    }

    /// Whether the space step (area size, room count) is waived.
    pub fn waives_space(&self) -> bool {
        matches!(self, ServiceKind::CustomFurniture)
    }

    /// Catalog entry for this service.
    pub fn descriptor(&self) -> &'static ServiceDescriptor {
        // SERVICES is declared in variant order
        &SERVICES[*self as usize]
    }
}

impl FromStr for ServiceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ServiceKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| format!("Unknown service: {s}"))
    }
}

/// A selectable service as shown to the customer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceDescriptor {
    pub value: ServiceKind,
    pub title: &'static str,
    pub description: &'static str,
}

/// A selectable district.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistrictDescriptor {
    pub value: &'static str,
    pub label: &'static str,
}

/// A generic `{value, label}` option used for slots and expectations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub value: &'static str,
    pub label: &'static str,
}

pub static SERVICES: [ServiceDescriptor; 5] = [
    ServiceDescriptor {
        value: ServiceKind::Turnkey,
        title: "Anahtar Teslim Tadilat",
        description: "Keşiften teslimata kadar tüm iç mekân yenilemesi tek ekipten.",
    },
    ServiceDescriptor {
        value: ServiceKind::Marble,
        title: "Mermer Uygulamaları",
        description: "Tezgah, basamak ve zemin için ölçüye özel mermer kesim ve montaj.",
    },
    ServiceDescriptor {
        value: ServiceKind::CustomFurniture,
        title: "Özel Üretim Mobilya",
        description: "Atölyemizde ölçünüze göre üretilen dolap ve mobilyalar.",
    },
    ServiceDescriptor {
        value: ServiceKind::KitchenRenovation,
        title: "Mutfak Yenileme",
        description: "Dolap, tezgah ve tesisat dahil komple mutfak yenileme.",
    },
    ServiceDescriptor {
        value: ServiceKind::BathroomRenovation,
        title: "Banyo Yenileme",
        description: "Seramik, vitrifiye ve tesisat yenilemesi ile yeni banyo.",
    },
];

pub static DISTRICTS: [DistrictDescriptor; 6] = [
    DistrictDescriptor {
        value: "muratpasa",
        label: "Muratpaşa",
    },
    DistrictDescriptor {
        value: "konyaalti",
        label: "Konyaaltı",
    },
    DistrictDescriptor {
        value: "kepez",
        label: "Kepez",
    },
    DistrictDescriptor {
        value: "dosemealti",
        label: "Döşemealtı",
    },
    DistrictDescriptor {
        value: "aksu",
        label: "Aksu",
    },
    DistrictDescriptor {
        value: DISTRICT_OTHER,
        label: "Diğer",
    },
];

pub static SCHEDULE_SLOTS: [Choice; 3] = [
    Choice {
        value: "haftaici-sabah",
        label: "Hafta içi sabah (09:00-12:00)",
    },
    Choice {
        value: "haftaici-aksam",
        label: "Hafta içi akşam (17:00-20:00)",
    },
    Choice {
        value: "haftasonu",
        label: "Hafta sonu (10:00-18:00)",
    },
];

pub static EXPECTATIONS: [Choice; 4] = [
    Choice {
        value: "speed",
        label: "Hızlı dönüş",
    },
    Choice {
        value: "trust",
        label: "Güvenilir ekip",
    },
    Choice {
        value: "price",
        label: "Uygun fiyat",
    },
    Choice {
        value: "clean",
        label: "Temiz çalışma",
    },
];

/// Look up a service by its slug.
pub fn find_service(value: &str) -> Option<&'static ServiceDescriptor> {
    SERVICES.iter().find(|service| service.value.as_str() == value)
}

/// Look up a district by its value.
pub fn find_district(value: &str) -> Option<&'static DistrictDescriptor> {
    DISTRICTS.iter().find(|district| district.value == value)
}

/// Look up a schedule slot by its value.
pub fn find_slot(value: &str) -> Option<&'static Choice> {
    SCHEDULE_SLOTS.iter().find(|slot| slot.value == value)
}

/// Look up an expectation option by its value.
pub fn find_expectation(value: &str) -> Option<&'static Choice> {
    EXPECTATIONS.iter().find(|option| option.value == value)
}
