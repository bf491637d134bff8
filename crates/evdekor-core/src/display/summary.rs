//! Human-readable field values and the reservation summary.

use std::fmt;

use super::datetime::ScheduleDate;
use crate::{
    catalog::{self, DISTRICT_OTHER},
    models::{Field, ReservationDraft},
};

/// One draft field as the customer would read it: catalog titles and labels
/// instead of slugs, `-` for blanks.
pub struct FieldDisplay<'a> {
    pub draft: &'a ReservationDraft,
    pub field: Field,
}

impl<'a> FieldDisplay<'a> {
    pub fn new(draft: &'a ReservationDraft, field: Field) -> Self {
        Self { draft, field }
    }
}

impl fmt::Display for FieldDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let draft = self.draft;
        match self.field {
            Field::Service => or_dash(
                f,
                catalog::find_service(&draft.service).map(|service| service.title),
                &draft.service,
            ),
            Field::District => or_dash(
                f,
                catalog::find_district(&draft.district).map(|district| district.label),
                &draft.district,
            ),
            Field::ScheduleSlot => or_dash(
                f,
                catalog::find_slot(&draft.schedule_slot).map(|slot| slot.label),
                &draft.schedule_slot,
            ),
            Field::ScheduleDate => write!(f, "{}", ScheduleDate(&draft.schedule_date)),
            Field::Expectations => {
                if draft.expectations.is_empty() {
                    return write!(f, "Belirtilmedi");
                }
                let labels: Vec<&str> = draft
                    .expectations
                    .iter()
                    .map(|value| {
                        catalog::find_expectation(value).map_or(value.as_str(), |choice| choice.label)
                    })
                    .collect();
                write!(f, "{}", labels.join(", "))
            }
            Field::Consent => write!(f, "{}", if draft.consent { "Evet" } else { "Hayır" }),
            field => or_dash(f, None, draft.text(field).unwrap_or_default()),
        }
    }
}

/// Write the catalog label, else the raw value, else `-`.
fn or_dash(f: &mut fmt::Formatter<'_>, label: Option<&str>, raw: &str) -> fmt::Result {
    match label {
        Some(label) => write!(f, "{label}"),
        None if raw.trim().is_empty() => write!(f, "-"),
        None => write!(f, "{raw}"),
    }
}

fn dash(value: &str) -> &str {
    if value.trim().is_empty() {
        "-"
    } else {
        value
    }
}

/// The overview shown on the final step before consent and submission.
///
/// # Examples
///
/// ```rust
/// use evdekor_core::{display::ReservationSummary, models::ReservationDraft};
///
/// let draft = ReservationDraft {
///     service: "mermer".to_string(),
///     area_size: "40".to_string(),
///     ..Default::default()
/// };
/// let output = ReservationSummary::new(&draft, 2).to_string();
/// assert!(output.contains("Mermer Uygulamaları"));
/// assert!(output.contains("40 m², - alan"));
/// assert!(output.contains("Belirtilmedi"));
/// ```
pub struct ReservationSummary<'a> {
    pub draft: &'a ReservationDraft,
    pub media_count: usize,
}

impl<'a> ReservationSummary<'a> {
    pub fn new(draft: &'a ReservationDraft, media_count: usize) -> Self {
        Self { draft, media_count }
    }
}

impl fmt::Display for ReservationSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let draft = self.draft;
        writeln!(f, "### Rezervasyon özetiniz")?;
        writeln!(f)?;
        writeln!(f, "- **Hizmet**: {}", FieldDisplay::new(draft, Field::Service))?;
        if draft.district == DISTRICT_OTHER {
            writeln!(f, "- **Bölge**: {}", dash(&draft.district_other))?;
        } else {
            writeln!(f, "- **Bölge**: {}", FieldDisplay::new(draft, Field::District))?;
        }
        writeln!(
            f,
            "- **Alan bilgisi**: {} m², {} alan",
            dash(&draft.area_size),
            dash(&draft.room_count)
        )?;
        if draft.expectations.is_empty() {
            writeln!(f, "- **Tercihler**: Belirtilmedi")?;
        } else {
            writeln!(f, "- **Tercihler**: {} tercih", draft.expectations.len())?;
        }
        writeln!(f, "- **Tarih**: {}", ScheduleDate(&draft.schedule_date))?;
        writeln!(f, "- **Zaman**: {}", FieldDisplay::new(draft, Field::ScheduleSlot))?;
        writeln!(f, "- **Görseller**: {}", self.media_count)?;
        Ok(())
    }
}
