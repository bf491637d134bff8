//! Step indicator and current-step views.

use std::fmt;

use super::{status::SubmitNotice, summary::FieldDisplay, ReservationSummary};
use crate::{
    models::{StepId, STEPS, STEP_COUNT},
    validation,
    wizard::WizardState,
};

/// The step list with a completed/current/pending icon per step.
///
/// # Examples
///
/// ```rust
/// use evdekor_core::{display::StepIndicator, WizardState};
///
/// let state = WizardState {
///     step_index: 1,
///     ..Default::default()
/// };
/// let output = StepIndicator(&state).to_string();
/// assert!(output.contains("✓ Hizmet Seçimi"));
/// assert!(output.contains("➤ **Bölge Seçimi**"));
/// assert!(output.contains("○ Özet & Onay"));
/// ```
pub struct StepIndicator<'a>(pub &'a WizardState);

impl fmt::Display for StepIndicator<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, step) in STEPS.iter().enumerate() {
            let icon = self.0.step_state(index).icon();
            if index == self.0.step_index {
                writeln!(f, "{}. {icon} **{}**", index + 1, step.title)?;
            } else {
                writeln!(f, "{}. {icon} {}", index + 1, step.title)?;
            }
        }
        Ok(())
    }
}

/// The current step: its fields with their values and pending errors, plus
/// the submission notice when one applies.
pub struct CurrentStep<'a>(pub &'a WizardState);

impl fmt::Display for CurrentStep<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.0;
        let step = state.current_step();
        let draft = &state.draft;
        writeln!(
            f,
            "## {}/{} {}",
            state.step_index + 1,
            STEP_COUNT,
            step.title
        )?;
        writeln!(f)?;

        match step.id {
            StepId::Space if draft.waives_space() => {
                writeln!(f, "Seçilen hizmet için alan bilgisi gerekmiyor.")?;
            }
            StepId::Media => {
                if state.media.is_empty() {
                    writeln!(f, "Görsel seçilmedi (opsiyonel).")?;
                }
                for file in &state.media {
                    writeln!(f, "- {}", file.name)?;
                }
            }
            StepId::Summary => {
                write!(f, "{}", ReservationSummary::new(draft, state.media.len()))?;
                writeln!(f)?;
            }
            _ => {}
        }

        for field in step.fields {
            if !validation::is_applicable(*field, draft) {
                continue;
            }
            writeln!(
                f,
                "- **{}** (`{}`): {}",
                field.label(),
                field,
                FieldDisplay::new(draft, *field)
            )?;
            if let Some(message) = state.errors.get(*field) {
                writeln!(f, "  - ⚠ {message}")?;
            }
        }

        if let Some(notice) = SubmitNotice::for_state(state) {
            writeln!(f)?;
            write!(f, "{notice}")?;
        }
        Ok(())
    }
}
