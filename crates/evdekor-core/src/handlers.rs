//! Core handler functions for wizard workflows.
//!
//! Each handler turns one [`crate::params`] structure into operations on a
//! [`Wizard`] and returns structured data for the interface to format.
//!
//! ```text
//! Interface → Handler → Wizard → machine::apply
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! # use evdekor_core::{handlers::handle_set_field, params::SetField, WizardBuilder};
//! # fn example() -> evdekor_core::Result<()> {
//! let mut wizard = WizardBuilder::new().build()?;
//! let field = handle_set_field(
//!     &mut wizard,
//!     &SetField {
//!         field: "district".to_string(),
//!         value: "kepez".to_string(),
//!     },
//! )?;
//! println!("updated {}", field.label());
//! # Ok(())
//! # }
//! ```

use log::debug;

use crate::{
    error::{Result, WizardError},
    models::{Field, MediaFile, SubmitStatus},
    params::{SelectMedia, SetField, SubmitReservation},
    validation::{self, ValidationErrors},
    wizard::Wizard,
};

/// Handle assigning one field from raw text.
///
/// # Errors
///
/// Returns `WizardError::InvalidInput` if the field name is unknown or the
/// value does not fit the field.
pub fn handle_set_field(wizard: &mut Wizard, params: &SetField) -> Result<Field> {
    let field: Field = params.field.parse()?;
    wizard.set_raw(field, &params.value)?;
    Ok(field)
}

/// Handle replacing the media selection with files from disk.
///
/// Every path is checked before the selection changes, so one bad path leaves
/// the previous selection in place. Returns the number of selected files.
///
/// # Errors
///
/// Returns `WizardError::InvalidInput` for a missing or non-image path.
pub fn handle_select_media(wizard: &mut Wizard, params: &SelectMedia) -> Result<usize> {
    let files = params
        .paths
        .iter()
        .map(MediaFile::open)
        .collect::<Result<Vec<_>>>()?;
    let count = files.len();
    wizard.select_media(files);
    Ok(count)
}

/// Advance until the summary step or the first blocking step.
///
/// Returns whether the summary step was reached; when it was not, the
/// wizard's errors describe what blocks the current step.
pub fn handle_walk_to_summary(wizard: &mut Wizard) -> bool {
    while !wizard.state().is_terminal() {
        if !wizard.advance() {
            debug!(
                "Stopped on step '{}' with {} error(s)",
                wizard.current_step().id.as_str(),
                wizard.errors().len()
            );
            return false;
        }
    }
    true
}

/// Validate the whole draft without moving the wizard.
pub fn handle_validate(wizard: &Wizard) -> ValidationErrors {
    validation::validate_draft(wizard.draft())
}

/// Handle a one-shot submission: attach media, walk to the summary step and
/// submit from there.
///
/// # Errors
///
/// Returns `WizardError::InvalidInput` for an unusable media path and
/// `WizardError::Validation` when a step blocks the walk or the full draft is
/// incomplete. A rejected request is not an error; it yields
/// `SubmitStatus::Error`.
pub async fn handle_submit(wizard: &mut Wizard, params: &SubmitReservation) -> Result<SubmitStatus> {
    if !params.media.is_empty() {
        handle_select_media(
            wizard,
            &SelectMedia {
                paths: params.media.clone(),
            },
        )?;
    }
    if !handle_walk_to_summary(wizard) {
        return Err(WizardError::Validation(wizard.errors().clone()));
    }
    wizard.submit().await
}
