//! Parameter structures for wizard operations
//!
//! Interface layers (the CLI arguments, the interactive session) parse their
//! input into these plain structures and hand them to [`crate::handlers`].
//! They carry raw user text; conversion into typed fields and values happens
//! in the handlers so every interface reports the same input errors.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │  Core Params    │    │    Handlers     │
//! │  (clap derives) │───▶│ (minimal deps)  │───▶│  (Wizard ops)   │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```

use std::path::PathBuf;

/// Parameters for assigning one draft field from text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetField {
    /// Field name in any common spelling (`areaSize`, `area-size`, `area_size`)
    pub field: String,
    /// Raw value; see `Field::parse_value` for the accepted forms
    pub value: String,
}

/// Parameters for replacing the media selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectMedia {
    pub paths: Vec<PathBuf>,
}

/// Parameters for a one-shot submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmitReservation {
    /// Images to attach before submitting. Empty keeps the current selection.
    pub media: Vec<PathBuf>,
}
