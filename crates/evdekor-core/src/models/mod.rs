//! Data models for the reservation wizard.
//!
//! This module contains the domain types the state machine moves around: the
//! persisted [`ReservationDraft`], the fixed [`STEPS`] sequence, the
//! [`SubmitStatus`] lifecycle and the [`SubmissionPayload`] sent to the
//! endpoint. Display implementations live in [`crate::display`] to keep
//! presentation apart from the data.
//!
//! # Examples
//!
//! ```rust
//! use evdekor_core::models::{Field, FieldValue, ReservationDraft};
//!
//! let mut draft = ReservationDraft::default();
//! draft.set(Field::AreaSize, FieldValue::from("120"))?;
//! draft.set(Field::Service, FieldValue::from("ozel-mobilya"))?;
//!
//! // Custom furniture needs no dimensions; stale values are dropped.
//! assert!(draft.area_size.is_empty());
//! # evdekor_core::Result::<()>::Ok(())
//! ```

pub mod draft;
pub mod media;
pub mod payload;
pub mod status;
pub mod step;


pub use draft::{Field, FieldValue, ReservationDraft};
pub use media::MediaFile;
pub use payload::SubmissionPayload;
pub use status::SubmitStatus;
pub use step::{step_of, StepDescriptor, StepId, StepState, LAST_STEP, STEPS, STEP_COUNT};
