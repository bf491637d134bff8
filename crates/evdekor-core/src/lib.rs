//! Core library for the Evdekor reservation wizard.
//!
//! A reservation request is collected over eight fixed steps (service,
//! district, space, details, media, schedule, contact, summary). This crate
//! holds everything below the user interface:
//!
//! - [`wizard`]: the state struct, the pure [`apply`] transition function and
//!   the [`Wizard`] driver that runs its effects
//! - [`validation`]: per-field rules plus the cross-field conditions
//! - [`store`]: the draft persistence port with file and memory stores
//! - [`preview`]: revocable media preview handles
//! - [`transport`]: the submission port and its HTTP implementation
//! - [`catalog`]: services, districts, time slots and expectation options
//! - [`display`]: markdown views of the wizard for terminal output
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use evdekor_core::{models::Field, SubmitStatus, WizardBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Restores the draft saved under the XDG data directory, if any
//! let mut wizard = WizardBuilder::new()
//!     .with_endpoint(Some("https://evdekor.example/api/rezervasyon"))
//!     .build()?;
//!
//! wizard.set_raw(Field::Service, "ozel-mobilya")?;
//! wizard.set_raw(Field::District, "kepez")?;
//! while !wizard.state().is_terminal() {
//!     if !wizard.advance() {
//!         println!("{}", wizard.errors());
//!         return Ok(());
//!     }
//! }
//!
//! wizard.set_raw(Field::Consent, "evet")?;
//! if wizard.submit().await? == SubmitStatus::Success {
//!     println!("Reservation sent");
//! }
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod display;
pub mod error;
pub mod handlers;
pub mod models;
pub mod params;
pub mod preview;
pub mod store;
pub mod transport;
pub mod validation;
pub mod wizard;

// Re-export commonly used types
pub use error::{Result, WizardError};
pub use models::{Field, FieldValue, MediaFile, ReservationDraft, SubmissionPayload, SubmitStatus};
pub use store::{DraftStore, FileDraftStore, MemoryDraftStore};
pub use transport::{HttpTransport, SubmitTransport};
pub use validation::ValidationErrors;
pub use wizard::{apply, Effect, Transition, Wizard, WizardBuilder, WizardEvent, WizardState};
