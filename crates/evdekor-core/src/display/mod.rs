//! Display wrappers for wizard output.
//!
//! Domain enums implement [`std::fmt::Display`] directly (see [`models`]).
//! Views that need context, such as the step indicator or the summary of a
//! draft, are newtype wrappers over borrowed state. Every wrapper produces
//! markdown so the CLI can render it richly or print it as is.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  WizardState /  │    │ Display wrappers│    │   Markdown      │
//! │  Draft / Status │───▶│ (borrowing)     │───▶│   output        │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`progress`]: step indicator and current-step view
//! - [`summary`]: human-readable field values and the reservation summary
//! - [`status`]: submission notices and operation confirmations
//! - [`collections`]: catalog listing
//! - [`datetime`]: date formatting
//! - [`models`]: Display implementations for domain types
//!
//! ## Usage
//!
//! ```rust
//! use evdekor_core::{
//!     display::{CurrentStep, StepIndicator},
//!     WizardState,
//! };
//!
//! let state = WizardState::default();
//! let output = format!("{}\n{}", StepIndicator(&state), CurrentStep(&state));
//! assert!(output.contains("## 1/8 Hizmet Seçimi"));
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod progress;
pub mod status;
pub mod summary;

pub use collections::CatalogListing;
pub use datetime::ScheduleDate;
pub use progress::{CurrentStep, StepIndicator};
pub use status::{OperationStatus, SubmitNotice};
pub use summary::{FieldDisplay, ReservationSummary};
