//! Draft persistence port and its implementations.
//!
//! The wizard never touches storage directly. It talks to a [`DraftStore`],
//! which keeps one serialized draft under [`STORAGE_KEY`]. Two stores ship
//! with the crate:
//!
//! - [`FileDraftStore`]: a JSON file, by default under the XDG data directory
//! - [`MemoryDraftStore`]: an in-process cell, shared between clones, for tests
//!   and short-lived sessions
//!
//! Reading is allowed to fail; the wizard treats any load error as "no draft"
//! and logs it. Media is never part of what a store sees.

use crate::{error::Result, models::ReservationDraft};

pub mod file;
pub mod memory;

pub use file::FileDraftStore;
pub use memory::MemoryDraftStore;

/// Fixed key the draft is stored under.
pub const STORAGE_KEY: &str = "evdekor-reservation-data";

/// Save/load/clear capability for the reservation draft.
pub trait DraftStore: Send + Sync {
    /// Read the stored draft. `Ok(None)` when nothing is stored.
    ///
    /// Fields missing from the stored value take their defaults.
    fn load(&self) -> Result<Option<ReservationDraft>>;

    /// Overwrite the stored draft.
    fn save(&self, draft: &ReservationDraft) -> Result<()>;

    /// Delete the stored draft. Clearing an empty store is not an error.
    fn clear(&self) -> Result<()>;
}

/// Parse a stored value, treating a blank value as absent.
pub(crate) fn parse_stored(raw: &str) -> Result<Option<ReservationDraft>> {
    if raw.trim().is_empty() {
        return Ok(None);
    }
    Ok(Some(serde_json::from_str(raw)?))
}
