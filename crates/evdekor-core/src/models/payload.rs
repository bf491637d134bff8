//! Submission payload.

use serde::{Deserialize, Serialize};

use super::ReservationDraft;

/// JSON body posted to the reservation endpoint: every persisted draft field
/// (camelCase) plus the number of selected images.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionPayload {
    #[serde(flatten)]
    pub draft: ReservationDraft,
    pub media_count: usize,
}

impl SubmissionPayload {
    pub fn new(draft: ReservationDraft, media_count: usize) -> Self {
        Self { draft, media_count }
    }
}
