//! Submission status enumeration.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Lifecycle of a submission attempt.
///
/// There is no separate retry state: after `Success` or `Error` the next draft
/// edit returns the machine to `Idle`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SubmitStatus {
    /// Nothing in flight
    #[default]
    Idle,

    /// Request sent, awaiting the response; further submits are ignored
    Submitting,

    /// Last attempt was accepted and the wizard was reset
    Success,

    /// Last attempt failed; draft and step were kept for a retry
    Error,
}

impl FromStr for SubmitStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "idle" => Ok(SubmitStatus::Idle),
            "submitting" => Ok(SubmitStatus::Submitting),
            "success" => Ok(SubmitStatus::Success),
            "error" => Ok(SubmitStatus::Error),
            _ => Err(format!("Invalid submit status: {s}")),
        }
    }
}

impl SubmitStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmitStatus::Idle => "idle",
            SubmitStatus::Submitting => "submitting",
            SubmitStatus::Success => "success",
            SubmitStatus::Error => "error",
        }
    }

    /// Whether a finished attempt should fall back to idle on the next edit.
    pub fn is_settled(&self) -> bool {
        matches!(self, SubmitStatus::Success | SubmitStatus::Error)
    }
}
