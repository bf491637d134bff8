//! Status and confirmation message types for operation feedback.

use std::fmt;

use crate::{models::SubmitStatus, wizard::WizardState};

/// Wrapper type for displaying operation confirmation messages.
///
/// This provides consistent formatting for operations that require
/// user confirmation or status updates.
pub struct OperationStatus {
    pub message: String,
    pub success: bool,
}

impl OperationStatus {
    /// Create a new success status.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: true,
        }
    }

    /// Create a new failure status.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: false,
        }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} {}",
            if self.success { "Success:" } else { "Error:" },
            self.message
        )
    }
}

/// Customer-facing message for a submission that is running or settled.
pub struct SubmitNotice<'a> {
    pub status: SubmitStatus,
    /// Technical detail of a failure, shown under the message
    pub detail: Option<&'a str>,
}

impl<'a> SubmitNotice<'a> {
    /// The notice for the wizard's current status; `None` while idle.
    pub fn for_state(state: &'a WizardState) -> Option<Self> {
        (state.submit_status != SubmitStatus::Idle).then(|| Self {
            status: state.submit_status,
            detail: state.last_error.as_deref(),
        })
    }
}

impl fmt::Display for SubmitNotice<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            SubmitStatus::Idle => Ok(()),
            SubmitStatus::Submitting => writeln!(f, "Gönderiliyor..."),
            SubmitStatus::Success => writeln!(f, "**Teşekkürler! Talebiniz bize ulaştı.**"),
            SubmitStatus::Error => {
                writeln!(
                    f,
                    "**Gönderim sırasında bir hata oluştu. Lütfen tekrar deneyin.**"
                )?;
                if let Some(detail) = self.detail {
                    writeln!(f)?;
                    writeln!(f, "> {detail}")?;
                }
                Ok(())
            }
        }
    }
}
