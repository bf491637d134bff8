//! Command-line arguments using clap
//!
//! CLI argument structures carry clap derives and convert into the core
//! parameter types with `From`, keeping clap out of the core crate:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Handlers
//! ```

use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};
use evdekor_core::params::{SetField, SubmitReservation};

/// Reservation wizard for Evdekor renovation services
///
/// Collects a renovation request step by step (service, district, space,
/// details, media, schedule, contact, summary), keeps the draft between runs
/// and submits it to the reservation endpoint.
#[derive(Parser)]
#[command(version, about, name = "evdekor")]
pub struct Args {
    /// Path to the draft file. Defaults to
    /// $XDG_DATA_HOME/evdekor/evdekor-reservation-data.json
    #[arg(long, global = true, env = "EVDEKOR_DRAFT_FILE")]
    pub draft_file: Option<PathBuf>,

    /// Reservation endpoint receiving the submission
    #[arg(long, global = true, env = "EVDEKOR_ENDPOINT")]
    pub endpoint: Option<String>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
///
/// Without a command the current progress is shown.
#[derive(Subcommand)]
pub enum Commands {
    /// Show progress, the first incomplete step and the summary
    Show,
    /// Set one draft field
    Set(SetArgs),
    /// Check the whole draft against every rule
    Validate,
    /// List services, districts, time slots and expectation options
    Catalog,
    /// Walk to the summary step and submit the reservation
    Submit(SubmitArgs),
    /// Discard the saved draft
    Clear,
    /// Fill in the reservation step by step, reading commands from stdin
    #[command(alias = "i")]
    Interactive,
}

/// Set one draft field
#[derive(ClapArgs)]
pub struct SetArgs {
    /// Field name, e.g. service, district, area-size, phone, consent
    pub field: String,
    /// New value; expectations take a comma-separated list, consent yes/no
    #[arg(allow_hyphen_values = true)]
    pub value: String,
}

impl From<SetArgs> for SetField {
    fn from(val: SetArgs) -> Self {
        SetField {
            field: val.field,
            value: val.value,
        }
    }
}

/// Walk to the summary step and submit the reservation
#[derive(ClapArgs)]
pub struct SubmitArgs {
    /// Image files to attach (only their count is sent)
    #[arg(long = "media", value_name = "PATH")]
    pub media: Vec<PathBuf>,
}

impl From<SubmitArgs> for SubmitReservation {
    fn from(val: SubmitArgs) -> Self {
        SubmitReservation { media: val.media }
    }
}
