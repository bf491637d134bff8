//! Command handlers for the CLI.
//!
//! Each handler drives the core [`Wizard`] through [`evdekor_core::handlers`]
//! and renders the resulting display types. One-shot commands restore the
//! draft, act, and exit; `interactive` keeps one wizard alive so step
//! position and media previews last for the whole session.

use anyhow::{bail, Context, Result};
use evdekor_core::{
    display::{CatalogListing, CurrentStep, FieldDisplay, OperationStatus, StepIndicator, SubmitNotice},
    handlers::{handle_select_media, handle_set_field, handle_submit, handle_validate, handle_walk_to_summary},
    models::{step_of, STEPS},
    params::{SetField, SubmitReservation},
    SubmitStatus, Wizard, WizardError,
};
use log::{debug, warn};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::{
    renderer::TerminalRenderer,
    session::{SessionCommand, HELP},
};

pub struct Cli {
    wizard: Wizard,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(wizard: Wizard, renderer: TerminalRenderer) -> Self {
        Self { wizard, renderer }
    }

    /// Walk forward to the first incomplete step and show it.
    pub fn show(&mut self) -> Result<()> {
        handle_walk_to_summary(&mut self.wizard);
        self.render_progress()
    }

    pub fn set(&mut self, params: &SetField) -> Result<()> {
        let field = handle_set_field(&mut self.wizard, params)?;
        let step = &STEPS[step_of(field)];
        self.renderer.render(&format!(
            "{}",
            OperationStatus::success(format!(
                "{} = {} ({})",
                field.label(),
                FieldDisplay::new(self.wizard.draft(), field),
                step.title
            ))
        ))
    }

    pub fn validate(&mut self) -> Result<()> {
        let errors = handle_validate(&self.wizard);
        if errors.is_empty() {
            return self.renderer.render(&format!(
                "{}",
                OperationStatus::success("Rezervasyon gönderime hazır.")
            ));
        }

        let mut output = String::from("## Eksik bilgiler\n\n");
        for error in &errors {
            output.push_str(&format!("- {error}\n"));
        }
        self.renderer.render(&output)?;
        bail!("Reservation is incomplete ({} field(s))", errors.len())
    }

    pub fn catalog(&self) -> Result<()> {
        self.renderer.render(&CatalogListing.to_string())
    }

    pub fn clear(&mut self) -> Result<()> {
        self.wizard.reset();
        self.renderer.render(&format!(
            "{}",
            OperationStatus::success("Taslak silindi.")
        ))
    }

    /// One-shot submission: attach media, walk to the summary and send.
    pub async fn submit(&mut self, params: &SubmitReservation) -> Result<()> {
        let outcome = tokio::select! {
            outcome = handle_submit(&mut self.wizard, params) => outcome,
            _ = tokio::signal::ctrl_c() => {
                warn!("Interrupted, submission abandoned");
                bail!("Submission cancelled");
            }
        };

        match outcome {
            Ok(status) => self.report_submission(status),
            Err(WizardError::Validation(errors)) => {
                self.render_progress()?;
                bail!("Reservation is incomplete: {errors}")
            }
            Err(e) => Err(e).context("Failed to submit reservation"),
        }
    }

    /// Read commands from stdin until `quit` or end of input.
    pub async fn interactive(&mut self) -> Result<()> {
        self.renderer.render(HELP)?;
        self.render_progress()?;

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            self.renderer.prompt()?;
            let Some(line) = lines.next_line().await.context("Failed to read input")? else {
                break;
            };
            let command = match SessionCommand::parse(&line) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(message) => {
                    self.renderer
                        .render(&OperationStatus::failure(message).to_string())?;
                    continue;
                }
            };
            debug!("Session command: {command:?}");

            if command == SessionCommand::Quit {
                break;
            }
            if let Err(e) = self.run_session_command(command).await {
                self.renderer
                    .render(&OperationStatus::failure(format!("{e:#}")).to_string())?;
            }
        }
        Ok(())
    }

    async fn run_session_command(&mut self, command: SessionCommand) -> Result<()> {
        match command {
            SessionCommand::Set(params) => {
                self.set(&params)?;
                Ok(())
            }
            SessionCommand::Next => {
                if self.wizard.state().is_terminal() {
                    bail!("Son adımdasınız, göndermek için 'submit' yazın");
                }
                self.wizard.advance();
                self.render_current()
            }
            SessionCommand::Back => {
                self.wizard.retreat();
                self.render_current()
            }
            SessionCommand::Media(params) => {
                let count = handle_select_media(&mut self.wizard, &params)?;
                self.renderer.render(&format!(
                    "{}",
                    OperationStatus::success(format!("{count} görsel seçildi"))
                ))
            }
            SessionCommand::Submit => {
                let status = tokio::select! {
                    status = self.wizard.submit() => status?,
                    _ = tokio::signal::ctrl_c() => {
                        self.wizard.cancel_submission();
                        bail!("Submission cancelled");
                    }
                };
                self.render_current()?;
                if status == SubmitStatus::Success {
                    // The wizard starts over on the first step after a success
                    self.render_progress()?;
                }
                Ok(())
            }
            SessionCommand::Show => self.render_progress(),
            SessionCommand::Catalog => self.catalog(),
            SessionCommand::Clear => {
                self.clear()?;
                self.render_current()
            }
            SessionCommand::Help => self.renderer.render(HELP),
            SessionCommand::Quit => Ok(()),
        }
    }

    fn report_submission(&self, status: SubmitStatus) -> Result<()> {
        if let Some(notice) = SubmitNotice::for_state(self.wizard.state()) {
            self.renderer.render(&notice.to_string())?;
        }
        if status == SubmitStatus::Error {
            bail!(
                "{}",
                self.wizard
                    .state()
                    .last_error
                    .as_deref()
                    .unwrap_or("Submission failed")
            );
        }
        Ok(())
    }

    fn render_progress(&self) -> Result<()> {
        let state = self.wizard.state();
        self.renderer
            .render(&format!("{}\n{}", StepIndicator(state), CurrentStep(state)))
    }

    fn render_current(&self) -> Result<()> {
        self.renderer
            .render(&CurrentStep(self.wizard.state()).to_string())
    }
}
