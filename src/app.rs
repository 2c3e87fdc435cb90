//! Application state and core logic

use crate::client::{SubmitClient, SubmitClientTrait};
use crate::config::TuiConfig;
use crate::i18n::Language;
use crate::state::reference::ReferenceData;
use crate::state::{AppState, FieldName, Form, PickerKind, View};
use crate::submission::{SubmissionController, SubmitOutcome};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Main application struct
pub struct App<C = SubmitClient> {
    /// Current application state
    pub state: AppState,
    /// Runs submissions; shared with the spawned submission task
    controller: Arc<SubmissionController<C>>,
    /// Loaded configuration, saved back when the language changes
    config: TuiConfig,
    /// Outcomes of finished submissions
    outcome_tx: mpsc::UnboundedSender<SubmitOutcome>,
    outcome_rx: mpsc::UnboundedReceiver<SubmitOutcome>,
    /// Whether the app should quit
    quit: bool,
}

impl App<SubmitClient> {
    /// Create the app from configuration
    pub fn from_config(config: TuiConfig) -> Result<Self> {
        let reference = match &config.districts_file {
            Some(path) => ReferenceData::from_file(path)?,
            None => ReferenceData::bundled()?,
        };

        let endpoint = config.endpoint();
        tracing::info!("Submitting registrations to {endpoint}");
        let client = SubmitClient::new(endpoint, config.request_timeout())?;
        let controller = SubmissionController::new(client, config.message_policy());

        let state = AppState::new(reference, config.language());
        Ok(Self::new(state, controller, config))
    }
}

impl<C: SubmitClientTrait + 'static> App<C> {
    pub fn new(state: AppState, controller: SubmissionController<C>, config: TuiConfig) -> Self {
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
        Self {
            state,
            controller: Arc::new(controller),
            config,
            outcome_tx,
            outcome_rx,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Apply any submission outcomes that have arrived since the last poll
    pub fn poll_outcomes(&mut self) {
        while let Ok(outcome) = self.outcome_rx.try_recv() {
            self.finish_submit(outcome);
        }
    }

    fn finish_submit(&mut self, outcome: SubmitOutcome) {
        self.state.submitting = false;
        self.state.apply_outcome(&outcome);
        if let SubmitOutcome::Invalid(errors) = &outcome {
            // Jump to the first failing field
            if let Some((field, _)) = errors.iter().next() {
                tracing::debug!("Focusing first invalid field {}", field.as_str());
                if let Some(index) = FieldName::ALL.iter().position(|f| *f == field) {
                    self.state.form.set_active_field(index);
                }
            }
        }
    }

    /// Kick off a submission of the current form on the runtime.
    ///
    /// The submit button is disabled until the outcome comes back; a
    /// request made while one is in flight is ignored here and would be
    /// rejected by the controller anyway.
    pub fn start_submit(&mut self) {
        if self.state.submitting || self.controller.is_busy() {
            return;
        }
        self.state.submitting = true;
        self.state.status_message = None;

        let form = self.state.form.clone();
        let controller = Arc::clone(&self.controller);
        let tx = self.outcome_tx.clone();
        tokio::spawn(async move {
            let outcome = controller.submit(&form).await;
            // The receiver only goes away when the app is shutting down
            let _ = tx.send(outcome);
        });
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Notices are modal
        if self.state.has_notices() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_notice();
            }
            return Ok(());
        }

        if self.state.picker.is_some() {
            self.handle_picker_key(key);
            return Ok(());
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('q') if ctrl => {
                self.quit = true;
                return Ok(());
            }
            KeyCode::Char('l') if ctrl => {
                self.state.open_picker(PickerKind::Language);
                return Ok(());
            }
            KeyCode::Char('k') if ctrl => {
                self.state.toggle_contact();
                return Ok(());
            }
            _ => {}
        }

        match self.state.current_view {
            View::Form => self.handle_form_key(key),
            View::Contact => {
                if key.code == KeyCode::Esc {
                    self.state.toggle_contact();
                }
            }
        }
        Ok(())
    }

    fn handle_picker_key(&mut self, key: KeyEvent) {
        let Some(picker) = self.state.picker.as_mut() else {
            return;
        };
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => picker.move_up(),
            KeyCode::Down | KeyCode::Char('j') => picker.move_down(),
            KeyCode::Esc => self.state.close_picker(),
            KeyCode::Enter => {
                if let Some(language) = self.state.choose_picked() {
                    self.change_language(language);
                }
            }
            _ => {}
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        // The in-flight task holds a snapshot; edits made now would be lost
        // when a successful outcome resets the form
        if self.state.submitting && !matches!(key.code, KeyCode::Tab | KeyCode::BackTab) {
            return;
        }
        self.state.status_message = None;
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL)
            || key.modifiers.contains(crate::platform::COPY_MODIFIER);
        let active = self.state.form.active_field_name();

        match key.code {
            KeyCode::Tab => self.state.form.next_field(),
            KeyCode::BackTab => self.state.form.prev_field(),
            KeyCode::Char('s') if ctrl => self.start_submit(),
            KeyCode::Char('u') if ctrl => self.state.form.clear_active(),
            KeyCode::Enter => match active {
                None => self.start_submit(),
                Some(field) if field.is_select() => self.open_field_picker(field),
                Some(field) if field.is_multiline() => self.state.form.input_char('\n'),
                Some(_) => self.state.form.next_field(),
            },
            KeyCode::Char(c) if !ctrl => self.state.form.input_char(c),
            KeyCode::Backspace => self.state.form.backspace(),
            _ => {}
        }
    }

    fn open_field_picker(&mut self, field: FieldName) {
        let kind = match field {
            FieldName::District => PickerKind::District,
            FieldName::Taluka => PickerKind::Taluka,
            FieldName::Branch => PickerKind::Branch,
            _ => return,
        };
        if !self.state.open_picker(kind) {
            let hint = self.state.t("Select District first");
            self.state.status_message = Some(hint.to_string());
        }
    }

    fn change_language(&mut self, language: Language) {
        tracing::info!("Language changed to {}", language.code());
        self.config.language = Some(language.code().to_string());
        if let Err(e) = self.config.save() {
            tracing::warn!("Could not save language preference: {e}");
        }
    }

    /// Wait for the in-flight submission to finish and apply it
    #[cfg(test)]
    pub async fn wait_for_outcome(&mut self) -> Option<SubmitOutcome> {
        let outcome = self.outcome_rx.recv().await?;
        self.finish_submit(outcome.clone());
        Some(outcome)
    }
}
