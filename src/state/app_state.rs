//! Application state definitions

use super::forms::RegistrationForm;
use super::reference::{ReferenceData, ENGINEERING_BRANCHES};
use crate::i18n::Language;
use crate::submission::SubmitOutcome;
use chrono::{DateTime, Local};
use std::collections::VecDeque;

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Form,
    Contact,
}

/// Which list a picker is choosing from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerKind {
    District,
    Taluka,
    Branch,
    Language,
}

impl PickerKind {
    /// Translation key for the picker title
    pub fn title_key(self) -> &'static str {
        match self {
            Self::District => "Select District",
            Self::Taluka => "Select Taluka",
            Self::Branch => "Select Engineering Branch",
            Self::Language => "Select Language",
        }
    }
}

/// An open selection list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Picker {
    pub kind: PickerKind,
    pub options: Vec<String>,
    pub selected: usize,
}

impl Picker {
    fn new(kind: PickerKind, options: Vec<String>, current: &str) -> Self {
        let selected = options.iter().position(|o| o == current).unwrap_or(0);
        Self {
            kind,
            options,
            selected,
        }
    }

    pub fn move_down(&mut self) {
        if !self.options.is_empty() && self.selected < self.options.len() - 1 {
            self.selected += 1;
        }
    }

    pub fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn current(&self) -> Option<&str> {
        self.options.get(self.selected).map(String::as_str)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Failure,
}

/// A modal message shown after a submission attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    /// Translation key of the headline
    pub title_key: &'static str,
    /// Stored record id, labelled in the current language when shown
    pub reference: Option<String>,
    /// Untranslated server or encoder message
    pub detail: Option<String>,
    pub created_at: DateTime<Local>,
}

impl Notice {
    /// Notice to show for an outcome. Validation failures are shown inline
    /// and produce none.
    pub fn for_outcome(outcome: &SubmitOutcome) -> Option<Self> {
        let (kind, title_key, reference, detail) = match outcome {
            SubmitOutcome::Submitted { id } => (
                NoticeKind::Success,
                "Registration submitted",
                id.clone(),
                None,
            ),
            SubmitOutcome::Failed { message } => {
                (NoticeKind::Failure, "Submission failed", None, message.clone())
            }
            SubmitOutcome::EncodingFailed { reason } => (
                NoticeKind::Failure,
                "Submission failed",
                None,
                Some(reason.clone()),
            ),
            SubmitOutcome::Invalid(_) | SubmitOutcome::Busy => return None,
        };
        Some(Self {
            kind,
            title_key,
            reference,
            detail,
            created_at: Local::now(),
        })
    }

    /// Body text: the labelled reference id and/or the detail message
    pub fn body(&self, language: Language) -> String {
        let mut lines = Vec::new();
        if let Some(id) = &self.reference {
            lines.push(format!("{}: {id}", language.translate("Reference")));
        }
        if let Some(detail) = &self.detail {
            lines.push(detail.clone());
        }
        lines.join("\n")
    }
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    // Navigation
    pub current_view: View,

    // Shell
    pub language: Language,

    // Data
    pub reference: ReferenceData,

    // Form state
    pub form: RegistrationForm,
    pub picker: Option<Picker>,
    /// A submission task is in flight
    pub submitting: bool,

    // UI state
    pub notices: VecDeque<Notice>,
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(reference: ReferenceData, language: Language) -> Self {
        Self {
            reference,
            language,
            ..Default::default()
        }
    }

    /// Translate a label in the current language
    pub fn t<'a>(&self, key: &'a str) -> &'a str {
        self.language.translate(key)
    }

    pub fn toggle_contact(&mut self) {
        self.current_view = match self.current_view {
            View::Form => View::Contact,
            View::Contact => View::Form,
        };
    }

    /// Open a picker. Returns false when there is nothing to choose from,
    /// e.g. talukas before a district is selected.
    pub fn open_picker(&mut self, kind: PickerKind) -> bool {
        let (options, current): (Vec<String>, &str) = match kind {
            PickerKind::District => (
                self.reference
                    .district_names()
                    .into_iter()
                    .map(str::to_string)
                    .collect(),
                &self.form.district,
            ),
            PickerKind::Taluka => (
                self.form.taluka_choices(&self.reference).to_vec(),
                &self.form.taluka,
            ),
            PickerKind::Branch => (
                ENGINEERING_BRANCHES.iter().map(|b| b.to_string()).collect(),
                &self.form.branch,
            ),
            PickerKind::Language => (
                Language::ALL
                    .iter()
                    .map(|l| l.display_name().to_string())
                    .collect(),
                self.language.display_name(),
            ),
        };

        if options.is_empty() {
            return false;
        }
        self.picker = Some(Picker::new(kind, options, current));
        true
    }

    pub fn close_picker(&mut self) {
        self.picker = None;
    }

    /// Apply the highlighted option and close the picker.
    /// Returns the new language when the language picker was used.
    pub fn choose_picked(&mut self) -> Option<Language> {
        let picker = self.picker.take()?;
        let value = picker.current()?.to_string();
        tracing::debug!("Picked {value:?} for {:?}", picker.kind);

        match picker.kind {
            PickerKind::District => self.form.district_changed(value),
            PickerKind::Taluka => self.form.taluka_changed(value),
            PickerKind::Branch => self.form.branch_changed(value),
            PickerKind::Language => {
                let language = Language::parse(&value)?;
                self.language = language;
                return Some(language);
            }
        }
        None
    }

    /// Record the outcome of a submission: update the form and queue a notice
    pub fn apply_outcome(&mut self, outcome: &SubmitOutcome) {
        self.form.apply_outcome(outcome);
        if let Some(notice) = Notice::for_outcome(outcome) {
            self.notices.push_back(notice);
        }
    }

    pub fn has_notices(&self) -> bool {
        !self.notices.is_empty()
    }

    pub fn current_notice(&self) -> Option<&Notice> {
        self.notices.front()
    }

    pub fn dismiss_notice(&mut self) {
        self.notices.pop_front();
    }
}
