//! Registration form state

use super::field::{FieldName, FormField};
use crate::state::picture::ProfilePicture;
use crate::state::reference::ReferenceData;
use crate::state::validation::ValidationErrors;
use crate::submission::SubmitOutcome;

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// Index of the submit button row, after the last field
pub const SUBMIT_ROW: usize = FieldName::ALL.len();

/// Everything the user has entered, plus the last validation result
#[derive(Debug, Clone)]
pub struct RegistrationForm {
    /// Raw picture input: a file path, a data URL or an http(s) URL
    pub profile_picture: FormField,
    pub name: FormField,
    pub email: FormField,
    pub phone: FormField,
    pub address: FormField,
    pub district: String,
    pub taluka: String,
    pub branch: String,
    pub message: FormField,
    pub active_field_index: usize,
    pub errors: ValidationErrors,
}

impl RegistrationForm {
    pub fn new() -> Self {
        Self {
            profile_picture: FormField::new(FieldName::ProfilePicture),
            name: FormField::new(FieldName::Name),
            email: FormField::new(FieldName::Email),
            phone: FormField::new(FieldName::Phone),
            address: FormField::new(FieldName::Address),
            district: String::new(),
            taluka: String::new(),
            branch: String::new(),
            message: FormField::new(FieldName::Message),
            active_field_index: 0,
            errors: ValidationErrors::default(),
        }
    }

    /// Select a district. The taluka always resets, even if the district
    /// did not change.
    pub fn district_changed(&mut self, district: impl Into<String>) {
        self.district = district.into();
        self.taluka.clear();
    }

    /// Select a taluka. Membership in the district's list is guaranteed by
    /// the picker, not checked here.
    pub fn taluka_changed(&mut self, taluka: impl Into<String>) {
        self.taluka = taluka.into();
    }

    pub fn branch_changed(&mut self, branch: impl Into<String>) {
        self.branch = branch.into();
    }

    /// Talukas the user may pick for the current district
    pub fn taluka_choices<'a>(&self, data: &'a ReferenceData) -> &'a [String] {
        data.talukas_of(&self.district)
    }

    /// The picture as it will be handed to the encoder
    pub fn picture(&self) -> Option<ProfilePicture> {
        ProfilePicture::from_input(self.profile_picture.as_text())
    }

    /// Current value of any field
    pub fn value(&self, field: FieldName) -> &str {
        match field {
            FieldName::ProfilePicture => self.profile_picture.as_text(),
            FieldName::Name => self.name.as_text(),
            FieldName::Email => self.email.as_text(),
            FieldName::Phone => self.phone.as_text(),
            FieldName::Address => self.address.as_text(),
            FieldName::District => &self.district,
            FieldName::Taluka => &self.taluka,
            FieldName::Branch => &self.branch,
            FieldName::Message => self.message.as_text(),
        }
    }

    fn text_field_mut(&mut self, field: FieldName) -> Option<&mut FormField> {
        match field {
            FieldName::ProfilePicture => Some(&mut self.profile_picture),
            FieldName::Name => Some(&mut self.name),
            FieldName::Email => Some(&mut self.email),
            FieldName::Phone => Some(&mut self.phone),
            FieldName::Address => Some(&mut self.address),
            FieldName::Message => Some(&mut self.message),
            FieldName::District | FieldName::Taluka | FieldName::Branch => None,
        }
    }

    /// The focused field, or `None` when the submit button is focused
    pub fn active_field_name(&self) -> Option<FieldName> {
        FieldName::ALL.get(self.active_field_index).copied()
    }

    pub fn is_submit_row_active(&self) -> bool {
        self.active_field_index == SUBMIT_ROW
    }

    /// Type a character into the focused text field
    pub fn input_char(&mut self, c: char) {
        if let Some(field) = self.active_field_name() {
            if let Some(text) = self.text_field_mut(field) {
                text.push_char(c);
            }
        }
    }

    /// Delete the last character of the focused text field
    pub fn backspace(&mut self) {
        if let Some(field) = self.active_field_name() {
            if let Some(text) = self.text_field_mut(field) {
                text.pop_char();
            }
        }
    }

    /// Empty the focused field. Clearing the district also clears the taluka.
    pub fn clear_active(&mut self) {
        match self.active_field_name() {
            Some(FieldName::District) => self.district_changed(""),
            Some(FieldName::Taluka) => self.taluka.clear(),
            Some(FieldName::Branch) => self.branch.clear(),
            Some(field) => {
                if let Some(text) = self.text_field_mut(field) {
                    text.clear();
                }
            }
            None => {}
        }
    }

    /// Clear every value and error, keeping nothing from the last entry
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Fold the result of a submission attempt back into the form.
    ///
    /// Success wipes the form; invalid input records the errors; every
    /// other outcome leaves the values alone so the user can retry.
    pub fn apply_outcome(&mut self, outcome: &SubmitOutcome) {
        match outcome {
            SubmitOutcome::Submitted { .. } => self.reset(),
            SubmitOutcome::Invalid(errors) => self.errors = errors.clone(),
            // Only reachable after validation passed
            SubmitOutcome::EncodingFailed { .. } | SubmitOutcome::Failed { .. } => {
                self.errors = ValidationErrors::default();
            }
            SubmitOutcome::Busy => {}
        }
    }
}

impl Default for RegistrationForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for RegistrationForm {
    fn field_count(&self) -> usize {
        SUBMIT_ROW + 1 // fields + submit button
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(SUBMIT_ROW);
    }
}
