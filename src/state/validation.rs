//! Field validation for the registration form

use super::forms::{FieldName, RegistrationForm};
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::OnceLock;

/// Whether the free-text message must be filled in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MessagePolicy {
    #[default]
    Optional,
    Required,
}

impl MessagePolicy {
    pub fn from_required(required: bool) -> Self {
        if required {
            Self::Required
        } else {
            Self::Optional
        }
    }
}

/// Field → message key. A field without an entry currently passes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<FieldName, &'static str>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: FieldName) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    #[cfg(test)]
    pub fn contains(&self, field: FieldName) -> bool {
        self.0.contains_key(&field)
    }

    /// Entries in tab order
    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &'static str)> + '_ {
        self.0.iter().map(|(k, v)| (*k, *v))
    }

    fn insert(&mut self, field: FieldName, message: &'static str) {
        self.0.insert(field, message);
    }
}

fn email_pattern() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"))
}

/// Check every field independently and collect the failures.
///
/// Required: name, email, phone, address, district, taluka, branch. The
/// message is required only under [`MessagePolicy::Required`]. Email must
/// look like `local@domain.tld`; phone must be exactly ten ASCII digits.
pub fn validate(form: &RegistrationForm, policy: MessagePolicy) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    if form.name.is_blank() {
        errors.insert(FieldName::Name, "Name is required");
    }

    if form.email.is_blank() {
        errors.insert(FieldName::Email, "Email is required");
    } else if !email_pattern().is_match(form.email.as_text()) {
        errors.insert(FieldName::Email, "Enter a valid email address");
    }

    if form.phone.is_blank() {
        errors.insert(FieldName::Phone, "Phone is required");
    } else if !is_phone_number(form.phone.as_text()) {
        errors.insert(FieldName::Phone, "Phone must be exactly 10 digits");
    }

    if form.address.is_blank() {
        errors.insert(FieldName::Address, "Address is required");
    }

    if form.district.trim().is_empty() {
        errors.insert(FieldName::District, "District is required");
    }

    if form.taluka.trim().is_empty() {
        errors.insert(FieldName::Taluka, "Taluka is required");
    }

    if form.branch.trim().is_empty() {
        errors.insert(FieldName::Branch, "Engineering branch is required");
    }

    if policy == MessagePolicy::Required && form.message.is_blank() {
        errors.insert(FieldName::Message, "Message is required");
    }

    errors
}

fn is_phone_number(value: &str) -> bool {
    value.len() == 10 && value.bytes().all(|b| b.is_ascii_digit())
}
