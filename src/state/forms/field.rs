//! Form field value objects

/// Every field of the registration form, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldName {
    ProfilePicture,
    Name,
    Email,
    Phone,
    Address,
    District,
    Taluka,
    Branch,
    Message,
}

impl FieldName {
    /// All fields in tab order
    pub const ALL: [FieldName; 9] = [
        FieldName::ProfilePicture,
        FieldName::Name,
        FieldName::Email,
        FieldName::Phone,
        FieldName::Address,
        FieldName::District,
        FieldName::Taluka,
        FieldName::Branch,
        FieldName::Message,
    ];

    /// Stable identifier, used in logs and as the error-map key
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ProfilePicture => "profilePicture",
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Address => "address",
            Self::District => "selectedDistrict",
            Self::Taluka => "selectedTaluka",
            Self::Branch => "engineeringBranch",
            Self::Message => "message",
        }
    }

    /// Translation key for the field label
    pub fn label_key(self) -> &'static str {
        match self {
            Self::ProfilePicture => "Upload Profile Picture",
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Phone => "Phone",
            Self::Address => "Address",
            Self::District => "Select District",
            Self::Taluka => "Select Taluka",
            Self::Branch => "Select Engineering Branch",
            Self::Message => "Enter your message",
        }
    }

    /// Fields chosen from a list rather than typed
    pub fn is_select(self) -> bool {
        matches!(self, Self::District | Self::Taluka | Self::Branch)
    }

    pub fn is_multiline(self) -> bool {
        matches!(self, Self::Address | Self::Message)
    }
}

/// A single typed form field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub name: FieldName,
    pub value: String,
}

impl FormField {
    /// Create an empty field
    pub fn new(name: FieldName) -> Self {
        Self {
            name,
            value: String::new(),
        }
    }

    /// Create a field with an initial value
    #[cfg(test)]
    pub fn with_value(name: FieldName, value: impl Into<String>) -> Self {
        Self {
            name,
            value: value.into(),
        }
    }

    pub fn as_text(&self) -> &str {
        &self.value
    }

    #[cfg(test)]
    pub fn set_text(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    pub fn push_char(&mut self, c: char) {
        self.value.push(c);
    }

    pub fn pop_char(&mut self) {
        self.value.pop();
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }

    /// True when the value is empty or only whitespace
    pub fn is_blank(&self) -> bool {
        self.value.trim().is_empty()
    }
}
