//! Wire format of the submission endpoint

use crate::state::RegistrationForm;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// JSON body posted to the endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionPayload {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub message: String,
    #[serde(rename = "selectedDistrict")]
    pub district: String,
    #[serde(rename = "selectedTaluka")]
    pub taluka: String,
    #[serde(rename = "eng_branch")]
    pub branch: String,
    /// Encoded picture; never a file handle
    #[serde(rename = "prof_img")]
    pub profile_picture: Option<String>,
}

impl SubmissionPayload {
    /// Assemble the body from the form and the already-encoded picture
    pub fn from_form(form: &RegistrationForm, profile_picture: Option<String>) -> Self {
        Self {
            name: form.name.as_text().trim().to_string(),
            email: form.email.as_text().trim().to_string(),
            phone: form.phone.as_text().to_string(),
            address: form.address.as_text().trim().to_string(),
            message: form.message.as_text().trim().to_string(),
            district: form.district.clone(),
            taluka: form.taluka.clone(),
            branch: form.branch.clone(),
            profile_picture,
        }
    }
}

/// What the endpoint hands back on success
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmitReceipt {
    /// Server-issued identifier of the stored record, if any
    pub id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("could not reach the server: {0}")]
    Transport(String),
    #[error("server responded with HTTP {status}")]
    Status { status: u16, message: Option<String> },
    #[error("server rejected the registration")]
    Rejected { message: Option<String> },
    #[error("unexpected response from server: {0}")]
    Malformed(String),
}

impl SubmitError {
    /// Best-effort text to show alongside the generic failure notice
    pub fn user_message(&self) -> Option<String> {
        match self {
            Self::Transport(reason) => Some(reason.clone()),
            Self::Status { status, message } => {
                Some(message.clone().unwrap_or_else(|| format!("HTTP {status}")))
            }
            Self::Rejected { message } => message.clone(),
            Self::Malformed(_) => None,
        }
    }
}

/// Loosely typed view of a response body. Every field is optional so that an
/// odd error object degrades to a generic failure instead of a parse error.
#[derive(Debug, Default, Deserialize)]
struct SubmitResponse {
    success: Option<bool>,
    id: Option<Value>,
    #[serde(rename = "insertedId")]
    inserted_id: Option<Value>,
    data: Option<Value>,
    message: Option<Value>,
    error: Option<Value>,
}

impl SubmitResponse {
    fn identifier(&self) -> Option<String> {
        self.id
            .as_ref()
            .or(self.inserted_id.as_ref())
            .or_else(|| self.data.as_ref().and_then(|d| d.get("insertedId")))
            .and_then(id_text)
    }

    fn message(&self) -> Option<String> {
        self.message
            .as_ref()
            .or(self.error.as_ref())
            .and_then(Value::as_str)
            .filter(|m| !m.trim().is_empty())
            .map(str::to_string)
    }
}

/// Render an identifier that may be a string, a number or `{"$oid": ...}`
fn id_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Object(map) => map.get("$oid").and_then(Value::as_str).map(str::to_string),
        _ => None,
    }
}

/// Decide what an HTTP response means for the submission.
///
/// Success requires a 2xx status and a JSON body with `success: true`.
/// Anything else is a failure carrying whatever message the server gave.
pub fn interpret_response(status: u16, body: &str) -> Result<SubmitReceipt, SubmitError> {
    let parsed = serde_json::from_str::<SubmitResponse>(body);

    if !(200..300).contains(&status) {
        let message = parsed.ok().and_then(|r| r.message());
        return Err(SubmitError::Status { status, message });
    }

    let response = parsed.map_err(|e| SubmitError::Malformed(e.to_string()))?;
    match response.success {
        Some(true) => Ok(SubmitReceipt {
            id: response.identifier(),
        }),
        Some(false) => Err(SubmitError::Rejected {
            message: response.message(),
        }),
        None => Err(SubmitError::Malformed("missing success flag".to_string())),
    }
}
