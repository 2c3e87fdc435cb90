//! Client for the registration submission endpoint

mod http;
mod payload;
mod traits;

pub use http::SubmitClient;
pub use payload::SubmissionPayload;
#[cfg(test)]
pub use payload::{SubmitError, SubmitReceipt};
pub use traits::SubmitClientTrait;

#[cfg(test)]
pub use traits::MockSubmitClientTrait;
