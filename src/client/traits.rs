//! Trait abstraction for the submission client to enable mocking in tests

use super::payload::{SubmissionPayload, SubmitError, SubmitReceipt};
use async_trait::async_trait;
use uuid::Uuid;

/// Trait for submission endpoint operations, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmitClientTrait: Send + Sync {
    /// Send one registration record. Exactly one request per call; no retry.
    async fn submit(
        &self,
        payload: &SubmissionPayload,
        request_id: Uuid,
    ) -> Result<SubmitReceipt, SubmitError>;
}
