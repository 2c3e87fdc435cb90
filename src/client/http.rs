//! HTTP client for the submission endpoint
//!
//! Posts the registration as JSON and leaves the meaning of the response to
//! [`interpret_response`].

use super::payload::{interpret_response, SubmissionPayload, SubmitError, SubmitReceipt};
use super::traits::SubmitClientTrait;
use anyhow::Result;
use async_trait::async_trait;
use std::time::Duration;
use uuid::Uuid;

/// Header carrying the per-attempt correlation id
const REQUEST_ID_HEADER: &str = "X-Request-Id";

/// Client for the registration endpoint
pub struct SubmitClient {
    http: reqwest::Client,
    endpoint: String,
}

impl SubmitClient {
    /// Create a client for `endpoint` with the given request timeout
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            endpoint: endpoint.into(),
        })
    }
}

#[async_trait]
impl SubmitClientTrait for SubmitClient {
    async fn submit(
        &self,
        payload: &SubmissionPayload,
        request_id: Uuid,
    ) -> Result<SubmitReceipt, SubmitError> {
        tracing::debug!("POST {} ({request_id})", self.endpoint);

        let response = self
            .http
            .post(&self.endpoint)
            .header(REQUEST_ID_HEADER, request_id.to_string())
            .json(payload)
            .send()
            .await
            .map_err(|e| SubmitError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| SubmitError::Transport(e.to_string()))?;

        interpret_response(status, &body)
    }
}
