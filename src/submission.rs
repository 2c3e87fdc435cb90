//! Submission controller
//!
//! Runs one attempt end to end: validate, encode the picture, post, and turn
//! the response into a [`SubmitOutcome`]. Only one attempt may be in flight
//! per controller; a second call while one is running is rejected with
//! [`SubmitOutcome::Busy`] rather than queued.

use crate::client::{SubmissionPayload, SubmitClientTrait};
use crate::state::picture;
use crate::state::validation::{validate, MessagePolicy, ValidationErrors};
use crate::state::RegistrationForm;
use std::sync::atomic::{AtomicU8, Ordering};
use uuid::Uuid;

/// Where the controller currently is in an attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitPhase {
    Idle,
    Validating,
    Encoding,
    Submitting,
}

impl SubmitPhase {
    fn from_u8(value: u8) -> Self {
        match value {
            1 => Self::Validating,
            2 => Self::Encoding,
            3 => Self::Submitting,
            _ => Self::Idle,
        }
    }

    fn as_u8(self) -> u8 {
        match self {
            Self::Idle => 0,
            Self::Validating => 1,
            Self::Encoding => 2,
            Self::Submitting => 3,
        }
    }
}

/// Result of one submission attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Stored; the form should be cleared
    Submitted { id: Option<String> },
    /// Validation failed; nothing was sent
    Invalid(ValidationErrors),
    /// The picture could not be encoded; nothing was sent
    EncodingFailed { reason: String },
    /// The request failed or the server said no
    Failed { message: Option<String> },
    /// Another attempt is still running
    Busy,
}

/// Holds the phase word for the duration of an attempt and puts it back to
/// Idle when dropped, whichever way the attempt ends.
struct PhaseGuard<'a> {
    phase: &'a AtomicU8,
}

impl<'a> PhaseGuard<'a> {
    fn acquire(phase: &'a AtomicU8) -> Option<Self> {
        phase
            .compare_exchange(
                SubmitPhase::Idle.as_u8(),
                SubmitPhase::Validating.as_u8(),
                Ordering::AcqRel,
                Ordering::Acquire,
            )
            .ok()
            .map(|_| Self { phase })
    }

    fn advance(&self, next: SubmitPhase) {
        self.phase.store(next.as_u8(), Ordering::Release);
    }
}

impl Drop for PhaseGuard<'_> {
    fn drop(&mut self) {
        self.phase.store(SubmitPhase::Idle.as_u8(), Ordering::Release);
    }
}

/// Drives submissions through a [`SubmitClientTrait`]
pub struct SubmissionController<C> {
    client: C,
    policy: MessagePolicy,
    phase: AtomicU8,
}

impl<C: SubmitClientTrait> SubmissionController<C> {
    pub fn new(client: C, policy: MessagePolicy) -> Self {
        Self {
            client,
            policy,
            phase: AtomicU8::new(SubmitPhase::Idle.as_u8()),
        }
    }

    pub fn phase(&self) -> SubmitPhase {
        SubmitPhase::from_u8(self.phase.load(Ordering::Acquire))
    }

    /// True while an attempt is running; the submit button is disabled then
    pub fn is_busy(&self) -> bool {
        self.phase() != SubmitPhase::Idle
    }

    /// Run one attempt against a snapshot of the form. The form itself is
    /// not touched; see [`RegistrationForm::apply_outcome`].
    pub async fn submit(&self, form: &RegistrationForm) -> SubmitOutcome {
        let Some(guard) = PhaseGuard::acquire(&self.phase) else {
            tracing::debug!("Submission already in flight, rejecting");
            return SubmitOutcome::Busy;
        };

        let errors = validate(form, self.policy);
        if !errors.is_empty() {
            tracing::debug!("Validation failed for {} field(s)", errors.len());
            return SubmitOutcome::Invalid(errors);
        }

        guard.advance(SubmitPhase::Encoding);
        let picture = form.picture();
        let encoded = match picture::encode(picture.as_ref()).await {
            Ok(encoded) => encoded,
            Err(e) => {
                tracing::warn!("Profile picture encoding failed: {e}");
                return SubmitOutcome::EncodingFailed {
                    reason: e.to_string(),
                };
            }
        };

        guard.advance(SubmitPhase::Submitting);
        let payload = SubmissionPayload::from_form(form, encoded);
        let request_id = Uuid::new_v4();
        match self.client.submit(&payload, request_id).await {
            Ok(receipt) => {
                tracing::info!(
                    "Registration submitted ({request_id}), id={}",
                    receipt.id.as_deref().unwrap_or("-")
                );
                SubmitOutcome::Submitted { id: receipt.id }
            }
            Err(e) => {
                tracing::warn!("Registration failed ({request_id}): {e}");
                SubmitOutcome::Failed {
                    message: e.user_message(),
                }
            }
        }
    }

    /// Submit and fold the outcome straight back into `form`
    #[allow(dead_code)] // The TUI splits these across a spawned task
    pub async fn submit_and_apply(&self, form: &mut RegistrationForm) -> SubmitOutcome {
        let outcome = self.submit(form).await;
        form.apply_outcome(&outcome);
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{MockSubmitClientTrait, SubmitError, SubmitReceipt};
    use crate::state::FieldName;
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use std::sync::Arc;
    use tokio::sync::Notify;

    fn scenario_form() -> RegistrationForm {
        let mut form = RegistrationForm::new();
        form.name.set_text("Asha");
        form.email.set_text("a@b.com");
        form.phone.set_text("9876543210");
        form.address.set_text("X");
        form.district_changed("Pune");
        form.taluka_changed("Haveli");
        form.branch_changed("Computer Science");
        form.message.set_text("hi");
        form
    }

    fn controller(client: MockSubmitClientTrait) -> SubmissionController<MockSubmitClientTrait> {
        SubmissionController::new(client, MessagePolicy::Optional)
    }

    #[tokio::test]
    async fn test_valid_form_reaches_network() {
        let mut client = MockSubmitClientTrait::new();
        client
            .expect_submit()
            .withf(|payload, _| {
                payload.name == "Asha"
                    && payload.district == "Pune"
                    && payload.taluka == "Haveli"
                    && payload.profile_picture.is_none()
            })
            .times(1)
            .returning(|_, _| Ok(SubmitReceipt { id: None }));

        let outcome = controller(client).submit(&scenario_form()).await;
        assert_eq!(outcome, SubmitOutcome::Submitted { id: None });
    }

    #[tokio::test]
    async fn test_invalid_phone_never_calls_network() {
        let mut client = MockSubmitClientTrait::new();
        client.expect_submit().times(0);

        let mut form = scenario_form();
        form.phone.set_text("12345");
        let outcome = controller(client).submit_and_apply(&mut form).await;

        let SubmitOutcome::Invalid(errors) = outcome else {
            panic!("expected Invalid");
        };
        assert_eq!(errors.len(), 1);
        assert!(errors.contains(FieldName::Phone));
        assert_eq!(form.errors, errors);
        assert_eq!(form.phone.as_text(), "12345");
    }

    #[tokio::test]
    async fn test_success_resets_form_and_reports_id() {
        let mut client = MockSubmitClientTrait::new();
        client.expect_submit().times(1).returning(|_, _| {
            Ok(SubmitReceipt {
                id: Some("P123".to_string()),
            })
        });

        let mut form = scenario_form();
        let outcome = controller(client).submit_and_apply(&mut form).await;

        assert_eq!(
            outcome,
            SubmitOutcome::Submitted {
                id: Some("P123".to_string())
            }
        );
        assert!(FieldName::ALL.iter().all(|f| form.value(*f).is_empty()));
        assert!(form.errors.is_empty());
    }

    #[tokio::test]
    async fn test_rejection_keeps_form_and_reports_message() {
        let mut client = MockSubmitClientTrait::new();
        client.expect_submit().times(1).returning(|_, _| {
            Err(SubmitError::Rejected {
                message: Some("duplicate".to_string()),
            })
        });

        let mut form = scenario_form();
        let outcome = controller(client).submit_and_apply(&mut form).await;

        assert_eq!(
            outcome,
            SubmitOutcome::Failed {
                message: Some("duplicate".to_string())
            }
        );
        assert_eq!(form.name.as_text(), "Asha");
        assert_eq!(form.taluka, "Haveli");
        assert_eq!(form.message.as_text(), "hi");
    }

    #[tokio::test]
    async fn test_rejection_after_fixing_field_clears_errors() {
        let mut client = MockSubmitClientTrait::new();
        client.expect_submit().times(1).returning(|_, _| {
            Err(SubmitError::Rejected {
                message: Some("duplicate".to_string()),
            })
        });
        let controller = controller(client);

        let mut form = scenario_form();
        form.phone.set_text("12345");
        let first = controller.submit_and_apply(&mut form).await;
        assert!(matches!(first, SubmitOutcome::Invalid(_)));
        assert!(form.errors.contains(FieldName::Phone));

        form.phone.set_text("9876543210");
        let second = controller.submit_and_apply(&mut form).await;

        assert_eq!(
            second,
            SubmitOutcome::Failed {
                message: Some("duplicate".to_string())
            }
        );
        assert!(form.errors.is_empty());
        assert_eq!(form.phone.as_text(), "9876543210");
    }

    #[tokio::test]
    async fn test_transport_failure_keeps_form() {
        let mut client = MockSubmitClientTrait::new();
        client
            .expect_submit()
            .times(1)
            .returning(|_, _| Err(SubmitError::Transport("timed out".to_string())));

        let mut form = scenario_form();
        let outcome = controller(client).submit_and_apply(&mut form).await;

        assert_eq!(
            outcome,
            SubmitOutcome::Failed {
                message: Some("timed out".to_string())
            }
        );
        assert_eq!(form.phone.as_text(), "9876543210");
    }

    #[tokio::test]
    async fn test_unreadable_picture_aborts_before_network() {
        let mut client = MockSubmitClientTrait::new();
        client.expect_submit().times(0);

        let mut form = scenario_form();
        form.profile_picture.set_text("/no/such/dir/me.png");
        let outcome = controller(client).submit_and_apply(&mut form).await;

        assert!(matches!(outcome, SubmitOutcome::EncodingFailed { .. }));
        assert_eq!(form.profile_picture.as_text(), "/no/such/dir/me.png");
    }

    #[tokio::test]
    async fn test_picture_file_is_sent_encoded() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 0x0D])
            .unwrap();

        let mut client = MockSubmitClientTrait::new();
        client
            .expect_submit()
            .withf(|payload, _| {
                payload
                    .profile_picture
                    .as_deref()
                    .is_some_and(|p| p.starts_with("data:image/png;base64,"))
            })
            .times(1)
            .returning(|_, _| Ok(SubmitReceipt::default()));

        let mut form = scenario_form();
        form.profile_picture
            .set_text(file.path().to_string_lossy().to_string());
        let outcome = controller(client).submit(&form).await;

        assert_eq!(outcome, SubmitOutcome::Submitted { id: None });
    }

    #[tokio::test]
    async fn test_url_picture_is_sent_unchanged() {
        let mut client = MockSubmitClientTrait::new();
        client
            .expect_submit()
            .withf(|payload, _| payload.profile_picture.as_deref() == Some("https://x/y.png"))
            .times(1)
            .returning(|_, _| Ok(SubmitReceipt::default()));

        let mut form = scenario_form();
        form.profile_picture.set_text("https://x/y.png");
        controller(client).submit(&form).await;
    }

    #[tokio::test]
    async fn test_required_message_policy() {
        let mut client = MockSubmitClientTrait::new();
        client.expect_submit().times(0);
        let controller = SubmissionController::new(client, MessagePolicy::Required);

        let mut form = scenario_form();
        form.message.clear();
        let outcome = controller.submit(&form).await;

        let SubmitOutcome::Invalid(errors) = outcome else {
            panic!("expected Invalid");
        };
        assert!(errors.contains(FieldName::Message));
    }

    #[tokio::test]
    async fn test_phase_returns_to_idle_after_each_outcome() {
        let mut client = MockSubmitClientTrait::new();
        let mut calls = 0;
        client.expect_submit().times(2).returning(move |_, _| {
            calls += 1;
            if calls == 1 {
                Ok(SubmitReceipt::default())
            } else {
                Err(SubmitError::Malformed("bad".to_string()))
            }
        });
        let controller = controller(client);

        controller.submit(&scenario_form()).await;
        assert_eq!(controller.phase(), SubmitPhase::Idle);
        controller.submit(&scenario_form()).await;
        assert_eq!(controller.phase(), SubmitPhase::Idle);
        controller.submit(&RegistrationForm::new()).await;
        assert_eq!(controller.phase(), SubmitPhase::Idle);
        assert!(!controller.is_busy());
    }

    /// Client that parks inside `submit` until released
    struct GatedClient {
        entered: Arc<Notify>,
        release: Arc<Notify>,
    }

    #[async_trait]
    impl SubmitClientTrait for GatedClient {
        async fn submit(
            &self,
            _payload: &SubmissionPayload,
            _request_id: Uuid,
        ) -> Result<SubmitReceipt, SubmitError> {
            self.entered.notify_one();
            self.release.notified().await;
            Ok(SubmitReceipt {
                id: Some("first".to_string()),
            })
        }
    }

    #[tokio::test]
    async fn test_second_submit_while_submitting_is_rejected() {
        let entered = Arc::new(Notify::new());
        let release = Arc::new(Notify::new());
        let controller = Arc::new(SubmissionController::new(
            GatedClient {
                entered: entered.clone(),
                release: release.clone(),
            },
            MessagePolicy::Optional,
        ));

        let first = {
            let controller = controller.clone();
            tokio::spawn(async move { controller.submit(&scenario_form()).await })
        };

        entered.notified().await;
        assert_eq!(controller.phase(), SubmitPhase::Submitting);
        assert!(controller.is_busy());

        let second = controller.submit(&scenario_form()).await;
        assert_eq!(second, SubmitOutcome::Busy);

        release.notify_one();
        let first = first.await.unwrap();
        assert_eq!(
            first,
            SubmitOutcome::Submitted {
                id: Some("first".to_string())
            }
        );
        assert_eq!(controller.phase(), SubmitPhase::Idle);
    }

    #[test]
    fn test_submit_can_be_driven_synchronously() {
        let mut client = MockSubmitClientTrait::new();
        client.expect_submit().times(0);
        let controller = controller(client);

        let outcome = tokio_test::block_on(controller.submit(&RegistrationForm::new()));
        assert!(matches!(outcome, SubmitOutcome::Invalid(_)));
    }
}
