//! Background task execution
//!
//! Tasks come out of `update()` as data; the host awaits them here and feeds
//! the returned message back into the engine.

use lws_core::prelude::*;
use lws_core::ContactPayload;
use lws_relay::LocalFormRelay;

use crate::handler::Task;
use crate::message::{Message, SubmissionOutcome};

/// Run a task to completion and produce the message that resolves it
pub async fn run_task<R: LocalFormRelay>(relay: &R, task: Task) -> Message {
    match task {
        Task::SubmitContact { payload } => submit_contact(relay, &payload).await,
    }
}

/// Send one contact payload. Never fails: every ending becomes a
/// [`Message::SubmissionResolved`].
pub async fn submit_contact<R: LocalFormRelay>(
    relay: &R,
    payload: &ContactPayload,
) -> Message {
    let outcome = match relay.submit(payload).await.and_then(|r| r.into_result()) {
        Ok(_) => SubmissionOutcome::Accepted,
        Err(Error::Rejected { message }) => SubmissionOutcome::Rejected {
            reason: Some(message),
        },
        Err(e) => SubmissionOutcome::Failed {
            reason: e.to_string(),
        },
    };

    Message::SubmissionResolved(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lws_relay::RelayResponse;

    struct ScriptedRelay {
        reply: fn() -> Result<RelayResponse>,
    }

    impl LocalFormRelay for ScriptedRelay {
        async fn submit(&self, _payload: &ContactPayload) -> Result<RelayResponse> {
            (self.reply)()
        }
    }

    fn payload() -> ContactPayload {
        ContactPayload {
            access_key: None,
            name: "Asha".into(),
            email: "asha@example.com".into(),
            subject: "Hi".into(),
            message: "Hello".into(),
        }
    }

    #[tokio::test]
    async fn test_success_response_is_accepted() {
        let relay = ScriptedRelay {
            reply: || {
                Ok(RelayResponse {
                    success: true,
                    message: None,
                })
            },
        };
        assert_eq!(
            submit_contact(&relay, &payload()).await,
            Message::SubmissionResolved(SubmissionOutcome::Accepted)
        );
    }

    #[tokio::test]
    async fn test_unsuccessful_response_is_rejected() {
        let relay = ScriptedRelay {
            reply: || {
                Ok(RelayResponse {
                    success: false,
                    message: Some("Invalid access key".into()),
                })
            },
        };
        assert_eq!(
            submit_contact(&relay, &payload()).await,
            Message::SubmissionResolved(SubmissionOutcome::Rejected {
                reason: Some("Invalid access key".into())
            })
        );
    }

    #[tokio::test]
    async fn test_transport_error_is_failed() {
        let relay = ScriptedRelay {
            reply: || Err(Error::transport("connection refused")),
        };
        let msg = submit_contact(&relay, &payload()).await;
        assert!(matches!(
            msg,
            Message::SubmissionResolved(SubmissionOutcome::Failed { reason })
                if reason.contains("connection refused")
        ));
    }

    #[tokio::test]
    async fn test_decode_error_is_failed() {
        let relay = ScriptedRelay {
            reply: || Err(Error::decode("expected value at line 1")),
        };
        let msg = run_task(&relay, Task::SubmitContact { payload: payload() }).await;
        assert!(matches!(
            msg,
            Message::SubmissionResolved(SubmissionOutcome::Failed { .. })
        ));
    }
}
