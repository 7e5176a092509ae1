//! Contact form state machine handlers
//!
//! `Idle -> Editing -> Pending -> {Success, Failure}`. Every way out of
//! `Pending` goes through [`handle_resolved`], which always replaces the
//! pending status.

use lws_core::prelude::*;
use lws_core::{
    validation_message, ContactField, ContactPayload, SubmissionStatus, NETWORK_ERROR_MESSAGE,
    REJECTED_MESSAGE, SUCCESS_MESSAGE,
};

use crate::message::SubmissionOutcome;
use crate::state::AppState;

use super::{Task, UpdateAction, UpdateResult};

pub(crate) fn handle_update_field(
    state: &mut AppState,
    field: ContactField,
    value: String,
) -> UpdateResult {
    let form = &mut state.contact;
    if form.is_pending() {
        debug!("Ignoring edit to {} while a submission is pending", field.name());
        return UpdateResult::none();
    }

    form.draft.set(field, value);
    form.edited_since_resolution = true;
    UpdateResult::none()
}

pub(crate) fn handle_submit(state: &mut AppState) -> UpdateResult {
    let form = &mut state.contact;
    if form.is_pending() {
        debug!("Submission already in flight, ignoring submit");
        return UpdateResult::none();
    }

    if let Err(Error::Validation { fields }) = form.draft.validate() {
        info!(
            "Contact form rejected locally: {}",
            fields.iter().map(|f| f.name()).collect::<Vec<_>>().join(", ")
        );
        form.status = SubmissionStatus::Failure(validation_message(&fields));
        form.edited_since_resolution = false;
        return UpdateResult::none();
    }

    let payload = ContactPayload::from_draft(&form.draft, state.settings.relay.access_key());
    if payload.access_key.is_none() {
        debug!("No relay access key configured; relying on the endpoint to add it");
    }

    form.status = SubmissionStatus::Pending;
    UpdateResult::action(UpdateAction::SpawnTask(Task::SubmitContact { payload }))
}

pub(crate) fn handle_resolved(state: &mut AppState, outcome: SubmissionOutcome) -> UpdateResult {
    let form = &mut state.contact;
    if !form.is_pending() {
        warn!("Dropping submission result with no submission pending: {:?}", outcome);
        return UpdateResult::none();
    }

    form.status = match outcome {
        SubmissionOutcome::Accepted => {
            info!("Contact form delivered");
            form.draft.clear();
            SubmissionStatus::Success(SUCCESS_MESSAGE.to_string())
        }
        SubmissionOutcome::Rejected { reason } => {
            warn!(
                "Relay rejected contact form: {}",
                reason.as_deref().unwrap_or("no reason given")
            );
            SubmissionStatus::Failure(REJECTED_MESSAGE.to_string())
        }
        SubmissionOutcome::Failed { reason } => {
            warn!("Contact form delivery failed: {}", reason);
            SubmissionStatus::Failure(NETWORK_ERROR_MESSAGE.to_string())
        }
    };
    form.edited_since_resolution = false;

    UpdateResult::none()
}
