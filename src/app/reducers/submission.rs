//! Submission sub-reducer: submit trigger, handler settlement and cancel.

use std::time::Instant;

use crate::app::action::Action;
use crate::app::effect::Effect;
use crate::app::state::{AppState, FormExit};
use crate::app::submission::{SubmitDecision, begin_submission, settle_submission};

/// Returns Some(effects) if action was handled, None otherwise.
pub fn reduce_submission(
    state: &mut AppState,
    action: &Action,
    now: Instant,
) -> Option<Vec<Effect>> {
    match action {
        Action::Submit => match begin_submission(&mut state.form) {
            SubmitDecision::AlreadySubmitting | SubmitDecision::Invalid { .. } => Some(vec![]),
            SubmitDecision::Ready(payload) => {
                state.messages.clear();
                state.pending_payload = Some(payload.clone());
                Some(vec![Effect::SubmitDataSource { payload }])
            }
        },
        Action::SubmissionSucceeded => {
            settle_submission(&mut state.form);
            tracing::info!("data source submission completed");
            if let Some(payload) = state.pending_payload.take() {
                state
                    .messages
                    .set_success_at("Data source saved".to_string(), now);
                state.exit = Some(FormExit::Saved(payload));
                state.should_quit = true;
            }
            Some(vec![])
        }
        Action::SubmissionFailed(msg) => {
            settle_submission(&mut state.form);
            state.pending_payload = None;
            tracing::warn!(error = %msg, "data source submission failed");
            state.messages.set_error_at(msg.clone(), now);
            Some(vec![])
        }
        Action::Cancel => {
            if !state.form.is_submitting() {
                state.exit = Some(FormExit::Cancelled(state.cancel_target()));
                state.should_quit = true;
            }
            Some(vec![])
        }
        _ => None,
    }
}
