//! Submit pipeline: validate, gate re-entry, hand off the payload.
//!
//! The async handler itself is invoked by the effect runner; this module only
//! owns the state transitions so they stay synchronous and testable.

use crate::app::form_field::FormField;
use crate::app::form_state::DataSourceFormState;
use crate::domain::RedshiftDataSourceInput;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitDecision {
    /// A submission is already in flight; the trigger is ignored.
    AlreadySubmitting,
    Invalid { first_invalid: FormField },
    Ready(Box<RedshiftDataSourceInput>),
}

pub fn begin_submission(form: &mut DataSourceFormState) -> SubmitDecision {
    if form.is_submitting() {
        return SubmitDecision::AlreadySubmitting;
    }

    if !form.validate_all() {
        let first_invalid = form.first_invalid_field().unwrap_or(form.focused_field);
        let invalid: Vec<_> = FormField::all()
            .iter()
            .filter(|f| form.error_for(**f).is_some())
            .collect();
        tracing::debug!(fields = ?invalid, "submission blocked by validation errors");
        form.focus(first_invalid);
        return SubmitDecision::Invalid { first_invalid };
    }

    match form.build_payload() {
        Ok(payload) => {
            form.status = SubmissionStatus::Submitting;
            tracing::info!(
                mode = ?form.mode(),
                keeps_password = payload.keeps_existing_password(),
                "submitting data source"
            );
            SubmitDecision::Ready(Box::new(payload))
        }
        Err(err) => {
            // validate_all passed, so this only happens if the rules diverge
            tracing::warn!(error = %err, "payload normalization failed");
            SubmitDecision::Invalid {
                first_invalid: form.focused_field,
            }
        }
    }
}

/// Returns the form to Idle regardless of how the handler settled.
pub fn settle_submission(form: &mut DataSourceFormState) {
    form.status = SubmissionStatus::Idle;
}
