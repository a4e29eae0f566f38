//! Form sub-reducer: field editing, focus movement and re-initialization.

use std::time::Instant;

use crate::app::action::Action;
use crate::app::effect::Effect;
use crate::app::form_field::FormField;
use crate::app::form_state::{DataSourceFormState, FORM_INPUT_VISIBLE_WIDTH, ValidationTrigger};
use crate::app::reducers::{char_count, insert_char_at_cursor, remove_char_before_cursor};
use crate::app::state::AppState;

/// Returns Some(effects) if action was handled, None otherwise.
pub fn reduce_form(state: &mut AppState, action: &Action, now: Instant) -> Option<Vec<Effect>> {
    match action {
        Action::FormInput(c) => {
            if !state.form.is_submitting() {
                let form = &mut state.form;
                let field = form.focused_field;
                if let Some(value) = form.snapshot.text_mut(field) {
                    insert_char_at_cursor(value, form.cursor_position, *c);
                    let new_cursor = form.cursor_position + 1;
                    form.update_cursor(new_cursor, FORM_INPUT_VISIBLE_WIDTH);
                    validate_on_change(form, field);
                }
            }
            Some(vec![])
        }
        Action::FormBackspace => {
            if !state.form.is_submitting() && state.form.cursor_position > 0 {
                let form = &mut state.form;
                let field = form.focused_field;
                let cursor = form.cursor_position;
                let removed = form
                    .snapshot
                    .text_mut(field)
                    .is_some_and(|value| remove_char_before_cursor(value, cursor));
                if removed {
                    form.update_cursor(cursor - 1, FORM_INPUT_VISIBLE_WIDTH);
                    validate_on_change(form, field);
                }
            }
            Some(vec![])
        }
        Action::FormCursorLeft => {
            let form = &mut state.form;
            let cursor = form.cursor_position.saturating_sub(1);
            form.update_cursor(cursor, FORM_INPUT_VISIBLE_WIDTH);
            Some(vec![])
        }
        Action::FormCursorRight => {
            let form = &mut state.form;
            let len = char_count(form.field_value(form.focused_field));
            let cursor = (form.cursor_position + 1).min(len);
            form.update_cursor(cursor, FORM_INPUT_VISIBLE_WIDTH);
            Some(vec![])
        }
        Action::FormNextField => {
            let form = &mut state.form;
            if let Some(next) = form.focused_field.next() {
                form.focus(next);
            }
            Some(vec![])
        }
        Action::FormPrevField => {
            let form = &mut state.form;
            if let Some(prev) = form.focused_field.prev() {
                form.focus(prev);
            }
            Some(vec![])
        }
        Action::FormToggleReadOnly => {
            let form = &mut state.form;
            if !form.is_submitting() && form.focused_field == FormField::ReadOnly {
                form.toggle_read_only();
            }
            Some(vec![])
        }

        Action::ReloadExisting => {
            let form = &state.form;
            match form.editing_id() {
                Some(id) if !form.is_submitting() => {
                    Some(vec![Effect::LoadExisting { id: id.clone() }])
                }
                _ => Some(vec![]),
            }
        }
        Action::ExistingLoaded(loaded) => {
            if state.form.is_submitting() {
                return Some(vec![]);
            }
            match loaded {
                Some(existing) => {
                    let context = state
                        .context_override
                        .as_deref()
                        .or(existing.additional_context.as_deref());
                    state.form.reinitialize(Some(&existing.record), context);
                    state
                        .messages
                        .set_success_at("Reloaded data source".to_string(), now);
                }
                None => {
                    state
                        .messages
                        .set_error_at("Data source no longer exists".to_string(), now);
                }
            }
            Some(vec![])
        }
        Action::ExistingLoadFailed(msg) => {
            state.messages.set_error_at(msg.clone(), now);
            Some(vec![])
        }

        _ => None,
    }
}

fn validate_on_change(form: &mut DataSourceFormState, field: FormField) {
    if form.validation_trigger == ValidationTrigger::OnChange {
        form.validate_field(field);
    }
}
