//! Pure reducer: state transitions only, no I/O.
//!
//! # Purity Rules
//!
//! The reducer MUST NOT:
//! - Call `Instant::now()` (time is passed as `now` parameter)
//! - Perform I/O operations
//! - Spawn async tasks
//!
//! The submission handler is reached only through `Effect::SubmitDataSource`.

use std::time::Instant;

use crate::app::action::Action;
use crate::app::effect::Effect;
use crate::app::reducers::{reduce_form, reduce_submission};
use crate::app::state::AppState;

pub fn reduce(state: &mut AppState, action: Action, now: Instant) -> Vec<Effect> {
    let should_mark_dirty = !matches!(action, Action::None | Action::Render);

    let effects = reduce_inner(state, action, now);

    if should_mark_dirty {
        state.mark_dirty();
    }

    effects
}

fn reduce_inner(state: &mut AppState, action: Action, now: Instant) -> Vec<Effect> {
    if let Some(effects) = reduce_form(state, &action, now) {
        return effects;
    }
    if let Some(effects) = reduce_submission(state, &action, now) {
        return effects;
    }

    match action {
        Action::Quit => {
            state.should_quit = true;
            vec![]
        }
        Action::Resize(_w, h) => {
            state.terminal_height = h;
            vec![]
        }
        Action::Render => {
            state.clear_expired_timers(now);
            vec![Effect::Render]
        }
        _ => vec![],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::FormProps;
    use crate::domain::WorkspaceId;

    fn create_state() -> AppState {
        AppState::new(FormProps::new(WorkspaceId::new("ws-1")))
    }

    #[test]
    fn render_returns_render_effect_without_marking_dirty() {
        let mut state = create_state();
        state.clear_dirty();

        let effects = reduce(&mut state, Action::Render, Instant::now());

        assert_eq!(effects, vec![Effect::Render]);
        assert!(!state.render_dirty);
    }

    #[test]
    fn state_changing_action_marks_dirty() {
        let mut state = create_state();
        state.clear_dirty();

        reduce(&mut state, Action::FormInput('a'), Instant::now());

        assert!(state.render_dirty);
    }

    #[test]
    fn quit_sets_flag_without_exit_outcome() {
        let mut state = create_state();

        reduce(&mut state, Action::Quit, Instant::now());

        assert!(state.should_quit);
        assert!(state.exit.is_none());
    }

    #[test]
    fn resize_records_terminal_height() {
        let mut state = create_state();
        reduce(&mut state, Action::Resize(80, 30), Instant::now());
        assert_eq!(state.terminal_height, 30);
    }
}
