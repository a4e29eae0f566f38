use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::action::Action;
use crate::app::form_field::FormField;
use crate::app::state::AppState;

use super::Event;

pub fn handle_event(event: Event, state: &AppState) -> Action {
    match event {
        Event::Init => Action::Render,
        Event::Resize(w, h) => Action::Resize(w, h),
        Event::Key(key) => handle_key_event(key, state),
    }
}

fn handle_key_event(key: KeyEvent, state: &AppState) -> Action {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Action::Quit,
            KeyCode::Char('s') => Action::Submit,
            KeyCode::Char('r') => Action::ReloadExisting,
            _ => Action::None,
        };
    }

    let on_toggle = state.form.focused_field == FormField::ReadOnly;

    match key.code {
        KeyCode::Esc => Action::Cancel,
        KeyCode::Enter => Action::Submit,

        // BackTab: some terminals send this for Shift+Tab
        KeyCode::BackTab | KeyCode::Up => Action::FormPrevField,
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => Action::FormPrevField,
        KeyCode::Tab | KeyCode::Down => Action::FormNextField,

        KeyCode::Left => Action::FormCursorLeft,
        KeyCode::Right => Action::FormCursorRight,

        KeyCode::Char(' ') if on_toggle => Action::FormToggleReadOnly,
        KeyCode::Char(_) | KeyCode::Backspace if on_toggle => Action::None,
        KeyCode::Backspace => Action::FormBackspace,
        KeyCode::Char(c) => Action::FormInput(c),

        _ => Action::None,
    }
}
