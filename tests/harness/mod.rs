#![allow(dead_code, reason = "each integration test binary uses a different subset")]

pub mod fixtures;

use std::time::Instant;

use color_eyre::eyre::Result;
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;

use redshift_setup::app::action::Action;
use redshift_setup::app::form_field::FormField;
use redshift_setup::app::ports::Renderer;
use redshift_setup::app::reducer::reduce;
use redshift_setup::app::state::AppState;
use redshift_setup::ui::components::data_source_form::DataSourceForm;

pub const TEST_WIDTH: u16 = 80;
pub const TEST_HEIGHT: u16 = 40;

pub fn create_test_terminal() -> Terminal<TestBackend> {
    let backend = TestBackend::new(TEST_WIDTH, TEST_HEIGHT);
    Terminal::new(backend).unwrap()
}

pub fn render_to_string(terminal: &mut Terminal<TestBackend>, state: &AppState) -> String {
    terminal
        .draw(|frame| DataSourceForm::render(frame, state))
        .unwrap();

    buffer_to_string(terminal.backend().buffer())
}

/// Frame text cropped to the drawn modal: blank rows and the shared left
/// margin are removed, trailing spaces trimmed.
pub fn render_modal_to_string(terminal: &mut Terminal<TestBackend>, state: &AppState) -> String {
    let output = render_to_string(terminal, state);
    let rows: Vec<&str> = output
        .lines()
        .map(str::trim_end)
        .filter(|row| !row.is_empty())
        .collect();
    let margin = rows
        .iter()
        .map(|row| row.len() - row.trim_start().len())
        .min()
        .unwrap_or(0);

    rows.iter()
        .map(|row| &row[margin..])
        .collect::<Vec<_>>()
        .join("\n")
}

fn buffer_to_string(buffer: &Buffer) -> String {
    let mut result = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            let cell = buffer.cell((x, y)).unwrap();
            result.push_str(cell.symbol());
        }
        if y < buffer.area.height - 1 {
            result.push('\n');
        }
    }
    result
}

/// Counts draws without touching a terminal.
#[derive(Default)]
pub struct NullRenderer {
    pub draws: usize,
}

impl Renderer for NullRenderer {
    fn draw(&mut self, _state: &mut AppState) -> Result<()> {
        self.draws += 1;
        Ok(())
    }
}

/// Focuses `field` and types `text` through the reducer, one key at a time.
pub fn type_into(state: &mut AppState, field: FormField, text: &str) {
    state.form.focus(field);
    for c in text.chars() {
        reduce(state, Action::FormInput(c), Instant::now());
    }
}

/// Clears `field` with backspaces.
pub fn clear_field(state: &mut AppState, field: FormField) {
    state.form.focus(field);
    let len = state.form.field_value(field).chars().count();
    for _ in 0..len {
        reduce(state, Action::FormBackspace, Instant::now());
    }
}
