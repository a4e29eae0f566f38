use color_eyre::eyre::Result;

use crate::app::ports::renderer::Renderer;
use crate::app::state::AppState;
use crate::ui::components::data_source_form::DataSourceForm;
use crate::ui::tui::TuiRunner;

pub struct TuiRenderer<'a> {
    tui: &'a mut TuiRunner,
}

impl<'a> TuiRenderer<'a> {
    pub fn new(tui: &'a mut TuiRunner) -> Self {
        Self { tui }
    }
}

impl Renderer for TuiRenderer<'_> {
    fn draw(&mut self, state: &mut AppState) -> Result<()> {
        self.tui.terminal().draw(|frame| {
            DataSourceForm::render(frame, state);
        })?;
        Ok(())
    }
}
