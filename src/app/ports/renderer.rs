use color_eyre::eyre::Result;

use crate::app::state::AppState;

pub trait Renderer {
    fn draw(&mut self, state: &mut AppState) -> Result<()>;
}
