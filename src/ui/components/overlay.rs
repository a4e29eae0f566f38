use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Style, Stylize};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders};

use crate::ui::theme::Theme;

/// Creates a centered rectangle within the given area.
pub fn centered_rect(area: Rect, width: Constraint, height: Constraint) -> Rect {
    let [area] = Layout::horizontal([width]).flex(Flex::Center).areas(area);
    let [area] = Layout::vertical([height]).flex(Flex::Center).areas(area);
    area
}

/// Rounded modal frame with the title on top and a key hint on the bottom border.
pub fn modal_block_with_hint(title: String, hint: Line<'static>) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Theme::FOCUS_BORDER))
        .title_top(Line::from(title).bold())
        .title_bottom(hint.right_aligned())
        .style(Style::default().bg(Theme::MODAL_BG))
}
