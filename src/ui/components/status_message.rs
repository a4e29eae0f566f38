use ratatui::style::Style;
use ratatui::text::{Line, Span};

use crate::app::message_state::MessageState;
use crate::ui::theme::Theme;

pub enum MessageType {
    Error,
    Success,
}

pub struct StatusMessage;

impl StatusMessage {
    pub fn render_line(message: &str, msg_type: MessageType) -> Line<'static> {
        let color = match msg_type {
            MessageType::Error => Theme::ERROR,
            MessageType::Success => Theme::SUCCESS,
        };

        Line::from(vec![Span::styled(
            message.to_string(),
            Style::default().fg(color),
        )])
    }

    /// Errors take precedence over success messages.
    pub fn from_state(messages: &MessageState) -> Line<'static> {
        if let Some(err) = &messages.last_error {
            Self::render_line(err, MessageType::Error)
        } else if let Some(ok) = &messages.last_success {
            Self::render_line(ok, MessageType::Success)
        } else {
            Line::raw("")
        }
    }
}
