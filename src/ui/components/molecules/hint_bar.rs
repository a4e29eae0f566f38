use ratatui::style::Style;
use ratatui::text::{Line, Span};

use crate::ui::components::atoms::key_text;
use crate::ui::theme::Theme;

/// Format: "key1 desc1  key2 desc2  ..."
pub fn hint_line(hints: &[(&str, &str)]) -> Line<'static> {
    let mut spans = vec![Span::raw(" ")];

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(key_text(key));
        spans.push(Span::styled(
            format!(" {desc}"),
            Style::default().fg(Theme::TEXT_SECONDARY),
        ));
    }

    spans.push(Span::raw(" "));
    Line::from(spans)
}
