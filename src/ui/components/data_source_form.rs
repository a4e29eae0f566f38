use std::time::{SystemTime, UNIX_EPOCH};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Clear, Paragraph, Wrap};

use super::atoms::{key_chip, spinner_char};
use super::molecules::hint_line;
use super::overlay::{centered_rect, modal_block_with_hint};
use super::status_message::StatusMessage;
use crate::app::form_field::FormField;
use crate::app::form_state::{DataSourceFormState, FORM_INPUT_VISIBLE_WIDTH, FORM_INPUT_WIDTH};
use crate::app::state::AppState;
use crate::ui::theme::Theme;

const PASSWORD_KEEP_HINT: &str = "Leave empty to keep previous password";
const GATEWAY_UNKNOWN: &str = "not configured";
const MASK_CHAR: char = '•';
/// Label line, value line, and one line for the error or hint.
const ROWS_PER_FIELD: usize = 3;

pub struct DataSourceForm;

impl DataSourceForm {
    pub fn render(frame: &mut Frame, state: &AppState) {
        let area = centered_rect(
            frame.area(),
            Constraint::Length(FORM_INPUT_WIDTH + 16),
            Constraint::Percentage(90),
        );
        frame.render_widget(Clear, area);

        let title = format!(" {} ", state.form.mode().title());
        let block = modal_block_with_hint(title, Self::hints(&state.form));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [description_area, fields_area, message_area, actions_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(ROWS_PER_FIELD as u16),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        Self::render_description(frame, description_area, state);
        Self::render_fields(frame, fields_area, &state.form);
        frame.render_widget(
            Paragraph::new(StatusMessage::from_state(&state.messages)),
            message_area,
        );
        Self::render_actions(frame, actions_area, state);
    }

    fn hints(form: &DataSourceFormState) -> Line<'static> {
        let mut hints = vec![("Tab", "next"), ("Enter", "save"), ("Esc", "cancel")];
        if form.focused_field == FormField::ReadOnly {
            hints.insert(1, ("Space", "toggle"));
        }
        if form.is_editing() {
            hints.push(("^R", "reload"));
        }
        hint_line(&hints)
    }

    fn render_description(frame: &mut Frame, area: Rect, state: &AppState) {
        let gateway = state.gateway_ip.as_deref().unwrap_or(GATEWAY_UNKNOWN);
        let muted = Style::default().fg(Theme::TEXT_SECONDARY);

        let line = Line::from(vec![
            Span::styled(
                format!(
                    "{} a Redshift database to pull data from. Our fixed IP address is ",
                    state.form.mode().verb()
                ),
                muted,
            ),
            Span::styled(gateway.to_string(), Style::default().fg(Theme::CODE_FG)),
            Span::styled(".", muted),
        ]);

        frame.render_widget(Paragraph::new(line).wrap(Wrap { trim: true }), area);
    }

    fn render_fields(frame: &mut Frame, area: Rect, form: &DataSourceFormState) {
        let lines: Vec<Line<'static>> = FormField::all()
            .iter()
            .flat_map(|&field| Self::field_lines(form, field))
            .collect();

        let paragraph = Paragraph::new(lines).scroll((Self::scroll_offset(form, area), 0));
        frame.render_widget(paragraph, area);
    }

    /// Keeps the focused field fully visible.
    fn scroll_offset(form: &DataSourceFormState, area: Rect) -> u16 {
        let index = FormField::all()
            .iter()
            .position(|&f| f == form.focused_field)
            .unwrap_or(0);
        let field_bottom = (index + 1) * ROWS_PER_FIELD;
        field_bottom.saturating_sub(area.height as usize) as u16
    }

    fn field_lines(form: &DataSourceFormState, field: FormField) -> [Line<'static>; ROWS_PER_FIELD] {
        let focused = form.focused_field == field;
        let label_style = if focused {
            Style::default()
                .fg(Theme::TEXT_ACCENT)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Theme::TEXT_PRIMARY)
        };
        let marker = if focused { "› " } else { "  " };

        let (label, value) = if field.is_text_input() {
            (
                Line::from(vec![
                    Span::raw(marker),
                    Span::styled(field.label(), label_style),
                ]),
                Self::text_value_line(form, field, focused),
            )
        } else {
            let checkbox = if form.snapshot.read_only { "[x] " } else { "[ ] " };
            (
                Line::from(vec![
                    Span::raw(marker),
                    Span::styled(checkbox, label_style),
                    Span::styled(field.label(), label_style),
                ]),
                Line::raw(""),
            )
        };

        [label, value, Self::feedback_line(form, field)]
    }

    fn text_value_line(form: &DataSourceFormState, field: FormField, focused: bool) -> Line<'static> {
        let raw = form.field_value(field);
        let border = Style::default().fg(if focused {
            Theme::FOCUS_BORDER
        } else {
            Theme::INPUT_BORDER
        });

        let mut spans = vec![Span::styled("  ▏", border)];

        if raw.is_empty() && !focused {
            spans.push(Span::styled(
                field.placeholder().to_string(),
                Style::default().fg(Theme::TEXT_MUTED),
            ));
            return Line::from(spans);
        }

        let shown: String = if field.is_masked() {
            raw.chars().map(|_| MASK_CHAR).collect()
        } else {
            raw.to_string()
        };
        let offset = if focused { form.viewport_offset } else { 0 };
        let visible: String = shown
            .chars()
            .skip(offset)
            .take(FORM_INPUT_VISIBLE_WIDTH)
            .collect();

        if focused {
            let cursor = form.cursor_position.saturating_sub(offset);
            spans.extend(line_with_cursor(&visible, cursor).spans);
        } else {
            spans.push(Span::raw(visible));
        }

        Line::from(spans)
    }

    fn feedback_line(form: &DataSourceFormState, field: FormField) -> Line<'static> {
        if let Some(err) = form.error_for(field) {
            return Line::from(Span::styled(
                format!("    {err}"),
                Style::default().fg(Theme::ERROR),
            ));
        }
        if field == FormField::Password && form.is_editing() {
            return Line::from(Span::styled(
                format!("    {PASSWORD_KEEP_HINT}"),
                Style::default().fg(Theme::TEXT_MUTED),
            ));
        }
        Line::raw("")
    }

    fn render_actions(frame: &mut Frame, area: Rect, state: &AppState) {
        let cancel = Span::styled(
            format!(" Cancel → {} ", state.cancel_target()),
            Style::default().fg(Theme::TEXT_SECONDARY),
        );

        let submit = if state.form.is_submitting() {
            let millis = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis())
                .unwrap_or_default();
            Span::styled(
                format!(" {} Validating ", spinner_char(millis)),
                Style::default().fg(Theme::TEXT_MUTED),
            )
        } else {
            key_chip("Save")
        };

        let line = Line::from(vec![cancel, Span::raw(" "), submit]).right_aligned();
        frame.render_widget(Paragraph::new(line), area);
    }
}

fn line_with_cursor(text: &str, cursor_col: usize) -> Line<'static> {
    let chars: Vec<char> = text.chars().collect();
    let cursor_style = Style::default()
        .bg(Theme::TEXT_PRIMARY)
        .fg(Theme::MODAL_BG)
        .add_modifier(Modifier::BOLD);

    if cursor_col >= chars.len() {
        Line::from(vec![
            Span::raw(text.to_string()),
            Span::styled("█", Style::default().fg(Theme::TEXT_PRIMARY)),
        ])
    } else {
        let before: String = chars[..cursor_col].iter().collect();
        let under: String = chars[cursor_col].to_string();
        let after: String = chars[cursor_col + 1..].iter().collect();
        Line::from(vec![
            Span::raw(before),
            Span::styled(under, cursor_style),
            Span::raw(after),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::FormProps;
    use crate::domain::WorkspaceId;

    fn plain(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    fn create_form() -> DataSourceFormState {
        AppState::new(FormProps::new(WorkspaceId::new("ws-1"))).form
    }

    mod cursor {
        use super::*;

        #[test]
        fn cursor_at_end_appends_block() {
            assert_eq!(plain(&line_with_cursor("abc", 3)), "abc█");
        }

        #[test]
        fn cursor_in_middle_highlights_char() {
            let line = line_with_cursor("日本語", 1);
            assert_eq!(line.spans[1].content, "本");
            assert_eq!(plain(&line), "日本語");
        }
    }

    mod value {
        use super::*;

        #[test]
        fn password_is_masked() {
            let mut form = create_form();
            form.set_field(FormField::Password, "secret");

            let line = DataSourceForm::text_value_line(&form, FormField::Password, false);

            assert_eq!(plain(&line), "  ▏••••••");
        }

        #[test]
        fn empty_unfocused_field_shows_placeholder() {
            let form = create_form();

            let line = DataSourceForm::text_value_line(&form, FormField::Host, false);

            assert_eq!(plain(&line), "  ▏example.com");
        }
    }

    mod feedback {
        use super::*;

        #[test]
        fn error_wins_over_password_hint() {
            let mut form = create_form();
            form.validate_field(FormField::Password);

            let line = DataSourceForm::feedback_line(&form, FormField::Password);

            assert_eq!(plain(&line).trim(), "Password is required.");
        }

        #[test]
        fn create_mode_has_no_password_hint() {
            let form = create_form();
            let line = DataSourceForm::feedback_line(&form, FormField::Password);
            assert!(plain(&line).is_empty());
        }
    }

    #[test]
    fn scroll_keeps_focused_field_visible() {
        let mut form = create_form();
        form.focus(FormField::AdditionalInfo);
        let area = Rect::new(0, 0, 40, 9);

        let offset = DataSourceForm::scroll_offset(&form, area);

        assert_eq!(offset as usize, FormField::all().len() * ROWS_PER_FIELD - 9);
    }
}
