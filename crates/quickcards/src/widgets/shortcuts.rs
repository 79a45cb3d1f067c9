use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::AppState;

pub struct ShortcutsWidget;

impl ShortcutsWidget {
    fn key(label: &str) -> Span<'_> {
        Span::styled(
            label,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
    }

    pub fn render(frame: &mut Frame, area: Rect, _state: &AppState) {
        let hint = Style::default().fg(Color::Gray);
        let shortcuts_text = vec![Line::from(vec![
            Span::styled("Press ", hint),
            Self::key("Tab"),
            Span::styled(" to move, ", hint),
            Self::key("Space"),
            Span::styled(" to toggle, ", hint),
            Self::key("F1"),
            Span::styled(" for help, ", hint),
            Self::key("F2"),
            Span::styled(" for pricing, ", hint),
            Self::key("Esc"),
            Span::styled(" to quit", hint),
        ])];

        let shortcuts = Paragraph::new(shortcuts_text).alignment(Alignment::Center);

        frame.render_widget(shortcuts, area);
    }
}
