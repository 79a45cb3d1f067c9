use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph},
    Frame,
};

use super::centered_rect;
use crate::AppState;

const KEYS: [(&str, &str); 8] = [
    ("Tab / Down", "next field"),
    ("Shift+Tab / Up", "previous field"),
    ("typing", "edit the topic"),
    ("Left / Right", "choose a deck size"),
    ("Space / Enter", "toggle shuffle or definitions first"),
    ("F2", "pricing breakdown"),
    ("Esc", "close popup, or quit"),
    ("Ctrl+C", "quit"),
];

pub struct HelpPopupWidget;

impl HelpPopupWidget {
    pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
        let popup_area = centered_rect(60, 60, area);

        frame.render_widget(Clear, popup_area);

        let mut help_text = vec![
            Line::from(vec![Span::styled(
                format!(
                    "Study time: {}s per card, {}s with shuffle. Sessions of {} cards.",
                    state.estimator.seconds_per_card(false),
                    state.estimator.seconds_per_card(true),
                    state.estimator.config().session_size
                ),
                Style::default().fg(Color::Gray),
            )]),
            Line::from(" "),
        ];

        for (key, action) in KEYS {
            help_text.push(Line::from(vec![
                Span::styled(
                    format!("{:<16}", key),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(action, Style::default().fg(Color::White)),
            ]));
        }

        let popup = Paragraph::new(help_text)
            .block(
                Block::bordered()
                    .title("Help")
                    .title_alignment(Alignment::Center)
                    .style(Style::default().fg(Color::Cyan)),
            )
            .alignment(Alignment::Left);

        frame.render_widget(popup, popup_area);
    }
}
