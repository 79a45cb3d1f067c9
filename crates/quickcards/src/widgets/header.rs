use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use crate::AppState;

pub struct HeaderWidget;

impl HeaderWidget {
    pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
        let header_text = vec![Line::from(vec![
            Span::styled(
                "QuickCards - Study Tool",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                format!("updated {}", state.last_update.format("%H:%M:%S UTC")),
                Style::default().fg(Color::Gray),
            ),
        ])];

        let header = Paragraph::new(header_text)
            .block(Block::bordered().title("Deck Generator"))
            .alignment(Alignment::Center);

        frame.render_widget(header, area);
    }
}
