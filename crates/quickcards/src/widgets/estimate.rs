use quickcards_estimator::render::{discount_label, format_money, QUICK_SESSION_BADGE};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use crate::AppState;

pub struct EstimateWidget;

impl EstimateWidget {
    pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
        let estimate = &state.estimate;

        // An empty estimate blanks the panel
        let estimate_text = if estimate.is_empty() {
            Vec::new()
        } else {
            let mut time_line = vec![
                Span::styled("Study Time: ", Style::default().fg(Color::White)),
                Span::styled(
                    format!("~{} minutes", estimate.study_minutes()),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::ITALIC),
                ),
            ];
            if estimate.is_quick_session() {
                time_line.push(Span::raw(" "));
                time_line.push(Span::styled(
                    QUICK_SESSION_BADGE,
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ));
            }

            let mut cost_line = vec![
                Span::styled("Cost: ", Style::default().fg(Color::White)),
                Span::styled(
                    format_money(estimate.total()),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
            ];
            if let Some(label) = discount_label(estimate) {
                cost_line.push(Span::raw(" "));
                cost_line.push(Span::styled(label, Style::default().fg(Color::Green)));
            }

            vec![
                Line::from(vec![
                    Span::styled("Topic: ", Style::default().fg(Color::White)),
                    Span::styled(
                        state.topic.trim().to_string(),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                ]),
                Line::from(vec![
                    Span::styled("Cards: ", Style::default().fg(Color::White)),
                    Span::styled(
                        estimate.card_count().to_string(),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                ]),
                Line::from(time_line),
                Line::from(cost_line),
            ]
        };

        let panel = Paragraph::new(estimate_text)
            .block(Block::bordered().title("Estimate for Your Deck"))
            .alignment(Alignment::Left);

        frame.render_widget(panel, area);
    }
}
