use quickcards_estimator::DECK_SIZE_OPTIONS;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use crate::{AppState, FormField};

pub struct FormWidget;

impl FormWidget {
    pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
        let form_text = vec![
            Self::field_line(state, FormField::Topic, "Topic", Self::topic_spans(state)),
            Self::field_line(state, FormField::Size, "Deck size", Self::size_spans(state)),
            Self::field_line(
                state,
                FormField::Shuffle,
                "Shuffle",
                vec![Self::checkbox(state.shuffle)],
            ),
            Self::field_line(
                state,
                FormField::DefinitionsFirst,
                "Definitions first",
                vec![Self::checkbox(state.definitions_first)],
            ),
        ];

        let form = Paragraph::new(form_text)
            .block(Block::bordered().title("Create Your Deck"))
            .alignment(Alignment::Left);

        frame.render_widget(form, area);
    }

    fn field_line<'a>(
        state: &AppState,
        field: FormField,
        label: &'a str,
        value: Vec<Span<'a>>,
    ) -> Line<'a> {
        let focused = state.focus == field;
        let marker = if focused { "> " } else { "  " };
        let label_style = if focused {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };

        let mut spans = vec![
            Span::styled(marker, Style::default().fg(Color::Cyan)),
            Span::styled(format!("{:<18}", format!("{}:", label)), label_style),
        ];
        spans.extend(value);
        Line::from(spans)
    }

    fn topic_spans(state: &AppState) -> Vec<Span<'static>> {
        if state.topic.is_empty() {
            let placeholder = if state.focus == FormField::Topic {
                "_"
            } else {
                "e.g. World War II"
            };
            vec![Span::styled(placeholder, Style::default().fg(Color::DarkGray))]
        } else {
            let mut spans = vec![Span::styled(
                state.topic.clone(),
                Style::default().fg(Color::Yellow),
            )];
            if state.focus == FormField::Topic {
                spans.push(Span::styled("_", Style::default().fg(Color::DarkGray)));
            }
            spans
        }
    }

    fn size_spans(state: &AppState) -> Vec<Span<'static>> {
        DECK_SIZE_OPTIONS
            .iter()
            .enumerate()
            .map(|(index, size)| {
                let selected = state.size_choice == Some(index);
                let text = format!("({}) {} cards  ", if selected { "*" } else { " " }, size);
                if selected {
                    Span::styled(
                        text,
                        Style::default()
                            .fg(Color::Green)
                            .add_modifier(Modifier::BOLD),
                    )
                } else {
                    Span::styled(text, Style::default().fg(Color::Gray))
                }
            })
            .collect()
    }

    fn checkbox(checked: bool) -> Span<'static> {
        if checked {
            Span::styled("[x]", Style::default().fg(Color::Green))
        } else {
            Span::styled("[ ]", Style::default().fg(Color::Gray))
        }
    }
}
