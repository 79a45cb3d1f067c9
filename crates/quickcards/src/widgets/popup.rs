use quickcards_estimator::render::{format_money, format_rate};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph},
    Frame,
};

use super::centered_rect;
use crate::AppState;

pub struct PricingPopupWidget;

impl PricingPopupWidget {
    pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
        let popup_area = centered_rect(60, 70, area);

        // Clear the area first
        frame.render_widget(Clear, popup_area);

        let pricing_text = Self::create_pricing_breakdown_text(state);

        let popup = Paragraph::new(pricing_text)
            .block(
                Block::bordered()
                    .title("Pricing Breakdown")
                    .title_alignment(Alignment::Center)
                    .style(Style::default().fg(Color::Cyan)),
            )
            .alignment(Alignment::Left);

        frame.render_widget(popup, popup_area);
    }

    fn row(label: &str, value: String, color: Color) -> Line<'_> {
        Line::from(vec![
            Span::styled(label, Style::default().fg(Color::White)),
            Span::styled(
                value,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
        ])
    }

    fn create_pricing_breakdown_text(state: &AppState) -> Vec<Line> {
        let estimate = &state.estimate;
        let config = state.estimator.config();

        let mut pricing_text = vec![
            Self::row(
                "Price per card: ",
                format_money(state.effective_price_per_card()),
                Color::Yellow,
            ),
            Self::row(
                "Seconds per card: ",
                format!("{}s", state.seconds_per_card()),
                Color::Cyan,
            ),
            Self::row(
                "Subtotal: ",
                format_money(estimate.subtotal()),
                Color::Yellow,
            ),
            Self::row(
                "Discount rate: ",
                format_rate(estimate.discount_rate()),
                Color::Green,
            ),
            Self::row(
                "Discount: ",
                format!("-{}", format_money(estimate.discount_amount())),
                Color::Green,
            ),
            Self::row("Total: ", format_money(estimate.total()), Color::Yellow),
            Line::from(" "),
            Line::from(vec![Span::styled(
                "Bulk Discounts:",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )]),
        ];

        let mut tiers = config.discount_tiers.clone();
        tiers.sort_by_key(|tier| tier.min_cards());

        for tier in tiers {
            let active = estimate.card_count() > 0
                && tier.applies_to(estimate.card_count())
                && tier.rate() == estimate.discount_rate();
            pricing_text.push(Line::from(vec![
                Span::styled("  ", Style::default()),
                Span::styled(
                    format!("{}+ cards: {} off", tier.min_cards(), format_rate(tier.rate())),
                    if active {
                        Style::default()
                            .fg(Color::Green)
                            .add_modifier(Modifier::BOLD)
                    } else {
                        Style::default().fg(Color::White)
                    },
                ),
            ]));
        }

        pricing_text.extend(vec![
            Line::from(" "),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "F2",
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to close", Style::default().fg(Color::Gray)),
            ]),
        ]);

        pricing_text
    }
}
