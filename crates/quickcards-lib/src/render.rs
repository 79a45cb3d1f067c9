//! Text and HTML views of an estimate. Nothing here feeds back into pricing.

use crate::data_structures::{Estimate, SessionPlan};
use crate::deck::Deck;
use rust_decimal::{Decimal, RoundingStrategy};

pub const QUICK_SESSION_BADGE: &str = "(Quick session)";

/// Two decimal places, half a cent rounds up, e.g. `$4.50`.
pub fn format_money(amount: Decimal) -> String {
    format!(
        "${:.2}",
        amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    )
}

/// `10%` for a rate of `0.10`.
pub fn format_rate(rate: Decimal) -> String {
    format!("{}%", (rate * Decimal::ONE_HUNDRED).normalize())
}

pub fn discount_label(estimate: &Estimate) -> Option<String> {
    if estimate.cost().is_discounted() {
        Some(format!(
            "({} discount applied!)",
            format_rate(estimate.discount_rate())
        ))
    } else {
        None
    }
}

pub fn render_session_line(session: &SessionPlan) -> String {
    format!(
        "Session {}: Study {} cards (~{} min)",
        session.index(),
        session.cards_in_session(),
        session.estimated_minutes()
    )
}

pub fn render_session_lines(estimate: &Estimate) -> Vec<String> {
    estimate.sessions().iter().map(render_session_line).collect()
}

/// Estimate block shown under the form. Empty when there is nothing to show.
pub fn render_summary(topic: &str, estimate: &Estimate) -> String {
    if estimate.is_empty() {
        return String::new();
    }

    let mut lines = vec![
        "Estimate for Your Deck:".to_string(),
        format!("Topic: {}", topic.trim()),
        format!("Cards: {}", estimate.card_count()),
    ];

    let mut time_line = format!("Study Time: ~{} minutes", estimate.study_minutes());
    if estimate.is_quick_session() {
        time_line.push(' ');
        time_line.push_str(QUICK_SESSION_BADGE);
    }
    lines.push(time_line);

    let mut cost_line = format!("Cost: {}", format_money(estimate.total()));
    if let Some(label) = discount_label(estimate) {
        cost_line.push(' ');
        cost_line.push_str(&label);
    }
    lines.push(cost_line);

    lines.join("\n")
}

/// Preview article for a deck: settings, time, cost and the first three cards.
pub fn render_deck_html(deck: &Deck, estimate: &Estimate) -> String {
    let badge = if estimate.is_quick_session() {
        QUICK_SESSION_BADGE
    } else {
        ""
    };
    let discount = if estimate.cost().is_discounted() {
        format!(
            " <span class=\"discount\">({} off)</span>",
            format_rate(estimate.discount_rate())
        )
    } else {
        String::new()
    };
    let preview: String = deck
        .cards()
        .iter()
        .take(3)
        .map(|card| {
            format!(
                "<li><strong>{}:</strong> {}</li>",
                escape_html(card.term()),
                escape_html(card.definition())
            )
        })
        .collect();

    format!(
        r#"<article class="card">
  <h3>Deck: {topic}</h3>
  <p><strong>Cards:</strong> {size} &bull; <strong>Shuffle:</strong> {shuffle} &bull; <strong>Defs First:</strong> {defs}</p>
  <p><strong>Study Time:</strong> ~{minutes} min <em>{badge}</em></p>
  <p><strong>Cost:</strong> {total}{discount}</p>
  <details>
    <summary>Show first 3 cards</summary>
    <ol>{preview}</ol>
  </details>
</article>"#,
        topic = escape_html(deck.topic()),
        size = deck.size(),
        shuffle = if deck.shuffle() { "On" } else { "Off" },
        defs = if deck.definitions_first() { "Yes" } else { "No" },
        minutes = estimate.study_minutes(),
        badge = badge,
        total = format_money(estimate.total()),
        discount = discount,
        preview = preview,
    )
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_structures::DeckRequest;
    use crate::deck::Card;
    use crate::estimator::Estimator;

    #[test]
    fn test_format_money_rounds_to_cents() {
        assert_eq!(format_money(Decimal::new(6375, 3)), "$6.38");
        assert_eq!(format_money(Decimal::new(4725, 3)), "$4.73");
        assert_eq!(format_money(Decimal::new(1125, 3)), "$1.13");
        assert_eq!(format_money(Decimal::new(45, 1)), "$4.50");
        assert_eq!(format_money(Decimal::ZERO), "$0.00");
    }

    #[test]
    fn test_format_rate() {
        assert_eq!(format_rate(Decimal::new(10, 2)), "10%");
        assert_eq!(format_rate(Decimal::new(15, 2)), "15%");
    }

    #[test]
    fn test_summary_with_discount() {
        let estimate = Estimator::new().estimate(&DeckRequest::new("Bio", 20, false));
        let summary = render_summary(" Bio ", &estimate);

        assert!(summary.contains("Topic: Bio\n"));
        assert!(summary.contains("Study Time: ~10 minutes"));
        assert!(summary.contains("Cost: $4.50 (10% discount applied!)"));
        assert!(!summary.contains(QUICK_SESSION_BADGE));
    }

    #[test]
    fn test_summary_rounds_half_cent_up() {
        let estimate = Estimator::new().estimate(&DeckRequest::new("Bio", 21, false));

        assert_eq!(estimate.total(), Decimal::new(4725, 3));
        assert!(render_summary("Bio", &estimate).contains("Cost: $4.73 (10% discount applied!)"));
    }

    #[test]
    fn test_summary_quick_session_badge() {
        let estimate = Estimator::new().estimate(&DeckRequest::new("Verbs", 4, false));
        let summary = render_summary("Verbs", &estimate);

        assert!(summary.contains("~2 minutes (Quick session)"));
        assert!(summary.contains("Cost: $1.00"));
        assert!(!summary.contains("discount"));
    }

    #[test]
    fn test_summary_empty_for_empty_estimate() {
        assert_eq!(render_summary("Bio", &Estimate::empty()), "");
        assert!(render_session_lines(&Estimate::empty()).is_empty());
    }

    #[test]
    fn test_session_lines() {
        let estimate = Estimator::new().estimate(&DeckRequest::new("History", 12, false));
        assert_eq!(
            render_session_lines(&estimate),
            vec![
                "Session 1: Study 5 cards (~3 min)",
                "Session 2: Study 5 cards (~3 min)",
                "Session 3: Study 2 cards (~1 min)",
            ]
        );
    }

    #[test]
    fn test_deck_html_escapes_and_previews_three_cards() {
        let deck = Deck::new("Q&A <basics>", 10)
            .with_shuffle(true)
            .with_cards(vec![
                Card::new("a", "1"),
                Card::new("b", "2"),
                Card::new("c", "3"),
                Card::new("d", "4"),
            ]);
        let estimate = Estimator::new().estimate(&deck.to_request());
        let html = render_deck_html(&deck, &estimate);

        assert!(html.contains("<h3>Deck: Q&amp;A &lt;basics&gt;</h3>"));
        assert!(html.contains("<strong>Shuffle:</strong> On"));
        assert!(html.contains("~6 min"));
        assert!(html.contains("<li><strong>c:</strong> 3</li>"));
        assert!(!html.contains("<li><strong>d:</strong>"));
        assert!(!html.contains("off)"));
    }
}
