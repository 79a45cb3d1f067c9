use crate::error::EstimateError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Deck sizes offered by the generator form.
pub const DECK_SIZE_OPTIONS: [u32; 3] = [10, 20, 30];

/// Input for a single estimate. Built per call and never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckRequest {
    topic: String,
    card_count: u32,
    #[serde(default)]
    shuffle_enabled: bool,
    #[serde(default)]
    price_per_card: Option<Decimal>,
}

impl DeckRequest {
    pub fn new(topic: impl Into<String>, card_count: u32, shuffle_enabled: bool) -> Self {
        Self {
            topic: topic.into(),
            card_count,
            shuffle_enabled,
            price_per_card: None,
        }
    }

    /// Builds a request from unchecked caller values, rejecting negative
    /// counts and prices instead of clamping them.
    pub fn from_raw(
        topic: impl Into<String>,
        card_count: i64,
        shuffle_enabled: bool,
        price_per_card: Option<Decimal>,
    ) -> Result<Self, EstimateError> {
        if card_count < 0 {
            return Err(EstimateError::NegativeCardCount(card_count));
        }
        let card_count = u32::try_from(card_count).map_err(|_| EstimateError::MalformedNumber {
            field: "card_count",
            value: card_count.to_string(),
        })?;

        if let Some(price) = price_per_card {
            if price.is_sign_negative() && !price.is_zero() {
                return Err(EstimateError::NegativePrice(price));
            }
        }

        Ok(Self {
            topic: topic.into(),
            card_count,
            shuffle_enabled,
            price_per_card,
        })
    }

    pub fn with_price_per_card(mut self, price_per_card: Decimal) -> Self {
        self.price_per_card = Some(price_per_card);
        self
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn trimmed_topic(&self) -> &str {
        self.topic.trim()
    }

    pub fn card_count(&self) -> u32 {
        self.card_count
    }

    pub fn shuffle_enabled(&self) -> bool {
        self.shuffle_enabled
    }

    /// The per-call price override, if the caller set one.
    pub fn price_per_card(&self) -> Option<Decimal> {
        self.price_per_card
    }
}

/// Parses a card count typed by a user. Blank input means "nothing selected".
pub fn parse_card_count(input: &str) -> Result<u32, EstimateError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }

    let value: i64 = trimmed.parse().map_err(|_| EstimateError::MalformedNumber {
        field: "card_count",
        value: trimmed.to_string(),
    })?;

    if value < 0 {
        return Err(EstimateError::NegativeCardCount(value));
    }

    u32::try_from(value).map_err(|_| EstimateError::MalformedNumber {
        field: "card_count",
        value: trimmed.to_string(),
    })
}

/// Parses a per-card price such as `0.25`.
pub fn parse_price(input: &str) -> Result<Decimal, EstimateError> {
    let trimmed = input.trim();
    let price: Decimal = trimmed.parse().map_err(|_| EstimateError::MalformedNumber {
        field: "price_per_card",
        value: trimmed.to_string(),
    })?;

    if price.is_sign_negative() && !price.is_zero() {
        return Err(EstimateError::NegativePrice(price));
    }

    Ok(price)
}

/// One row of the bulk discount table. Lower bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscountTier {
    min_cards: u32,
    rate: Decimal,
}

impl DiscountTier {
    pub fn new(min_cards: u32, rate: Decimal) -> Self {
        Self { min_cards, rate }
    }

    pub fn min_cards(&self) -> u32 {
        self.min_cards
    }

    pub fn rate(&self) -> Decimal {
        self.rate
    }

    pub fn applies_to(&self, card_count: u32) -> bool {
        card_count >= self.min_cards
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostBreakdown {
    subtotal: Decimal,
    discount_rate: Decimal,
    discount_amount: Decimal,
    total: Decimal,
}

impl CostBreakdown {
    /// The total is always `subtotal - subtotal * rate`, which is exactly
    /// `subtotal * (1 - rate)` in decimal arithmetic. `None` when the
    /// discount falls outside the decimal range.
    pub fn new(subtotal: Decimal, discount_rate: Decimal) -> Option<Self> {
        let discount_amount = subtotal.checked_mul(discount_rate)?;
        let total = subtotal.checked_sub(discount_amount)?;

        Some(Self {
            subtotal,
            discount_rate,
            discount_amount,
            total,
        })
    }

    pub fn zero() -> Self {
        Self {
            subtotal: Decimal::ZERO,
            discount_rate: Decimal::ZERO,
            discount_amount: Decimal::ZERO,
            total: Decimal::ZERO,
        }
    }

    pub fn subtotal(&self) -> Decimal {
        self.subtotal
    }

    pub fn discount_rate(&self) -> Decimal {
        self.discount_rate
    }

    pub fn discount_amount(&self) -> Decimal {
        self.discount_amount
    }

    pub fn total(&self) -> Decimal {
        self.total
    }

    pub fn is_discounted(&self) -> bool {
        self.discount_rate > Decimal::ZERO
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionPlan {
    index: u32,
    cards_in_session: u32,
    estimated_minutes: u64,
}

impl SessionPlan {
    pub fn new(index: u32, cards_in_session: u32, estimated_minutes: u64) -> Self {
        Self {
            index,
            cards_in_session,
            estimated_minutes,
        }
    }

    /// 1-based position in the plan.
    pub fn index(&self) -> u32 {
        self.index
    }

    pub fn cards_in_session(&self) -> u32 {
        self.cards_in_session
    }

    pub fn estimated_minutes(&self) -> u64 {
        self.estimated_minutes
    }
}

/// Result of one estimate. A `card_count` of zero marks the empty estimate
/// returned for requests with nothing to show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Estimate {
    card_count: u32,
    study_minutes: u64,
    cost: CostBreakdown,
    is_quick_session: bool,
    sessions: Vec<SessionPlan>,
}

impl Estimate {
    pub fn new(
        card_count: u32,
        study_minutes: u64,
        cost: CostBreakdown,
        is_quick_session: bool,
        sessions: Vec<SessionPlan>,
    ) -> Self {
        Self {
            card_count,
            study_minutes,
            cost,
            is_quick_session,
            sessions,
        }
    }

    pub fn empty() -> Self {
        Self::new(0, 0, CostBreakdown::zero(), false, Vec::new())
    }

    pub fn is_empty(&self) -> bool {
        self.card_count == 0
    }

    pub fn card_count(&self) -> u32 {
        self.card_count
    }

    pub fn study_minutes(&self) -> u64 {
        self.study_minutes
    }

    pub fn cost(&self) -> &CostBreakdown {
        &self.cost
    }

    pub fn subtotal(&self) -> Decimal {
        self.cost.subtotal()
    }

    pub fn discount_rate(&self) -> Decimal {
        self.cost.discount_rate()
    }

    pub fn discount_amount(&self) -> Decimal {
        self.cost.discount_amount()
    }

    pub fn total(&self) -> Decimal {
        self.cost.total()
    }

    pub fn is_quick_session(&self) -> bool {
        self.is_quick_session
    }

    pub fn sessions(&self) -> &[SessionPlan] {
        &self.sessions
    }
}

impl Default for Estimate {
    fn default() -> Self {
        Self::empty()
    }
}
