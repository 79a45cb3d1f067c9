use crate::config::{default_discount_tiers, DEFAULT_PRICE_PER_CARD};
use crate::data_structures::{CostBreakdown, DiscountTier};
use crate::error::{EstimateError, Result};
use rust_decimal::Decimal;

pub struct PricingProvider {
    default_price_per_card: Decimal,
    discount_tiers: Vec<DiscountTier>,
}

impl PricingProvider {
    pub fn new() -> Self {
        Self::with_tiers(DEFAULT_PRICE_PER_CARD, default_discount_tiers())
    }

    pub fn with_tiers(default_price_per_card: Decimal, mut discount_tiers: Vec<DiscountTier>) -> Self {
        // Highest threshold first so the first match wins.
        discount_tiers.sort_by(|a, b| b.min_cards().cmp(&a.min_cards()));

        Self {
            default_price_per_card,
            discount_tiers,
        }
    }

    pub fn default_price_per_card(&self) -> Decimal {
        self.default_price_per_card
    }

    pub fn discount_tiers(&self) -> &[DiscountTier] {
        &self.discount_tiers
    }

    pub fn get_discount_rate(&self, card_count: u32) -> Decimal {
        self.discount_tiers
            .iter()
            .find(|tier| tier.applies_to(card_count))
            .map(|tier| tier.rate())
            .unwrap_or(Decimal::ZERO)
    }

    pub fn calculate_subtotal(&self, card_count: u32, price_per_card: Decimal) -> Option<Decimal> {
        Decimal::from(card_count).checked_mul(price_per_card)
    }

    /// Shuffle never enters here; it only affects study time.
    pub fn calculate_cost(
        &self,
        card_count: u32,
        price_per_card: Option<Decimal>,
    ) -> Result<CostBreakdown> {
        let price = price_per_card.unwrap_or(self.default_price_per_card);

        self.calculate_subtotal(card_count, price)
            .and_then(|subtotal| CostBreakdown::new(subtotal, self.get_discount_rate(card_count)))
            .ok_or(EstimateError::AmountOverflow {
                card_count,
                price_per_card: price,
            })
    }
}

impl Default for PricingProvider {
    fn default() -> Self {
        Self::new()
    }
}
