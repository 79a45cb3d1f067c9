use crate::data_structures::DiscountTier;
use crate::error::{EstimateError, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub const BASE_SECONDS_PER_CARD: u32 = 30;
pub const SHUFFLE_PENALTY_SECONDS: u32 = 5;
pub const SESSION_SIZE: u32 = 5;
pub const QUICK_SESSION_MAX_MINUTES: u64 = 2;
pub const QUICK_SESSION_MAX_CARDS: u32 = 10;

/// 0.25 currency units per card.
pub const DEFAULT_PRICE_PER_CARD: Decimal = Decimal::from_parts(25, 0, 0, false, 2);

/// Bulk discount table: 15% from 30 cards, 10% from 20 cards.
pub fn default_discount_tiers() -> Vec<DiscountTier> {
    vec![
        DiscountTier::new(30, Decimal::new(15, 2)),
        DiscountTier::new(20, Decimal::new(10, 2)),
    ]
}

/// Tunable knobs for an [`Estimator`](crate::Estimator). Missing fields fall
/// back to the defaults when deserialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimatorConfig {
    pub base_seconds_per_card: u32,
    pub shuffle_penalty_seconds: u32,
    pub default_price_per_card: Decimal,
    pub session_size: u32,
    pub quick_session_max_minutes: u64,
    pub quick_session_max_cards: u32,
    pub discount_tiers: Vec<DiscountTier>,
}

impl EstimatorConfig {
    pub fn new() -> Self {
        Self {
            base_seconds_per_card: BASE_SECONDS_PER_CARD,
            shuffle_penalty_seconds: SHUFFLE_PENALTY_SECONDS,
            default_price_per_card: DEFAULT_PRICE_PER_CARD,
            session_size: SESSION_SIZE,
            quick_session_max_minutes: QUICK_SESSION_MAX_MINUTES,
            quick_session_max_cards: QUICK_SESSION_MAX_CARDS,
            discount_tiers: default_discount_tiers(),
        }
    }

    pub fn from_json(content: &str) -> anyhow::Result<Self> {
        let config: Self = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.session_size == 0 {
            return Err(EstimateError::InvalidConfig(
                "session_size must be at least 1".to_string(),
            ));
        }

        if self.default_price_per_card.is_sign_negative() && !self.default_price_per_card.is_zero()
        {
            return Err(EstimateError::NegativePrice(self.default_price_per_card));
        }

        for tier in &self.discount_tiers {
            if tier.rate() < Decimal::ZERO || tier.rate() > Decimal::ONE {
                return Err(EstimateError::InvalidConfig(format!(
                    "discount rate {} for {}+ cards is outside 0..=1",
                    tier.rate(),
                    tier.min_cards()
                )));
            }
        }

        Ok(())
    }
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_price_constant() {
        assert_eq!(DEFAULT_PRICE_PER_CARD, Decimal::new(25, 2));
        assert_eq!(EstimatorConfig::default().default_price_per_card, DEFAULT_PRICE_PER_CARD);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = EstimatorConfig::from_json(r#"{"session_size": 8}"#).unwrap();
        assert_eq!(config.session_size, 8);
        assert_eq!(config.base_seconds_per_card, 30);
        assert_eq!(config.discount_tiers, default_discount_tiers());
    }

    #[test]
    fn test_json_price_as_string() {
        let config = EstimatorConfig::from_json(r#"{"default_price_per_card": "0.40"}"#).unwrap();
        assert_eq!(config.default_price_per_card, Decimal::new(40, 2));
    }

    #[test]
    fn test_zero_session_size_rejected() {
        let config = EstimatorConfig {
            session_size: 0,
            ..EstimatorConfig::default()
        };
        assert!(matches!(config.validate(), Err(EstimateError::InvalidConfig(_))));
        assert!(EstimatorConfig::from_json(r#"{"session_size": 0}"#).is_err());
    }

    #[test]
    fn test_out_of_range_rate_rejected() {
        let config = EstimatorConfig {
            discount_tiers: vec![DiscountTier::new(5, Decimal::new(150, 2))],
            ..EstimatorConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
