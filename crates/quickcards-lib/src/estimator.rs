use crate::calculator::Calculator;
use crate::config::EstimatorConfig;
use crate::data_structures::{CostBreakdown, DeckRequest, Estimate, SessionPlan};
use crate::error::{EstimateError, Result};
use crate::planner::SessionPlanner;
use crate::pricing::PricingProvider;
use rust_decimal::Decimal;
use tracing::{debug, warn};

/// Turns a [`DeckRequest`] into an [`Estimate`]. Holds configuration only, so
/// a single instance can serve any number of calls.
pub struct Estimator {
    config: EstimatorConfig,
    pricing_provider: PricingProvider,
    calculator: Calculator,
    planner: SessionPlanner,
}

impl Estimator {
    pub fn new() -> Self {
        Self {
            config: EstimatorConfig::default(),
            pricing_provider: PricingProvider::new(),
            calculator: Calculator::new(),
            planner: SessionPlanner::new(),
        }
    }

    pub fn from_config(config: EstimatorConfig) -> Result<Self> {
        config.validate()?;

        let pricing_provider = PricingProvider::with_tiers(
            config.default_price_per_card,
            config.discount_tiers.clone(),
        );
        let calculator = Calculator::with_rates(
            config.base_seconds_per_card,
            config.shuffle_penalty_seconds,
            config.quick_session_max_minutes,
            config.quick_session_max_cards,
        );
        let planner = SessionPlanner::with_session_size(config.session_size)?;

        Ok(Self {
            config,
            pricing_provider,
            calculator,
            planner,
        })
    }

    pub fn config(&self) -> &EstimatorConfig {
        &self.config
    }

    pub fn validate(&self, request: &DeckRequest) -> Result<()> {
        if request.trimmed_topic().is_empty() {
            return Err(EstimateError::BlankTopic);
        }

        if request.card_count() == 0 {
            return Err(EstimateError::NoCardsSelected);
        }

        if let Some(price) = request.price_per_card() {
            if price.is_sign_negative() && !price.is_zero() {
                return Err(EstimateError::NegativePrice(price));
            }
        }

        Ok(())
    }

    /// Never fails: requests with nothing to show yield [`Estimate::empty`].
    pub fn estimate(&self, request: &DeckRequest) -> Estimate {
        match self.try_estimate(request) {
            Ok(estimate) => estimate,
            Err(e) if e.is_nothing_selected() => {
                debug!(reason = %e, "nothing to estimate");
                Estimate::empty()
            }
            Err(e) => {
                warn!(error = %e, "rejected deck request");
                Estimate::empty()
            }
        }
    }

    pub fn try_estimate(&self, request: &DeckRequest) -> Result<Estimate> {
        self.validate(request)?;

        let card_count = request.card_count();
        let seconds_per_card = self.calculator.seconds_per_card(request.shuffle_enabled());
        let study_minutes = self.compute_study_minutes(card_count, request.shuffle_enabled());
        let cost = self.compute_cost(card_count, request.price_per_card())?;
        let is_quick_session = self.compute_quick_session_flag(study_minutes, card_count);
        let sessions = self.plan_sessions(card_count, seconds_per_card);

        debug!(
            topic = request.trimmed_topic(),
            card_count,
            study_minutes,
            total = %cost.total(),
            sessions = sessions.len(),
            "computed estimate"
        );

        Ok(Estimate::new(
            card_count,
            study_minutes,
            cost,
            is_quick_session,
            sessions,
        ))
    }

    pub fn compute_study_minutes(&self, card_count: u32, shuffle_enabled: bool) -> u64 {
        self.calculator
            .calculate_study_minutes(card_count, shuffle_enabled)
    }

    /// `None` prices at the configured default.
    pub fn compute_cost(
        &self,
        card_count: u32,
        price_per_card: Option<Decimal>,
    ) -> Result<CostBreakdown> {
        self.pricing_provider
            .calculate_cost(card_count, price_per_card)
    }

    pub fn compute_quick_session_flag(&self, minutes: u64, card_count: u32) -> bool {
        self.calculator.is_quick_session(minutes, card_count)
    }

    pub fn plan_sessions(&self, card_count: u32, seconds_per_card: u32) -> Vec<SessionPlan> {
        self.planner.plan_sessions(card_count, seconds_per_card)
    }

    pub fn seconds_per_card(&self, shuffle_enabled: bool) -> u32 {
        self.calculator.seconds_per_card(shuffle_enabled)
    }
}

impl Default for Estimator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_structures::{parse_price, DiscountTier};

    fn money(cents: i64) -> Decimal {
        Decimal::new(cents, 2)
    }

    #[test]
    fn test_history_deck_with_shuffle() {
        let estimator = Estimator::new();
        let request = DeckRequest::new("History", 10, true).with_price_per_card(money(25));

        let estimate = estimator.estimate(&request);
        assert_eq!(estimate.card_count(), 10);
        assert_eq!(estimate.study_minutes(), 6);
        assert_eq!(estimate.subtotal(), money(250));
        assert_eq!(estimate.discount_rate(), Decimal::ZERO);
        assert_eq!(estimate.total(), money(250));
        assert!(!estimate.is_quick_session());
        assert_eq!(
            estimate.sessions(),
            &[SessionPlan::new(1, 5, 3), SessionPlan::new(2, 5, 3)]
        );
    }

    #[test]
    fn test_bio_deck_gets_bulk_discount() {
        let estimator = Estimator::new();
        let request = DeckRequest::new("Bio", 20, false);

        let estimate = estimator.estimate(&request);
        assert_eq!(estimate.study_minutes(), 10);
        assert_eq!(estimate.subtotal(), money(500));
        assert_eq!(estimate.discount_rate(), Decimal::new(10, 2));
        assert_eq!(estimate.discount_amount(), money(50));
        assert_eq!(estimate.total(), money(450));
        assert_eq!(estimate.sessions().len(), 4);
    }

    #[test]
    fn test_blank_topic_gives_empty_estimate() {
        let estimator = Estimator::new();
        let request = DeckRequest::new("   ", 10, false);

        assert_eq!(estimator.estimate(&request), Estimate::empty());
        assert_eq!(
            estimator.try_estimate(&request),
            Err(EstimateError::BlankTopic)
        );
    }

    #[test]
    fn test_zero_cards_gives_empty_estimate() {
        let estimator = Estimator::new();
        let request = DeckRequest::new("X", 0, true);

        let estimate = estimator.estimate(&request);
        assert!(estimate.is_empty());
        assert!(estimate.sessions().is_empty());
        assert_eq!(
            estimator.try_estimate(&request),
            Err(EstimateError::NoCardsSelected)
        );
    }

    #[test]
    fn test_negative_price_rejected_by_strict_path() {
        let estimator = Estimator::new();
        let request = DeckRequest::new("X", 10, false).with_price_per_card(money(-5));

        assert!(matches!(
            estimator.try_estimate(&request),
            Err(EstimateError::NegativePrice(_))
        ));
        assert!(estimator.estimate(&request).is_empty());
    }

    #[test]
    fn test_out_of_range_price_rejected_by_strict_path() {
        let estimator = Estimator::new();
        let price = parse_price("10000000000000000000000000000").unwrap();
        let request = DeckRequest::new("History", 30, false).with_price_per_card(price);

        assert!(estimator.validate(&request).is_ok());
        assert!(matches!(
            estimator.try_estimate(&request),
            Err(EstimateError::AmountOverflow { card_count: 30, .. })
        ));
        assert!(estimator.estimate(&request).is_empty());
    }

    #[test]
    fn test_quick_session_flag() {
        let estimator = Estimator::new();

        let tiny = estimator.estimate(&DeckRequest::new("Verbs", 4, false));
        assert_eq!(tiny.study_minutes(), 2);
        assert!(tiny.is_quick_session());

        let ten = estimator.estimate(&DeckRequest::new("Verbs", 10, false));
        assert_eq!(ten.study_minutes(), 5);
        assert!(!ten.is_quick_session());
    }

    #[test]
    fn test_shuffle_never_changes_price() {
        let estimator = Estimator::new();
        let plain = estimator.estimate(&DeckRequest::new("Chem", 30, false));
        let shuffled = estimator.estimate(&DeckRequest::new("Chem", 30, true));

        assert_eq!(plain.cost(), shuffled.cost());
        assert!(shuffled.study_minutes() > plain.study_minutes());
    }

    #[test]
    fn test_thirty_cards_total_identity() {
        let estimator = Estimator::new();
        let estimate = estimator.estimate(&DeckRequest::new("Chem", 30, false));

        assert_eq!(estimate.discount_rate(), Decimal::new(15, 2));
        assert_eq!(
            estimate.total(),
            estimate.subtotal() * (Decimal::ONE - estimate.discount_rate())
        );
        assert_eq!(estimate.total(), Decimal::new(6375, 3));
    }

    #[test]
    fn test_estimate_is_idempotent() {
        let estimator = Estimator::new();
        let request = DeckRequest::new("History", 27, true);

        assert_eq!(estimator.estimate(&request), estimator.estimate(&request));
    }

    #[test]
    fn test_from_config_overrides() {
        let config = EstimatorConfig {
            session_size: 4,
            default_price_per_card: money(10),
            discount_tiers: vec![DiscountTier::new(5, Decimal::new(50, 2))],
            ..EstimatorConfig::default()
        };
        let estimator = Estimator::from_config(config).unwrap();
        let estimate = estimator.estimate(&DeckRequest::new("Art", 9, false));

        assert_eq!(estimate.subtotal(), money(90));
        assert_eq!(estimate.total(), money(45));
        let sizes: Vec<u32> = estimate
            .sessions()
            .iter()
            .map(|s| s.cards_in_session())
            .collect();
        assert_eq!(sizes, vec![4, 4, 1]);
    }

    #[test]
    fn test_from_config_rejects_zero_session_size() {
        let config = EstimatorConfig {
            session_size: 0,
            ..EstimatorConfig::default()
        };
        assert!(Estimator::from_config(config).is_err());
    }
}
