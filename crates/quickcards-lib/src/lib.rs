pub mod calculator;
pub mod config;
pub mod data_structures;
pub mod deck;
pub mod error;
pub mod estimator;
pub mod loader;
pub mod planner;
pub mod pricing;
pub mod render;

pub use calculator::Calculator;
pub use config::{
    EstimatorConfig, BASE_SECONDS_PER_CARD, DEFAULT_PRICE_PER_CARD, SESSION_SIZE,
    SHUFFLE_PENALTY_SECONDS,
};
pub use data_structures::{
    parse_card_count, parse_price, CostBreakdown, DeckRequest, DiscountTier, Estimate,
    SessionPlan, DECK_SIZE_OPTIONS,
};
pub use deck::{Card, Deck};
pub use error::EstimateError;
pub use estimator::Estimator;
pub use loader::DeckLoader;
pub use planner::SessionPlanner;
pub use pricing::PricingProvider;

pub use rust_decimal::Decimal;

pub mod prelude {
    pub use crate::data_structures::{DeckRequest, Estimate, SessionPlan};
    pub use crate::deck::{Card, Deck};
    pub use crate::error::EstimateError;
    pub use crate::estimator::Estimator;
    pub use crate::render::{render_session_lines, render_summary};
    pub use anyhow::Result;
    pub use rust_decimal::Decimal;
}
