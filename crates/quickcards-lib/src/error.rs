use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EstimateError {
    #[error("Topic is blank")]
    BlankTopic,

    #[error("No deck size selected")]
    NoCardsSelected,

    #[error("Card count cannot be negative: {0}")]
    NegativeCardCount(i64),

    #[error("Price per card cannot be negative: {0}")]
    NegativePrice(Decimal),

    #[error("Malformed number for {field}: {value:?}")]
    MalformedNumber { field: &'static str, value: String },

    #[error("Cost of {card_count} cards at {price_per_card} per card is out of range")]
    AmountOverflow {
        card_count: u32,
        price_per_card: Decimal,
    },

    #[error("Invalid estimator configuration: {0}")]
    InvalidConfig(String),
}

impl EstimateError {
    /// Blank topic and zero cards are the normal "nothing selected yet"
    /// states rather than caller bugs.
    pub fn is_nothing_selected(&self) -> bool {
        matches!(self, EstimateError::BlankTopic | EstimateError::NoCardsSelected)
    }
}

pub type Result<T> = std::result::Result<T, EstimateError>;
