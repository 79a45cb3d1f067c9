use crate::data_structures::DeckRequest;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    term: String,
    definition: String,
}

impl Card {
    pub fn new(term: impl Into<String>, definition: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            definition: definition.into(),
        }
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn definition(&self) -> &str {
        &self.definition
    }
}

/// A study deck bounded by its target size. Holds at most `size` cards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "DeckRecord")]
pub struct Deck {
    topic: String,
    size: u32,
    shuffle: bool,
    definitions_first: bool,
    cards: Vec<Card>,
    price_per_card: Option<Decimal>,
    created_at: DateTime<Utc>,
}

/// Wire shape of a deck; optional fields take their defaults and the card
/// list is cut down to `size` on the way in.
#[derive(Deserialize)]
struct DeckRecord {
    topic: String,
    size: u32,
    #[serde(default)]
    shuffle: bool,
    #[serde(default)]
    definitions_first: bool,
    #[serde(default)]
    cards: Vec<Card>,
    #[serde(default)]
    price_per_card: Option<Decimal>,
    #[serde(default = "Utc::now")]
    created_at: DateTime<Utc>,
}

impl From<DeckRecord> for Deck {
    fn from(record: DeckRecord) -> Self {
        Deck {
            topic: record.topic,
            size: record.size,
            shuffle: record.shuffle,
            definitions_first: record.definitions_first,
            cards: Vec::new(),
            price_per_card: record.price_per_card,
            created_at: record.created_at,
        }
        .with_cards(record.cards)
    }
}

impl Deck {
    pub fn new(topic: impl Into<String>, size: u32) -> Self {
        Self {
            topic: topic.into(),
            size,
            shuffle: false,
            definitions_first: false,
            cards: Vec::new(),
            price_per_card: None,
            created_at: Utc::now(),
        }
    }

    pub fn with_shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle = shuffle;
        self
    }

    pub fn with_definitions_first(mut self, definitions_first: bool) -> Self {
        self.definitions_first = definitions_first;
        self
    }

    /// Replaces the cards, keeping only the first `size`.
    pub fn with_cards(mut self, mut cards: Vec<Card>) -> Self {
        cards.truncate(self.size as usize);
        self.cards = cards;
        self
    }

    pub fn with_price_per_card(mut self, price_per_card: Decimal) -> Self {
        self.price_per_card = Some(price_per_card);
        self
    }

    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Returns `false` and leaves the deck untouched once it is full.
    pub fn add_card(&mut self, card: Card) -> bool {
        if self.is_full() {
            return false;
        }
        self.cards.push(card);
        true
    }

    /// Out-of-range indices are ignored.
    pub fn remove_card(&mut self, index: usize) -> Option<Card> {
        if index < self.cards.len() {
            Some(self.cards.remove(index))
        } else {
            None
        }
    }

    pub fn toggle_shuffle(&mut self) {
        self.shuffle = !self.shuffle;
    }

    pub fn toggle_definitions_first(&mut self) {
        self.definitions_first = !self.definitions_first;
    }

    pub fn to_request(&self) -> DeckRequest {
        let request = DeckRequest::new(self.topic.clone(), self.size, self.shuffle);
        match self.price_per_card {
            Some(price) => request.with_price_per_card(price),
            None => request,
        }
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn shuffle(&self) -> bool {
        self.shuffle
    }

    pub fn definitions_first(&self) -> bool {
        self.definitions_first
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn price_per_card(&self) -> Option<Decimal> {
        self.price_per_card
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn is_full(&self) -> bool {
        self.cards.len() >= self.size as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_cards() -> Vec<Card> {
        vec![
            Card::new("Allied Powers", "US, UK, USSR and allies against Axis."),
            Card::new("Axis Powers", "Germany, Italy, Japan alliance."),
            Card::new("D-Day", "Allied invasion of Normandy, June 6, 1944."),
        ]
    }

    #[test]
    fn test_cards_truncated_to_size() {
        let deck = Deck::new("World War II", 2).with_cards(sample_cards());
        assert_eq!(deck.cards().len(), 2);
        assert!(deck.is_full());
    }

    #[test]
    fn test_add_card_respects_capacity() {
        let mut deck = Deck::new("World War II", 3).with_cards(sample_cards()[..2].to_vec());

        assert!(deck.add_card(Card::new("Blitz", "German bombing campaign on the UK.")));
        assert!(!deck.add_card(Card::new("V-E Day", "Victory in Europe, May 8, 1945.")));
        assert_eq!(deck.cards().len(), 3);
        assert_eq!(deck.cards()[2].term(), "Blitz");
    }

    #[test]
    fn test_remove_card() {
        let mut deck = Deck::new("World War II", 10).with_cards(sample_cards());

        let removed = deck.remove_card(1).unwrap();
        assert_eq!(removed.term(), "Axis Powers");
        assert_eq!(deck.cards().len(), 2);
        assert!(deck.remove_card(7).is_none());
        assert_eq!(deck.cards().len(), 2);
    }

    #[test]
    fn test_toggles() {
        let mut deck = Deck::new("Cell Parts", 20);
        deck.toggle_shuffle();
        deck.toggle_definitions_first();
        assert!(deck.shuffle());
        assert!(deck.definitions_first());

        deck.toggle_shuffle();
        assert!(!deck.shuffle());
    }

    #[test]
    fn test_to_request() {
        let deck = Deck::new("Cell Parts", 20)
            .with_shuffle(true)
            .with_price_per_card(Decimal::new(30, 2));
        let request = deck.to_request();

        assert_eq!(request.topic(), "Cell Parts");
        assert_eq!(request.card_count(), 20);
        assert!(request.shuffle_enabled());
        assert_eq!(request.price_per_card(), Some(Decimal::new(30, 2)));
    }

    #[test]
    fn test_deserialize_applies_defaults_and_truncates() {
        let json = r#"{"topic": "Cell Parts", "size": 1, "cards": [
            {"term": "Mitochondria", "definition": "ATP production via cellular respiration."},
            {"term": "Ribosome", "definition": "Builds proteins from amino acids."}
        ], "created_at": "2025-11-24T09:00:00Z"}"#;

        let deck: Deck = serde_json::from_str(json).unwrap();
        assert_eq!(deck.cards().len(), 1);
        assert!(!deck.shuffle());
        assert_eq!(deck.price_per_card(), None);
        assert_eq!(
            deck.created_at(),
            Utc.with_ymd_and_hms(2025, 11, 24, 9, 0, 0).unwrap()
        );
    }
}
