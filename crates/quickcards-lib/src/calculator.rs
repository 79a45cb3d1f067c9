use crate::config::{
    BASE_SECONDS_PER_CARD, QUICK_SESSION_MAX_CARDS, QUICK_SESSION_MAX_MINUTES,
    SHUFFLE_PENALTY_SECONDS,
};

/// Whole minutes needed for `card_count` cards, rounding partial minutes up.
pub fn ceil_minutes(card_count: u32, seconds_per_card: u32) -> u64 {
    let total_seconds = u64::from(card_count) * u64::from(seconds_per_card);
    total_seconds.div_ceil(60)
}

/// Converts card counts into study time.
pub struct Calculator {
    base_seconds_per_card: u32,
    shuffle_penalty_seconds: u32,
    quick_session_max_minutes: u64,
    quick_session_max_cards: u32,
}

impl Calculator {
    pub fn new() -> Self {
        Self {
            base_seconds_per_card: BASE_SECONDS_PER_CARD,
            shuffle_penalty_seconds: SHUFFLE_PENALTY_SECONDS,
            quick_session_max_minutes: QUICK_SESSION_MAX_MINUTES,
            quick_session_max_cards: QUICK_SESSION_MAX_CARDS,
        }
    }

    pub fn with_rates(
        base_seconds_per_card: u32,
        shuffle_penalty_seconds: u32,
        quick_session_max_minutes: u64,
        quick_session_max_cards: u32,
    ) -> Self {
        Self {
            base_seconds_per_card,
            shuffle_penalty_seconds,
            quick_session_max_minutes,
            quick_session_max_cards,
        }
    }

    pub fn seconds_per_card(&self, shuffle_enabled: bool) -> u32 {
        if shuffle_enabled {
            self.base_seconds_per_card.saturating_add(self.shuffle_penalty_seconds)
        } else {
            self.base_seconds_per_card
        }
    }

    pub fn calculate_study_minutes(&self, card_count: u32, shuffle_enabled: bool) -> u64 {
        ceil_minutes(card_count, self.seconds_per_card(shuffle_enabled))
    }

    /// Both limits must hold: a small deck that runs long or a fast estimate
    /// on a big deck is not a quick session.
    pub fn is_quick_session(&self, minutes: u64, card_count: u32) -> bool {
        minutes <= self.quick_session_max_minutes && card_count <= self.quick_session_max_cards
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_card_rounds_up() {
        let calculator = Calculator::new();
        assert_eq!(calculator.calculate_study_minutes(1, false), 1);
    }

    #[test]
    fn test_shuffle_adds_penalty() {
        let calculator = Calculator::new();
        assert_eq!(calculator.seconds_per_card(false), 30);
        assert_eq!(calculator.seconds_per_card(true), 35);
        assert_eq!(calculator.calculate_study_minutes(10, true), 6);
        assert_eq!(calculator.calculate_study_minutes(10, false), 5);
    }

    #[test]
    fn test_zero_cards_take_no_time() {
        let calculator = Calculator::new();
        assert_eq!(calculator.calculate_study_minutes(0, true), 0);
    }

    #[test]
    fn test_exact_minutes_not_rounded() {
        let calculator = Calculator::new();
        assert_eq!(calculator.calculate_study_minutes(20, false), 10);
        assert_eq!(calculator.calculate_study_minutes(12, true), 7);
    }

    #[test]
    fn test_quick_session_requires_both_limits() {
        let calculator = Calculator::new();

        assert!(calculator.is_quick_session(2, 4));
        assert!(calculator.is_quick_session(0, 10));
        assert!(!calculator.is_quick_session(3, 4));
        assert!(!calculator.is_quick_session(2, 11));
    }

    #[test]
    fn test_custom_rates() {
        let calculator = Calculator::with_rates(60, 15, 5, 20);
        assert_eq!(calculator.calculate_study_minutes(3, true), 4);
        assert!(calculator.is_quick_session(5, 20));
    }
}
