use crate::calculator::ceil_minutes;
use crate::config::SESSION_SIZE;
use crate::data_structures::SessionPlan;
use crate::error::{EstimateError, Result};

/// Splits a deck into study sessions of at most `session_size` cards.
pub struct SessionPlanner {
    session_size: u32,
}

impl SessionPlanner {
    pub fn new() -> Self {
        Self {
            session_size: SESSION_SIZE,
        }
    }

    pub fn with_session_size(session_size: u32) -> Result<Self> {
        if session_size == 0 {
            return Err(EstimateError::InvalidConfig(
                "session_size must be at least 1".to_string(),
            ));
        }

        Ok(Self { session_size })
    }

    pub fn session_size(&self) -> u32 {
        self.session_size
    }

    /// Greedy left-to-right chunking. Every session holds at least one card
    /// and the loop stops exactly when no cards remain.
    pub fn plan_sessions(&self, card_count: u32, seconds_per_card: u32) -> Vec<SessionPlan> {
        let mut sessions = Vec::with_capacity(self.session_count(card_count));
        let mut remaining = card_count;
        let mut index = 1;

        while remaining > 0 {
            let take = self.session_size.min(remaining);
            sessions.push(SessionPlan::new(
                index,
                take,
                ceil_minutes(take, seconds_per_card),
            ));
            remaining -= take;
            index += 1;
        }

        sessions
    }

    pub fn session_count(&self, card_count: u32) -> usize {
        card_count.div_ceil(self.session_size) as usize
    }
}

impl Default for SessionPlanner {
    fn default() -> Self {
        Self::new()
    }
}
