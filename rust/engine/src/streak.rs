use std::collections::HashMap;

use crate::cards::Card;
use crate::session::ParticipantId;

/// Opponent streak at which the mercy rule starts to apply.
pub const MERCY_STREAK: u32 = 3;

/// Highest rank the opponent keeps on its initial card while the mercy rule applies.
pub const MERCY_RANK_CEILING: u8 = 5;

/// Consecutive opponent wins per participant.
#[derive(Debug, Clone, Default)]
pub struct StreakTracker {
    streaks: HashMap<ParticipantId, u32>,
}

impl StreakTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, participant: &ParticipantId) -> u32 {
        self.streaks.get(participant).copied().unwrap_or(0)
    }

    /// Opponent won the round, or the participant abandoned it.
    pub fn record_opponent_win(&mut self, participant: &ParticipantId) -> u32 {
        let streak = self.streaks.entry(participant.clone()).or_insert(0);
        *streak = streak.saturating_add(1);
        *streak
    }

    /// Participant won the round.
    pub fn record_player_win(&mut self, participant: &ParticipantId) {
        self.streaks.insert(participant.clone(), 0);
    }

    pub fn mercy_applies(&self, participant: &ParticipantId) -> bool {
        self.get(participant) >= MERCY_STREAK
    }
}

/// Remaps a high rank to `rank % 6` once the opponent streak reaches [`MERCY_STREAK`].
///
/// Only the opponent's initial card goes through here.
///
/// ```
/// use cardduel_engine::cards::Card;
/// use cardduel_engine::streak::apply_mercy;
///
/// assert_eq!(apply_mercy(Card::new(9, 1), 3).rank, 3);
/// assert_eq!(apply_mercy(Card::new(9, 1), 2).rank, 9);
/// assert_eq!(apply_mercy(Card::new(5, 1), 7).rank, 5);
/// ```
pub fn apply_mercy(card: Card, streak: u32) -> Card {
    if streak >= MERCY_STREAK && card.rank > MERCY_RANK_CEILING {
        Card {
            rank: card.rank % (MERCY_RANK_CEILING + 1),
            ..card
        }
    } else {
        card
    }
}
