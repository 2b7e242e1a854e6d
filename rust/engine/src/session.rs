use serde::{Deserialize, Serialize};
use std::fmt;

use crate::cards::Card;

/// Most cards a player may hold in one round: the initial card plus two hits.
pub const MAX_PLAYER_HAND: usize = 3;

/// Opaque, stable identity of a caller.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParticipantId(String);

impl ParticipantId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// FNV-1a hash of the identifier, used as seed material.
    pub fn fingerprint(&self) -> u64 {
        const OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
        const PRIME: u64 = 0x0000_0100_0000_01b3;
        self.0
            .bytes()
            .fold(OFFSET, |h, b| (h ^ u64::from(b)).wrapping_mul(PRIME))
    }
}

impl From<&str> for ParticipantId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for ParticipantId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Where a participant's session stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Never started, or reset since the last round
    NoSession,
    /// Between start and judge/abandon
    Active,
    /// Judged or abandoned; hands are still on the table
    Settled,
}

/// One participant's round. Overwritten by the next `start`, never removed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSession {
    pub player_cards: Vec<Card>,
    pub opponent_cards: Vec<Card>,
    /// Stake in smallest units, fixed for the round
    pub stake: u64,
    pub active: bool,
    pub settled: bool,
}

impl GameSession {
    /// Clears the table for a new round.
    pub(crate) fn begin(&mut self, stake: u64) {
        self.player_cards.clear();
        self.opponent_cards.clear();
        self.stake = stake;
        self.active = true;
        self.settled = false;
    }

    pub(crate) fn settle(&mut self) {
        self.active = false;
        self.settled = true;
    }

    /// Drops both hands and deactivates. Stake and `settled` are kept.
    pub(crate) fn clear(&mut self) {
        self.player_cards.clear();
        self.opponent_cards.clear();
        self.active = false;
    }

    pub fn hand_full(&self) -> bool {
        self.player_cards.len() >= MAX_PLAYER_HAND
    }

    pub fn phase(&self) -> Phase {
        if self.active {
            Phase::Active
        } else if self.settled && !self.player_cards.is_empty() {
            Phase::Settled
        } else {
            Phase::NoSession
        }
    }
}
