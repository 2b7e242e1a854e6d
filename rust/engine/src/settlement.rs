use serde::{Deserialize, Serialize};
use std::fmt;

use crate::cards::Card;

/// How a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// Player total above the opponent's
    Win,
    /// Player total below the opponent's
    Lose,
    /// Equal totals
    Draw,
    /// Player left before judging
    Abandoned,
}

impl Outcome {
    pub fn label(&self) -> &'static str {
        match self {
            Outcome::Win => "win",
            Outcome::Lose => "lose",
            Outcome::Draw => "draw",
            Outcome::Abandoned => "abandon",
        }
    }

    /// Abandoning counts as a loss for the player.
    pub fn is_loss(&self) -> bool {
        matches!(self, Outcome::Lose | Outcome::Abandoned)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Result handed back by `judge` and `abandon`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settlement {
    pub outcome: Outcome,
    pub player_total: u32,
    pub opponent_total: u32,
    /// Amount credited to the player (payout or refund)
    pub paid: u64,
    /// Full opponent hand, revealed on every settlement
    pub opponent_hand: Vec<Card>,
}

/// Compares totals. Checks run in order: higher player total, lower, equal.
pub fn resolve(player_total: u32, opponent_total: u32) -> Outcome {
    if player_total > opponent_total {
        Outcome::Win
    } else if player_total < opponent_total {
        Outcome::Lose
    } else {
        Outcome::Draw
    }
}

/// Amount owed to the player for a judged outcome.
///
/// A win pays twice the stake, a draw returns the stake, a loss pays nothing.
/// Abandoned rounds go through [`abandon_refund`] instead.
///
/// Returns `None` if the payout does not fit in a `u64`.
///
/// # Examples
///
/// ```
/// use cardduel_engine::settlement::{payout_for, Outcome};
///
/// assert_eq!(payout_for(Outcome::Win, 10), Some(20));
/// assert_eq!(payout_for(Outcome::Draw, 10), Some(10));
/// assert_eq!(payout_for(Outcome::Lose, 10), Some(0));
/// assert_eq!(payout_for(Outcome::Win, u64::MAX), None);
/// ```
pub fn payout_for(outcome: Outcome, stake: u64) -> Option<u64> {
    match outcome {
        Outcome::Win => stake.checked_mul(2),
        Outcome::Draw => Some(stake),
        Outcome::Lose => Some(0),
        Outcome::Abandoned => Some(abandon_refund(stake)),
    }
}

/// Half the stake, rounded down. The remainder stays in the pool.
pub fn abandon_refund(stake: u64) -> u64 {
    stake / 2
}
