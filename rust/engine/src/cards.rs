use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of distinct ranks. Rank `0` is the ace (face value 1), rank `12` the king.
pub const RANK_COUNT: u8 = 13;

/// Number of suits. Suits are cosmetic and never affect scoring.
pub const SUIT_COUNT: u8 = 4;

/// A single issued card.
///
/// Ranks run `0..=12` and score `rank + 1`; suits run `0..=3`.
/// `drawn` is set on every card that came out of the generator.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Rank index (0 = ace .. 12 = king)
    pub rank: u8,
    /// Suit index (0 = clubs, 1 = diamonds, 2 = hearts, 3 = spades)
    pub suit: u8,
    /// Whether the card was issued by the generator
    pub drawn: bool,
}

impl Card {
    pub fn new(rank: u8, suit: u8) -> Self {
        Self {
            rank: rank % RANK_COUNT,
            suit: suit % SUIT_COUNT,
            drawn: true,
        }
    }

    /// Points this card contributes to a hand total.
    pub fn face_value(&self) -> u32 {
        u32::from(self.rank) + 1
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self.rank {
            0 => "A".to_string(),
            10 => "J".to_string(),
            11 => "Q".to_string(),
            12 => "K".to_string(),
            r => (r + 1).to_string(),
        };
        let suit = match self.suit {
            0 => 'c',
            1 => 'd',
            2 => 'h',
            _ => 's',
        };
        write!(f, "{}{}", rank, suit)
    }
}
