//! Card issuance from injectable seed sources.
//!
//! A draw turns `(entropy, participant, salt)` into a `u64` seed and maps it to a
//! card with [`card_from_seed`]. The entropy part is pluggable through
//! [`SeedSource`] so tests and replays can pin every card.
//!
//! [`ClockSeed`] is the production source. It is only as unpredictable as the
//! wall clock: anyone who controls when a call lands can influence the result.

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::cards::{Card, RANK_COUNT, SUIT_COUNT};
use crate::session::ParticipantId;

/// Salt offset for opponent draws so they never reuse a player salt.
pub const OPPONENT_SALT_OFFSET: u64 = 100;

/// Supplies the seed for a single draw.
pub trait SeedSource {
    fn seed(&mut self, participant: &ParticipantId, salt: u64) -> u64;
}

impl<S: SeedSource + ?Sized> SeedSource for Box<S> {
    fn seed(&mut self, participant: &ParticipantId, salt: u64) -> u64 {
        (**self).seed(participant, salt)
    }
}

/// Maps a seed to a card: `rank = seed % 13`, `suit = (seed / 13) % 4`.
pub fn card_from_seed(seed: u64) -> Card {
    Card {
        rank: (seed % u64::from(RANK_COUNT)) as u8,
        suit: ((seed / u64::from(RANK_COUNT)) % u64::from(SUIT_COUNT)) as u8,
        drawn: true,
    }
}

/// Draws one card for `participant` using `salt` to separate draws made in the same call.
pub fn draw<S: SeedSource + ?Sized>(source: &mut S, participant: &ParticipantId, salt: u64) -> Card {
    let seed = source.seed(participant, salt);
    let card = card_from_seed(seed);
    tracing::debug!(
        participant = %participant,
        salt,
        rank = card.rank,
        suit = card.suit,
        "card drawn"
    );
    card
}

/// Folds entropy, participant and salt into one seed through a ChaCha20 block.
pub fn mix(entropy: u64, participant: &ParticipantId, salt: u64) -> u64 {
    let mut key = [0u8; 32];
    key[..8].copy_from_slice(&entropy.to_le_bytes());
    key[8..16].copy_from_slice(&salt.to_le_bytes());
    key[16..24].copy_from_slice(&participant.fingerprint().to_le_bytes());
    ChaCha20Rng::from_seed(key).next_u64()
}

/// Wall-clock entropy. Best effort only.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClockSeed;

impl SeedSource for ClockSeed {
    fn seed(&mut self, participant: &ParticipantId, salt: u64) -> u64 {
        let now = chrono::Utc::now();
        let nanos = now
            .timestamp_nanos_opt()
            .unwrap_or_else(|| now.timestamp_micros());
        mix(nanos as u64, participant, salt)
    }
}

/// Reproducible entropy stream, one ChaCha20 word per draw.
#[derive(Debug, Clone)]
pub struct ChaChaSeed {
    rng: ChaCha20Rng,
}

impl ChaChaSeed {
    pub fn new_with_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }
}

impl SeedSource for ChaChaSeed {
    fn seed(&mut self, participant: &ParticipantId, salt: u64) -> u64 {
        let entropy = self.rng.next_u64();
        mix(entropy, participant, salt)
    }
}

/// Fixed entropy: the seed depends only on the participant and the salt.
#[derive(Debug, Clone, Copy)]
pub struct FixedSeed(pub u64);

impl SeedSource for FixedSeed {
    fn seed(&mut self, participant: &ParticipantId, salt: u64) -> u64 {
        mix(self.0, participant, salt)
    }
}

/// Hands out raw seeds from a script, wrapping around at the end.
///
/// An empty script always yields `0`.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSeeds {
    seeds: Vec<u64>,
    cursor: usize,
}

impl ScriptedSeeds {
    pub fn new(seeds: impl Into<Vec<u64>>) -> Self {
        Self {
            seeds: seeds.into(),
            cursor: 0,
        }
    }

    /// Script of bare ranks; every card comes out as a club.
    pub fn ranks(ranks: &[u8]) -> Self {
        Self::new(ranks.iter().map(|&r| u64::from(r)).collect::<Vec<_>>())
    }

    pub fn draws_made(&self) -> usize {
        self.cursor
    }
}

impl SeedSource for ScriptedSeeds {
    fn seed(&mut self, _participant: &ParticipantId, _salt: u64) -> u64 {
        if self.seeds.is_empty() {
            return 0;
        }
        let seed = self.seeds[self.cursor % self.seeds.len()];
        self.cursor += 1;
        seed
    }
}
