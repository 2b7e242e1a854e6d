//! Shared handle that serializes every operation on one engine.
//!
//! Each call holds the lock for the whole transition, so the session table,
//! the streak table and the pool move together or not at all.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::cards::Card;
use crate::engine::Engine;
use crate::errors::GameError;
use crate::ledger::Ledger;
use crate::rng::SeedSource;
use crate::session::{ParticipantId, Phase};
use crate::settlement::Settlement;

#[derive(Debug)]
pub struct Table<L, S> {
    engine: Arc<Mutex<Engine<L, S>>>,
}

impl<L, S> Clone for Table<L, S> {
    fn clone(&self) -> Self {
        Self {
            engine: Arc::clone(&self.engine),
        }
    }
}

impl<L: Ledger, S: SeedSource> Table<L, S> {
    pub fn new(engine: Engine<L, S>) -> Self {
        Self {
            engine: Arc::new(Mutex::new(engine)),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Engine<L, S>>, GameError> {
        self.engine.lock().map_err(|_| GameError::TablePoisoned)
    }

    /// Runs `f` inside the table's critical section.
    pub fn with<R>(&self, f: impl FnOnce(&mut Engine<L, S>) -> R) -> Result<R, GameError> {
        let mut guard = self.lock()?;
        Ok(f(&mut guard))
    }

    pub fn start(&self, caller: &ParticipantId, stake: u64) -> Result<(), GameError> {
        self.lock()?.start(caller, stake)
    }

    pub fn hit(&self, caller: &ParticipantId) -> Result<Card, GameError> {
        self.lock()?.hit(caller)
    }

    pub fn judge(&self, caller: &ParticipantId) -> Result<Settlement, GameError> {
        self.lock()?.judge(caller)
    }

    pub fn abandon(&self, caller: &ParticipantId) -> Result<Settlement, GameError> {
        self.lock()?.abandon(caller)
    }

    pub fn reset(&self, caller: &ParticipantId) -> Result<(), GameError> {
        self.lock()?.reset(caller);
        Ok(())
    }

    pub fn withdraw(&self, caller: &ParticipantId, amount: u64) -> Result<(), GameError> {
        self.lock()?.withdraw(caller, amount)
    }

    pub fn withdraw_all(&self, caller: &ParticipantId) -> Result<(), GameError> {
        self.lock()?.withdraw_all(caller)
    }

    pub fn fund(&self, caller: &ParticipantId, amount: u64) -> Result<(), GameError> {
        self.lock()?.fund(caller, amount)
    }

    pub fn player_hand(&self, caller: &ParticipantId) -> Result<Vec<Card>, GameError> {
        Ok(self.lock()?.player_hand(caller).to_vec())
    }

    pub fn opponent_hand(&self, participant: &ParticipantId) -> Result<Vec<Card>, GameError> {
        Ok(self.lock()?.opponent_hand(participant).to_vec())
    }

    pub fn phase(&self, participant: &ParticipantId) -> Result<Phase, GameError> {
        Ok(self.lock()?.phase(participant))
    }

    pub fn streak(&self, participant: &ParticipantId) -> Result<u32, GameError> {
        Ok(self.lock()?.streak(participant))
    }

    pub fn pool_balance(&self) -> Result<u64, GameError> {
        Ok(self.lock()?.pool_balance())
    }
}
