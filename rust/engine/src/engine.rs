use std::collections::HashMap;

use crate::cards::Card;
use crate::config::TableConfig;
use crate::errors::GameError;
use crate::ledger::Ledger;
use crate::rng::{self, SeedSource, OPPONENT_SALT_OFFSET};
use crate::scoring::total;
use crate::session::{GameSession, ParticipantId, Phase};
use crate::settlement::{abandon_refund, payout_for, resolve, Outcome, Settlement};
use crate::streak::{apply_mercy, StreakTracker};

/// Session state machine and settlement engine for one table.
///
/// Owns every participant's [`GameSession`], the streak table and the ledger.
/// All transitions take `&mut self`, so one engine value serializes its callers;
/// wrap it in [`crate::table::Table`] to share it between threads.
///
/// # Examples
///
/// ```
/// use cardduel_engine::config::{TableConfig, UNIT};
/// use cardduel_engine::engine::Engine;
/// use cardduel_engine::ledger::InMemoryLedger;
/// use cardduel_engine::rng::ScriptedSeeds;
/// use cardduel_engine::session::ParticipantId;
/// use cardduel_engine::settlement::Outcome;
///
/// let owner = ParticipantId::from("house");
/// let alice = ParticipantId::from("alice");
/// let ledger = InMemoryLedger::new(10 * UNIT).with_account("alice", 5 * UNIT);
/// // player draws rank 9 (scores 10), opponent draws rank 6 (scores 7)
/// let seeds = ScriptedSeeds::ranks(&[9, 6]);
/// let mut engine = Engine::new(owner, TableConfig::default(), ledger, seeds).unwrap();
///
/// engine.start(&alice, UNIT).unwrap();
/// let settlement = engine.judge(&alice).unwrap();
/// assert_eq!(settlement.outcome, Outcome::Win);
/// assert_eq!(settlement.paid, 2 * UNIT);
/// ```
#[derive(Debug)]
pub struct Engine<L, S> {
    /// Stake bounds
    config: TableConfig,
    /// The only identity allowed to withdraw from the pool
    owner: ParticipantId,
    /// Accounts and pool
    ledger: L,
    /// Entropy for card draws
    seeds: S,
    /// One session per participant, overwritten on each start
    sessions: HashMap<ParticipantId, GameSession>,
    /// Consecutive opponent wins per participant
    streaks: StreakTracker,
}

impl<L: Ledger, S: SeedSource> Engine<L, S> {
    pub fn new(
        owner: ParticipantId,
        config: TableConfig,
        ledger: L,
        seeds: S,
    ) -> Result<Self, GameError> {
        config.validate()?;
        Ok(Self {
            config,
            owner,
            ledger,
            seeds,
            sessions: HashMap::new(),
            streaks: StreakTracker::new(),
        })
    }

    /// Opens a round: collects the stake and deals one card to each side.
    ///
    /// The opponent's initial card goes through the mercy rule.
    pub fn start(&mut self, caller: &ParticipantId, stake: u64) -> Result<(), GameError> {
        if !self.config.accepts(stake) {
            return Err(GameError::InvalidStake {
                stake,
                min: self.config.min_stake,
                max: self.config.max_stake,
            });
        }
        if self.is_active(caller) {
            return Err(GameError::SessionAlreadyActive);
        }
        if let Err(e) = self.ledger.debit(caller, stake) {
            tracing::warn!(participant = %caller, stake, error = %e, "stake deposit failed");
            return Err(e.into());
        }

        let streak = self.streaks.get(caller);
        let player = rng::draw(&mut self.seeds, caller, 0);
        let raw = rng::draw(&mut self.seeds, caller, OPPONENT_SALT_OFFSET);
        let opponent = apply_mercy(raw, streak);
        if opponent != raw {
            tracing::debug!(
                participant = %caller,
                streak,
                raw_rank = raw.rank,
                rank = opponent.rank,
                "mercy rule lowered opponent card"
            );
        }

        let session = self.sessions.entry(caller.clone()).or_default();
        session.begin(stake);
        session.player_cards.push(player);
        session.opponent_cards.push(opponent);

        tracing::info!(participant = %caller, stake, streak, "round started");
        Ok(())
    }

    /// Deals one more card to each side and returns the player's new card.
    pub fn hit(&mut self, caller: &ParticipantId) -> Result<Card, GameError> {
        let session = self
            .sessions
            .get_mut(caller)
            .filter(|s| s.active)
            .ok_or(GameError::NoActiveSession)?;
        if session.hand_full() {
            return Err(GameError::HandFull);
        }

        let player_salt = session.player_cards.len() as u64;
        let opponent_salt = OPPONENT_SALT_OFFSET + session.opponent_cards.len() as u64;
        let player = rng::draw(&mut self.seeds, caller, player_salt);
        let opponent = rng::draw(&mut self.seeds, caller, opponent_salt);
        session.player_cards.push(player);
        session.opponent_cards.push(opponent);

        tracing::debug!(
            participant = %caller,
            cards = session.player_cards.len(),
            "hit"
        );
        Ok(player)
    }

    /// Compares totals and settles the round.
    ///
    /// A win needs the pool to cover twice the stake; otherwise the call fails
    /// with [`GameError::InsufficientPool`] and the round stays open.
    pub fn judge(&mut self, caller: &ParticipantId) -> Result<Settlement, GameError> {
        let session = self.active_session(caller)?;
        let player_total = total(&session.player_cards);
        let opponent_total = total(&session.opponent_cards);
        let stake = session.stake;

        let outcome = resolve(player_total, opponent_total);
        let available = self.ledger.pool_balance();
        let paid = payout_for(outcome, stake).ok_or(GameError::InsufficientPool {
            required: u64::MAX,
            available,
        })?;
        if outcome == Outcome::Win && available < paid {
            tracing::warn!(
                participant = %caller,
                required = paid,
                available,
                "pool cannot cover payout"
            );
            return Err(GameError::InsufficientPool {
                required: paid,
                available,
            });
        }
        self.pay(caller, paid)?;

        let settlement = self.commit(caller, outcome, paid);
        tracing::info!(
            participant = %caller,
            outcome = %settlement.outcome,
            player_total,
            opponent_total,
            paid,
            "round judged"
        );
        Ok(settlement)
    }

    /// Leaves the round early. Half the stake comes back; counts as an opponent win.
    pub fn abandon(&mut self, caller: &ParticipantId) -> Result<Settlement, GameError> {
        let refund = abandon_refund(self.active_session(caller)?.stake);
        self.pay(caller, refund)?;

        let settlement = self.commit(caller, Outcome::Abandoned, refund);
        tracing::info!(participant = %caller, refund, "round abandoned");
        Ok(settlement)
    }

    /// Drops both hands and deactivates the session. Never refunds.
    pub fn reset(&mut self, caller: &ParticipantId) {
        if let Some(session) = self.sessions.get_mut(caller) {
            session.clear();
        }
        tracing::debug!(participant = %caller, "session reset");
    }

    /// Owner-only: moves `amount` from the pool to the owner.
    pub fn withdraw(&mut self, caller: &ParticipantId, amount: u64) -> Result<(), GameError> {
        if *caller != self.owner {
            return Err(GameError::NotOwner);
        }
        if amount == 0 || amount > self.ledger.pool_balance() {
            return Err(GameError::InvalidAmount { amount });
        }
        if let Err(e) = self.ledger.credit(caller, amount) {
            tracing::warn!(participant = %caller, amount, error = %e, "withdrawal failed");
            return Err(e.into());
        }
        tracing::info!(participant = %caller, amount, "pool withdrawal");
        Ok(())
    }

    /// Owner-only: empties the pool into the owner's account.
    pub fn withdraw_all(&mut self, caller: &ParticipantId) -> Result<(), GameError> {
        let amount = self.ledger.pool_balance();
        self.withdraw(caller, amount)
    }

    /// Adds `amount` from the caller's account to the pool.
    pub fn fund(&mut self, caller: &ParticipantId, amount: u64) -> Result<(), GameError> {
        if amount == 0 {
            return Err(GameError::InvalidAmount { amount });
        }
        self.ledger.debit(caller, amount)?;
        tracing::info!(participant = %caller, amount, "pool funded");
        Ok(())
    }

    pub fn player_hand(&self, caller: &ParticipantId) -> &[Card] {
        self.sessions
            .get(caller)
            .map(|s| s.player_cards.as_slice())
            .unwrap_or(&[])
    }

    pub fn opponent_hand(&self, participant: &ParticipantId) -> &[Card] {
        self.sessions
            .get(participant)
            .map(|s| s.opponent_cards.as_slice())
            .unwrap_or(&[])
    }

    pub fn session(&self, participant: &ParticipantId) -> Option<&GameSession> {
        self.sessions.get(participant)
    }

    pub fn phase(&self, participant: &ParticipantId) -> Phase {
        self.sessions
            .get(participant)
            .map(GameSession::phase)
            .unwrap_or(Phase::NoSession)
    }

    pub fn streak(&self, participant: &ParticipantId) -> u32 {
        self.streaks.get(participant)
    }

    pub fn pool_balance(&self) -> u64 {
        self.ledger.pool_balance()
    }

    pub fn owner(&self) -> &ParticipantId {
        &self.owner
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    pub fn ledger_mut(&mut self) -> &mut L {
        &mut self.ledger
    }

    fn is_active(&self, participant: &ParticipantId) -> bool {
        self.sessions.get(participant).is_some_and(|s| s.active)
    }

    fn active_session(&self, participant: &ParticipantId) -> Result<&GameSession, GameError> {
        self.sessions
            .get(participant)
            .filter(|s| s.active)
            .ok_or(GameError::NoActiveSession)
    }

    fn pay(&mut self, caller: &ParticipantId, amount: u64) -> Result<(), GameError> {
        if amount == 0 {
            return Ok(());
        }
        self.ledger.credit(caller, amount).map_err(|e| {
            tracing::warn!(participant = %caller, amount, error = %e, "payout transfer failed");
            GameError::from(e)
        })
    }

    // Runs only after the transfer went through; nothing in here can fail.
    fn commit(&mut self, caller: &ParticipantId, outcome: Outcome, paid: u64) -> Settlement {
        match outcome {
            Outcome::Win => self.streaks.record_player_win(caller),
            Outcome::Lose | Outcome::Abandoned => {
                self.streaks.record_opponent_win(caller);
            }
            Outcome::Draw => {}
        }
        let session = self.sessions.entry(caller.clone()).or_default();
        session.settle();
        Settlement {
            outcome,
            player_total: total(&session.player_cards),
            opponent_total: total(&session.opponent_cards),
            paid,
            opponent_hand: session.opponent_cards.clone(),
        }
    }
}
