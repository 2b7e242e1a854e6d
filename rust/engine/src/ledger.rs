//! Fund movement between participants and the shared pool.
//!
//! The engine only talks to the [`Ledger`] trait. Every transfer may fail, and
//! the engine attempts it before touching session state so a failure leaves
//! nothing half-applied.

use std::collections::{HashMap, HashSet};

use crate::errors::LedgerError;
use crate::session::ParticipantId;

pub trait Ledger {
    /// Funds currently held by the pool.
    fn pool_balance(&self) -> u64;

    /// Moves `amount` from the pool to `participant`.
    fn credit(&mut self, participant: &ParticipantId, amount: u64) -> Result<(), LedgerError>;

    /// Moves `amount` from `participant` into the pool.
    fn debit(&mut self, participant: &ParticipantId, amount: u64) -> Result<(), LedgerError>;
}

impl<L: Ledger + ?Sized> Ledger for Box<L> {
    fn pool_balance(&self) -> u64 {
        (**self).pool_balance()
    }

    fn credit(&mut self, participant: &ParticipantId, amount: u64) -> Result<(), LedgerError> {
        (**self).credit(participant, amount)
    }

    fn debit(&mut self, participant: &ParticipantId, amount: u64) -> Result<(), LedgerError> {
        (**self).debit(participant, amount)
    }
}

/// Ledger held in memory: one balance per participant plus the pool.
#[derive(Debug, Clone, Default)]
pub struct InMemoryLedger {
    pool: u64,
    accounts: HashMap<ParticipantId, u64>,
    rejected: HashSet<ParticipantId>,
}

impl InMemoryLedger {
    pub fn new(pool: u64) -> Self {
        Self {
            pool,
            ..Self::default()
        }
    }

    pub fn with_account(mut self, participant: impl Into<ParticipantId>, balance: u64) -> Self {
        self.accounts.insert(participant.into(), balance);
        self
    }

    pub fn balance(&self, participant: &ParticipantId) -> u64 {
        self.accounts.get(participant).copied().unwrap_or(0)
    }

    pub fn set_balance(&mut self, participant: &ParticipantId, balance: u64) {
        self.accounts.insert(participant.clone(), balance);
    }

    /// Makes every later transfer touching `participant` fail.
    pub fn reject_transfers(&mut self, participant: &ParticipantId) {
        self.rejected.insert(participant.clone());
    }

    pub fn accept_transfers(&mut self, participant: &ParticipantId) {
        self.rejected.remove(participant);
    }

    /// Sum of the pool and every account.
    pub fn total_funds(&self) -> u128 {
        u128::from(self.pool) + self.accounts.values().map(|&v| u128::from(v)).sum::<u128>()
    }

    fn check_accepted(&self, participant: &ParticipantId) -> Result<(), LedgerError> {
        if self.rejected.contains(participant) {
            return Err(LedgerError::Rejected(participant.to_string()));
        }
        Ok(())
    }
}

impl Ledger for InMemoryLedger {
    fn pool_balance(&self) -> u64 {
        self.pool
    }

    fn credit(&mut self, participant: &ParticipantId, amount: u64) -> Result<(), LedgerError> {
        self.check_accepted(participant)?;
        if amount > self.pool {
            return Err(LedgerError::InsufficientFunds {
                needed: amount,
                available: self.pool,
            });
        }
        let balance = self
            .balance(participant)
            .checked_add(amount)
            .ok_or(LedgerError::Overflow)?;
        self.pool -= amount;
        self.accounts.insert(participant.clone(), balance);
        Ok(())
    }

    fn debit(&mut self, participant: &ParticipantId, amount: u64) -> Result<(), LedgerError> {
        self.check_accepted(participant)?;
        let available = self.balance(participant);
        if amount > available {
            return Err(LedgerError::InsufficientFunds {
                needed: amount,
                available,
            });
        }
        let pool = self.pool.checked_add(amount).ok_or(LedgerError::Overflow)?;
        self.pool = pool;
        self.accounts.insert(participant.clone(), available - amount);
        Ok(())
    }
}
