use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid stake: {stake}, allowed range: {min}..={max}")]
    InvalidStake { stake: u64, min: u64, max: u64 },
    #[error("Session already active")]
    SessionAlreadyActive,
    #[error("No active session")]
    NoActiveSession,
    #[error("Hand is full")]
    HandFull,
    #[error("Pool cannot cover payout: required {required}, available {available}")]
    InsufficientPool { required: u64, available: u64 },
    #[error("Caller is not the owner")]
    NotOwner,
    #[error("Invalid amount: {amount}")]
    InvalidAmount { amount: u64 },
    #[error("Transfer failed: {0}")]
    TransferFailed(#[from] LedgerError),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Table lock poisoned")]
    TablePoisoned,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("insufficient funds: needed {needed}, available {available}")]
    InsufficientFunds { needed: u64, available: u64 },
    #[error("transfer rejected for {0}")]
    Rejected(String),
    #[error("balance overflow")]
    Overflow,
}
