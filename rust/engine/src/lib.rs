//! # cardduel-engine: Card Duel Core
//!
//! A two-sided card comparison game with stakes: a participant deposits a
//! stake, both the participant and the house opponent draw cards, totals are
//! compared, and the winner is paid from a shared pool.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation
//! - [`rng`] - Seed sources and card issuance
//! - [`scoring`] - Hand totals
//! - [`streak`] - Opponent streaks and the mercy rule
//! - [`session`] - Participant identity and per-participant round state
//! - [`engine`] - The session state machine (start/hit/judge/abandon/reset)
//! - [`settlement`] - Outcomes and payout amounts
//! - [`ledger`] - Fund movement between accounts and the pool
//! - [`table`] - Thread-safe handle serializing all operations
//! - [`config`] - Stake bounds and currency unit
//! - [`logger`] - Round records and JSONL history
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use cardduel_engine::config::{TableConfig, UNIT};
//! use cardduel_engine::engine::Engine;
//! use cardduel_engine::ledger::InMemoryLedger;
//! use cardduel_engine::rng::ChaChaSeed;
//! use cardduel_engine::session::ParticipantId;
//!
//! let alice = ParticipantId::from("alice");
//! let ledger = InMemoryLedger::new(100 * UNIT).with_account("alice", 10 * UNIT);
//! let mut engine = Engine::new(
//!     ParticipantId::from("house"),
//!     TableConfig::default(),
//!     ledger,
//!     ChaChaSeed::new_with_seed(42),
//! )
//! .unwrap();
//!
//! engine.start(&alice, UNIT).unwrap();
//! engine.hit(&alice).unwrap();
//! let settlement = engine.judge(&alice).unwrap();
//! println!("{} ({} vs {})", settlement.outcome, settlement.player_total, settlement.opponent_total);
//! ```
//!
//! ## Deterministic Draws
//!
//! Every draw goes through a [`rng::SeedSource`]. Seeded sources replay the
//! same cards:
//!
//! ```rust
//! use cardduel_engine::rng::{draw, FixedSeed};
//! use cardduel_engine::session::ParticipantId;
//!
//! let p = ParticipantId::from("alice");
//! let a = draw(&mut FixedSeed(7), &p, 0);
//! let b = draw(&mut FixedSeed(7), &p, 0);
//! assert_eq!(a, b);
//! ```

pub mod cards;
pub mod config;
pub mod engine;
pub mod errors;
pub mod ledger;
pub mod logger;
pub mod rng;
pub mod scoring;
pub mod session;
pub mod settlement;
pub mod streak;
pub mod table;
