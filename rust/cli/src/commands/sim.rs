//! Simulation command handler.
//!
//! `sim` plays rounds automatically with a threshold strategy: hit while the
//! hand total is below `--hit-below` and the hand has room, then judge. The
//! run stops early when the bankroll can no longer cover the stake or the
//! pool refuses a payout.
//!
//! ```no_run
//! use cardduel_cli::commands::sim::{handle_sim_command, SimOptions};
//! use std::io;
//!
//! let opts = SimOptions { rounds: 1000, seed: Some(42), ..SimOptions::default() };
//! handle_sim_command(opts, &mut io::stdout(), &mut io::stderr()).unwrap();
//! ```

use crate::commands::{default_stake, house, load_config, player};
use crate::error::CliError;
use crate::formatters::format_amount;
use crate::ui;
use cardduel_engine::engine::Engine;
use cardduel_engine::errors::GameError;
use cardduel_engine::ledger::InMemoryLedger;
use cardduel_engine::logger::{RoundLogger, RoundRecord};
use cardduel_engine::rng::ChaChaSeed;
use cardduel_engine::scoring::total;
use cardduel_engine::settlement::Outcome;
use cardduel_engine::streak::MERCY_STREAK;
use std::io::Write;

#[derive(Debug, Clone)]
pub struct SimOptions {
    pub rounds: u64,
    pub seed: Option<u64>,
    /// Stake per round; defaults to one unit clamped to the table range
    pub stake: Option<u64>,
    pub hit_below: u32,
    /// JSONL file receiving one record per settled round
    pub output: Option<String>,
}

impl Default for SimOptions {
    fn default() -> Self {
        Self {
            rounds: 1,
            seed: None,
            stake: None,
            hit_below: 14,
            output: None,
        }
    }
}

/// Tallies for one simulation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SimSummary {
    pub played: u64,
    pub wins: u64,
    pub losses: u64,
    pub draws: u64,
    /// Rounds started while the mercy rule was in force
    pub mercy_rounds: u64,
    pub pool: u64,
    pub bankroll: u64,
    pub stopped_early: Option<String>,
}

pub fn handle_sim_command(
    opts: SimOptions,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    if opts.rounds == 0 {
        ui::write_error(err, "rounds must be >= 1")?;
        return Err(CliError::InvalidInput("rounds must be >= 1".to_string()));
    }
    let cfg = load_config(err)?;
    let seed = opts.seed.or(cfg.seed).unwrap_or_else(rand::random);
    let stake = opts.stake.unwrap_or_else(|| default_stake(&cfg));
    if !cfg.table().accepts(stake) {
        let e = GameError::InvalidStake {
            stake,
            min: cfg.min_stake,
            max: cfg.max_stake,
        };
        ui::write_error(err, &e.to_string())?;
        return Err(e.into());
    }

    let mut logger = match opts.output.as_deref() {
        Some(path) => Some(RoundLogger::create(path)?),
        None => None,
    };

    writeln!(
        out,
        "sim: rounds={} seed={} stake={} hit_below={}",
        opts.rounds,
        seed,
        format_amount(stake),
        opts.hit_below
    )?;

    let ledger = InMemoryLedger::new(cfg.pool).with_account(player(), cfg.bankroll);
    let mut engine = Engine::new(house(), cfg.table(), ledger, ChaChaSeed::new_with_seed(seed))?;
    let summary = run_rounds(&mut engine, &opts, stake, logger.as_mut())?;

    if let Some(reason) = &summary.stopped_early {
        ui::display_warning(
            err,
            &format!("stopped after {} rounds: {}", summary.played, reason),
        )?;
    }
    writeln!(out, "Rounds: {}", summary.played)?;
    writeln!(out, "Wins: {}", summary.wins)?;
    writeln!(out, "Losses: {}", summary.losses)?;
    writeln!(out, "Draws: {}", summary.draws)?;
    writeln!(out, "Mercy rounds: {}", summary.mercy_rounds)?;
    writeln!(out, "Pool: {}", format_amount(summary.pool))?;
    writeln!(out, "Bankroll: {}", format_amount(summary.bankroll))?;
    Ok(())
}

/// Plays up to `opts.rounds` rounds on `engine` for the local participant.
pub fn run_rounds<S: cardduel_engine::rng::SeedSource>(
    engine: &mut Engine<InMemoryLedger, S>,
    opts: &SimOptions,
    stake: u64,
    mut logger: Option<&mut RoundLogger>,
) -> Result<SimSummary, CliError> {
    let me = player();
    let mut summary = SimSummary::default();

    for _ in 0..opts.rounds {
        if engine.ledger().balance(&me) < stake {
            summary.stopped_early = Some("bankroll cannot cover the stake".to_string());
            break;
        }
        if engine.streak(&me) >= MERCY_STREAK {
            summary.mercy_rounds += 1;
        }
        engine.start(&me, stake)?;
        while total(engine.player_hand(&me)) < opts.hit_below {
            match engine.hit(&me) {
                Ok(_) => {}
                Err(GameError::HandFull) => break,
                Err(e) => return Err(e.into()),
            }
        }

        let settlement = match engine.judge(&me) {
            Ok(s) => s,
            Err(e @ GameError::InsufficientPool { .. }) => {
                engine.reset(&me);
                summary.stopped_early = Some(e.to_string());
                break;
            }
            Err(e) => return Err(e.into()),
        };
        summary.played += 1;
        match settlement.outcome {
            Outcome::Win => summary.wins += 1,
            Outcome::Draw => summary.draws += 1,
            Outcome::Lose | Outcome::Abandoned => summary.losses += 1,
        }

        if let Some(logger) = logger.as_deref_mut() {
            let record = RoundRecord::from_settlement(
                logger.next_id(),
                &me,
                stake,
                engine.player_hand(&me),
                &settlement,
                engine.streak(&me),
            );
            logger.write(&record)?;
        }
    }

    summary.pool = engine.pool_balance();
    summary.bankroll = engine.ledger().balance(&me);
    tracing::info!(
        played = summary.played,
        wins = summary.wins,
        losses = summary.losses,
        draws = summary.draws,
        pool = summary.pool,
        "simulation finished"
    );
    Ok(summary)
}
