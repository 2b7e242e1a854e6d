//! # Play Command
//!
//! Interactive rounds against the house on stdin.
//!
//! The local participant plays against an in-memory ledger seeded from the
//! configured pool and bankroll. Each line is one command:
//!
//! - `start [amount]`: deposit a stake and receive one card
//! - `hit`: draw one more card (at most two per round)
//! - `judge` / `stand`: compare totals and settle
//! - `abandon`: leave the round for half the stake back
//! - `reset`: clear the table without a refund
//! - `hand`, `pool`: show the current hand or balances
//! - `q`: quit
//!
//! Engine refusals (wrong phase, full hand, thin pool) are reported and the
//! loop continues. Input ending while a round is open is an interruption.

use crate::commands::{default_stake, house, load_config, player};
use crate::error::CliError;
use crate::formatters::{format_amount, format_card, format_hand, format_settlement};
use crate::io_utils::read_stdin_line;
use crate::ui;
use crate::validation::{parse_play_command, ParseResult, PlayCommand};
use cardduel_engine::engine::Engine;
use cardduel_engine::errors::GameError;
use cardduel_engine::ledger::InMemoryLedger;
use cardduel_engine::logger::{RoundLogger, RoundRecord};
use cardduel_engine::rng::{ChaChaSeed, ClockSeed, SeedSource};
use cardduel_engine::session::{ParticipantId, Phase};
use cardduel_engine::settlement::Settlement;
use cardduel_engine::table::Table;
use std::io::{BufRead, Write};

const PROMPT: &str = "start/hit/judge/abandon/q";

type PlayTable = Table<InMemoryLedger, Box<dyn SeedSource>>;

/// Handle the play command: interactive rounds until `q` or end of input.
///
/// * `stake` - stake used by `start` without an amount (default: one unit,
///   clamped to the table range)
/// * `seed` - reproducible draws; falls back to the configured seed, then the clock
/// * `history` - JSONL file receiving one [`RoundRecord`] per settled round
pub fn handle_play_command(
    stake: Option<u64>,
    seed: Option<u64>,
    history: Option<String>,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let cfg = load_config(err)?;
    let seed = seed.or(cfg.seed);
    let default_stake = stake.unwrap_or_else(|| default_stake(&cfg));

    let seeds: Box<dyn SeedSource> = match seed {
        Some(s) => Box::new(ChaChaSeed::new_with_seed(s)),
        None => Box::new(ClockSeed),
    };
    let ledger = InMemoryLedger::new(cfg.pool).with_account(player(), cfg.bankroll);
    let engine = Engine::new(house(), cfg.table(), ledger, seeds)?;

    let logger = match history {
        Some(path) => Some(RoundLogger::create(&path)?),
        None => None,
    };

    let mut session = PlaySession {
        table: Table::new(engine),
        me: player(),
        default_stake,
        round_stake: 0,
        settled: 0,
        logger,
    };

    writeln!(
        out,
        "play: stake={} seed={}",
        format_amount(default_stake),
        seed.map_or_else(|| "clock".to_string(), |s| s.to_string())
    )?;
    session.show_balances(out)?;

    loop {
        ui::prompt(out, PROMPT)?;
        let Some(line) = read_stdin_line(stdin) else {
            writeln!(out)?;
            if session.table.phase(&session.me)? == Phase::Active {
                let msg = "input ended with a round still open";
                ui::display_warning(err, msg)?;
                return Err(CliError::Interrupted(msg.to_string()));
            }
            break;
        };

        match parse_play_command(&line) {
            ParseResult::Quit => {
                if session.table.phase(&session.me)? == Phase::Active {
                    ui::display_warning(err, "leaving with a round open; the stake stays in the pool")?;
                }
                break;
            }
            ParseResult::Invalid(msg) => ui::write_error(err, &msg)?,
            ParseResult::Command(cmd) => match session.apply(cmd, out) {
                Ok(()) => {}
                Err(CliError::Engine(GameError::TablePoisoned)) => {
                    return Err(CliError::Engine(GameError::TablePoisoned));
                }
                Err(CliError::Engine(e)) => ui::write_error(err, &e.to_string())?,
                Err(e) => return Err(e),
            },
        }
    }

    writeln!(out, "Rounds settled: {}", session.settled)?;
    session.show_balances(out)?;
    Ok(())
}

struct PlaySession {
    table: PlayTable,
    me: ParticipantId,
    default_stake: u64,
    round_stake: u64,
    settled: u32,
    logger: Option<RoundLogger>,
}

impl PlaySession {
    fn apply(&mut self, cmd: PlayCommand, out: &mut dyn Write) -> Result<(), CliError> {
        match cmd {
            PlayCommand::Start(amount) => {
                let stake = amount.unwrap_or(self.default_stake);
                self.table.start(&self.me, stake)?;
                self.round_stake = stake;
                writeln!(out, "Round started, stake {}", format_amount(stake))?;
                self.show_hand(out)?;
            }
            PlayCommand::Hit => {
                let card = self.table.hit(&self.me)?;
                writeln!(out, "You drew {}", format_card(&card))?;
                self.show_hand(out)?;
            }
            PlayCommand::Judge => {
                let settlement = self.table.judge(&self.me)?;
                self.report(&settlement, out)?;
            }
            PlayCommand::Abandon => {
                let settlement = self.table.abandon(&self.me)?;
                self.report(&settlement, out)?;
            }
            PlayCommand::Reset => {
                self.table.reset(&self.me)?;
                writeln!(out, "Table cleared")?;
            }
            PlayCommand::Hand => self.show_hand(out)?,
            PlayCommand::Pool => self.show_balances(out)?,
        }
        Ok(())
    }

    fn report(&mut self, settlement: &Settlement, out: &mut dyn Write) -> Result<(), CliError> {
        writeln!(out, "{}", format_settlement(settlement))?;
        let streak = self.table.streak(&self.me)?;
        if streak > 0 {
            writeln!(out, "Opponent streak: {}", streak)?;
        }
        self.settled += 1;

        if let Some(logger) = self.logger.as_mut() {
            let player_cards = self.table.player_hand(&self.me)?;
            let record = RoundRecord::from_settlement(
                logger.next_id(),
                &self.me,
                self.round_stake,
                &player_cards,
                settlement,
                streak,
            );
            logger.write(&record)?;
        }
        self.show_balances(out)
    }

    fn show_hand(&self, out: &mut dyn Write) -> Result<(), CliError> {
        let phase = self.table.phase(&self.me)?;
        let hand = self.table.player_hand(&self.me)?;
        writeln!(out, "Your hand: {} ({})", format_hand(&hand), phase_label(phase))?;
        Ok(())
    }

    fn show_balances(&self, out: &mut dyn Write) -> Result<(), CliError> {
        let me = &self.me;
        let (pool, bankroll) = self
            .table
            .with(|e| (e.pool_balance(), e.ledger().balance(me)))?;
        writeln!(
            out,
            "Pool: {}  Bankroll: {}",
            format_amount(pool),
            format_amount(bankroll)
        )?;
        Ok(())
    }
}

fn phase_label(phase: Phase) -> &'static str {
    match phase {
        Phase::NoSession => "no round",
        Phase::Active => "in play",
        Phase::Settled => "settled",
    }
}
