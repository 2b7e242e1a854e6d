//! Draw inspection command.
//!
//! `rng` shows which cards a participant would receive from a fixed seed for
//! salts `0..draws`. Useful for checking that a seed replays the same cards
//! and for spotting skew in the rank distribution.

use crate::error::CliError;
use crate::formatters::format_card;
use cardduel_engine::rng::{draw, FixedSeed, OPPONENT_SALT_OFFSET};
use cardduel_engine::session::ParticipantId;
use std::io::Write;

pub fn handle_rng_command(
    seed: Option<u64>,
    participant: &str,
    draws: u64,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let s = seed.unwrap_or_else(rand::random);
    let id = ParticipantId::from(participant);
    let mut source = FixedSeed(s);

    writeln!(out, "rng: participant={} seed={}", id, s)?;
    for salt in 0..draws {
        let player = draw(&mut source, &id, salt);
        let opponent = draw(&mut source, &id, OPPONENT_SALT_OFFSET + salt);
        writeln!(
            out,
            "salt {:>3}: player {:<4} opponent {}",
            salt,
            format_card(&player),
            format_card(&opponent)
        )?;
    }
    Ok(())
}
