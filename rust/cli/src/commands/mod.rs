//! Command handlers for the Card Duel CLI.
//!
//! Each subcommand lives in its own module and exposes
//! `handle_COMMAND_command(...) -> Result<(), CliError>`. Output streams are
//! passed in as `&mut dyn Write` so tests can capture them.

pub mod cfg;
pub mod play;
pub mod rng;
pub mod sim;

pub use cfg::handle_cfg_command;
pub use play::handle_play_command;
pub use rng::handle_rng_command;
pub use sim::handle_sim_command;

use crate::config::{self, Config};
use crate::error::CliError;
use crate::ui;
use cardduel_engine::config::UNIT;
use cardduel_engine::session::ParticipantId;
use std::io::Write;

/// Account used for the local participant.
pub const PLAYER_ID: &str = "player";
/// Table owner; receives pool withdrawals.
pub const HOUSE_ID: &str = "house";

pub(crate) fn player() -> ParticipantId {
    ParticipantId::from(PLAYER_ID)
}

pub(crate) fn house() -> ParticipantId {
    ParticipantId::from(HOUSE_ID)
}

/// One whole unit, pulled into the configured stake range.
pub(crate) fn default_stake(cfg: &Config) -> u64 {
    UNIT.clamp(cfg.min_stake, cfg.max_stake)
}

pub(crate) fn load_config(err: &mut dyn Write) -> Result<Config, CliError> {
    match config::load() {
        Ok(cfg) => Ok(cfg),
        Err(e) => {
            ui::write_error(err, &format!("Invalid configuration: {}", e))?;
            Err(CliError::Config(e.to_string()))
        }
    }
}
