//! # Card Duel CLI Library
//!
//! Command-line front end for the `cardduel-engine` crate: interactive play
//! against the house, strategy simulation, and configuration and draw
//! inspection.
//!
//! ## Main Entry Point
//!
//! [`run`] parses arguments, dispatches to a subcommand, and returns the
//! process exit code.
//!
//! ```
//! use std::io;
//! let args = vec!["cardduel", "rng", "--seed", "42", "--draws", "3"];
//! let code = cardduel_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `play`: Play rounds interactively on stdin
//! - `sim`: Run automated rounds with a threshold strategy
//! - `cfg`: Display the resolved configuration
//! - `rng`: Show cards derived from a fixed seed

use clap::Parser;
use std::io::Write;

#[macro_use]
mod macros;

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod logging;
pub mod ui;
pub mod validation;

use cli::{CardDuelCli, Commands};
use commands::sim::SimOptions;
use commands::{handle_cfg_command, handle_play_command, handle_rng_command, handle_sim_command};

pub use error::CliError;

const COMMANDS: &[&str] = &["play", "sim", "cfg", "rng"];

/// Parses `args` and runs the selected subcommand.
///
/// Returns `0` on success, `2` on errors, and `130` when `play` input ends
/// while a round is still open.
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match CardDuelCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::SUCCESS
                }
                _ => {
                    write_or_exit!(err, "{}", e);
                    write_or_exit!(err, "Card Duel CLI");
                    write_or_exit!(err, "Usage: cardduel <command> [options]\n");
                    write_or_exit!(err, "Commands:");
                    for c in COMMANDS {
                        write_or_exit!(err, "  {}", c);
                    }
                    write_or_exit!(err, "\nFor full help, run: cardduel --help");
                    exit_code::ERROR
                }
            };
        }
    };

    tracing::debug!(command = cli.cmd.name(), "dispatching");
    let result = match cli.cmd {
        Commands::Play {
            stake,
            seed,
            history,
        } => match io_utils::scripted_input() {
            Some(mut scripted) => handle_play_command(stake, seed, history, out, err, &mut scripted),
            None => {
                let stdin = std::io::stdin();
                let mut stdin_lock = stdin.lock();
                handle_play_command(stake, seed, history, out, err, &mut stdin_lock)
            }
        },
        Commands::Sim {
            rounds,
            seed,
            stake,
            hit_below,
            output,
        } => handle_sim_command(
            SimOptions {
                rounds,
                seed,
                stake,
                hit_below,
                output,
            },
            out,
            err,
        ),
        Commands::Cfg => handle_cfg_command(out, err),
        Commands::Rng {
            seed,
            participant,
            draws,
        } => handle_rng_command(seed, &participant, draws, out),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(CliError::Interrupted(_)) => exit_code::INTERRUPTED,
        Err(e) => {
            tracing::debug!(error = %e, "command failed");
            write_or_exit!(err, "Error: {}", e);
            exit_code::ERROR
        }
    }
}
