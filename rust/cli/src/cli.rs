//! Command-line argument definitions.

use clap::{Parser, Subcommand};

use crate::validation::parse_amount;

#[derive(Parser, Debug)]
#[command(
    name = "cardduel",
    author = "CardDuel",
    version,
    about = "Card Duel CLI",
    long_about = "Two-sided card duel with stakes: play rounds against the house, simulate strategies, and inspect configuration and draws."
)]
pub struct CardDuelCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play rounds interactively against the house
    Play {
        /// Default stake for `start` without an amount (decimal units)
        #[arg(long, value_parser = parse_amount)]
        stake: Option<u64>,
        #[arg(long)]
        seed: Option<u64>,
        /// Append settled rounds to this JSONL file
        #[arg(long)]
        history: Option<String>,
    },
    /// Run automated rounds with a threshold strategy
    Sim {
        #[arg(long)]
        rounds: u64,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, value_parser = parse_amount)]
        stake: Option<u64>,
        /// Keep hitting while the hand total is below this value
        #[arg(long, default_value_t = 14)]
        hit_below: u32,
        #[arg(long)]
        output: Option<String>,
    },
    /// Print the resolved configuration and where each value came from
    Cfg,
    /// Print cards derived from a fixed seed for consecutive salts
    Rng {
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, default_value = "player")]
        participant: String,
        #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u64).range(1..=1000))]
        draws: u64,
    },
}

impl Commands {
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Play { .. } => "play",
            Commands::Sim { .. } => "sim",
            Commands::Cfg => "cfg",
            Commands::Rng { .. } => "rng",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardduel_engine::config::UNIT;

    #[test]
    fn play_stake_is_parsed_as_decimal() {
        let cli = CardDuelCli::try_parse_from(["cardduel", "play", "--stake", "0.5"]).unwrap();
        match cli.cmd {
            Commands::Play { stake, seed, .. } => {
                assert_eq!(stake, Some(UNIT / 2));
                assert_eq!(seed, None);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn sim_requires_rounds() {
        assert!(CardDuelCli::try_parse_from(["cardduel", "sim"]).is_err());
        let cli = CardDuelCli::try_parse_from(["cardduel", "sim", "--rounds", "3"]).unwrap();
        assert_eq!(cli.cmd.name(), "sim");
    }

    #[test]
    fn rng_draws_are_bounded() {
        assert!(CardDuelCli::try_parse_from(["cardduel", "rng", "--draws", "0"]).is_err());
        assert!(CardDuelCli::try_parse_from(["cardduel", "rng", "--draws", "1001"]).is_err());
        assert!(CardDuelCli::try_parse_from(["cardduel", "rng", "--draws", "10"]).is_ok());
    }

    #[test]
    fn bad_stake_is_a_parse_error() {
        assert!(CardDuelCli::try_parse_from(["cardduel", "play", "--stake", "abc"]).is_err());
    }
}
