//! Configuration command handler.
//!
//! `cfg` prints the resolved configuration as pretty JSON, one entry per key
//! with its value and source (`default`, `file` or `env`). Amounts are shown
//! in smallest units.
//!
//! ```json
//! {
//!   "min_stake": {
//!     "value": 100000000,
//!     "source": "default"
//!   },
//!   ...
//! }
//! ```

use crate::config;
use crate::error::CliError;
use crate::ui;
use std::io::Write;

pub fn handle_cfg_command(out: &mut dyn Write, err: &mut dyn Write) -> Result<(), CliError> {
    let resolved = match config::load_with_sources() {
        Ok(r) => r,
        Err(e) => {
            ui::write_error(err, &format!("Invalid configuration: {}", e))?;
            return Err(CliError::Config(format!("Invalid configuration: {}", e)));
        }
    };

    let config::ConfigResolved { config, sources } = resolved;
    let display = serde_json::json!({
        "min_stake": {
            "value": config.min_stake,
            "source": sources.min_stake,
        },
        "max_stake": {
            "value": config.max_stake,
            "source": sources.max_stake,
        },
        "pool": {
            "value": config.pool,
            "source": sources.pool,
        },
        "bankroll": {
            "value": config.bankroll,
            "source": sources.bankroll,
        },
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}
