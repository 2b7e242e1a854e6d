//! Input parsing and validation for interactive commands.
//!
//! Amounts are typed as decimal whole units (`1.5`) and converted to the
//! engine's smallest units. Play commands are parsed into [`ParseResult`].

use cardduel_engine::config::UNIT;

/// Digits allowed after the decimal point.
const FRACTION_DIGITS: usize = 9;

/// One line of input to the `play` loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayCommand {
    /// Open a round; `None` uses the session's default stake.
    Start(Option<u64>),
    Hit,
    Judge,
    Abandon,
    Reset,
    Hand,
    Pool,
}

/// Outcome of parsing one input line.
#[derive(Debug, PartialEq)]
pub enum ParseResult {
    Command(PlayCommand),
    /// User entered quit command (q or quit)
    Quit,
    /// Invalid input with error message
    Invalid(String),
}

/// Parses a decimal amount such as `"2"`, `"0.1"` or `"1.25"` into smallest units.
///
/// # Example
///
/// ```rust
/// # use cardduel_cli::validation::parse_amount;
/// assert_eq!(parse_amount("1.5"), Ok(1_500_000_000));
/// assert_eq!(parse_amount("0.000000001"), Ok(1));
/// assert!(parse_amount("-1").is_err());
/// assert!(parse_amount("1.0000000001").is_err());
/// ```
pub fn parse_amount(input: &str) -> Result<u64, String> {
    let s = input.trim();
    if s.is_empty() {
        return Err("amount is empty".to_string());
    }
    let (whole, frac) = match s.split_once('.') {
        Some((w, f)) => (w, f),
        None => (s, ""),
    };
    let digits_only = |p: &str| p.chars().all(|c| c.is_ascii_digit());
    if !digits_only(whole) || !digits_only(frac) || (whole.is_empty() && frac.is_empty()) {
        return Err(format!("invalid amount '{}'", s));
    }
    if frac.len() > FRACTION_DIGITS {
        return Err(format!(
            "amount '{}' has more than {} decimal places",
            s, FRACTION_DIGITS
        ));
    }
    let whole: u64 = if whole.is_empty() {
        0
    } else {
        whole
            .parse()
            .map_err(|_| format!("amount '{}' is too large", s))?
    };
    let frac: u64 = if frac.is_empty() {
        0
    } else {
        let padded = format!("{:0<width$}", frac, width = FRACTION_DIGITS);
        padded
            .parse()
            .map_err(|_| format!("invalid amount '{}'", s))?
    };
    whole
        .checked_mul(UNIT)
        .and_then(|w| w.checked_add(frac))
        .ok_or_else(|| format!("amount '{}' is too large", s))
}

/// Parses one line of `play` input (case-insensitive).
///
/// - `start [amount]`, `hit`, `judge` or `stand`, `abandon`, `reset`
/// - `hand`, `pool`
/// - `q` or `quit`
///
/// # Example
///
/// ```rust
/// # use cardduel_cli::validation::{parse_play_command, ParseResult, PlayCommand};
/// assert_eq!(
///     parse_play_command("start 2"),
///     ParseResult::Command(PlayCommand::Start(Some(2_000_000_000)))
/// );
/// assert_eq!(parse_play_command("STAND"), ParseResult::Command(PlayCommand::Judge));
/// assert_eq!(parse_play_command("q"), ParseResult::Quit);
/// ```
pub fn parse_play_command(input: &str) -> ParseResult {
    let input = input.trim().to_lowercase();
    let parts: Vec<&str> = input.split_whitespace().collect();

    let Some(head) = parts.first() else {
        return ParseResult::Invalid("Empty input".to_string());
    };

    if *head == "q" || *head == "quit" {
        return ParseResult::Quit;
    }

    let no_args = |cmd: PlayCommand| {
        if parts.len() > 1 {
            ParseResult::Invalid(format!("'{}' takes no arguments", head))
        } else {
            ParseResult::Command(cmd)
        }
    };

    match *head {
        "start" | "s" => match parts.get(1) {
            None => ParseResult::Command(PlayCommand::Start(None)),
            Some(_) if parts.len() > 2 => {
                ParseResult::Invalid("Start takes at most one amount".to_string())
            }
            Some(amount) => match parse_amount(amount) {
                Ok(v) => ParseResult::Command(PlayCommand::Start(Some(v))),
                Err(msg) => ParseResult::Invalid(msg),
            },
        },
        "hit" | "h" => no_args(PlayCommand::Hit),
        "judge" | "stand" | "j" => no_args(PlayCommand::Judge),
        "abandon" => no_args(PlayCommand::Abandon),
        "reset" => no_args(PlayCommand::Reset),
        "hand" => no_args(PlayCommand::Hand),
        "pool" => no_args(PlayCommand::Pool),
        other => ParseResult::Invalid(format!(
            "Unrecognized command '{}'. Valid commands: start [amount], hit, judge, abandon, reset, hand, pool, q",
            other
        )),
    }
}
