//! Card, hand, and amount formatters for terminal display.
//!
//! Suits render as Unicode symbols where the terminal supports them and fall
//! back to `c d h s` letters elsewhere. Amounts render as decimal whole units.
//!
//! ```rust
//! use cardduel_engine::cards::Card;
//! use cardduel_cli::formatters::{format_amount, format_card};
//!
//! let c = Card::new(0, 3);
//! assert!(format_card(&c) == "A♠" || format_card(&c) == "As");
//! assert_eq!(format_amount(1_500_000_000), "1.5");
//! ```

use cardduel_engine::cards::Card;
use cardduel_engine::config::UNIT;
use cardduel_engine::scoring::total;
use cardduel_engine::settlement::Settlement;

/// On Windows only modern terminals are trusted with Unicode; Unix always is.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

pub fn format_suit(suit: u8) -> &'static str {
    const UNICODE: [&str; 4] = ["♣", "♦", "♥", "♠"];
    const ASCII: [&str; 4] = ["c", "d", "h", "s"];
    let idx = usize::from(suit % 4);
    if supports_unicode() {
        UNICODE[idx]
    } else {
        ASCII[idx]
    }
}

pub fn format_rank(rank: u8) -> String {
    match rank {
        0 => "A".to_string(),
        10 => "J".to_string(),
        11 => "Q".to_string(),
        12 => "K".to_string(),
        r => (r + 1).to_string(),
    }
}

pub fn format_card(card: &Card) -> String {
    format!("{}{}", format_rank(card.rank), format_suit(card.suit))
}

/// `[A♠ 10♥] (11)`
pub fn format_hand(cards: &[Card]) -> String {
    let shown: Vec<String> = cards.iter().map(format_card).collect();
    format!("[{}] ({})", shown.join(" "), total(cards))
}

/// Smallest units as a decimal amount with trailing zeros removed.
pub fn format_amount(amount: u64) -> String {
    let whole = amount / UNIT;
    let frac = amount % UNIT;
    if frac == 0 {
        return whole.to_string();
    }
    let digits = format!("{:09}", frac);
    format!("{}.{}", whole, digits.trim_end_matches('0'))
}

pub fn format_settlement(s: &Settlement) -> String {
    format!(
        "Result: {} ({} vs {}), paid {}, opponent {}",
        s.outcome,
        s.player_total,
        s.opponent_total,
        format_amount(s.paid),
        format_hand(&s.opponent_hand)
    )
}
