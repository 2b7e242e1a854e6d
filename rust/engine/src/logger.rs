use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::session::ParticipantId;
use crate::settlement::{Outcome, Settlement};

/// One settled round, as written to the JSONL history.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// Unique identifier for this round (format: YYYYMMDD-NNNNNN)
    pub round_id: String,
    pub participant: ParticipantId,
    /// Stake in smallest units
    pub stake: u64,
    pub player_cards: Vec<Card>,
    pub opponent_cards: Vec<Card>,
    pub player_total: u32,
    pub opponent_total: u32,
    pub outcome: Outcome,
    /// Amount credited back to the participant
    pub paid: u64,
    /// Opponent streak after the round
    pub streak: u32,
    /// Timestamp when the round settled (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
}

impl RoundRecord {
    pub fn from_settlement(
        round_id: String,
        participant: &ParticipantId,
        stake: u64,
        player_cards: &[Card],
        settlement: &Settlement,
        streak: u32,
    ) -> Self {
        Self {
            round_id,
            participant: participant.clone(),
            stake,
            player_cards: player_cards.to_vec(),
            opponent_cards: settlement.opponent_hand.clone(),
            player_total: settlement.player_total,
            opponent_total: settlement.opponent_total,
            outcome: settlement.outcome,
            paid: settlement.paid,
            streak,
            ts: None,
        }
    }

    /// Pool gain (positive) or loss (negative) from this round.
    pub fn house_net(&self) -> i128 {
        i128::from(self.stake) - i128::from(self.paid)
    }
}

pub fn format_round_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

use chrono::{SecondsFormat, Utc};
use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

pub struct RoundLogger {
    writer: Option<BufWriter<File>>,
    date: String,
    seq: u32,
}

impl RoundLogger {
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                create_dir_all(parent)?;
            }
        }
        let f = File::create(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(f)),
            date: Utc::now().format("%Y%m%d").to_string(),
            seq: 0,
        })
    }

    /// Logger that only hands out ids; nothing is written.
    pub fn detached(date: &str) -> Self {
        Self {
            writer: None,
            date: date.to_string(),
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_round_id(&self.date, self.seq)
    }

    pub fn write(&mut self, record: &RoundRecord) -> std::io::Result<()> {
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        if let Some(w) = &mut self.writer {
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
            w.flush()?;
        }
        Ok(())
    }
}
