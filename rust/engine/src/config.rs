use serde::{Deserialize, Serialize};

use crate::errors::GameError;

/// Smallest units in one whole currency unit.
pub const UNIT: u64 = 1_000_000_000;

/// Stake bounds for a table. Both ends are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableConfig {
    pub min_stake: u64,
    pub max_stake: u64,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            min_stake: UNIT / 10,
            max_stake: 2 * UNIT,
        }
    }
}

impl TableConfig {
    pub fn validate(&self) -> Result<(), GameError> {
        if self.min_stake == 0 {
            return Err(GameError::InvalidConfig("min_stake must be >0".into()));
        }
        if self.min_stake > self.max_stake {
            return Err(GameError::InvalidConfig(
                "min_stake must not exceed max_stake".into(),
            ));
        }
        if self.max_stake.checked_mul(2).is_none() {
            return Err(GameError::InvalidConfig(
                "max_stake too large to pay out".into(),
            ));
        }
        Ok(())
    }

    pub fn accepts(&self, stake: u64) -> bool {
        (self.min_stake..=self.max_stake).contains(&stake)
    }
}
