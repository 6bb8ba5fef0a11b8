use common::config::Validate;
use serde::{Deserialize, Serialize};

use super::MAX_DELAY_MS;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct MemoryMatchConfig {
    /// How long a mismatched pair stays face up.
    pub mismatch_reveal_ms: u64,
}

impl Validate for MemoryMatchConfig {
    fn validate(&self) -> Result<(), String> {
        if self.mismatch_reveal_ms > MAX_DELAY_MS {
            return Err(format!("mismatch_reveal_ms must not exceed {}", MAX_DELAY_MS));
        }
        Ok(())
    }
}

impl Default for MemoryMatchConfig {
    fn default() -> Self {
        Self {
            mismatch_reveal_ms: 1000,
        }
    }
}
