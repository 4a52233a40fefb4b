use thiserror::Error;

/// Upper bound on the reply weight. Keeps `likes + replies * weight`
/// inside `u64` for every `u32` counter pair.
pub const MAX_REPLY_WEIGHT: u32 = 1000;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("min_sample_size must be at least 1 (got {0})")]
    InvalidThreshold(u64),
    #[error("reply_weight must be between 2 and 1000 (got {0})")]
    InvalidReplyWeight(u32),
}

// Passed explicitly to every engine.
// Serializable
// Comparable
// Explicit defaults
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct InsightConfig {
    /// Minimum number of distinct source entities behind an aggregate (`k`).
    pub min_sample_size: u64,
    /// Weight of one reply relative to one like.
    pub reply_weight: u32,
}

impl InsightConfig {
    pub fn v0() -> Self {
        Self {
            min_sample_size: 5,
            reply_weight: 3,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_sample_size == 0 {
            return Err(ConfigError::InvalidThreshold(self.min_sample_size));
        }
        if !(2..=MAX_REPLY_WEIGHT).contains(&self.reply_weight) {
            return Err(ConfigError::InvalidReplyWeight(self.reply_weight));
        }
        Ok(())
    }
}

impl Default for InsightConfig {
    fn default() -> Self {
        Self::v0()
    }
}
