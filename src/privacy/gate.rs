use std::fmt;

use serde::ser::Serializer;
use serde::Serialize;

use crate::config::ConfigError;

/// Why an aggregate was withheld. Deliberately coarse: it never carries
/// the actual sample size or any part of the breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuppressionReason {
    /// Nothing backs the aggregate at all.
    NoData,
    /// Data exists but fewer than `min_sample_size` entities back it.
    BelowThreshold { min_sample_size: u64 },
}

impl fmt::Display for SuppressionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoData => write!(f, "no data available"),
            Self::BelowThreshold { min_sample_size } => write!(
                f,
                "data withheld: fewer than {min_sample_size} contributors"
            ),
        }
    }
}

/// Outcome of passing an aggregate through the gate.
#[derive(Debug, Clone, PartialEq)]
pub enum GateResult<T> {
    Allowed { data: T, sample_size: u64 },
    Suppressed { reason: SuppressionReason },
}

impl<T> GateResult<T> {
    pub fn is_allowed(&self) -> bool {
        matches!(self, GateResult::Allowed { .. })
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            GateResult::Allowed { data, .. } => Some(data),
            GateResult::Suppressed { .. } => None,
        }
    }

    pub fn into_data(self) -> Option<T> {
        match self {
            GateResult::Allowed { data, .. } => Some(data),
            GateResult::Suppressed { .. } => None,
        }
    }

    pub fn sample_size(&self) -> Option<u64> {
        match self {
            GateResult::Allowed { sample_size, .. } => Some(*sample_size),
            GateResult::Suppressed { .. } => None,
        }
    }

    pub fn reason(&self) -> Option<SuppressionReason> {
        match self {
            GateResult::Allowed { .. } => None,
            GateResult::Suppressed { reason } => Some(*reason),
        }
    }
}

/// Wire shape shared by both outcomes.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GateEnvelope<'a, T> {
    ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<&'a T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sample_size: Option<u64>,
    k_anonymity_ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<String>,
}

impl<T: Serialize> Serialize for GateResult<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let envelope = match self {
            GateResult::Allowed { data, sample_size } => GateEnvelope {
                ok: true,
                data: Some(data),
                sample_size: Some(*sample_size),
                k_anonymity_ok: true,
                reason: None,
            },
            GateResult::Suppressed { reason } => GateEnvelope {
                ok: false,
                data: None,
                sample_size: None,
                k_anonymity_ok: false,
                reason: Some(reason.to_string()),
            },
        };
        envelope.serialize(serializer)
    }
}

/// Minimum-sample-size gate. Allowed iff `sample_size >= min_sample_size`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KAnonymityGate {
    min_sample_size: u64,
}

impl KAnonymityGate {
    /// `min_sample_size` must be at least 1, so an empty aggregate is
    /// never admitted.
    pub fn new(min_sample_size: u64) -> Result<Self, ConfigError> {
        if min_sample_size == 0 {
            return Err(ConfigError::InvalidThreshold(min_sample_size));
        }
        Ok(Self { min_sample_size })
    }

    pub fn min_sample_size(&self) -> u64 {
        self.min_sample_size
    }

    pub fn admits(&self, sample_size: u64) -> bool {
        sample_size >= self.min_sample_size
    }

    pub fn apply<T>(&self, payload: T, sample_size: u64) -> GateResult<T> {
        if self.admits(sample_size) {
            return GateResult::Allowed {
                data: payload,
                sample_size,
            };
        }

        let reason = if sample_size == 0 {
            SuppressionReason::NoData
        } else {
            SuppressionReason::BelowThreshold {
                min_sample_size: self.min_sample_size,
            }
        };
        tracing::info!(
            min_sample_size = self.min_sample_size,
            reason = %reason,
            "aggregate suppressed"
        );
        // payload is dropped here; nothing of it reaches the caller
        GateResult::Suppressed { reason }
    }
}
