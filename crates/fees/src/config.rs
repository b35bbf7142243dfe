//! Operator-facing tolerance configuration for fee validation.

use alloy_primitives::U256;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::{
    error::FeeError,
    validate::{pays_enough, PaysEnoughRequest},
};

/// Tolerance band applied when deciding whether a user-offered fee is
/// acceptable.
///
/// Both bounds are optional multipliers over the expected fee; with neither
/// set, only fees at or above the expected fee pass and no overpayment cap
/// applies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeThresholds {
    /// Accept fees up to `ceil(expected * threshold_up)` above expected.
    #[serde(default)]
    pub threshold_up: Option<f64>,
    /// Relax the minimum accepted fee to `ceil(expected * threshold_down)`.
    #[serde(default)]
    pub threshold_down: Option<f64>,
}

/// Errors from tolerance-band configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The blob under the extras key failed to deserialize.
    #[error("invalid fee thresholds config: {0}")]
    Invalid(String),
    /// `threshold_down` must stay below 1 so the floor only ever relaxes.
    #[error("fee threshold down must be less than 1: {0}")]
    ThresholdDown(f64),
    /// `threshold_up` must exceed 1 so the cap only ever widens.
    #[error("fee threshold up must be greater than 1: {0}")]
    ThresholdUp(f64),
}

impl FeeThresholds {
    /// Reads `rollup.feeThresholds` from a chainspec extras blob.
    ///
    /// An absent section yields the default: no tolerance band.
    pub fn from_extras(extras: &Value) -> Result<Self, ConfigError> {
        let Some(section) = extras.get("rollup").and_then(|r| r.get("feeThresholds")) else {
            return Ok(Self::default());
        };
        let thresholds: Self = serde_json::from_value(section.clone())
            .map_err(|err| ConfigError::Invalid(err.to_string()))?;
        thresholds.validate()?;
        Ok(thresholds)
    }

    /// Validates the configured bounds: `threshold_down` in `[0, 1)`,
    /// `threshold_up` above 1, both finite.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(down) = self.threshold_down {
            if !down.is_finite() || !(0.0..1.0).contains(&down) {
                return Err(ConfigError::ThresholdDown(down));
            }
        }
        if let Some(up) = self.threshold_up {
            if !up.is_finite() || up <= 1.0 {
                return Err(ConfigError::ThresholdUp(up));
            }
        }
        Ok(())
    }

    /// Checks `user_fee` against `expected_fee` under this tolerance band.
    pub fn check(&self, user_fee: U256, expected_fee: U256) -> Result<(), FeeError> {
        pays_enough(&PaysEnoughRequest {
            user_fee: Some(user_fee),
            expected_fee: Some(expected_fee),
            threshold_up: self.threshold_up,
            threshold_down: self.threshold_down,
        })
    }
}
