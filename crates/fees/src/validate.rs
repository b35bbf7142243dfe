//! Acceptance check for a user-offered fee.

use alloy_primitives::U256;

use crate::error::FeeError;

/// A fee acceptance request: what the user offered against what the node
/// computed, with an optional tolerance band.
///
/// Both fee fields are required; absence is a request-shape error, distinct
/// from a fee-amount rejection.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PaysEnoughRequest {
    /// Fee the user offered.
    pub user_fee: Option<U256>,
    /// Fee the node computed for the transaction.
    pub expected_fee: Option<U256>,
    /// Accept overpayment up to `ceil(expected_fee * threshold_up)` above
    /// the expected fee.
    pub threshold_up: Option<f64>,
    /// Relax the accepted floor to `ceil(expected_fee * threshold_down)`.
    pub threshold_down: Option<f64>,
}

/// Decides whether the offered fee is acceptable.
///
/// The floor is the expected fee, relaxed by `threshold_down` when present
/// to absorb L1 gas price movement between quoting and submission. When
/// `threshold_up` is present, overpayment beyond its cap is rejected so a
/// misquoting client cannot massively overpay.
pub fn pays_enough(req: &PaysEnoughRequest) -> Result<(), FeeError> {
    let user_fee = req.user_fee.ok_or(FeeError::MissingInput("user fee"))?;
    let expected_fee = req
        .expected_fee
        .ok_or(FeeError::MissingInput("expected fee"))?;

    let mut floor = expected_fee;
    if let Some(down) = req.threshold_down {
        floor = mul_by_float(expected_fee, down);
    }
    if user_fee < floor {
        return Err(FeeError::FeeTooLow);
    }

    if let Some(up) = req.threshold_up {
        let overpaying = user_fee.saturating_sub(expected_fee);
        let cap = mul_by_float(expected_fee, up);
        if overpaying > cap {
            return Err(FeeError::FeeTooHigh);
        }
    }
    Ok(())
}

/// Scales `num` by `factor`, rounding up.
///
/// Runs through an f64 over the low 64 bits of `num`: magnitudes past
/// `u64::MAX` lose precision or wrap here, and the result saturates at
/// `u64::MAX`. The companion tooling of the accounting contract rounds the
/// same way, so this path is kept narrow instead of widened to exact
/// integer arithmetic; callers at larger magnitudes must pre-scale.
fn mul_by_float(num: U256, factor: f64) -> U256 {
    let n = num.as_limbs()[0] as f64;
    U256::from((n * factor).ceil() as u64)
}
