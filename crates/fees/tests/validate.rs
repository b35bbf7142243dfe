//! Acceptance checks for user-offered fees against computed expectations.

use alloy_primitives::U256;
use rollup_fees::{pays_enough, FeeError, PaysEnoughRequest};

fn request(
    user_fee: Option<u64>,
    expected_fee: Option<u64>,
    threshold_down: Option<f64>,
    threshold_up: Option<f64>,
) -> PaysEnoughRequest {
    PaysEnoughRequest {
        user_fee: user_fee.map(U256::from),
        expected_fee: expected_fee.map(U256::from),
        threshold_up,
        threshold_down,
    }
}

#[test]
fn equal_fee_is_accepted() {
    assert!(pays_enough(&request(Some(1), Some(1), None, None)).is_ok());
}

#[test]
fn fee_below_expected_is_rejected() {
    assert!(matches!(
        pays_enough(&request(Some(1), Some(2), None, None)),
        Err(FeeError::FeeTooLow)
    ));
}

#[test]
fn threshold_down_relaxes_the_floor() {
    // floor = ceil(2 * 0.5) = 1
    assert!(pays_enough(&request(Some(1), Some(2), Some(0.5), None)).is_ok());
}

#[test]
fn threshold_up_caps_overpayment() {
    // cap = ceil(1 * 1.5) = 2, overpaying = 255
    assert!(matches!(
        pays_enough(&request(Some(256), Some(1), None, Some(1.5))),
        Err(FeeError::FeeTooHigh)
    ));
}

#[test]
fn large_overpayment_is_rejected_inside_a_band() {
    assert!(matches!(
        pays_enough(&request(Some(10_000), Some(1), Some(0.8), Some(3.0))),
        Err(FeeError::FeeTooHigh)
    ));
}

#[test]
fn underpayment_is_rejected_inside_a_band() {
    assert!(matches!(
        pays_enough(&request(Some(1), Some(10_000), Some(0.8), Some(3.0))),
        Err(FeeError::FeeTooLow)
    ));
}

#[test]
fn zero_fee_is_rejected_inside_a_band() {
    assert!(matches!(
        pays_enough(&request(Some(0), Some(10_000), Some(0.8), Some(3.0))),
        Err(FeeError::FeeTooLow)
    ));
}

#[test]
fn underpaying_within_the_floor_passes_the_cap_check() {
    // floor = ceil(100 * 0.8) = 80; paying 90 is under the expected fee, so
    // there is no overpayment for the cap to reject.
    assert!(pays_enough(&request(Some(90), Some(100), Some(0.8), Some(1.1))).is_ok());
}

#[test]
fn missing_user_fee_is_a_request_shape_error() {
    assert!(matches!(
        pays_enough(&request(None, Some(1), Some(0.8), Some(3.0))),
        Err(FeeError::MissingInput("user fee"))
    ));
}

#[test]
fn missing_expected_fee_is_a_request_shape_error() {
    assert!(matches!(
        pays_enough(&request(Some(1), None, None, None)),
        Err(FeeError::MissingInput("expected fee"))
    ));
}

#[test]
fn missing_both_fees_reports_the_user_fee_first() {
    assert!(matches!(
        pays_enough(&request(None, None, None, None)),
        Err(FeeError::MissingInput("user fee"))
    ));
}
