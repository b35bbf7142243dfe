//! The calldata byte cost model and the two fee aggregation paths.

use alloy_consensus::{Signed, TxLegacy};
use alloy_primitives::U256;
use fee_oracle::{GasPriceOracle, GasPriceOracleParams, StateReader};
use fee_primitives::{signed_tx_bytes, TxMessage};
use tracing::trace;

use crate::error::FeeError;

/// Gas charged per zero calldata byte.
///
/// Protocol constant shared with the on-chain accounting contract; never
/// derived dynamically.
pub const ZERO_BYTE_COST: u64 = 4;

/// Gas charged per non-zero calldata byte, including the post-upgrade
/// discount. Shared with the on-chain accounting contract.
pub const NON_ZERO_BYTE_COST: u64 = 16;

/// Counts the zero and non-zero bytes of `data`.
pub fn zeroes_and_ones(data: &[u8]) -> (u64, u64) {
    data.iter().fold((0, 0), |(zeroes, ones), byte| {
        if *byte == 0x00 {
            (zeroes + 1, ones)
        } else {
            (zeroes, ones + 1)
        }
    })
}

/// Gas used to publish `data` on the base layer: the byte cost model plus
/// the flat batch submission `overhead`. Integer arithmetic, no rounding.
pub fn l1_gas_used(data: &[u8], overhead: U256) -> U256 {
    let (zeroes, ones) = zeroes_and_ones(data);
    let calldata_gas = zeroes * ZERO_BYTE_COST + ones * NON_ZERO_BYTE_COST;
    U256::from(calldata_gas).saturating_add(overhead)
}

/// Fee for publishing `data` on the base layer.
///
/// Multiplied as gas used, then price, then scalar; the accounting
/// contract evaluates in the same order. `scalar` is a raw integer
/// multiplier with no fixed-point scaling; a caller wanting a fractional
/// scalar pre-scales and divides outside this function.
pub fn l1_fee(data: &[u8], overhead: U256, l1_gas_price: U256, scalar: U256) -> U256 {
    l1_gas_used(data, overhead)
        .saturating_mul(l1_gas_price)
        .saturating_mul(scalar)
}

/// Total fee for a signed transaction under an already-fetched parameter
/// snapshot: the L1 publication fee of its wire bytes plus
/// `gas_price * gas_limit` for L2 execution.
pub fn transaction_fee_with_params(tx: &Signed<TxLegacy>, params: &GasPriceOracleParams) -> U256 {
    let raw = signed_tx_bytes(tx);
    let l1_fee = l1_fee(&raw, params.overhead, params.l1_gas_price, params.scalar);
    let l2_fee = U256::from(tx.tx().gas_price).saturating_mul(U256::from(tx.tx().gas_limit));
    trace!(target: "rollup::fees", %l1_fee, %l2_fee, "priced signed transaction");
    l1_fee.saturating_add(l2_fee)
}

/// Total fee for a signed transaction, reading a fresh parameter snapshot
/// from the oracle backend.
///
/// Pair [`GasPriceOracleParams::from_oracle_with_deadline`] with
/// [`transaction_fee_with_params`] to bound the lookup.
pub async fn transaction_fee<O>(tx: &Signed<TxLegacy>, oracle: &O) -> Result<U256, FeeError>
where
    O: GasPriceOracle + ?Sized,
{
    let params = GasPriceOracleParams::from_oracle(oracle)
        .await
        .map_err(FeeError::Oracle)?;
    Ok(transaction_fee_with_params(tx, &params))
}

/// L1 publication fee for a message that has no signature yet.
///
/// The message is encoded with the fixed signature stand-in and priced
/// against the snapshot read from the oracle predeploy's storage slots.
pub fn message_l1_fee<S>(msg: &TxMessage, state: &S) -> Result<U256, FeeError>
where
    S: StateReader,
    S::Error: std::error::Error + Send + Sync + 'static,
{
    let params =
        GasPriceOracleParams::from_state(state).map_err(|err| FeeError::Oracle(Box::new(err)))?;
    let raw = msg.padded_bytes();
    Ok(l1_fee(&raw, params.overhead, params.l1_gas_price, params.scalar))
}

/// Total fee for a not-yet-signed message: [`message_l1_fee`] plus
/// `gas_price * l2_gas_used`.
///
/// The L2 portion is priced with an externally measured gas quantity, not
/// the message's own gas limit.
pub fn message_fee<S>(msg: &TxMessage, state: &S, l2_gas_used: U256) -> Result<U256, FeeError>
where
    S: StateReader,
    S::Error: std::error::Error + Send + Sync + 'static,
{
    let l1_fee = message_l1_fee(msg, state)?;
    let l2_fee = U256::from(msg.gas_price).saturating_mul(l2_gas_used);
    trace!(target: "rollup::fees", %l1_fee, %l2_fee, "priced unsigned message");
    Ok(l1_fee.saturating_add(l2_fee))
}
