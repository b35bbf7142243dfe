//! Storage layout of the gas price oracle predeploy.

use alloy_primitives::{address, Address, U256};

/// Address of the gas price oracle predeploy on L2.
pub const GAS_PRICE_ORACLE_ADDRESS: Address =
    address!("0x420000000000000000000000000000000000000F");

/// Storage slot holding the current L1 gas price.
pub const L1_GAS_PRICE_SLOT: U256 = U256::from_limbs([2u64, 0, 0, 0]);

/// Storage slot holding the per-transaction batch submission overhead.
pub const OVERHEAD_SLOT: U256 = U256::from_limbs([3u64, 0, 0, 0]);

/// Storage slot holding the L1 fee scalar.
pub const SCALAR_SLOT: U256 = U256::from_limbs([4u64, 0, 0, 0]);
