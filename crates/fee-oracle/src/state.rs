//! Storage-slot backend.

use alloy_primitives::{Address, U256};

use crate::{
    constants::{GAS_PRICE_ORACLE_ADDRESS, L1_GAS_PRICE_SLOT, OVERHEAD_SLOT, SCALAR_SLOT},
    params::GasPriceOracleParams,
};

/// Read access to L2 account storage.
///
/// The fee core only ever reads the three oracle slots through this; the
/// storage engine behind it is an external concern.
pub trait StateReader {
    /// Error surfaced by the underlying storage engine.
    type Error;

    /// Returns the 32-byte word stored at `slot` of `address`, interpreted
    /// as an unsigned big-endian integer. Unset slots read as zero.
    fn storage(&self, address: Address, slot: U256) -> Result<U256, Self::Error>;
}

impl GasPriceOracleParams {
    /// Reads the snapshot directly from the gas price oracle predeploy's
    /// storage slots.
    ///
    /// The only failure mode is the storage read itself. The slot layout
    /// must track the deployed oracle contract: this path and the
    /// [`crate::GasPriceOracle`] queries are two views of the same
    /// contract state and must agree numerically.
    pub fn from_state<S: StateReader>(state: &S) -> Result<Self, S::Error> {
        let l1_gas_price = state.storage(GAS_PRICE_ORACLE_ADDRESS, L1_GAS_PRICE_SLOT)?;
        let overhead = state.storage(GAS_PRICE_ORACLE_ADDRESS, OVERHEAD_SLOT)?;
        let scalar = state.storage(GAS_PRICE_ORACLE_ADDRESS, SCALAR_SLOT)?;
        Ok(Self {
            l1_gas_price,
            overhead,
            scalar,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{collections::HashMap, convert::Infallible};

    struct MapState(HashMap<U256, U256>);

    impl StateReader for MapState {
        type Error = Infallible;

        fn storage(&self, address: Address, slot: U256) -> Result<U256, Self::Error> {
            assert_eq!(address, GAS_PRICE_ORACLE_ADDRESS);
            Ok(self.0.get(&slot).copied().unwrap_or_default())
        }
    }

    #[derive(Debug, thiserror::Error)]
    #[error("trie node missing")]
    struct MissingNode;

    struct BrokenState;

    impl StateReader for BrokenState {
        type Error = MissingNode;

        fn storage(&self, _address: Address, _slot: U256) -> Result<U256, Self::Error> {
            Err(MissingNode)
        }
    }

    #[test]
    fn reads_the_three_oracle_slots() {
        let state = MapState(HashMap::from([
            (L1_GAS_PRICE_SLOT, U256::from(15_000_000_000u64)),
            (OVERHEAD_SLOT, U256::from(2750)),
            (SCALAR_SLOT, U256::from(7)),
        ]));

        let snapshot = GasPriceOracleParams::from_state(&state).expect("snapshot");
        assert_eq!(snapshot.l1_gas_price, U256::from(15_000_000_000u64));
        assert_eq!(snapshot.overhead, U256::from(2750));
        assert_eq!(snapshot.scalar, U256::from(7));
    }

    #[test]
    fn unset_slots_read_as_zero() {
        let state = MapState(HashMap::new());
        let snapshot = GasPriceOracleParams::from_state(&state).expect("snapshot");
        assert_eq!(snapshot, GasPriceOracleParams::default());
    }

    #[test]
    fn storage_failure_propagates() {
        GasPriceOracleParams::from_state(&BrokenState).expect_err("read must fail");
    }
}
