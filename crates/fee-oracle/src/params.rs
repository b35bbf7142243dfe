use alloy_primitives::U256;

/// Point-in-time snapshot of the three fee parameters published by the gas
/// price oracle.
///
/// All three values come from a single fetch. A fee computation reads one
/// snapshot up front and uses it for the whole calculation; re-fetching
/// mid-calculation can price a transaction against state no contract ever
/// held.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GasPriceOracleParams {
    /// Gas price of the base layer, in wei per gas.
    pub l1_gas_price: U256,
    /// Fixed gas overhead added per transaction for batch submission.
    pub overhead: U256,
    /// Multiplier applied to the computed L1 fee.
    pub scalar: U256,
}
