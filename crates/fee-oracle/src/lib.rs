//! Gas price oracle parameter acquisition for rollup fee computation.
//!
//! The three fee parameters (L1 gas price, batch overhead, fee scalar) are
//! published by a gas price oracle contract predeployed on L2. Two
//! interchangeable backends produce the same [`GasPriceOracleParams`]
//! snapshot: a live query interface ([`GasPriceOracle`]) and a direct read
//! of the predeploy's storage slots ([`StateReader`]). Whichever backend a
//! caller picks, the values must track the deployed contract; fees derived
//! from a stale or mixed snapshot will not match what the contract settles.

pub mod constants;
pub mod oracle;
pub mod params;
pub mod state;

pub use constants::{GAS_PRICE_ORACLE_ADDRESS, L1_GAS_PRICE_SLOT, OVERHEAD_SLOT, SCALAR_SLOT};
pub use oracle::{GasPriceOracle, OracleError};
pub use params::GasPriceOracleParams;
pub use state::StateReader;
