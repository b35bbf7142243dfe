//! Live oracle query backend.

use std::time::Duration;

use alloy_primitives::U256;
use async_trait::async_trait;

use crate::params::GasPriceOracleParams;

/// Failure surfaced by an oracle backend.
///
/// Carried through to the caller unchanged. The fee core never inspects or
/// retries it; recovery policy belongs to whoever issued the computation.
pub type OracleError = Box<dyn std::error::Error + Send + Sync>;

/// Live query interface to the rollup's gas price oracle.
///
/// Each query may suspend or fail independently; implementations sit on
/// whatever transport the node uses. Any caching belongs to the
/// implementation, never to the fee core.
#[async_trait]
pub trait GasPriceOracle: Send + Sync {
    /// Current base-layer gas price, in wei per gas.
    async fn suggest_l1_gas_price(&self) -> Result<U256, OracleError>;

    /// Fixed per-transaction gas overhead for batch submission.
    async fn suggest_overhead(&self) -> Result<U256, OracleError>;

    /// Multiplier applied to the computed L1 fee.
    async fn suggest_scalar(&self) -> Result<U256, OracleError>;
}

impl GasPriceOracleParams {
    /// Queries all three parameters from the oracle as one snapshot.
    ///
    /// The first failing query fails the whole lookup; no partial snapshot
    /// is ever returned.
    pub async fn from_oracle<O>(oracle: &O) -> Result<Self, OracleError>
    where
        O: GasPriceOracle + ?Sized,
    {
        let l1_gas_price = oracle.suggest_l1_gas_price().await?;
        let overhead = oracle.suggest_overhead().await?;
        let scalar = oracle.suggest_scalar().await?;
        Ok(Self {
            l1_gas_price,
            overhead,
            scalar,
        })
    }

    /// Like [`Self::from_oracle`], abandoning the whole lookup when it has
    /// not completed within `deadline`.
    pub async fn from_oracle_with_deadline<O>(
        oracle: &O,
        deadline: Duration,
    ) -> Result<Self, OracleError>
    where
        O: GasPriceOracle + ?Sized,
    {
        match tokio::time::timeout(deadline, Self::from_oracle(oracle)).await {
            Ok(snapshot) => snapshot,
            Err(elapsed) => Err(Box::new(elapsed)),
        }
    }
}
