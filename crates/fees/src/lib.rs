//! Fee computation for rollup transactions.
//!
//! The total charge for including a transaction combines the cost of
//! publishing its data to the base layer with the cost of executing it on
//! the rollup:
//!
//! ```text
//! fee = l1_gas_used(data) * l1_gas_price * scalar  +  gas_price * gas
//! ```
//!
//! The L1 portion must reproduce, to the wei, what the on-chain accounting
//! contract computes for the same bytes; every constant and every
//! multiplication order in [`compute`] is pinned by that contract. The
//! three oracle parameters are read per computation through
//! [`fee_oracle`]'s backends. [`validate`] checks a fee a user offered
//! against the computed expectation, with an optional tolerance band from
//! [`config`].

pub mod compute;
pub mod config;
pub mod error;
pub mod validate;

pub use compute::{
    l1_fee, l1_gas_used, message_fee, message_l1_fee, transaction_fee,
    transaction_fee_with_params, zeroes_and_ones, NON_ZERO_BYTE_COST, ZERO_BYTE_COST,
};
pub use config::{ConfigError, FeeThresholds};
pub use error::FeeError;
pub use validate::{pays_enough, PaysEnoughRequest};
