//! Transaction shapes and wire encodings used for rollup fee estimation.
//!
//! Fee computation prices the exact bytes a transaction occupies when its
//! data is published to the base layer. This crate provides the
//! pre-signature message shape and the two canonical encodings: the signed
//! form as transmitted, and the unsigned form padded with a fixed
//! signature stand-in.

pub mod tx;

pub use tx::{signed_tx_bytes, TxMessage, SIGNATURE_PAD_LEN};
