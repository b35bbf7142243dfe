//! The fee message shape and its canonical encodings.

use alloy_consensus::{transaction::RlpEcdsaEncodableTx, Signed, TxLegacy};
use alloy_primitives::{Address, Bytes, TxKind, U256};
use alloy_rlp::{BufMut, Encodable, Header};
use serde::{Deserialize, Serialize};

/// Number of bytes appended to an unsigned encoding to stand in for the
/// signature a submitted transaction will carry.
pub const SIGNATURE_PAD_LEN: usize = 136;

/// A transaction that has no signature yet, as handed to fee estimation.
///
/// Carries exactly the fields a sender knows before signing. A recipient
/// of [`TxKind::Create`] marks contract creation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TxMessage {
    /// Sender address.
    pub from: Address,
    /// Call target, or create.
    pub to: TxKind,
    /// Gas price offered for L2 execution, in wei per gas.
    pub gas_price: u128,
    /// Gas limit for L2 execution.
    pub gas_limit: u64,
    /// ETH value.
    pub value: U256,
    /// Sender nonce.
    pub nonce: u64,
    /// Calldata.
    pub data: Bytes,
}

impl TxMessage {
    /// Legacy RLP encoding of the message before a signature exists.
    ///
    /// The three signature fields are present but empty, matching how an
    /// unsigned legacy transaction serializes.
    pub fn unsigned_bytes(&self) -> Vec<u8> {
        let header = Header {
            list: true,
            payload_length: self.rlp_unsigned_fields_length(),
        };
        let mut out = Vec::with_capacity(header.length_with_payload());
        header.encode(&mut out);
        self.rlp_encode_unsigned_fields(&mut out);
        out
    }

    /// [`Self::unsigned_bytes`] plus the fixed-length signature stand-in.
    ///
    /// The filler is the ASCII text "ff" repeated 68 times, not the byte
    /// 0xff. Fees recomputed on-chain depend on the exact bytes, so the
    /// literal spelling is load-bearing; both spellings price every filler
    /// byte as non-zero calldata.
    pub fn padded_bytes(&self) -> Vec<u8> {
        let mut out = self.unsigned_bytes();
        out.extend_from_slice(&b"ff".repeat(SIGNATURE_PAD_LEN / 2));
        out
    }

    fn rlp_unsigned_fields_length(&self) -> usize {
        self.nonce.length()
            + self.gas_price.length()
            + self.gas_limit.length()
            + self.to.length()
            + self.value.length()
            + self.data.length()
            + 3 // v, r, s each encode as an empty integer
    }

    fn rlp_encode_unsigned_fields(&self, out: &mut dyn BufMut) {
        self.nonce.encode(out);
        self.gas_price.encode(out);
        self.gas_limit.encode(out);
        self.to.encode(out);
        self.value.encode(out);
        self.data.encode(out);
        0u8.encode(out);
        0u8.encode(out);
        0u8.encode(out);
    }
}

/// Encodes a signed legacy transaction exactly as it is transmitted.
pub fn signed_tx_bytes(tx: &Signed<TxLegacy>) -> Vec<u8> {
    let mut out = Vec::with_capacity(tx.tx().rlp_encoded_length_with_signature(tx.signature()));
    tx.tx().rlp_encode_signed(tx.signature(), &mut out);
    out
}
