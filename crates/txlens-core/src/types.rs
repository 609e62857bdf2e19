//! Domain types for decoded raw transactions.
//!
//! Contains the decoded transaction value (`Transaction`, `TxInput`,
//! `TxOutput`) and the per-input `Witness` stack. All values are immutable
//! once constructed and owned exclusively by their transaction; nothing is
//! shared by identity.

use bitcoin::{Amount, ScriptBuf, Txid};
use serde::{Deserialize, Serialize};

/// Wire value of the flag byte pair that follows the segwit marker.
pub const SEGWIT_FLAG: u16 = 0x0001;

// ==============================================================================
// Witness
// ==============================================================================

/// Ordered witness stack attached to one input of a segwit transaction.
///
/// `#[serde(transparent)]` preserves the representation as a bare sequence
/// of items. `Deref<Target = Vec<Vec<u8>>>` minimises call-site churn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Witness(pub Vec<Vec<u8>>);

impl From<Vec<Vec<u8>>> for Witness {
    fn from(items: Vec<Vec<u8>>) -> Self {
        Self(items)
    }
}

impl std::ops::Deref for Witness {
    type Target = Vec<Vec<u8>>;
    fn deref(&self) -> &Vec<Vec<u8>> {
        &self.0
    }
}

// ==============================================================================
// Transaction Types
// ==============================================================================

/// A single decoded transaction input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxInput {
    /// Transaction id of the output being spent. Held in wire byte order
    /// internally; `Display` and serde render the reversed display order.
    pub prev_txid: Txid,
    /// Index of the output within the funding transaction.
    pub prev_index: u32,
    /// The unlocking script, kept as opaque bytes.
    pub script_sig: ScriptBuf,
    pub sequence: u32,
    /// Witness stack; `None` for inputs of non-segwit transactions.
    pub witness: Option<Witness>,
}

/// A single decoded transaction output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxOutput {
    /// Output value in satoshis.
    pub value: Amount,
    /// The locking script, kept as opaque bytes.
    pub script_pubkey: ScriptBuf,
}

/// A fully decoded transaction.
///
/// Input and output order is wire order. The value exists transiently
/// within one decode call; there is no persistence or update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub version: i32,
    /// Segwit flag; `Some(SEGWIT_FLAG)` iff the two-byte marker followed
    /// the version field on the wire.
    pub flag: Option<u16>,
    pub vin: Vec<TxInput>,
    pub vout: Vec<TxOutput>,
    pub locktime: u32,
}

impl Transaction {
    /// A transaction is segwit iff the marker was present.
    #[must_use]
    pub fn is_segwit(&self) -> bool {
        self.flag.is_some()
    }
}
