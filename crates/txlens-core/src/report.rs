//! Presentation-ready view of a decoded transaction.
//!
//! `TxReport` flattens a `Transaction` into the shape the rendering layer
//! serializes: entry indices, hex-rendered scripts, a fixed-width sequence
//! token, and the derived BTC display value. The view is computed once from
//! the immutable domain value and carries no behavior of its own.

use serde::Serialize;

use crate::types::{Transaction, TxInput, TxOutput};

/// One whole coin is 100,000,000 satoshis.
const SATS_PER_BTC: f64 = 100_000_000.0;

// ==============================================================================
// Report Types
// ==============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct TxReport {
    pub version: i32,
    pub is_segwit: bool,
    pub vin_count: usize,
    pub vout_count: usize,
    pub inputs: Vec<InputReport>,
    pub outputs: Vec<OutputReport>,
    pub locktime: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct InputReport {
    pub index: usize,
    /// Reversed-order display hex of the funding transaction id.
    pub prev_txid: String,
    pub prev_index: u32,
    pub script_sig_hex: String,
    /// Fixed-width hexadecimal token, e.g. `0xfffffffe`.
    pub sequence: String,
    /// Hex-rendered witness items; the key is absent for inputs of
    /// non-segwit transactions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub witness: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct OutputReport {
    pub index: usize,
    pub value_satoshis: u64,
    /// Display convenience: `value_satoshis / 100_000_000`.
    pub value_btc: f64,
    pub script_pubkey_hex: String,
}

// ==============================================================================
// Construction
// ==============================================================================

impl TxReport {
    #[must_use]
    pub fn new(tx: &Transaction) -> Self {
        Self {
            version: tx.version,
            is_segwit: tx.is_segwit(),
            vin_count: tx.vin.len(),
            vout_count: tx.vout.len(),
            inputs: tx
                .vin
                .iter()
                .enumerate()
                .map(|(index, input)| InputReport::new(index, input))
                .collect(),
            outputs: tx
                .vout
                .iter()
                .enumerate()
                .map(|(index, output)| OutputReport::new(index, output))
                .collect(),
            locktime: tx.locktime,
        }
    }
}

impl From<&Transaction> for TxReport {
    fn from(tx: &Transaction) -> Self {
        Self::new(tx)
    }
}

impl InputReport {
    fn new(index: usize, input: &TxInput) -> Self {
        Self {
            index,
            prev_txid: input.prev_txid.to_string(),
            prev_index: input.prev_index,
            script_sig_hex: hex::encode(input.script_sig.as_bytes()),
            sequence: format!("{:#010x}", input.sequence),
            witness: input
                .witness
                .as_ref()
                .map(|stack| stack.iter().map(hex::encode).collect()),
        }
    }
}

impl OutputReport {
    fn new(index: usize, output: &TxOutput) -> Self {
        Self {
            index,
            value_satoshis: output.value.to_sat(),
            value_btc: output.value.to_sat() as f64 / SATS_PER_BTC,
            script_pubkey_hex: hex::encode(output.script_pubkey.as_bytes()),
        }
    }
}
