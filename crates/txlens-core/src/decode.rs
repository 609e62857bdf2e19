//! Wire-format transaction decoding.
//!
//! A single `ByteCursor` pass over the raw bytes: version, optional segwit
//! marker, inputs, outputs, deferred witness stacks, locktime. No semantic
//! validation is performed; length-consistent data always decodes.

use bitcoin::hashes::Hash;
use bitcoin::{Amount, ScriptBuf, Txid};

use crate::cursor::ByteCursor;
use crate::error::DecodeError;
use crate::types::{Transaction, TxInput, TxOutput, Witness, SEGWIT_FLAG};

/// An input record as it appears on the wire, before any witness stack is
/// known. Witness data trails the outputs, so inputs are staged here and
/// the final `TxInput` values are built in one step at the end.
struct InputRecord {
    prev_txid: Txid,
    prev_index: u32,
    script_sig: ScriptBuf,
    sequence: u32,
}

impl InputRecord {
    fn into_input(self, witness: Option<Witness>) -> TxInput {
        TxInput {
            prev_txid: self.prev_txid,
            prev_index: self.prev_index,
            script_sig: self.script_sig,
            sequence: self.sequence,
            witness,
        }
    }
}

impl Transaction {
    /// Decode a transaction from a hex string (case-insensitive).
    ///
    /// Fails with `DecodeError::InvalidEncoding` before any wire parsing
    /// starts if the string has odd length or a non-hex character.
    pub fn from_hex(tx_hex: &str) -> Result<Self, DecodeError> {
        let bytes = hex::decode(tx_hex)?;
        Self::from_bytes(&bytes)
    }

    /// Decode a transaction from raw bytes.
    ///
    /// Bytes left over past the end of the encoded transaction are ignored.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DecodeError> {
        let mut cursor = ByteCursor::new(bytes);
        read_transaction(&mut cursor)
    }
}

fn read_transaction(cursor: &mut ByteCursor) -> Result<Transaction, DecodeError> {
    let version = cursor.read_u32_le()? as i32;

    // Marker probe. A short probe (fewer than 2 bytes left) is a negative
    // result, not an error; the offset moves only when the marker matches.
    let flag = if matches!(cursor.peek(2), Ok([0x00, 0x01])) {
        cursor.read_bytes(2)?;
        Some(SEGWIT_FLAG)
    } else {
        None
    };

    // Counts come from untrusted input; grow by push, no pre-reservation.
    let vin_count = cursor.read_varint()?;
    let mut records = Vec::new();
    for _ in 0..vin_count {
        records.push(read_input_record(cursor)?);
    }

    let vout_count = cursor.read_varint()?;
    let mut vout = Vec::new();
    for _ in 0..vout_count {
        vout.push(read_output(cursor)?);
    }

    // Witness stacks replay the inputs in declaration order.
    let witness_stacks = if flag.is_some() {
        let mut stacks = Vec::new();
        for _ in 0..records.len() {
            stacks.push(read_witness(cursor)?);
        }
        Some(stacks)
    } else {
        None
    };

    let locktime = cursor.read_u32_le()?;

    let vin = match witness_stacks {
        Some(stacks) => records
            .into_iter()
            .zip(stacks)
            .map(|(record, stack)| record.into_input(Some(stack)))
            .collect(),
        None => records
            .into_iter()
            .map(|record| record.into_input(None))
            .collect(),
    };

    Ok(Transaction {
        version,
        flag,
        vin,
        vout,
        locktime,
    })
}

fn read_input_record(cursor: &mut ByteCursor) -> Result<InputRecord, DecodeError> {
    let mut txid = [0u8; 32];
    txid.copy_from_slice(cursor.read_bytes(32)?);
    // `Txid` holds the wire byte order and renders reversed.
    let prev_txid = Txid::from_byte_array(txid);

    let prev_index = cursor.read_u32_le()?;
    let script_sig = read_script(cursor)?;
    let sequence = cursor.read_u32_le()?;

    Ok(InputRecord {
        prev_txid,
        prev_index,
        script_sig,
        sequence,
    })
}

fn read_output(cursor: &mut ByteCursor) -> Result<TxOutput, DecodeError> {
    let value = Amount::from_sat(cursor.read_u64_le()?);
    let script_pubkey = read_script(cursor)?;
    Ok(TxOutput {
        value,
        script_pubkey,
    })
}

fn read_script(cursor: &mut ByteCursor) -> Result<ScriptBuf, DecodeError> {
    let len = cursor.read_varint()?;
    let bytes = cursor.read_bytes(len as usize)?;
    Ok(ScriptBuf::from_bytes(bytes.to_vec()))
}

fn read_witness(cursor: &mut ByteCursor) -> Result<Witness, DecodeError> {
    let item_count = cursor.read_varint()?;
    let mut items = Vec::new();
    for _ in 0..item_count {
        let len = cursor.read_varint()?;
        items.push(cursor.read_bytes(len as usize)?.to_vec());
    }
    Ok(Witness(items))
}
