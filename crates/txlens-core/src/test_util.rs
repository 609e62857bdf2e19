//! Shared test helpers for `txlens-core` unit tests.
//!
//! `WireBuilder` assembles raw transaction byte vectors field by field so
//! scenario tests can state their wire layout instead of spelling out hex
//! strings byte by byte.

/// Builds a raw transaction byte vector in wire order.
///
/// The builder does no validation; tests use it to produce malformed
/// layouts as easily as well-formed ones.
pub struct WireBuilder {
    bytes: Vec<u8>,
}

impl WireBuilder {
    pub fn new() -> Self {
        Self { bytes: Vec::new() }
    }

    pub fn version(mut self, version: i32) -> Self {
        self.bytes.extend_from_slice(&(version as u32).to_le_bytes());
        self
    }

    pub fn segwit_marker(mut self) -> Self {
        self.bytes.extend_from_slice(&[0x00, 0x01]);
        self
    }

    /// Append a canonically encoded compact-size integer.
    pub fn varint(mut self, value: u64) -> Self {
        match value {
            0..=0xfc => self.bytes.push(value as u8),
            0xfd..=0xffff => {
                self.bytes.push(0xfd);
                self.bytes.extend_from_slice(&(value as u16).to_le_bytes());
            }
            0x1_0000..=0xffff_ffff => {
                self.bytes.push(0xfe);
                self.bytes.extend_from_slice(&(value as u32).to_le_bytes());
            }
            _ => {
                self.bytes.push(0xff);
                self.bytes.extend_from_slice(&value.to_le_bytes());
            }
        }
        self
    }

    /// Append one input record: a txid of 32 repeated `txid_byte`s, the
    /// prevout index, a length-prefixed script, and the sequence number.
    pub fn input(self, txid_byte: u8, prev_index: u32, script_sig: &[u8], sequence: u32) -> Self {
        let mut builder = self;
        builder.bytes.extend_from_slice(&[txid_byte; 32]);
        builder.bytes.extend_from_slice(&prev_index.to_le_bytes());
        builder = builder.varint(script_sig.len() as u64);
        builder.bytes.extend_from_slice(script_sig);
        builder.bytes.extend_from_slice(&sequence.to_le_bytes());
        builder
    }

    /// Append one output record: value in satoshis and a length-prefixed
    /// script.
    pub fn output(self, sats: u64, script_pubkey: &[u8]) -> Self {
        let mut builder = self;
        builder.bytes.extend_from_slice(&sats.to_le_bytes());
        builder = builder.varint(script_pubkey.len() as u64);
        builder.bytes.extend_from_slice(script_pubkey);
        builder
    }

    /// Append one witness stack: an item count followed by
    /// length-prefixed items.
    pub fn witness_stack(self, items: &[&[u8]]) -> Self {
        let mut builder = self.varint(items.len() as u64);
        for item in items {
            builder = builder.varint(item.len() as u64);
            builder.bytes.extend_from_slice(item);
        }
        builder
    }

    pub fn locktime(mut self, locktime: u32) -> Self {
        self.bytes.extend_from_slice(&locktime.to_le_bytes());
        self
    }

    /// Append bytes verbatim, for deliberately odd layouts.
    pub fn raw(mut self, bytes: &[u8]) -> Self {
        self.bytes.extend_from_slice(bytes);
        self
    }

    pub fn build(self) -> Vec<u8> {
        self.bytes
    }
}
