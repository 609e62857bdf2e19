//! Bounds-checked cursor reads over a raw transaction byte buffer.
//!
//! `ByteCursor` wraps the input slice together with a read offset and
//! provides the primitive reads the wire format is built from: fixed-width
//! little-endian integers, compact-size varints, and length-prefixed byte
//! runs. A read past the end of the buffer fails with
//! `DecodeError::TruncatedInput`, never silent truncation or wraparound.

use crate::error::DecodeError;

/// A cursor over an untrusted byte buffer.
///
/// Every successful read advances the offset by exactly the number of bytes
/// consumed. A failed read leaves the offset where the read was attempted
/// and reports the requested and available byte counts.
#[derive(Debug)]
pub struct ByteCursor<'a> {
    buf: &'a [u8],
    offset: usize,
}

impl<'a> ByteCursor<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, offset: 0 }
    }

    /// Current read offset into the buffer.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Bytes left between the offset and the end of the buffer.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.offset
    }

    /// Look at the next `n` bytes without advancing the offset.
    ///
    /// Callers probing for an optional field can treat the truncation error
    /// as a negative probe rather than a hard failure.
    pub fn peek(&self, n: usize) -> Result<&'a [u8], DecodeError> {
        if n > self.remaining() {
            return Err(DecodeError::TruncatedInput {
                offset: self.offset,
                requested: n,
                available: self.remaining(),
            });
        }
        Ok(&self.buf[self.offset..self.offset + n])
    }

    /// Read the next `n` bytes verbatim and advance. `n == 0` yields an
    /// empty slice without error.
    pub fn read_bytes(&mut self, n: usize) -> Result<&'a [u8], DecodeError> {
        let bytes = self.peek(n)?;
        self.offset += n;
        Ok(bytes)
    }

    /// Read `len` bytes as an unsigned little-endian integer, `len <= 8`.
    pub fn read_uint_le(&mut self, len: usize) -> Result<u64, DecodeError> {
        debug_assert!(len <= 8, "uint read wider than u64");
        let bytes = self.read_bytes(len)?;
        let mut le = [0u8; 8];
        le[..len].copy_from_slice(bytes);
        Ok(u64::from_le_bytes(le))
    }

    pub fn read_u8(&mut self) -> Result<u8, DecodeError> {
        Ok(self.read_uint_le(1)? as u8)
    }

    pub fn read_u32_le(&mut self) -> Result<u32, DecodeError> {
        Ok(self.read_uint_le(4)? as u32)
    }

    pub fn read_u64_le(&mut self) -> Result<u64, DecodeError> {
        self.read_uint_le(8)
    }

    /// Read a compact-size integer: a prefix byte below `0xfd` is the value
    /// itself; `0xfd`, `0xfe`, and `0xff` select a 2-, 4-, or 8-byte
    /// little-endian body.
    ///
    /// Over-long encodings (a value that would have fit a shorter class)
    /// are accepted at face value, matching lenient real-world decoders.
    pub fn read_varint(&mut self) -> Result<u64, DecodeError> {
        match self.read_u8()? {
            0xfd => self.read_uint_le(2),
            0xfe => self.read_uint_le(4),
            0xff => self.read_uint_le(8),
            prefix => Ok(u64::from(prefix)),
        }
    }
}
