#[derive(Debug, PartialEq, thiserror::Error)]
pub enum DecodeError {
    /// The input string is not well-formed hex (odd length or a non-hex
    /// character). Raised before any wire parsing starts.
    #[error("invalid hex encoding: {0}")]
    InvalidEncoding(#[from] hex::FromHexError),

    /// A primitive read ran past the end of the buffer. The decode is
    /// aborted; there is no partial-result recovery.
    #[error("input truncated at offset {offset}: requested {requested} bytes, {available} available")]
    TruncatedInput {
        offset: usize,
        requested: usize,
        available: usize,
    },
}
