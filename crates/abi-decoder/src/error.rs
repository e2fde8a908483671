/// Errors produced while decoding ABI-encoded data against a [`crate::Schema`].
///
/// These are structured, not stringly-typed: callers match on the variant rather than
/// parsing a message.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The schema demanded more words than remain in the input.
    #[error("truncated input: expected a word at hex offset {0}, but the input ends before it")]
    TruncatedInput(usize),

    /// The input contains a non-hex digit, or its length isn't a multiple of 64 hex chars.
    #[error("invalid hex input: {0}")]
    InvalidHex(String),

    /// The schema itself is malformed for the position it's used in.
    #[error("invalid schema: {0}")]
    InvalidSchema(String),

    /// A decoded offset points outside the bounds of the input (or, for a dynamic struct,
    /// violates the offset-monotonicity invariant between consecutive dynamic fields).
    #[error("offset out of range: {0}")]
    OffsetOutOfRange(String),

    /// A declared dynamic length doesn't fit the host's addressing, or exceeds the
    /// remaining input once converted to words.
    #[error("length overflow: declared length {0} cannot be satisfied by the remaining input")]
    LengthOverflow(String),

    /// Strict UTF-8 was requested and the decoded bytes are not valid UTF-8.
    #[error("invalid utf-8 in decoded string: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),

    /// The requested schema kind isn't implemented (e.g. `fixed`/`ufixed`).
    #[error("unsupported schema kind: {0}")]
    Unsupported(String),
}
