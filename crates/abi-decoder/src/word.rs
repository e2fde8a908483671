//! Extraction of fixed 32-byte words from the hex input, and their interpretation as
//! big-endian integers. Every decoder, atomic or composite, bottoms out in these functions —
//! concentrating the 32-byte extraction here is what keeps the rest of the crate free of
//! off-by-one errors.

use alloy_primitives::{I256, U256};

use crate::error::Error;

/// One ABI word is 32 bytes, i.e. 64 hex characters.
pub(crate) const WORD_HEX_LEN: usize = 64;

/// Validates that `input` is a well-formed ABI hex stream: only hex digits, and a length
/// that's a multiple of one word.
pub(crate) fn validate_input(input: &str) -> Result<(), Error> {
    if input.len() % WORD_HEX_LEN != 0 {
        return Err(Error::InvalidHex(format!(
            "input length {} is not a multiple of {WORD_HEX_LEN} hex chars",
            input.len()
        )));
    }
    if !input.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(Error::InvalidHex("input contains a non-hex digit".to_string()));
    }
    Ok(())
}

/// Returns the 64-hex-char slice of `input` at word index `word_index`, i.e. the word
/// starting at hex offset `word_index * 64`.
pub(crate) fn word_at(input: &str, word_index: usize) -> Result<&str, Error> {
    let start = word_index
        .checked_mul(WORD_HEX_LEN)
        .ok_or_else(|| Error::LengthOverflow(format!("word index {word_index}")))?;
    let end = start
        .checked_add(WORD_HEX_LEN)
        .ok_or_else(|| Error::LengthOverflow(format!("word index {word_index}")))?;
    input.get(start..end).ok_or(Error::TruncatedInput(start))
}

/// Like [`word_at`], but addressed by hex-char offset rather than word index. Every offset
/// tracked by the struct/array decoders is word-aligned by construction, so this is just
/// `word_at(input, offset / 64)`.
pub(crate) fn word_at_offset(input: &str, offset: usize) -> Result<&str, Error> {
    word_at(input, offset / WORD_HEX_LEN)
}

/// Computes `start + word_count * WORD_HEX_LEN` with checked arithmetic, for spans whose word
/// count comes straight off the wire (a declared `bytes`/`string` length). Wire-controlled
/// values must never reach a raw `*`/`+` here: a length near `usize::MAX` overflows the
/// multiply long before it could plausibly index into `input`.
pub(crate) fn checked_word_span_end(start: usize, word_count: usize) -> Result<usize, Error> {
    let span = word_count
        .checked_mul(WORD_HEX_LEN)
        .ok_or_else(|| Error::LengthOverflow(format!("{word_count} words overflows a hex length")))?;
    start
        .checked_add(span)
        .ok_or_else(|| Error::LengthOverflow(format!("span of {span} hex chars from {start} overflows")))
}

/// Declared element/word counts taken from the wire must be checked against what the input
/// could actually hold before they're used to size an allocation. Returns `Ok(())` if `count`
/// words (each occupying at least `WORD_HEX_LEN` hex chars) could fit in `input` starting at
/// `start`; otherwise `Error::LengthOverflow`.
pub(crate) fn check_plausible_count(input: &str, start: usize, count: usize) -> Result<(), Error> {
    let remaining_hex = input.len().checked_sub(start).ok_or_else(|| {
        Error::OffsetOutOfRange(format!("offset {start} is past the end of the input"))
    })?;
    let max_count = remaining_hex / WORD_HEX_LEN;
    if count > max_count {
        return Err(Error::LengthOverflow(format!(
            "declared count {count} exceeds the {max_count} words remaining in the input"
        )));
    }
    Ok(())
}

/// Interprets the rightmost `bits / 8` bytes of `word` as a big-endian unsigned integer.
pub(crate) fn as_uint(word: &str, bits: u16) -> Result<U256, Error> {
    let full = U256::from_str_radix(word, 16)
        .map_err(|_| Error::InvalidHex(format!("word '{word}' is not valid hex")))?;
    if bits >= 256 {
        return Ok(full);
    }
    let mask = (U256::from(1) << bits) - U256::from(1);
    Ok(full & mask)
}

/// Interprets the rightmost `bits / 8` bytes of `word` as a big-endian two's-complement
/// signed integer, sign-extending from bit `bits - 1`.
pub(crate) fn as_int(word: &str, bits: u16) -> Result<I256, Error> {
    let value = as_uint(word, bits)?;
    if bits >= 256 {
        return Ok(I256::from_raw(value));
    }
    let sign_bit = U256::from(1) << (bits - 1);
    if value & sign_bit != U256::ZERO {
        let mask = (U256::from(1) << bits) - U256::from(1);
        // Sign-extend: set every bit above `bits` to 1, matching two's complement at 256 bits.
        let extended = value | !mask;
        Ok(I256::from_raw(extended))
    } else {
        Ok(I256::from_raw(value))
    }
}

/// `as_uint(word, 256)`, narrowed to `usize`. Fails with `LengthOverflow` if the value
/// doesn't fit — this is the check that rejects the canonical "length word is `2^200`" attack.
pub(crate) fn as_uint_usize(word: &str) -> Result<usize, Error> {
    let value = as_uint(word, 256)?;
    usize::try_from(value)
        .map_err(|_| Error::LengthOverflow(format!("word '{word}' does not fit in a usize")))
}
