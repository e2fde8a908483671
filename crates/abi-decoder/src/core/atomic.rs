//! Per-primitive decode routines (§4.2). Each takes the full input and a hex-char offset, and
//! reads exactly the word(s) its type demands.

use tracing::trace;

use crate::{
    error::Error,
    options::DecodeOptions,
    value::Value,
    word::{as_int, as_uint, as_uint_usize, check_plausible_count, checked_word_span_end, word_at_offset},
};

/// `bool`. Any nonzero word decodes to `true`; only the all-zero word decodes to `false`.
pub(crate) fn decode_bool(input: &str, offset: usize) -> Result<Value, Error> {
    let word = word_at_offset(input, offset)?;
    let value = as_uint(word, 256)?;
    Ok(Value::Bool(value == alloy_primitives::U256::from(1)))
}

/// `address`, encoded identically to `uint160`.
pub(crate) fn decode_address(input: &str, offset: usize) -> Result<Value, Error> {
    let word = word_at_offset(input, offset)?;
    let value = as_uint(word, 160)?;
    let bytes = value.to_be_bytes::<32>();
    Ok(Value::Address(alloy_primitives::Address::from_slice(&bytes[12..])))
}

/// `uintN`.
pub(crate) fn decode_uint(input: &str, offset: usize, bits: u16) -> Result<Value, Error> {
    let word = word_at_offset(input, offset)?;
    trace!("decode_uint: bits={bits}, word={word}");
    Ok(Value::Uint(as_uint(word, bits)?))
}

/// `intN`.
pub(crate) fn decode_int(input: &str, offset: usize, bits: u16) -> Result<Value, Error> {
    let word = word_at_offset(input, offset)?;
    trace!("decode_int: bits={bits}, word={word}");
    Ok(Value::Int(as_int(word, bits)?))
}

/// `bytesN`: the first `n` bytes of the word, left-justified; the rest is padding and is
/// ignored.
pub(crate) fn decode_bytes_n(input: &str, offset: usize, n: u8) -> Result<Value, Error> {
    let word = word_at_offset(input, offset)?;
    let hex_len = n as usize * 2;
    let hex = word.get(..hex_len).ok_or(Error::TruncatedInput(offset))?;
    Ok(Value::Bytes(decode_hex_chars(hex)?))
}

/// `bytes`: a length word followed by `ceil(length / 32)` data words, of which the first
/// `length` bytes are returned.
pub(crate) fn decode_dynamic_bytes(input: &str, offset: usize) -> Result<Value, Error> {
    let length_word = word_at_offset(input, offset)?;
    let length = as_uint_usize(length_word)?;
    trace!("decode_dynamic_bytes: offset={offset}, length={length}");

    let data_start = offset + 64;
    let word_count = length.div_ceil(32);
    // `word_count` is wire-controlled: a length near `usize::MAX` would overflow a raw
    // `word_count * 64` long before it could index into `input`, so check it against what
    // `input` could actually hold before doing the multiply.
    check_plausible_count(input, data_start, word_count)?;
    let data_end_word = checked_word_span_end(data_start, word_count)?;
    let data_hex = input
        .get(data_start..data_end_word)
        .ok_or(Error::TruncatedInput(data_start))?;

    let needed_hex_len = length * 2;
    let payload = data_hex.get(..needed_hex_len).ok_or(Error::TruncatedInput(data_start))?;
    Ok(Value::Bytes(decode_hex_chars(payload)?))
}

/// `string`: decoded as `bytes`, then interpreted as UTF-8. Lenient by default (malformed
/// sequences are replaced); strict if `options.strict_utf8` is set.
pub(crate) fn decode_utf8_string(
    input: &str,
    offset: usize,
    options: &DecodeOptions,
) -> Result<Value, Error> {
    let bytes = match decode_dynamic_bytes(input, offset)? {
        Value::Bytes(b) => b,
        _ => unreachable!("decode_dynamic_bytes always returns Value::Bytes"),
    };

    let string = if options.strict_utf8 {
        std::str::from_utf8(&bytes)?.to_string()
    } else {
        String::from_utf8_lossy(&bytes).into_owned()
    };

    Ok(Value::String(string))
}

/// Decodes a run of hex characters (guaranteed even length by callers) into bytes.
fn decode_hex_chars(hex: &str) -> Result<Vec<u8>, Error> {
    (0..hex.len())
        .step_by(2)
        .map(|i| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|_| Error::InvalidHex(format!("'{}' is not a valid hex byte", &hex[i..i + 2])))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bool_true_scenario() {
        let input = format!("{:0>64}", "1");
        assert_eq!(decode_bool(&input, 0).unwrap(), Value::Bool(true));
    }

    #[test]
    fn bool_nonzero_non_one_is_false() {
        let input = format!("{:0>64}", "2");
        assert_eq!(decode_bool(&input, 0).unwrap(), Value::Bool(false));
    }

    #[test]
    fn uint8_255_scenario() {
        let input = format!("{:0>64}", "ff");
        assert_eq!(decode_uint(&input, 0, 8).unwrap(), Value::Uint(alloy_primitives::U256::from(255)));
    }

    #[test]
    fn int8_minus_one_scenario() {
        let input = "f".repeat(64);
        assert_eq!(decode_int(&input, 0, 8).unwrap(), Value::Int(alloy_primitives::I256::MINUS_ONE));
    }

    #[test]
    fn address_scenario() {
        let input = format!("{:0>24}{}", "", "0a".repeat(20));
        let Value::Address(addr) = decode_address(&input, 0).unwrap() else { panic!() };
        assert_eq!(addr, alloy_primitives::Address::from([0x0a; 20]));
    }

    #[test]
    fn dynamic_bytes_abc_scenario() {
        // length=3, then "abc" left-justified in one word
        let length_word = format!("{:0>64}", "03");
        let data_word = format!("{:0<64}", "616263");
        let input = format!("{length_word}{data_word}");
        assert_eq!(decode_dynamic_bytes(&input, 0).unwrap(), Value::Bytes(b"abc".to_vec()));
    }

    #[test]
    fn dynamic_bytes_length_near_usize_max_fails_instead_of_overflowing() {
        // fits in a usize (so as_uint_usize lets it through), but word_count * 64 would
        // overflow a raw usize multiply on a 64-bit host.
        let length_word = format!("{:x}", usize::MAX);
        let input = format!("{length_word:0>64}");
        assert!(matches!(decode_dynamic_bytes(&input, 0), Err(Error::LengthOverflow(_))));
    }

    #[test]
    fn string_lenient_default_replaces_invalid_utf8() {
        let length_word = format!("{:0>64}", "01");
        let data_word = format!("{:0<64}", "ff"); // invalid utf-8 byte
        let input = format!("{length_word}{data_word}");
        let options = DecodeOptions::default();
        let Value::String(s) = decode_utf8_string(&input, 0, &options).unwrap() else { panic!() };
        assert_eq!(s, "\u{FFFD}");
    }

    #[test]
    fn string_strict_rejects_invalid_utf8() {
        let length_word = format!("{:0>64}", "01");
        let data_word = format!("{:0<64}", "ff");
        let input = format!("{length_word}{data_word}");
        let options = DecodeOptions { max_depth: 32, strict_utf8: true };
        assert!(matches!(decode_utf8_string(&input, 0, &options), Err(Error::InvalidUtf8(_))));
    }

    #[test]
    fn bytes_n_ignores_trailing_padding() {
        let input = format!("{:0<64}", "deadbeef");
        let Value::Bytes(bytes) = decode_bytes_n(&input, 0, 4).unwrap() else { panic!() };
        assert_eq!(bytes, vec![0xde, 0xad, 0xbe, 0xef]);
    }
}
