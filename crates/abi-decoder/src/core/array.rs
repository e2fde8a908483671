//! Static and dynamic array decoders (§4.3, §4.4).

use tracing::trace;

use crate::{
    core::{decode_at, layout::get_data_offset},
    error::Error,
    options::DecodeOptions,
    schema::Schema,
    value::Value,
    word::{as_uint_usize, check_plausible_count},
};

/// `T[n]`. An array of dynamic elements is laid out as `n` head-offset words (relative to the
/// array's own start, `offset`) followed by the `n` tails — no length prefix is synthesized or
/// reread.
pub(crate) fn decode_static_array(
    input: &str,
    offset: usize,
    elem: &Schema,
    n: usize,
    depth: usize,
    options: &DecodeOptions,
) -> Result<Value, Error> {
    if n == 0 {
        return Err(Error::InvalidSchema("static array of length 0".to_string()));
    }
    trace!("decode_static_array: offset={offset}, n={n}, elem_dynamic={}", elem.is_dynamic());

    let mut values = Vec::with_capacity(n);
    let mut cursor = offset;
    for i in 0..n {
        let data_offset = get_data_offset(input, cursor, elem)?;
        let elem_offset = if elem.is_dynamic() { offset + data_offset } else { cursor };
        let value = decode_at(input, elem_offset, elem, depth + 1, options)?;
        trace!("decode_static_array: element {i} decoded at offset {elem_offset}");
        values.push(value);

        cursor += if elem.is_dynamic() { 64 } else { elem.word_count() * 64 };
    }
    Ok(Value::Array(values))
}

/// `T[]`.
pub(crate) fn decode_dynamic_array(
    input: &str,
    offset: usize,
    elem: &Schema,
    depth: usize,
    options: &DecodeOptions,
) -> Result<Value, Error> {
    let length_word = crate::word::word_at_offset(input, offset)?;
    let length = as_uint_usize(length_word)?;
    trace!("decode_dynamic_array: offset={offset}, length={length}, elem_dynamic={}", elem.is_dynamic());

    let payload_offset = offset + 64;
    // Each element occupies at least one head word, so this rejects an implausible declared
    // length before it ever reaches `Vec::with_capacity`.
    check_plausible_count(input, payload_offset, length)?;
    let mut values = Vec::with_capacity(length);
    let mut cursor = payload_offset;
    for i in 0..length {
        let data_offset = get_data_offset(input, cursor, elem)?;
        let elem_offset = if elem.is_dynamic() { payload_offset + data_offset } else { cursor };
        let value = decode_at(input, elem_offset, elem, depth + 1, options)?;
        trace!("decode_dynamic_array: element {i} decoded at offset {elem_offset}");
        values.push(value);

        cursor += if elem.is_dynamic() { 64 } else { elem.word_count() * 64 };
    }
    Ok(Value::Array(values))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dynamic_array_of_uint256_scenario() {
        // [1, 2, 3]
        let input = format!(
            "{}{}{}{}",
            format!("{:0>64}", "03"),
            format!("{:0>64}", "01"),
            format!("{:0>64}", "02"),
            format!("{:0>64}", "03"),
        );
        let options = DecodeOptions::default();
        let value = decode_dynamic_array(&input, 0, &Schema::Uint(256), 0, &options).unwrap();
        let Value::Array(items) = value else { panic!() };
        let nums: Vec<u64> = items
            .into_iter()
            .map(|v| v.as_uint().unwrap().try_into().unwrap())
            .collect();
        assert_eq!(nums, vec![1, 2, 3]);
    }

    #[test]
    fn nested_dynamic_array_scenario() {
        // [[1, 2], [3]]
        // 0: outer length = 2
        // 1: inner offset 0 -> 0x40 (2 words from payload start)
        // 2: inner offset 1 -> 0xa0 (4 words from payload start)
        // 3: inner[0] length = 2
        // 4: 1
        // 5: 2
        // 6: inner[1] length = 1
        // 7: 3
        let words = [
            "02", "40", "a0", "02", "01", "02", "01", "03",
        ];
        let input: String = words.iter().map(|w| format!("{:0>64}", w)).collect();
        let options = DecodeOptions::default();
        let elem = Schema::dynamic_array(Schema::Uint(256));
        let value = decode_dynamic_array(&input, 0, &elem, 0, &options).unwrap();
        let Value::Array(outer) = value else { panic!() };
        assert_eq!(outer.len(), 2);
        let Value::Array(first) = &outer[0] else { panic!() };
        let Value::Array(second) = &outer[1] else { panic!() };
        assert_eq!(first.len(), 2);
        assert_eq!(second.len(), 1);
    }

    #[test]
    fn zero_length_static_array_fails_invalid_schema() {
        let input = "00".repeat(32);
        let options = DecodeOptions::default();
        let err = decode_static_array(&input, 0, &Schema::Bool, 0, 0, &options).unwrap_err();
        assert!(matches!(err, Error::InvalidSchema(_)));
    }

    #[test]
    fn implausible_declared_length_fails_before_allocating() {
        // a single word declaring a length of a few billion elements, with no payload behind it
        let input = format!("{:0>64}", "ee6b2800"); // 4_000_000_000 in hex
        let options = DecodeOptions::default();
        let err = decode_dynamic_array(&input, 0, &Schema::Uint(256), 0, &options).unwrap_err();
        assert!(matches!(err, Error::LengthOverflow(_)));
    }
}
