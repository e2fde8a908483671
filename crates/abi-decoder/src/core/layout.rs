//! Layout helpers (§4.7 of the design): computing how many words an element consumes, and
//! uniformly locating the payload of a head slot regardless of whether it holds inline data
//! or an offset.

use crate::{
    error::Error,
    schema::Schema,
    word::{as_uint_usize, word_at_offset},
};

/// How many words the value at `offset` consumes when read contiguously, i.e. without going
/// through offset indirection.
///
/// For `DynamicBytes`/`Utf8String` this reads the length word to compute `ceil(len / 32) + 1`
/// (the length word itself, plus the data words). For a `StaticStruct` it's the recursive sum
/// of each field's contiguous length. Everything else is exactly one word. Composite decoders
/// use this to advance their cursor after reading an inline (non-offset) field or element.
pub(crate) fn single_element_length(
    input: &str,
    offset: usize,
    schema: &Schema,
) -> Result<usize, Error> {
    match schema {
        Schema::DynamicBytes | Schema::Utf8String => {
            let word = word_at_offset(input, offset)?;
            let len_bytes = as_uint_usize(word)?;
            Ok(len_bytes.div_ceil(32) + 1)
        }
        Schema::StaticStruct(fields) => {
            let mut cursor = offset;
            let mut words = 0usize;
            for field in fields {
                let field_words = single_element_length(input, cursor, field)?;
                cursor += field_words * 64;
                words += field_words;
            }
            Ok(words)
        }
        _ => Ok(1),
    }
}

/// Returns the doubled byte-offset stored in the head word at `head_offset`, when `schema` is
/// dynamic; otherwise `0`. Callers add this to their container's base offset to find the
/// dynamic payload, and decode statically-typed elements in place (offset `0` is a no-op).
pub(crate) fn get_data_offset(
    input: &str,
    head_offset: usize,
    schema: &Schema,
) -> Result<usize, Error> {
    if !schema.is_dynamic() {
        return Ok(0);
    }
    let word = word_at_offset(input, head_offset)?;
    let byte_offset = as_uint_usize(word)?;
    Ok(byte_offset * 2)
}
