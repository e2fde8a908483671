//! Struct decoders (§4.5): the hardest case, because a dynamic struct's fields are a mix of
//! inline values and offsets whose payload lengths are only discoverable by looking at the
//! *next* offset, not by any length the struct itself declares.

use std::collections::BTreeMap;

use tracing::trace;

use crate::{
    core::decode_at,
    error::Error,
    options::DecodeOptions,
    schema::Schema,
    value::Value,
    word::{as_uint_usize, word_at_offset},
};

/// All fields static: decode left-to-right at an advancing cursor. Nested static structs are
/// just another field whose `word_count` flattens into the same cursor arithmetic; dispatch
/// handles the recursion, this loop doesn't need a special case for them.
pub(crate) fn decode_static_struct(
    input: &str,
    offset: usize,
    fields: &[Schema],
    depth: usize,
    options: &DecodeOptions,
) -> Result<Value, Error> {
    let mut values = BTreeMap::new();
    let mut cursor = offset;
    for (i, field) in fields.iter().enumerate() {
        let value = decode_at(input, cursor, field, depth + 1, options)?;
        cursor += field.word_count() * 64;
        values.insert(i, value);
    }
    Ok(Value::Struct(values))
}

/// At least one dynamic field: a two-pass read.
///
/// Pass 1 walks the head region left to right. Inline (static) fields are decoded immediately;
/// each dynamic field instead yields a head offset, recorded but not yet resolved, because its
/// payload's length isn't known until we see where the *next* dynamic field's payload begins.
///
/// Pass 2 resolves those payloads: field `k`'s tail runs from its own head offset to the next
/// dynamic field's head offset, or to the end of the input for the last one.
pub(crate) fn decode_dynamic_struct(
    input: &str,
    offset: usize,
    fields: &[Schema],
    depth: usize,
    options: &DecodeOptions,
) -> Result<Value, Error> {
    let mut values: Vec<Option<Value>> = vec![None; fields.len()];
    let mut pending: Vec<(usize, usize)> = Vec::new();
    let mut cursor = offset;

    for (i, field) in fields.iter().enumerate() {
        if field.is_dynamic() {
            let head_word = word_at_offset(input, cursor)?;
            let byte_offset = as_uint_usize(head_word)?;
            let head_offset_abs = offset + byte_offset * 2;
            trace!("decode_dynamic_struct: field {i} is dynamic, head offset {head_offset_abs}");
            pending.push((i, head_offset_abs));
            cursor += 64;
        } else {
            let value = decode_at(input, cursor, field, depth + 1, options)?;
            cursor += field.word_count() * 64;
            values[i] = Some(value);
        }
    }

    for idx in 0..pending.len() {
        let (field_i, start) = pending[idx];
        let end = match pending.get(idx + 1) {
            Some((_, next_start)) => *next_start,
            None => input.len(),
        };

        if end < start {
            return Err(Error::OffsetOutOfRange(format!(
                "field {field_i}'s tail ends before it starts ({start}..{end}); dynamic-field \
                 offsets must be strictly increasing"
            )));
        }
        let slice = input.get(start..end).ok_or(Error::OffsetOutOfRange(format!(
            "field {field_i}'s tail [{start}..{end}) lies outside the input"
        )))?;

        trace!("decode_dynamic_struct: field {field_i} tail is [{start}..{end})");
        let value = decode_at(slice, 0, &fields[field_i], depth + 1, options)?;
        values[field_i] = Some(value);
    }

    let values = values
        .into_iter()
        .enumerate()
        .map(|(i, v)| (i, v.expect("every field index is populated by one of the two passes")))
        .collect::<BTreeMap<usize, Value>>();

    Ok(Value::Struct(values))
}
