//! The decode engine: dispatch plus the six concrete decoders it routes to.

mod array;
mod atomic;
mod layout;
mod struct_;

use tracing::trace;

use crate::{error::Error, options::DecodeOptions, schema::Schema, value::Value, word};

/// Decodes `input` (a stripped, `0x`-less hex string) against `schema`, using the default
/// [`DecodeOptions`].
pub fn decode(input: &str, schema: &Schema) -> Result<Value, Error> {
    decode_with_options(input, schema, &DecodeOptions::default())
}

/// Decodes `input` against `schema`, honoring the recursion bound and UTF-8 strictness in
/// `options`.
pub fn decode_with_options(
    input: &str,
    schema: &Schema,
    options: &DecodeOptions,
) -> Result<Value, Error> {
    word::validate_input(input)?;
    schema.validate()?;
    decode_at(input, 0, schema, 0, options)
}

/// The internal entry point every composite decoder re-enters. `offset` is a hex-char offset
/// into `input`, always word-aligned; `depth` is the current schema nesting depth, checked
/// against `options.max_depth` before any further recursion (§4.8).
pub(crate) fn decode_at(
    input: &str,
    offset: usize,
    schema: &Schema,
    depth: usize,
    options: &DecodeOptions,
) -> Result<Value, Error> {
    if depth > options.max_depth {
        return Err(Error::InvalidSchema(format!(
            "schema nesting exceeded the configured max depth of {}",
            options.max_depth
        )));
    }
    trace!("decode: offset={offset}, depth={depth}, schema={schema:?}");

    match schema {
        Schema::Bool => atomic::decode_bool(input, offset),
        Schema::Address => atomic::decode_address(input, offset),
        Schema::Uint(bits) => atomic::decode_uint(input, offset, *bits),
        Schema::Int(bits) => atomic::decode_int(input, offset, *bits),
        Schema::BytesN(n) => atomic::decode_bytes_n(input, offset, *n),
        Schema::DynamicBytes => atomic::decode_dynamic_bytes(input, offset),
        Schema::Utf8String => atomic::decode_utf8_string(input, offset, options),
        Schema::StaticArray(elem, n) => {
            array::decode_static_array(input, offset, elem, *n, depth, options)
        }
        Schema::DynamicArray(elem) => array::decode_dynamic_array(input, offset, elem, depth, options),
        Schema::StaticStruct(fields) => {
            struct_::decode_static_struct(input, offset, fields, depth, options)
        }
        Schema::DynamicStruct(fields) => {
            struct_::decode_dynamic_struct(input, offset, fields, depth, options)
        }
    }
}
