//! The decoded output tree.

use std::collections::BTreeMap;

use alloy_primitives::{Address, I256, U256};

/// A decoded value, mirroring the shape of the [`crate::Schema`] it was decoded against.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Value {
    /// A decoded `bool`.
    Bool(bool),
    /// A decoded `address`.
    Address(Address),
    /// A decoded `uintN`, as an arbitrary-precision unsigned integer.
    Uint(U256),
    /// A decoded `intN`, as an arbitrary-precision signed integer.
    Int(I256),
    /// A decoded `bytesN` or `bytes` value.
    Bytes(Vec<u8>),
    /// A decoded `string`.
    String(String),
    /// A decoded `T[n]` or `T[]`.
    Array(Vec<Value>),
    /// A decoded tuple, keyed by field index in declaration order.
    Struct(BTreeMap<usize, Value>),
}

impl Value {
    /// Returns the inner values of an `Array` or the fields of a `Struct` (in field-index
    /// order), or `None` for any other variant.
    pub fn children(&self) -> Option<Vec<&Value>> {
        match self {
            Value::Array(items) => Some(items.iter().collect()),
            Value::Struct(fields) => Some(fields.values().collect()),
            _ => None,
        }
    }

    /// Narrows to the inner `U256`, if this is a `Value::Uint`.
    pub fn as_uint(&self) -> Option<U256> {
        match self {
            Value::Uint(v) => Some(*v),
            _ => None,
        }
    }

    /// Narrows to the inner string slice, if this is a `Value::String`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Narrows to the inner byte slice, if this is a `Value::Bytes`.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::Bytes(b) => Some(b.as_slice()),
            _ => None,
        }
    }
}
