//! A decoder for the Ethereum contract ABI: the inverse of the canonical encoding used to pass
//! arguments to, and return values from, smart contract calls.
//!
//! Given a hex-encoded word stream and a [`Schema`] describing the expected Solidity types,
//! [`decode`] reconstructs a tree of typed [`Value`]s, resolving the head/tail offset
//! indirection that Solidity ABI uses for dynamic data (`bytes`, `string`, dynamic arrays, and
//! any tuple containing one of those, transitively).
//!
//! This crate deliberately does not parse Solidity type strings (`uint256[2][]`) into
//! [`Schema`] nodes, does not encode, and does not resolve function selectors — those are the
//! job of collaborating crates. It consumes schema nodes and produces value trees, nothing
//! else.

/// Error types produced by a decode call.
pub mod error;

mod core;
mod options;
mod schema;
mod value;
mod word;

pub use core::{decode, decode_with_options};
pub use error::Error;
pub use options::{DecodeOptions, DecodeOptionsBuilder};
pub use schema::Schema;
pub use value::Value;
