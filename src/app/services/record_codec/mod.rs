//! Record codec for the five-field assignment line format
//!
//! This module converts between assignment records and their canonical
//! text form:
//!
//! ```text
//! "<student_name>" "<theme_name>" <YYYY.MM.DD> <Status> <"grade"|"">
//! ```
//!
//! Tokenization, typed field parsing, and semantic validation each reject
//! gracefully with typed errors rather than panicking on malformed input.
//!
//! Format limitation: quoted fields do not support escaped embedded quotes.
//! A `"` inside a quoted span terminates it.

pub mod codec;
pub mod field_parser;

pub use codec::RecordCodec;
pub use field_parser::{FieldValue, parse_field};

#[cfg(test)]
mod tests;
