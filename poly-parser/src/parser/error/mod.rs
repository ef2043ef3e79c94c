//! Errors produced while parsing. Every error carries the spans of the source code it points at,
//! and a kind from [`kind`] that describes what went wrong.

pub mod kind;

pub use poly_error::{Error, ErrorKind};
