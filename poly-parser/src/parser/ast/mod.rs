//! The parse tree produced by [`Parser`](super::Parser).
//!
//! Every node records the region of the source code it was parsed from. Whitespace is dropped
//! while parsing, and chains of the same operator are already grouped left-associatively, so
//! `a + b + c` arrives as `(a + b) + c`.

pub mod binary;
pub mod expr;
pub mod literal;
pub mod paren;

pub use binary::Binary;
pub use expr::{Expr, Primary};
pub use literal::{Literal, LitNum, LitSym};
pub use paren::Paren;
