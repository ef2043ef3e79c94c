//! Symbolic manipulation of polynomial expressions built from non-negative numbers, variables,
//! `+`, and `*`.
//!
//! See the [`symbolic`] module for an overview.

pub mod symbolic;

pub use symbolic::{
    derivative,
    parse,
    simplify,
    Bindings,
    Expr,
};
