//! The rewrite rules applied by the simplifier.
//!
//! The identity rules (`add_zero`, `multiply_zero`, `multiply_one`) look at the operands of a node
//! as written, before either operand is simplified. The `combine_*` rules run after both operands
//! have been simplified, and fold numbers or drop identities that simplification exposed.

pub mod add;
pub mod multiply;
pub mod substitute;
