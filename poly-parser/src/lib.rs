//! Tokenizer and parser for polynomial expressions.
//!
//! The accepted language is built from non-negative integer and decimal literals, variable names
//! made of ASCII letters, `+`, `*`, and parentheses. Whitespace between tokens is ignored.
//!
//! ```
//! use poly_parser::parser::{ast::Expr, Parser};
//!
//! let mut parser = Parser::new("x + 2 * (y + 0.5)");
//! let expr = parser.try_parse_full::<Expr>().unwrap();
//! assert_eq!(expr.to_string(), "x + 2 * (y + 0.5)");
//! ```

pub mod parser;
pub mod tokenizer;
