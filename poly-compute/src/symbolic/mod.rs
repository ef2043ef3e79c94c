//! Algebraic manipulation of polynomial expressions.
//!
//! # Expression representation
//!
//! Expressions are represented as a binary tree of [`Expr`] nodes: numbers and symbols at the
//! leaves, and sums and products of exactly two operands each. The tree mirrors the
//! [`poly_parser::parser::ast::Expr`] produced by [`poly_parser`], minus the spans and the
//! parentheses, so `a + b + c` becomes `(a + b) + c` and `a + (b + c)` keeps its shape.
//!
//! Use [`parse`] to go from text to an [`Expr`] directly, or convert an existing parse tree with
//! the [`From`] trait.
//!
//! ```
//! use poly_compute::symbolic::{parse, Expr};
//!
//! let expr = parse("x + 2 * y").unwrap();
//! assert_eq!(expr, Expr::sum(
//!     Expr::symbol("x"),
//!     Expr::product(Expr::number(2.0), Expr::symbol("y")),
//! ));
//!
//! // rendering is fully parenthesized and parses back to the same tree
//! assert_eq!(expr.to_string(), "(x + (2.000000 * y))");
//! assert_eq!(parse(&expr.to_string()).unwrap(), expr);
//! ```
//!
//! # Differentiation and simplification
//!
//! [`derivative()`] applies the sum and product rules mechanically, which leaves plenty of `0`s
//! and `1`s in the result. [`simplify()`] removes them, folds constant subexpressions, and
//! optionally substitutes values for variables.
//!
//! ```
//! use poly_compute::symbolic::{derivative, parse, simplify, Bindings, Expr};
//!
//! let f = parse("x + x * y").unwrap();
//! let df = derivative(&f, &Expr::symbol("x"));
//! assert_eq!(df.to_string(), "(1.000000 + ((x * 0.000000) + (y * 1.000000)))");
//!
//! let df = simplify(&df, &Bindings::new());
//! assert_eq!(df.to_string(), "(1.000000 + y)");
//!
//! let at_y = simplify(&df, &Bindings::from([(Expr::symbol("y"), 2.0)]));
//! assert_eq!(at_y, Expr::number(3.0));
//! ```

pub mod derivative;
pub mod expr;
pub mod simplify;
pub mod step_collector;

#[cfg(test)]
mod proptests;

use poly_error::Error;
use poly_parser::parser::{ast::expr::Expr as AstExpr, Parser};
use std::str::FromStr;

pub use derivative::{derivative, derivative_wrt};
pub use expr::{Expr, Number, Symbol};
pub use simplify::{simplify, simplify_with, simplify_with_steps, Bindings, Step};
pub use step_collector::StepCollector;

/// Parses the given text into an expression.
///
/// The whole input must form a single expression. On failure, the returned [`Error`] describes
/// what went wrong and where, and can be rendered into a report with
/// [`Error::report_to_stderr`] or [`Error::write_report`].
///
/// ```
/// use poly_compute::symbolic::parse;
///
/// let err = parse("x - y").unwrap_err();
/// assert_eq!(err.to_string(), "unknown character `-` at 2..3");
/// ```
pub fn parse(input: &str) -> Result<Expr, Error> {
    let ast = Parser::new(input).try_parse_full::<AstExpr>()?;
    Ok(Expr::from(ast))
}

impl FromStr for Expr {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

impl Expr {
    /// Computes the derivative of this expression with respect to `var`.
    ///
    /// See [`derivative()`] for details.
    pub fn derivative(&self, var: &Expr) -> Expr {
        derivative(self, var)
    }

    /// Simplifies this expression with the given bindings.
    ///
    /// See [`simplify()`] for details.
    pub fn simplify(&self, bindings: &Bindings) -> Expr {
        simplify(self, bindings)
    }
}
