//! Symbolic differentiation of expressions.
//!
//! The derivative is built mechanically from the sum and product rules and is not simplified
//! afterwards, so `x * 2` differentiates to `(x * 0) + (2 * 1)` rather than `2`. Pass the result
//! through [`simplify`](super::simplify()) to clean it up.

use crate::symbolic::expr::{Expr, Number, Symbol};
use log::{debug, trace};

/// `c' = 0`
/// `x' = 1`, `y' = 0`
fn primary_rule(expr: &Expr, var: &Symbol) -> Expr {
    let derivative = match expr {
        Expr::Symbol(symbol) if symbol == var => Number::ONE,
        _ => Number::ZERO,
    };
    trace!("primary_rule: d/d{} {} = {}", var, expr, derivative);
    Expr::Number(derivative)
}

/// `(f + g)' = f' + g'`
fn sum_rule(lhs: &Expr, rhs: &Expr, var: &Symbol) -> Expr {
    trace!("sum_rule: d/d{} ({} + {})", var, lhs, rhs);
    Expr::sum(inner_derivative(lhs, var), inner_derivative(rhs, var))
}

/// `(f * g)' = f * g' + g * f'`
fn product_rule(lhs: &Expr, rhs: &Expr, var: &Symbol) -> Expr {
    trace!("product_rule: d/d{} ({} * {})", var, lhs, rhs);
    Expr::sum(
        Expr::product(lhs.clone(), inner_derivative(rhs, var)),
        Expr::product(rhs.clone(), inner_derivative(lhs, var)),
    )
}

/// Computes the derivative of `f` with respect to the variable `var`.
///
/// # Panics
///
/// Panics if `var` is not an [`Expr::Symbol`].
///
/// # Example
///
/// ```
/// use poly_compute::symbolic::{derivative, parse, Expr};
///
/// let f = parse("x * y").unwrap();
/// assert_eq!(
///     derivative(&f, &Expr::symbol("x")),
///     Expr::sum(
///         Expr::product(Expr::symbol("x"), Expr::number(0.0)),
///         Expr::product(Expr::symbol("y"), Expr::number(1.0)),
///     ),
/// );
/// ```
pub fn derivative(f: &Expr, var: &Expr) -> Expr {
    let Expr::Symbol(var) = var else {
        panic!("can only differentiate with respect to a symbol, got `{}`", var);
    };
    derivative_wrt(f, var)
}

/// Computes the derivative of `f` with respect to the given symbol.
pub fn derivative_wrt(f: &Expr, var: &Symbol) -> Expr {
    debug!("differentiating {} with respect to {}", f, var);
    inner_derivative(f, var)
}

fn inner_derivative(f: &Expr, var: &Symbol) -> Expr {
    match f {
        Expr::Number(_) | Expr::Symbol(_) => primary_rule(f, var),
        Expr::Sum(lhs, rhs) => sum_rule(lhs, rhs, var),
        Expr::Product(lhs, rhs) => product_rule(lhs, rhs, var),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use crate::symbolic::{parse, simplify, Bindings};
    use super::*;

    fn x() -> Expr {
        Expr::symbol("x")
    }

    fn y() -> Expr {
        Expr::symbol("y")
    }

    fn num(value: f64) -> Expr {
        Expr::number(value)
    }

    #[test]
    fn constant() {
        assert_eq!(derivative(&num(5.0), &x()), num(0.0));
    }

    #[test]
    fn symbols() {
        assert_eq!(derivative(&x(), &x()), num(1.0));
        assert_eq!(derivative(&y(), &x()), num(0.0));
        assert_eq!(derivative(&Expr::symbol("X"), &x()), num(0.0));
    }

    #[test]
    fn sum() {
        assert_eq!(derivative(&Expr::sum(x(), y()), &x()), Expr::sum(num(1.0), num(0.0)));
    }

    #[test]
    fn product_operand_order() {
        assert_eq!(
            derivative(&Expr::product(x(), num(3.0)), &x()),
            Expr::sum(
                Expr::product(x(), num(0.0)),
                Expr::product(num(3.0), num(1.0)),
            ),
        );
    }

    #[test]
    fn end_to_end() {
        let f = parse("x + x * y").unwrap();
        assert_eq!(f, Expr::sum(x(), Expr::product(x(), y())));

        let df = derivative(&f, &x());
        assert_eq!(
            df,
            Expr::sum(
                num(1.0),
                Expr::sum(Expr::product(x(), num(0.0)), Expr::product(y(), num(1.0))),
            ),
        );

        let simplified = simplify(&df, &Bindings::new());
        assert_eq!(simplified, Expr::sum(num(1.0), y()));
        assert_eq!(simplified.to_string(), "(1.000000 + y)");
    }

    #[test]
    fn polynomial_value() {
        // d/dx (x*x*x + 2*x) = 3x^2 + 2, which is 14 at x = 2
        let f = parse("x * x * x + 2 * x").unwrap();
        let df = derivative(&f, &x());
        let bindings = Bindings::from([(x(), 2.0)]);
        assert_eq!(simplify(&df, &bindings), num(14.0));
    }

    #[test]
    fn input_untouched() {
        let f = parse("x * y").unwrap();
        let copy = f.clone();
        derivative(&f, &y());
        assert_eq!(f, copy);
    }

    #[test]
    #[should_panic(expected = "with respect to a symbol")]
    fn non_symbol_variable_panics() {
        derivative(&x(), &num(1.0));
    }
}
