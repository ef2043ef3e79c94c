//! Simplification of expressions, with optional substitution of variables.
//!
//! The simplifier works top-down. At each sum or product, it first checks the operands *as
//! written* for a literal `0` or `1`, and short-circuits if it finds one: `0 * a` becomes `0`
//! without `a` ever being visited. Otherwise both operands are simplified, and the results are
//! combined, folding two numbers into one and dropping any `0` or `1` that simplification
//! exposed.
//!
//! The combine step extends the literal rules to identities that only appear after
//! simplification. A variable bound to `0` therefore eliminates a product once substituted:
//! `x * y` with `x = 0` becomes `0`, not `0 * y`. Without it, simplifying the result a second
//! time would rewrite it again.
//!
//! Variables found in the [`Bindings`] are replaced with their value, so an expression whose
//! variables are all bound simplifies to a single [`Expr::Number`].
//!
//! Simplifying an already simplified expression with the same bindings returns it unchanged.

pub mod bindings;
pub mod rules;
pub mod step;

use crate::symbolic::{expr::Expr, step_collector::StepCollector};
use log::debug;
use rules::{add, multiply, substitute};

pub use bindings::Bindings;
pub use step::Step;

/// Simplifies the given expression, substituting the given bindings.
///
/// # Example
///
/// ```
/// use poly_compute::symbolic::{parse, simplify, Bindings, Expr};
///
/// let expr = parse("x * 1 + y * 0 + 2 * 3").unwrap();
/// assert_eq!(
///     simplify(&expr, &Bindings::new()),
///     Expr::sum(Expr::symbol("x"), Expr::number(6.0)),
/// );
///
/// let bindings = Bindings::from([(Expr::symbol("x"), 4.0)]);
/// assert_eq!(simplify(&expr, &bindings), Expr::number(10.0));
/// ```
pub fn simplify(expr: &Expr, bindings: &Bindings) -> Expr {
    simplify_with(expr, bindings, &mut ())
}

/// Simplifies the given expression, substituting the given bindings, and returns the steps that
/// were taken in the order they were applied.
pub fn simplify_with_steps(expr: &Expr, bindings: &Bindings) -> (Expr, Vec<Step>) {
    let mut steps = Vec::new();
    let expr = simplify_with(expr, bindings, &mut steps);
    (expr, steps)
}

/// Simplifies the given expression, substituting the given bindings, and reports each rewrite to
/// the given [`StepCollector`].
pub fn simplify_with(
    expr: &Expr,
    bindings: &Bindings,
    step_collector: &mut dyn StepCollector<Step>,
) -> Expr {
    debug!("simplifying {} with {} binding(s)", expr, bindings.len());
    let simplified = inner_simplify(expr, bindings, step_collector);
    debug!("simplified to {}", simplified);
    simplified
}

fn inner_simplify(
    expr: &Expr,
    bindings: &Bindings,
    step_collector: &mut dyn StepCollector<Step>,
) -> Expr {
    match expr {
        Expr::Number(_) => expr.clone(),
        Expr::Symbol(symbol) => substitute::substitute(symbol, bindings, step_collector)
            .unwrap_or_else(|| expr.clone()),
        Expr::Sum(lhs, rhs) => {
            if let Some(remaining) = add::add_zero(lhs, rhs, step_collector) {
                return inner_simplify(remaining, bindings, step_collector);
            }

            let lhs = inner_simplify(lhs, bindings, step_collector);
            let rhs = inner_simplify(rhs, bindings, step_collector);
            add::combine_sum(lhs, rhs, step_collector)
        },
        Expr::Product(lhs, rhs) => {
            if let Some(zero) = multiply::multiply_zero(lhs, rhs, step_collector) {
                return zero;
            }
            if let Some(remaining) = multiply::multiply_one(lhs, rhs, step_collector) {
                return inner_simplify(remaining, bindings, step_collector);
            }

            let lhs = inner_simplify(lhs, bindings, step_collector);
            let rhs = inner_simplify(rhs, bindings, step_collector);
            multiply::combine_product(lhs, rhs, step_collector)
        },
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use crate::symbolic::parse;
    use super::*;

    fn simplify_str(input: &str) -> Expr {
        simplify(&parse(input).unwrap(), &Bindings::new())
    }

    fn x() -> Expr {
        Expr::symbol("x")
    }

    #[test]
    fn add_zero_identity() {
        assert_eq!(simplify(&Expr::sum(x(), Expr::number(0.0)), &Bindings::new()), x());
        assert_eq!(simplify(&Expr::sum(Expr::number(0.0), x()), &Bindings::new()), x());
    }

    #[test]
    fn multiply_identities() {
        assert_eq!(simplify_str("x * 1"), x());
        assert_eq!(simplify_str("1 * x"), x());
        assert_eq!(simplify_str("x * 0"), Expr::number(0.0));
        assert_eq!(simplify_str("0 * (x + y * z)"), Expr::number(0.0));
    }

    #[test]
    fn fold_constants() {
        assert_eq!(simplify_str("2 + 3"), Expr::number(5.0));
        assert_eq!(simplify_str("2 * 3 + 0.5"), Expr::number(6.5));
        assert_eq!(simplify_str("(1 + 1) * (2 + 2)"), Expr::number(8.0));
    }

    #[test]
    fn nothing_to_do() {
        let expr = parse("x * y + z").unwrap();
        assert_eq!(simplify(&expr, &Bindings::new()), expr);
    }

    #[test]
    fn substitution_then_folding() {
        let bindings = Bindings::from([(x(), 2.0)]);
        assert_eq!(
            simplify(&Expr::product(x(), Expr::number(3.0)), &bindings),
            Expr::number(6.0),
        );
    }

    #[test]
    fn all_bound() {
        let bindings = Bindings::from([(x(), 2.0), (Expr::symbol("y"), 3.0)]);
        let result = simplify(&parse("x + y").unwrap(), &bindings);
        assert_eq!(result, Expr::number(5.0));
        assert_eq!(result.to_string(), "5.000000");
    }

    #[test]
    fn partial_substitution() {
        let bindings = Bindings::from([(Expr::symbol("y"), 3.0)]);
        assert_eq!(
            simplify(&parse("x + y * 2").unwrap(), &bindings),
            Expr::sum(x(), Expr::number(6.0)),
        );
    }

    #[test]
    fn exposed_identities_are_dropped() {
        // neither operand is a literal identity until it has been simplified
        assert_eq!(simplify_str("(0 * x) + y"), Expr::symbol("y"));
        assert_eq!(simplify_str("x * (2 + 0 * y)"), Expr::product(x(), Expr::number(2.0)));
        assert_eq!(simplify_str("(0.5 + 0.5) * x"), x());
    }

    #[test]
    fn bound_variable_is_not_a_literal_identity() {
        // `x` is not a literal zero, so the right operand is still visited and substituted
        let bindings = Bindings::from([(x(), 0.0), (Expr::symbol("y"), 5.0)]);
        let (result, steps) = simplify_with_steps(&parse("x * y").unwrap(), &bindings);
        assert_eq!(result, Expr::number(0.0));
        assert_eq!(steps, vec![Step::Substitute, Step::Substitute, Step::MultiplyZero]);
    }

    #[test]
    fn bound_zero_eliminates_product() {
        let bindings = Bindings::from([(x(), 0.0)]);
        let once = simplify(&parse("x * y").unwrap(), &bindings);
        assert_eq!(once, Expr::number(0.0));
        assert_eq!(once.to_string(), "0.000000");
        assert_eq!(simplify(&once, &bindings), once);
    }

    #[test]
    fn short_circuit_skips_operand() {
        let bindings = Bindings::from([(x(), 4.0)]);
        let (result, steps) = simplify_with_steps(&parse("0 * x").unwrap(), &bindings);
        assert_eq!(result, Expr::number(0.0));
        assert_eq!(steps, vec![Step::MultiplyZero]);
    }

    #[test]
    fn steps_in_order() {
        let (result, steps) = simplify_with_steps(&parse("x * 1 + 2 * 3").unwrap(), &Bindings::new());
        assert_eq!(result, Expr::sum(x(), Expr::number(6.0)));
        assert_eq!(steps, vec![Step::MultiplyOne, Step::FoldProduct]);
    }

    #[test]
    fn overflowing_fold_times_zero() {
        let bindings = Bindings::from([(Expr::symbol("a"), 1e200), (x(), 0.0)]);
        let (result, steps) = simplify_with_steps(&parse("(a * a) * x").unwrap(), &bindings);
        assert_eq!(result, Expr::number(0.0));
        assert_eq!(steps, vec![
            Step::Substitute,
            Step::Substitute,
            Step::FoldProduct,
            Step::Substitute,
            Step::MultiplyZero,
        ]);
    }

    #[test]
    fn overflowing_literals_saturate() {
        let big = "9".repeat(200);
        let expr = parse(&format!("({big} * {big}) * x")).unwrap();

        let folded = simplify(&expr, &Bindings::new());
        assert_eq!(folded, Expr::product(Expr::number(f64::MAX), x()));
        assert_eq!(parse(&folded.to_string()).unwrap(), folded);

        let bindings = Bindings::from([(x(), 0.0)]);
        assert_eq!(simplify(&expr, &bindings), Expr::number(0.0));
    }

    #[test]
    fn idempotent() {
        let bindings = Bindings::from([(Expr::symbol("y"), 0.0)]);
        for input in ["x + x * y", "(x + 0) * (1 * y + z)", "x * (y + 1) * 1", "2 * x * 3"] {
            let once = simplify(&parse(input).unwrap(), &bindings);
            assert_eq!(simplify(&once, &bindings), once, "input: {}", input);
        }
    }

    #[test]
    fn does_not_modify_input() {
        let expr = parse("x * 1").unwrap();
        let copy = expr.clone();
        simplify(&expr, &Bindings::from([(x(), 2.0)]));
        assert_eq!(expr, copy);
    }
}
