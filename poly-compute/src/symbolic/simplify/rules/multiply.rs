//! Simplification rules for products.

use crate::symbolic::{
    expr::{Expr, Number},
    simplify::step::Step,
    step_collector::StepCollector,
};
use log::trace;

/// `a*0 = 0`
/// `0*a = 0`
///
/// Only recognizes a literal zero operand. Neither operand needs to be simplified when this rule
/// applies.
pub fn multiply_zero(
    lhs: &Expr,
    rhs: &Expr,
    step_collector: &mut dyn StepCollector<Step>,
) -> Option<Expr> {
    if !lhs.is_zero() && !rhs.is_zero() {
        return None;
    }

    trace!("multiply_zero: ({} * {}) -> 0", lhs, rhs);
    step_collector.push(Step::MultiplyZero);
    Some(Expr::Number(Number::ZERO))
}

/// `a*1 = a`
/// `1*a = a`
///
/// Only recognizes a literal one operand. Returns the other operand, which has not been
/// simplified yet.
pub fn multiply_one<'a>(
    lhs: &'a Expr,
    rhs: &'a Expr,
    step_collector: &mut dyn StepCollector<Step>,
) -> Option<&'a Expr> {
    let remaining = if rhs.is_one() {
        lhs
    } else if lhs.is_one() {
        rhs
    } else {
        return None;
    };

    trace!("multiply_one: ({} * {}) -> {}", lhs, rhs, remaining);
    step_collector.push(Step::MultiplyOne);
    Some(remaining)
}

/// Joins two simplified operands into a product.
///
/// A zero on either side turns the product into zero, even if the other side is a number that
/// saturated at [`f64::MAX`]. Otherwise `m*n` is folded into a single number, and a one on either
/// side is dropped.
pub fn combine_product(lhs: Expr, rhs: Expr, step_collector: &mut dyn StepCollector<Step>) -> Expr {
    match (lhs, rhs) {
        (lhs, rhs) if lhs.is_zero() || rhs.is_zero() => {
            trace!("multiply_zero: ({} * {}) -> 0", lhs, rhs);
            step_collector.push(Step::MultiplyZero);
            Expr::Number(Number::ZERO)
        },
        (Expr::Number(lhs), Expr::Number(rhs)) => {
            let product = lhs * rhs;
            trace!("fold_product: {} * {} = {}", lhs, rhs, product);
            step_collector.push(Step::FoldProduct);
            Expr::Number(product)
        },
        (lhs, rhs) if rhs.is_one() => {
            step_collector.push(Step::MultiplyOne);
            lhs
        },
        (lhs, rhs) if lhs.is_one() => {
            step_collector.push(Step::MultiplyOne);
            rhs
        },
        (lhs, rhs) => Expr::product(lhs, rhs),
    }
}
