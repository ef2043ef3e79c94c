//! Simplification rules for sums.

use crate::symbolic::{
    expr::Expr,
    simplify::step::Step,
    step_collector::StepCollector,
};
use log::trace;

/// `a+0 = a`
/// `0+a = a`
///
/// Only recognizes a literal zero operand. Returns the other operand, which has not been
/// simplified yet.
pub fn add_zero<'a>(
    lhs: &'a Expr,
    rhs: &'a Expr,
    step_collector: &mut dyn StepCollector<Step>,
) -> Option<&'a Expr> {
    let remaining = if rhs.is_zero() {
        lhs
    } else if lhs.is_zero() {
        rhs
    } else {
        return None;
    };

    trace!("add_zero: ({} + {}) -> {}", lhs, rhs, remaining);
    step_collector.push(Step::AddZero);
    Some(remaining)
}

/// Joins two simplified operands into a sum.
///
/// `m+n` is folded into a single number, and a zero on either side is dropped.
pub fn combine_sum(lhs: Expr, rhs: Expr, step_collector: &mut dyn StepCollector<Step>) -> Expr {
    match (lhs, rhs) {
        (Expr::Number(lhs), Expr::Number(rhs)) => {
            let sum = lhs + rhs;
            trace!("fold_sum: {} + {} = {}", lhs, rhs, sum);
            step_collector.push(Step::FoldSum);
            Expr::Number(sum)
        },
        (lhs, rhs) if rhs.is_zero() => {
            step_collector.push(Step::AddZero);
            lhs
        },
        (lhs, rhs) if lhs.is_zero() => {
            step_collector.push(Step::AddZero);
            rhs
        },
        (lhs, rhs) => Expr::sum(lhs, rhs),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn zero_on_either_side() {
        let (x, zero) = (Expr::symbol("x"), Expr::number(0.0));
        let mut steps: Vec<Step> = Vec::new();
        assert_eq!(add_zero(&x, &zero, &mut steps), Some(&x));
        assert_eq!(add_zero(&zero, &x, &mut steps), Some(&x));
        assert_eq!(add_zero(&x, &x, &mut steps), None);
        assert_eq!(steps, vec![Step::AddZero, Step::AddZero]);
    }

    #[test]
    fn right_zero_checked_first() {
        let (zero, one) = (Expr::number(0.0), Expr::number(1.0));
        assert_eq!(add_zero(&one, &zero, &mut ()), Some(&one));
        assert_eq!(add_zero(&zero, &zero, &mut ()), Some(&zero));
    }

    #[test]
    fn combine_folds_numbers() {
        let mut steps: Vec<Step> = Vec::new();
        let sum = combine_sum(Expr::number(2.0), Expr::number(0.5), &mut steps);
        assert_eq!(sum, Expr::number(2.5));
        assert_eq!(steps, vec![Step::FoldSum]);
    }

    #[test]
    fn combine_drops_zero() {
        let x = Expr::symbol("x");
        assert_eq!(combine_sum(Expr::number(0.0), x.clone(), &mut ()), x);
        assert_eq!(combine_sum(x.clone(), Expr::number(0.0), &mut ()), x);
        assert_eq!(
            combine_sum(x.clone(), Expr::number(1.0), &mut ()),
            Expr::sum(x, Expr::number(1.0)),
        );
    }
}
