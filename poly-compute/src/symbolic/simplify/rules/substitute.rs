//! Substitution of bound variables.

use crate::symbolic::{
    expr::{Expr, Symbol},
    simplify::{bindings::Bindings, step::Step},
    step_collector::StepCollector,
};
use log::trace;

/// `x = n`, where `x` is bound to `n`
pub fn substitute(
    symbol: &Symbol,
    bindings: &Bindings,
    step_collector: &mut dyn StepCollector<Step>,
) -> Option<Expr> {
    let value = bindings.get(symbol)?;
    trace!("substitute: {} = {}", symbol, value);
    step_collector.push(Step::Substitute);
    Some(Expr::Number(value))
}
