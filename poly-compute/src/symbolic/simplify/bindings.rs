use crate::symbolic::expr::{Expr, Number, Symbol};
use std::collections::HashMap;

/// Values assigned to variables for [`simplify`](super::simplify).
///
/// Every key is a [`Symbol`] and every value is non-negative. Both are checked on insertion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bindings {
    values: HashMap<Symbol, Number>,
}

impl Bindings {
    /// Creates an empty set of bindings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds the variable `var` to `value`, returning the value it was previously bound to.
    ///
    /// # Panics
    ///
    /// Panics if `var` is not an [`Expr::Symbol`], or if `value` is negative, infinite, or NaN.
    pub fn insert(&mut self, var: Expr, value: f64) -> Option<f64> {
        match var {
            Expr::Symbol(symbol) => self.bind(symbol, value),
            other => panic!("only symbols can be bound to a value, got `{}`", other),
        }
    }

    /// Binds the given symbol to `value`, returning the value it was previously bound to.
    ///
    /// # Panics
    ///
    /// Panics if `value` is negative, infinite, or NaN.
    pub fn bind(&mut self, symbol: Symbol, value: f64) -> Option<f64> {
        self.values.insert(symbol, Number::new(value))
            .map(Number::value)
    }

    /// Returns the value bound to the given symbol, if any.
    pub fn get(&self, symbol: &Symbol) -> Option<Number> {
        self.values.get(symbol).copied()
    }

    /// Returns the number of bound variables.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if no variable is bound.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns an iterator over the bound variables and their values, in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&Symbol, Number)> {
        self.values.iter().map(|(symbol, value)| (symbol, *value))
    }
}

impl Extend<(Expr, f64)> for Bindings {
    fn extend<I: IntoIterator<Item = (Expr, f64)>>(&mut self, iter: I) {
        for (var, value) in iter {
            self.insert(var, value);
        }
    }
}

impl FromIterator<(Expr, f64)> for Bindings {
    fn from_iter<I: IntoIterator<Item = (Expr, f64)>>(iter: I) -> Self {
        let mut bindings = Self::new();
        bindings.extend(iter);
        bindings
    }
}

impl<const N: usize> From<[(Expr, f64); N]> for Bindings {
    fn from(pairs: [(Expr, f64); N]) -> Self {
        pairs.into_iter().collect()
    }
}
