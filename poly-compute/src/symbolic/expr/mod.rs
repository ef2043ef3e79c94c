//! The symbolic expression tree.

mod iter;
mod primary;

use poly_parser::parser::{
    ast::{expr::Expr as AstExpr, literal::Literal},
    token::op::BinOpKind,
};
use std::{
    collections::hash_map::DefaultHasher,
    fmt,
    hash::{Hash, Hasher},
};

pub use iter::ExprIter;
pub use primary::{InvalidNumber, InvalidSymbol, Number, Symbol};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A polynomial expression: a tree of non-negative numbers and variables joined by binary `+` and
/// `*`.
///
/// Expressions are immutable values. Every operation on them, such as
/// [`derivative`](super::derivative()) and [`simplify`](super::simplify()), builds a new tree and
/// leaves its input untouched.
///
/// Equality and hashing are purely structural. Two expressions are equal if they have the same
/// shape, the same numbers (compared exactly), and the same symbol names. No algebraic reasoning is
/// done, so `x + y` and `y + x` are different expressions.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Expr {
    /// A non-negative number.
    Number(Number),

    /// A variable.
    Symbol(Symbol),

    /// The sum of two expressions, `lhs + rhs`.
    Sum(Box<Expr>, Box<Expr>),

    /// The product of two expressions, `lhs * rhs`.
    Product(Box<Expr>, Box<Expr>),
}

impl Expr {
    /// Creates a number expression.
    ///
    /// # Panics
    ///
    /// Panics if the value is negative, infinite, or NaN.
    pub fn number(value: f64) -> Self {
        Self::Number(Number::new(value))
    }

    /// Creates a symbol expression.
    ///
    /// # Panics
    ///
    /// Panics if the name is empty or contains anything other than ASCII letters.
    pub fn symbol(name: impl Into<String>) -> Self {
        Self::Symbol(Symbol::new(name))
    }

    /// Creates the sum `lhs + rhs`.
    pub fn sum(lhs: Expr, rhs: Expr) -> Self {
        Self::Sum(Box::new(lhs), Box::new(rhs))
    }

    /// Creates the product `lhs * rhs`.
    pub fn product(lhs: Expr, rhs: Expr) -> Self {
        Self::Product(Box::new(lhs), Box::new(rhs))
    }

    /// If the expression is a number, returns it.
    pub fn as_number(&self) -> Option<Number> {
        match self {
            Self::Number(number) => Some(*number),
            _ => None,
        }
    }

    /// If the expression is a symbol, returns it.
    pub fn as_symbol(&self) -> Option<&Symbol> {
        match self {
            Self::Symbol(symbol) => Some(symbol),
            _ => None,
        }
    }

    /// Returns true if the expression is the literal number `0`.
    pub fn is_zero(&self) -> bool {
        self.as_number().is_some_and(Number::is_zero)
    }

    /// Returns true if the expression is the literal number `1`.
    pub fn is_one(&self) -> bool {
        self.as_number().is_some_and(Number::is_one)
    }

    /// Returns an iterator that visits every node of the tree in left-to-right post-order.
    pub fn post_order_iter(&self) -> ExprIter<'_> {
        ExprIter::new(self)
    }

    /// Returns true if the given symbol appears anywhere in the expression.
    pub fn contains_symbol(&self, symbol: &Symbol) -> bool {
        self.post_order_iter()
            .any(|expr| expr.as_symbol() == Some(symbol))
    }

    /// Returns the distinct symbols in the expression, in order of first appearance from left to
    /// right.
    pub fn symbols(&self) -> Vec<&Symbol> {
        let mut symbols = Vec::new();
        for symbol in self.post_order_iter().filter_map(Expr::as_symbol) {
            if !symbols.contains(&symbol) {
                symbols.push(symbol);
            }
        }
        symbols
    }

    /// Returns a 64-bit hash of the expression, consistent with [`Expr`]'s equality.
    pub fn hash_code(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.hash(&mut hasher);
        hasher.finish()
    }
}

impl From<Number> for Expr {
    fn from(number: Number) -> Self {
        Self::Number(number)
    }
}

impl From<Symbol> for Expr {
    fn from(symbol: Symbol) -> Self {
        Self::Symbol(symbol)
    }
}

/// Builds an expression from a parse tree. Parentheses are dropped, since the tree shape already
/// encodes the grouping.
impl From<AstExpr> for Expr {
    fn from(expr: AstExpr) -> Self {
        match expr {
            AstExpr::Literal(Literal::Number(num)) => Self::number(num.value),
            AstExpr::Literal(Literal::Symbol(sym)) => Self::symbol(sym.name),
            AstExpr::Paren(paren) => Self::from(*paren.expr),
            AstExpr::Binary(bin) => {
                let lhs = Self::from(*bin.lhs);
                let rhs = Self::from(*bin.rhs);
                match bin.op.kind {
                    BinOpKind::Add => Self::sum(lhs, rhs),
                    BinOpKind::Mul => Self::product(lhs, rhs),
                }
            },
        }
    }
}

/// Renders the expression in a fully parenthesized form that parses back to the same tree.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Number(number) => number.fmt(f),
            Self::Symbol(symbol) => symbol.fmt(f),
            Self::Sum(lhs, rhs) => write!(f, "({} + {})", lhs, rhs),
            Self::Product(lhs, rhs) => write!(f, "({} * {})", lhs, rhs),
        }
    }
}
