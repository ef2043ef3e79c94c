/// A rewrite applied while simplifying an expression.
///
/// `a` and `b` stand for arbitrary expressions, `m` and `n` for numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    /// `a+0 = a`, `0+a = a`
    AddZero,

    /// `a*0 = 0`, `0*a = 0`
    MultiplyZero,

    /// `a*1 = a`, `1*a = a`
    MultiplyOne,

    /// `m+n`, computed
    FoldSum,

    /// `m*n`, computed
    FoldProduct,

    /// A bound variable replaced by its value.
    Substitute,
}
