use super::Expr;

/// An iterator that walks an expression tree in left-to-right post-order, yielding every node
/// after both of its operands.
///
/// This iterator is created by [`Expr::post_order_iter`]. It keeps its own stack, so deeply
/// nested trees do not grow the call stack.
pub struct ExprIter<'a> {
    stack: Vec<&'a Expr>,
    last_visited: Option<&'a Expr>,
}

impl<'a> ExprIter<'a> {
    /// Creates a new iterator starting at the given root.
    pub fn new(expr: &'a Expr) -> Self {
        Self {
            stack: vec![expr],
            last_visited: None,
        }
    }

    /// Pops the top of the stack and marks it as the last visited node.
    fn visit(&mut self) -> Option<&'a Expr> {
        self.last_visited = Some(self.stack.pop()?);
        self.last_visited
    }

    /// Returns true if the given node is the one that was visited last. Nodes are compared by
    /// address, since structurally equal operands can appear on both sides of a node.
    fn is_last_visited(&self, expr: &'a Expr) -> bool {
        self.last_visited.is_some_and(|last| std::ptr::eq(last, expr))
    }
}

impl<'a> Iterator for ExprIter<'a> {
    type Item = &'a Expr;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let expr = *self.stack.last()?;
            match expr {
                Expr::Number(_) | Expr::Symbol(_) => return self.visit(),
                Expr::Sum(lhs, rhs) | Expr::Product(lhs, rhs) => {
                    // the right operand is visited last, so seeing it means both are done
                    if self.is_last_visited(rhs) {
                        return self.visit();
                    }
                    self.stack.push(rhs);
                    self.stack.push(lhs);
                },
            }
        }
    }
}
