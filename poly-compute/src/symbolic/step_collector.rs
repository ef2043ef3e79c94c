/// A type that records the steps taken by an algorithm, such as the rewrite rules applied by
/// [`simplify_with`](super::simplify::simplify_with).
///
/// [`StepCollector`] is also implemented for the unit type `()`, which discards every step. Use it
/// when only the result is needed.
pub trait StepCollector<S> {
    /// Records a step.
    fn push(&mut self, step: S);
}

impl<S> StepCollector<S> for () {
    #[inline]
    fn push(&mut self, _: S) {}
}

impl<S> StepCollector<S> for Vec<S> {
    #[inline]
    fn push(&mut self, step: S) {
        Vec::push(self, step);
    }
}
