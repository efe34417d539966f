/// A state that can be advanced by one explicit step of its derivative.
///
/// The step is `state + derivative * delta`, with the derivative taken with
/// respect to `Delta` and evaluated at the start of the step. `Delta` is the
/// independent variable, time in every solver of this workspace.
pub trait StepIntegrable<Delta> {
    /// The derivative of the type with respect to `Delta`.
    type Derivative;

    /// Returns the value after stepping with a derivative and step size.
    #[must_use]
    fn step(&self, derivative: Self::Derivative, delta: Delta) -> Self;
}

/// Shorthand for the [`StepIntegrable::Derivative`] of `T`.
pub type DerivativeOf<T, Delta> = <T as StepIntegrable<Delta>>::Derivative;
