use monolit_span::Span;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("No case matches the value {0}.")]
    MatchError(String),
    #[error("Division by zero.")]
    DivisionByZero,
    #[error("Call depth exceeded the limit of {0}.")]
    StackOverflow(usize),
    #[error("'{0}' is read before it is initialized.")]
    Uninitialized(String),
    #[error("Operator '{0}' cannot be applied to these values.")]
    InvalidOperands(&'static str),
    /// The checker left this node unresolved; programs with errors are not
    /// evaluated.
    #[error("Expression at {0} was not resolved by the checker.")]
    Unevaluable(Span),
}
