use monolit_errors::DiagnosticExt;
use monolit_errors::diag_ext;
use monolit_errors::miette;
use monolit_errors::miette::Diagnostic;
use monolit_errors::thiserror;
use monolit_errors::thiserror::Error;
use monolit_span::Span;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnstableReason {
    Reassigned,
    NotAValue,
}

impl std::fmt::Display for UnstableReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            UnstableReason::Reassigned => "it is a 'var' that is assigned",
            UnstableReason::NotAValue => "it does not name a value",
        };
        f.write_str(s)
    }
}

#[derive(Error, Diagnostic, DiagnosticExt, Debug)]
#[error("'{name}' is not a stable reference: {reason}.")]
pub struct UnstableReference {
    #[label(primary)]
    pub span: Span,
    pub name: String,
    pub reason: UnstableReason,
}

#[derive(Error, Diagnostic, DiagnosticExt, Debug)]
#[error("Only a literal or a stable identifier can be followed by '.type'.")]
pub struct UnsupportedSingletonOperand {
    #[label(primary)]
    pub span: Span,
}

#[derive(Error, Diagnostic, DiagnosticExt, Debug)]
#[error("'{name}' is not a compile-time constant.")]
pub struct NotAConstant {
    #[label(primary)]
    pub span: Span,
    pub name: String,
}

#[derive(Error, Diagnostic, DiagnosticExt, Debug)]
#[error("Type '{ty}' does not have a single inhabitant.")]
pub struct TyHasNoSingleInhabitant {
    #[label(primary)]
    pub span: Span,
    pub ty: String,
}

#[derive(Error, Diagnostic, DiagnosticExt, Debug)]
pub enum SingletonError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    UnstableReference(UnstableReference),
    #[error(transparent)]
    #[diagnostic(transparent)]
    UnsupportedSingletonOperand(UnsupportedSingletonOperand),
    #[error(transparent)]
    #[diagnostic(transparent)]
    NotAConstant(NotAConstant),
    #[error(transparent)]
    #[diagnostic(transparent)]
    TyHasNoSingleInhabitant(TyHasNoSingleInhabitant),
}

impl From<UnstableReference> for SingletonError {
    fn from(value: UnstableReference) -> Self {
        SingletonError::UnstableReference(value)
    }
}

#[derive(Error, Diagnostic, DiagnosticExt, Debug)]
#[error("Type '{ty1}' is not assignable to type '{ty2}'.")]
pub(super) struct TypeIsNotAssignableToType {
    #[label(primary)]
    pub span: Span,
    pub ty1: String,
    pub ty2: String,
}

#[derive(Error, Diagnostic, DiagnosticExt, Debug)]
#[error("Argument of type '{arg_ty}' is not assignable to parameter of type '{param_ty}'.")]
pub(super) struct ArgumentOfTyIsNotAssignableToParameterOfTy {
    #[label(primary)]
    pub span: Span,
    pub arg_ty: String,
    pub param_ty: String,
}

#[derive(Error, Diagnostic, DiagnosticExt, Debug)]
#[error("Cannot assign to '{name}' because it is not a 'var'.")]
pub(super) struct CannotAssignToVal {
    #[label(primary)]
    pub span: Span,
    pub name: String,
}

#[derive(Error, Diagnostic, DiagnosticExt, Debug)]
#[error("'{name}' refers to a value, but is being used as a type here.")]
#[diagnostic(help("Did you mean '{name}.type'?"))]
pub(super) struct ValueUsedAsType {
    #[label(primary)]
    pub span: Span,
    pub name: String,
}

#[derive(Error, Diagnostic, DiagnosticExt, Debug)]
#[error("A literal type must be written as '{lit}.type'.")]
#[diagnostic(help("Set 'bareLiteralTypes' to accept a bare literal in type position."))]
pub(super) struct LiteralTypeRequiresDotType {
    #[label(primary)]
    pub span: Span,
    pub lit: String,
}

#[derive(Error, Diagnostic, DiagnosticExt, Debug, Default)]
#[error("'{name}' is defined here.")]
#[diagnostic(severity(Advice))]
pub(super) struct DefinedHere {
    #[label(primary)]
    pub span: Span,
    pub name: String,
}

#[derive(Error, Diagnostic, DiagnosticExt, Debug)]
#[error("No overload of '{name}' matches this call.")]
pub(super) struct NoOverloadMatchesThisCall {
    #[label(primary)]
    pub span: Span,
    pub name: String,
    #[related]
    pub related: Vec<DefinedHere>,
}

#[derive(Error, Diagnostic, DiagnosticExt, Debug)]
#[error("Ambiguous call to '{name}': no overload is more specific than the others.")]
pub(super) struct AmbiguousCall {
    #[label(primary)]
    pub span: Span,
    pub name: String,
    #[related]
    pub related: Vec<DefinedHere>,
}

#[derive(Error, Diagnostic, DiagnosticExt, Debug)]
#[error("Expected {x} arguments, but got {y}.")]
pub(super) struct ExpectedXArgsButGotY {
    #[label(primary)]
    pub span: Span,
    pub x: usize,
    pub y: usize,
}

#[derive(Error, Diagnostic, DiagnosticExt, Debug)]
#[error("Pattern type '{pat_ty}' is incompatible with scrutinee type '{scrutinee_ty}'.")]
pub(super) struct PatternTyIsIncompatibleWithScrutinee {
    #[label(primary)]
    pub span: Span,
    pub pat_ty: String,
    pub scrutinee_ty: String,
}

#[derive(Error, Diagnostic, DiagnosticExt, Debug)]
#[error("Unreachable case: a previous case matches every value.")]
#[diagnostic(severity(Warning))]
pub(super) struct UnreachableCase {
    #[label(primary)]
    pub span: Span,
}

#[derive(Error, Diagnostic, DiagnosticExt, Debug)]
#[error("'{name}' is referenced directly or indirectly in its own initializer.")]
pub(super) struct CircularInitializer {
    #[label(primary)]
    pub span: Span,
    pub name: String,
}

#[derive(Error, Diagnostic, DiagnosticExt, Debug)]
#[error("Type alias '{name}' circularly references itself.")]
pub(super) struct TypeAliasCircularlyReferencesItself {
    #[label(primary)]
    pub span: Span,
    pub name: String,
}

#[derive(Error, Diagnostic, DiagnosticExt, Debug)]
#[error("Recursive function '{name}' needs an explicit result type.")]
pub(super) struct RecursiveFnNeedsResultTy {
    #[label(primary)]
    pub span: Span,
    pub name: String,
}

#[derive(Error, Diagnostic, DiagnosticExt, Debug)]
#[error("Function '{name}' is not a value; call it instead.")]
pub(super) struct FunctionIsNotAValue {
    #[label(primary)]
    pub span: Span,
    pub name: String,
}

#[derive(Error, Diagnostic, DiagnosticExt, Debug)]
#[error("Operator '{op}' cannot be applied to types '{ty1}' and '{ty2}'.")]
pub(super) struct OperatorCannotBeAppliedToTy1AndTy2 {
    #[label(primary)]
    pub span: Span,
    pub op: String,
    pub ty1: String,
    pub ty2: String,
}

#[derive(Error, Diagnostic, DiagnosticExt, Debug)]
#[error("Operator '{op}' cannot be applied to type '{ty}'.")]
pub(super) struct OperatorCannotBeAppliedToTy {
    #[label(primary)]
    pub span: Span,
    pub op: String,
    pub ty: String,
}

#[derive(Error, Diagnostic, DiagnosticExt, Debug)]
#[error("'{name}' is not a function.")]
pub(super) struct ValueIsNotCallable {
    #[label(primary)]
    pub span: Span,
    pub name: String,
}
