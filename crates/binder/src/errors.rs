use monolit_errors::DiagnosticExt;
use monolit_errors::diag_ext;
use monolit_errors::miette;
use monolit_errors::miette::Diagnostic;
use monolit_errors::thiserror;
use monolit_errors::thiserror::Error;
use monolit_span::Span;

#[derive(Error, Diagnostic, DiagnosticExt, Debug)]
#[error("Duplicate identifier '{name}'.")]
pub struct DuplicateIdentifier {
    #[label(primary)]
    pub span: Span,
    pub name: String,
    #[label("Previous definition here")]
    pub original_span: Span,
}

#[derive(Error, Diagnostic, DiagnosticExt, Debug)]
#[error("Cannot find name '{name}'.")]
pub struct CannotFindName {
    #[label(primary)]
    pub span: Span,
    pub name: String,
}
