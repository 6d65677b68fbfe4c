pub mod diag_ext;
mod source_code;

pub use miette;
pub use monolit_diag_derive::DiagnosticExt;
pub use thiserror;

use diag_ext::Located;
use monolit_span::ModuleArena;

pub type BoxedDiag = Box<dyn diag_ext::DiagnosticExt + Send + Sync + 'static>;

#[derive(Debug)]
pub struct Diag {
    pub inner: BoxedDiag,
}

impl Diag {
    pub fn new(inner: impl diag_ext::DiagnosticExt + Send + Sync + 'static) -> Self {
        Self {
            inner: Box::new(inner),
        }
    }

    pub fn severity(&self) -> miette::Severity {
        self.inner.severity().unwrap_or(miette::Severity::Error)
    }

    pub fn is_error(&self) -> bool {
        self.severity() == miette::Severity::Error
    }

    pub fn message(&self) -> String {
        self.inner.to_string()
    }

    pub fn emit_message(self, module_arena: &ModuleArena, no_color: bool) -> String {
        let fallback = self.message();
        let error_report = miette::ErrReport::new(Located::new(self.inner, module_arena));
        let theme = if no_color {
            miette::GraphicalTheme::unicode_nocolor()
        } else {
            miette::GraphicalTheme::unicode()
        };
        let mut out = String::new();
        match miette::GraphicalReportHandler::new_themed(theme)
            .with_width(80)
            .with_context_lines(0)
            .render_report(&mut out, error_report.as_ref())
        {
            Ok(()) => out.trim_start_matches('\n').to_string(),
            Err(_) => fallback,
        }
    }

    pub fn emit(self, module_arena: &ModuleArena) {
        let no_color = match std::env::var("NO_COLOR") {
            Ok(string) => string != "0",
            _ => false,
        };
        let out = self.emit_message(module_arena, no_color);
        eprintln!("{out}");
    }
}
