use monolit_span::{ModuleArena, ModuleID};

use crate::BoxedDiag;
use crate::source_code::SourceCode;

/// Implemented through `#[derive(DiagnosticExt)]`: the module comes from the
/// `#[label(primary)]` span and related notes from the `#[related]` field.
pub trait DiagnosticExt: miette::Diagnostic {
    fn module_id(&self) -> ModuleID;
    fn steal_related(&mut self) -> Option<Vec<Box<dyn DiagnosticExt + Send + Sync + 'static>>>;
}

/// A diagnostic together with the text of the module its labels point into.
/// Each related note carries the text of its own module.
#[derive(Debug)]
pub(crate) struct Located {
    text: SourceCode,
    related: Vec<Located>,
    inner: BoxedDiag,
}

impl Located {
    pub(crate) fn new(mut inner: BoxedDiag, module_arena: &ModuleArena) -> Self {
        let text = SourceCode::new(module_arena, inner.module_id());
        let related = inner
            .steal_related()
            .unwrap_or_default()
            .into_iter()
            .map(|note| Located::new(note, module_arena))
            .collect();
        Self {
            text,
            related,
            inner,
        }
    }
}

impl std::error::Error for Located {}

impl std::fmt::Display for Located {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.inner.fmt(f)
    }
}

// only the hooks our diagnostics set are forwarded
impl miette::Diagnostic for Located {
    fn severity(&self) -> Option<miette::Severity> {
        self.inner.severity()
    }
    fn help<'a>(&'a self) -> Option<Box<dyn std::fmt::Display + 'a>> {
        self.inner.help()
    }
    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&self.text)
    }
    fn labels(&self) -> Option<Box<dyn Iterator<Item = miette::LabeledSpan> + '_>> {
        self.inner.labels()
    }
    fn related<'a>(&'a self) -> Option<Box<dyn Iterator<Item = &'a dyn miette::Diagnostic> + 'a>> {
        if self.related.is_empty() {
            return None;
        }
        let notes: Box<dyn Iterator<Item = &'a dyn miette::Diagnostic> + 'a> =
            Box::new(self.related.iter().map(|note| note as &dyn miette::Diagnostic));
        Some(notes)
    }
}
