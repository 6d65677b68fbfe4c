use monolit_atom::AtomIntern;
use monolit_binder::{SymbolFlags, SymbolID, Symbols};
use monolit_span::Span;

use crate::check::errors;

/// Names a stable value binding by its symbol.
///
/// Flags are always read back from the symbol table, so a `PathRef` stays
/// valid for as long as the binder result it was resolved against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PathRef {
    symbol: SymbolID,
}

impl PathRef {
    #[inline(always)]
    pub fn symbol(&self) -> SymbolID {
        self.symbol
    }

    pub fn flags(&self, symbols: &Symbols) -> SymbolFlags {
        symbols.get(self.symbol).flags
    }
}

/// Fails for a reassignable `var` and for anything that is not a value
/// binding (functions, builtins, type aliases).
pub fn resolve_path(
    symbols: &Symbols,
    atoms: &AtomIntern,
    symbol: SymbolID,
    span: Span,
) -> Result<PathRef, errors::UnstableReference> {
    let s = symbols.get(symbol);
    if s.is_stable() {
        return Ok(PathRef { symbol });
    }
    let reason = if s.flags.contains(SymbolFlags::VAR) {
        errors::UnstableReason::Reassigned
    } else {
        errors::UnstableReason::NotAValue
    };
    Err(errors::UnstableReference {
        span,
        name: atoms.get(s.name).to_string(),
        reason,
    })
}
