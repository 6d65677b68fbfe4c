use monolit_ast as ast;
use monolit_binder::SymbolID;

use super::TyChecker;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum ResolutionKey {
    /// Type of a value binding.
    Type(SymbolID),
    /// Target of a type alias.
    DeclaredType(SymbolID),
    /// Inferred result type of a `def` without an annotation.
    ReturnType(ast::NodeID),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Cycle {
    Some(ResolutionKey),
    None,
}

impl Cycle {
    pub fn has_cycle(&self) -> bool {
        matches!(self, Cycle::Some(_))
    }
}

impl TyChecker<'_> {
    fn resolution_target_has_property(&self, key: ResolutionKey) -> bool {
        match key {
            ResolutionKey::Type(symbol) => self
                .symbol_links
                .get(&symbol)
                .is_some_and(|s| s.get_ty().is_some()),
            ResolutionKey::DeclaredType(symbol) => self
                .symbol_links
                .get(&symbol)
                .is_some_and(|s| s.get_declared_ty().is_some()),
            ResolutionKey::ReturnType(decl) => self
                .node_links
                .get(&decl)
                .is_some_and(|n| n.get_resolved_sig().is_some()),
        }
    }

    fn find_resolution_cycle_start_index(&self, key: ResolutionKey) -> Option<usize> {
        for (idx, t) in self.resolution_tys.iter().enumerate().rev() {
            if self.resolution_target_has_property(*t) {
                return None;
            } else if *t == key {
                return Some(idx);
            }
        }
        None
    }

    pub(super) fn is_resolving(&self, key: ResolutionKey) -> bool {
        self.resolution_tys.contains(&key)
    }

    pub(super) fn push_ty_resolution(&mut self, key: ResolutionKey) -> bool {
        if let Some(start) = self.find_resolution_cycle_start_index(key) {
            for index in start..self.resolution_res.len() {
                self.resolution_res[index] = false;
            }
            false
        } else {
            self.resolution_tys.push(key);
            self.resolution_res.push(true);
            true
        }
    }

    /// Pairs with a successful [`TyChecker::push_ty_resolution`].
    pub(super) fn pop_ty_resolution(&mut self) -> Cycle {
        let key = self.resolution_tys.pop();
        let ok = self.resolution_res.pop().unwrap_or(true);
        match key {
            Some(key) if !ok => Cycle::Some(key),
            _ => Cycle::None,
        }
    }
}
