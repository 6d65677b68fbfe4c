mod bind;
pub mod errors;
mod symbol;

use rustc_hash::{FxHashMap, FxHashSet};

use monolit_ast as ast;
use monolit_atom::AtomIntern;
use monolit_errors::Diag;
use monolit_span::Span;
use monolit_utils::fx_hashmap_with_capacity;

pub use self::symbol::{Symbol, SymbolFlags, SymbolID, SymbolName, Symbols};

monolit_utils::index!(ScopeID);

pub struct BinderResult {
    pub symbols: Symbols,
    /// Identifier and declaration nodes to their symbols. Identifiers that
    /// failed to resolve map to [`Symbol::ERR`]; intrinsic type names are absent.
    pub final_res: FxHashMap<ast::NodeID, SymbolID>,
    pub diags: Vec<Diag>,
}

impl BinderResult {
    #[inline(always)]
    pub fn symbol(&self, id: SymbolID) -> &Symbol {
        self.symbols.get(id)
    }

    pub fn res(&self, id: ast::NodeID) -> Option<SymbolID> {
        self.final_res.get(&id).copied()
    }

    pub fn steal_errors(&mut self) -> Vec<Diag> {
        std::mem::take(&mut self.diags)
    }
}

struct BinderState<'atoms> {
    atoms: &'atoms AtomIntern,
    diags: Vec<Diag>,
    symbols: Symbols,
    res: FxHashMap<(ScopeID, SymbolName), SymbolID>,
    scope_parent: Vec<Option<ScopeID>>,
    scope_id: ScopeID,
    final_res: FxHashMap<ast::NodeID, SymbolID>,
    name_spans: FxHashMap<SymbolID, Span>,
    assigned: FxHashSet<SymbolID>,
}

impl<'atoms> BinderState<'atoms> {
    fn new(atoms: &'atoms AtomIntern) -> Self {
        let symbols = Symbols::new(ast::keyword::IDENT_EMPTY);
        Self {
            atoms,
            diags: Vec::new(),
            symbols,
            res: fx_hashmap_with_capacity(256),
            scope_parent: vec![None],
            scope_id: ScopeID::root(),
            final_res: fx_hashmap_with_capacity(512),
            name_spans: fx_hashmap_with_capacity(128),
            assigned: FxHashSet::default(),
        }
    }

    fn push_error(&mut self, error: impl monolit_errors::diag_ext::DiagnosticExt + Send + Sync + 'static) {
        self.diags.push(Diag::new(error));
    }
}

#[tracing::instrument(level = "debug", skip_all)]
pub fn bind<'cx>(root: &'cx ast::Program<'cx>, atoms: &AtomIntern) -> BinderResult {
    let mut state = BinderState::new(atoms);
    state.declare_builtins();
    state.bind_program(root);
    state.freeze_unassigned_vars();
    BinderResult {
        symbols: state.symbols,
        final_res: state.final_res,
        diags: state.diags,
    }
}
