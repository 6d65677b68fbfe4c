mod check_call_like;
mod check_expr;
mod check_match;
mod check_stmt;
mod const_eval;
mod cycle_check;
pub mod errors;
mod get_ty;
mod get_ty_from_ty_node;
mod inhabitant;
mod links;
mod purity;
mod relation;
mod singleton;

use bumpalo::Bump;
use rustc_hash::FxHashMap;

use monolit_ast as ast;
use monolit_ast::keyword;
use monolit_atom::AtomIntern;
use monolit_binder::{BinderResult, Symbol, SymbolID};
use monolit_config::NormalizedCompilerOptions;
use monolit_errors::Diag;
use monolit_errors::diag_ext::DiagnosticExt;
use monolit_span::Span;
use monolit_utils::{fx_hashmap_with_capacity, no_hashmap_with_capacity};

use self::cycle_check::ResolutionKey;
use self::links::{NodeLinks, SymbolLinks};
use self::purity::Purity;
pub use self::singleton::SingletonOperand;
use crate::InternCache;
use crate::ty::{self, IntrinsicTyKind, LitID, LitValue, TyID};

/// The checked signature of one `def`.
#[derive(Debug)]
pub struct Sig<'cx> {
    pub decl: &'cx ast::FnDecl<'cx>,
    pub symbol: SymbolID,
    pub params: ty::Tys<'cx>,
    pub ret: &'cx ty::Ty<'cx>,
}

/// Compile-time proof that `ty` has exactly the value `value`.
#[derive(Debug, Clone, Copy)]
pub struct InhabitantWitness<'cx> {
    pub ty: &'cx ty::Ty<'cx>,
    pub lit: LitID,
    pub value: &'cx LitValue,
}

pub struct TyChecker<'cx> {
    pub atoms: AtomIntern,
    pub diags: Vec<Diag>,
    config: &'cx NormalizedCompilerOptions,
    arena: &'cx Bump,
    cache: InternCache<'cx>,
    // === ast ===
    root: &'cx ast::Program<'cx>,
    nodes: &'cx ast::Nodes<'cx>,
    binder: &'cx BinderResult,
    // === links ===
    symbol_links: FxHashMap<SymbolID, SymbolLinks<'cx>>,
    node_links: FxHashMap<ast::NodeID, NodeLinks<'cx>>,
    // === caches ===
    subtype_cache: FxHashMap<(TyID, TyID), bool>,
    purity: nohash_hasher::IntMap<ast::NodeID, Purity<'cx>>,
    resolution_tys: Vec<ResolutionKey>,
    resolution_res: Vec<bool>,
    const_eval_stack: Vec<SymbolID>,
    // === intrinsic types ===
    pub any_ty: &'cx ty::Ty<'cx>,
    pub nothing_ty: &'cx ty::Ty<'cx>,
    pub int_ty: &'cx ty::Ty<'cx>,
    pub long_ty: &'cx ty::Ty<'cx>,
    pub double_ty: &'cx ty::Ty<'cx>,
    pub boolean_ty: &'cx ty::Ty<'cx>,
    pub string_ty: &'cx ty::Ty<'cx>,
    pub char_ty: &'cx ty::Ty<'cx>,
    pub unit_ty: &'cx ty::Ty<'cx>,
    pub null_ty: &'cx ty::Ty<'cx>,
    pub error_ty: &'cx ty::Ty<'cx>,
}

macro_rules! intrinsic_ty {
    ($cache: ident, $arena: ident, $kind: ident, $name: expr) => {{
        let kind = IntrinsicTyKind::$kind;
        let i = $arena.alloc(ty::IntrinsicTy { name: $name, kind });
        $cache.new_ty($arena, ty::TyKind::Intrinsic(i), kind.flags())
    }};
}

impl<'cx> TyChecker<'cx> {
    pub fn new(
        arena: &'cx Bump,
        root: &'cx ast::Program<'cx>,
        nodes: &'cx ast::Nodes<'cx>,
        binder: &'cx BinderResult,
        atoms: AtomIntern,
        config: &'cx NormalizedCompilerOptions,
        mut cache: InternCache<'cx>,
    ) -> Self {
        let c = &mut cache;
        let any_ty = intrinsic_ty!(c, arena, Any, keyword::IDENT_ANY);
        let nothing_ty = intrinsic_ty!(c, arena, Nothing, keyword::IDENT_NOTHING);
        let int_ty = intrinsic_ty!(c, arena, Int, keyword::IDENT_INT);
        let long_ty = intrinsic_ty!(c, arena, Long, keyword::IDENT_LONG);
        let double_ty = intrinsic_ty!(c, arena, Double, keyword::IDENT_DOUBLE);
        let boolean_ty = intrinsic_ty!(c, arena, Boolean, keyword::IDENT_BOOLEAN);
        let string_ty = intrinsic_ty!(c, arena, String, keyword::IDENT_STRING);
        let char_ty = intrinsic_ty!(c, arena, Char, keyword::IDENT_CHAR);
        let unit_ty = intrinsic_ty!(c, arena, Unit, keyword::IDENT_UNIT);
        let null_ty = intrinsic_ty!(c, arena, Null, keyword::IDENT_NULL);
        let error_ty = intrinsic_ty!(c, arena, Error, keyword::IDENT_EMPTY);
        Self {
            atoms,
            diags: Vec::new(),
            config,
            arena,
            cache,
            root,
            nodes,
            binder,
            symbol_links: fx_hashmap_with_capacity(binder.symbols.len()),
            node_links: fx_hashmap_with_capacity(nodes.len()),
            subtype_cache: fx_hashmap_with_capacity(256),
            purity: no_hashmap_with_capacity(32),
            resolution_tys: Vec::with_capacity(32),
            resolution_res: Vec::with_capacity(32),
            const_eval_stack: Vec::with_capacity(8),
            any_ty,
            nothing_ty,
            int_ty,
            long_ty,
            double_ty,
            boolean_ty,
            string_ty,
            char_ty,
            unit_ty,
            null_ty,
            error_ty,
        }
    }

    #[tracing::instrument(level = "debug", skip_all)]
    pub fn check_program(&mut self) {
        for stmt in self.root.stmts {
            self.check_stmt(stmt);
        }
    }

    pub fn into_cache(self) -> InternCache<'cx> {
        self.cache
    }

    pub fn cache(&self) -> &InternCache<'cx> {
        &self.cache
    }

    pub fn steal_diags(&mut self) -> Vec<Diag> {
        std::mem::take(&mut self.diags)
    }

    pub fn config(&self) -> &'cx NormalizedCompilerOptions {
        self.config
    }

    pub fn root(&self) -> &'cx ast::Program<'cx> {
        self.root
    }

    pub fn nodes(&self) -> &'cx ast::Nodes<'cx> {
        self.nodes
    }

    pub fn binder(&self) -> &'cx BinderResult {
        self.binder
    }

    /// The symbol an identifier or declaration node resolved to.
    pub fn symbol_of(&self, id: ast::NodeID) -> Option<SymbolID> {
        self.binder.res(id).filter(|symbol| *symbol != Symbol::ERR)
    }

    #[inline(always)]
    pub fn symbol(&self, id: SymbolID) -> &'cx Symbol {
        self.binder.symbol(id)
    }

    /// The type of an expression, type node or pattern after checking.
    pub fn node_ty(&self, id: ast::NodeID) -> Option<&'cx ty::Ty<'cx>> {
        self.node_links.get(&id).and_then(|links| links.get_resolved_ty())
    }

    /// The overload a call expression resolved to.
    pub fn resolved_sig(&self, call: ast::NodeID) -> Option<&'cx Sig<'cx>> {
        self.node_links.get(&call).and_then(|links| links.get_resolved_sig())
    }

    /// The witness recorded for an `inhabitant[T]` expression.
    pub fn inhabitant_of(&self, id: ast::NodeID) -> Option<InhabitantWitness<'cx>> {
        self.node_links.get(&id).and_then(|links| links.get_inhabitant())
    }

    pub fn intrinsic_ty(&self, kind: IntrinsicTyKind) -> &'cx ty::Ty<'cx> {
        use IntrinsicTyKind::*;
        match kind {
            Any => self.any_ty,
            Nothing => self.nothing_ty,
            Int => self.int_ty,
            Long => self.long_ty,
            Double => self.double_ty,
            Boolean => self.boolean_ty,
            String => self.string_ty,
            Char => self.char_ty,
            Unit => self.unit_ty,
            Null => self.null_ty,
            Error => self.error_ty,
        }
    }

    pub fn print_ty(&self, ty: &'cx ty::Ty<'cx>) -> String {
        match ty.kind {
            ty::TyKind::Intrinsic(i) if i.kind == IntrinsicTyKind::Error => "<error>".to_string(),
            ty::TyKind::Intrinsic(i) => self.atoms.get(i.name).to_string(),
            ty::TyKind::Singleton(ty::SingletonTy::Lit(lit)) => lit.value.to_source(&self.atoms),
            ty::TyKind::Singleton(ty::SingletonTy::Path(path)) => {
                let name = self.symbol(path.symbol()).name;
                format!("{}.type", self.atoms.get(name))
            }
        }
    }

    fn push_error(&mut self, error: impl DiagnosticExt + Send + Sync + 'static) {
        self.diags.push(Diag::new(error));
    }

    fn get_symbol_links(&self, symbol: SymbolID) -> SymbolLinks<'cx> {
        self.symbol_links.get(&symbol).copied().unwrap_or_default()
    }

    fn get_mut_symbol_links(&mut self, symbol: SymbolID) -> &mut SymbolLinks<'cx> {
        self.symbol_links.entry(symbol).or_default()
    }

    fn get_node_links(&self, id: ast::NodeID) -> NodeLinks<'cx> {
        self.node_links.get(&id).copied().unwrap_or_default()
    }

    fn get_mut_node_links(&mut self, id: ast::NodeID) -> &mut NodeLinks<'cx> {
        self.node_links.entry(id).or_default()
    }

    fn alloc<T>(&self, t: T) -> &'cx T {
        self.arena.alloc(t)
    }

    fn symbol_name(&self, symbol: SymbolID) -> String {
        self.atoms.get(self.symbol(symbol).name).to_string()
    }

    fn check_type_assignable_to(
        &mut self,
        source: &'cx ty::Ty<'cx>,
        target: &'cx ty::Ty<'cx>,
        span: Span,
    ) -> bool {
        if self.is_assignable(source, target) {
            return true;
        }
        let error = errors::TypeIsNotAssignableToType {
            span,
            ty1: self.print_ty(source),
            ty2: self.print_ty(target),
        };
        self.push_error(error);
        false
    }
}
