use bumpalo::Bump;
use rustc_hash::FxHashMap;

use monolit_binder::SymbolID;
use monolit_utils::{fx_hashmap_with_capacity, no_hashmap_with_capacity};

use crate::PathRef;
use crate::ty::{self, LitID, LitValue, Ty, TyID, TypeFlags};

/// Canonical literals and singleton types of one compilation unit.
///
/// Entries are added monotonically and never removed; equal literal values
/// share one `&LitValue`, and equal singleton types share one `&Ty`.
pub struct InternCache<'cx> {
    tys: Vec<&'cx Ty<'cx>>,
    lits: Vec<&'cx LitValue>,
    lit_ids: FxHashMap<LitValue, LitID>,
    lit_tys: nohash_hasher::IntMap<LitID, &'cx Ty<'cx>>,
    path_tys: nohash_hasher::IntMap<SymbolID, &'cx Ty<'cx>>,
}

impl Default for InternCache<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'cx> InternCache<'cx> {
    pub fn new() -> Self {
        Self {
            tys: Vec::with_capacity(256),
            lits: Vec::with_capacity(128),
            lit_ids: fx_hashmap_with_capacity(128),
            lit_tys: no_hashmap_with_capacity(128),
            path_tys: no_hashmap_with_capacity(64),
        }
    }

    pub fn intern_lit(&mut self, arena: &'cx Bump, value: LitValue) -> (LitID, &'cx LitValue) {
        if let Some(id) = self.lit_ids.get(&value).copied() {
            return (id, self.lits[id.as_usize()]);
        }
        let id = LitID::new(self.lits.len() as u32);
        let value = arena.alloc(value);
        self.lits.push(value);
        self.lit_ids.insert(*value, id);
        (id, value)
    }

    #[inline(always)]
    pub fn lit(&self, id: LitID) -> &'cx LitValue {
        self.lits[id.as_usize()]
    }

    #[inline(always)]
    pub fn ty(&self, id: TyID) -> &'cx Ty<'cx> {
        self.tys[id.as_usize()]
    }

    pub fn lit_count(&self) -> usize {
        self.lits.len()
    }

    pub fn ty_count(&self) -> usize {
        self.tys.len()
    }

    pub(crate) fn new_ty(
        &mut self,
        arena: &'cx Bump,
        kind: ty::TyKind<'cx>,
        flags: TypeFlags,
    ) -> &'cx Ty<'cx> {
        let id = TyID::new(self.tys.len() as u32);
        let ty = arena.alloc(Ty::new(id, kind, flags));
        self.tys.push(ty);
        ty
    }

    pub(crate) fn lit_ty(&mut self, arena: &'cx Bump, value: LitValue) -> &'cx Ty<'cx> {
        let (id, value) = self.intern_lit(arena, value);
        if let Some(ty) = self.lit_tys.get(&id).copied() {
            return ty;
        }
        let lit = arena.alloc(ty::LitSingleton { id, value });
        let kind = ty::TyKind::Singleton(ty::SingletonTy::Lit(lit));
        let ty = self.new_ty(arena, kind, TypeFlags::LIT_SINGLETON);
        self.lit_tys.insert(id, ty);
        ty
    }

    pub(crate) fn path_ty(&mut self, arena: &'cx Bump, path: PathRef) -> &'cx Ty<'cx> {
        if let Some(ty) = self.path_tys.get(&path.symbol()).copied() {
            return ty;
        }
        let kind = ty::TyKind::Singleton(ty::SingletonTy::Path(path));
        let ty = self.new_ty(arena, kind, TypeFlags::PATH_SINGLETON);
        self.path_tys.insert(path.symbol(), ty);
        ty
    }
}
