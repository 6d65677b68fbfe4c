use super::TyChecker;
use crate::PathRef;
use crate::ty::{self, IntrinsicTyKind, LitValue};

/// What a singleton type is formed from.
#[derive(Debug, Clone, Copy)]
pub enum SingletonOperand {
    Lit(LitValue),
    Path(PathRef),
}

impl<'cx> TyChecker<'cx> {
    /// Returns the one interned singleton type for `operand`.
    pub fn make_singleton(&mut self, operand: SingletonOperand) -> &'cx ty::Ty<'cx> {
        match operand {
            SingletonOperand::Lit(value) => self.cache.lit_ty(self.arena, value),
            SingletonOperand::Path(path) => self.cache.path_ty(self.arena, path),
        }
    }

    pub(super) fn get_lit_ty(&mut self, value: LitValue) -> &'cx ty::Ty<'cx> {
        self.make_singleton(SingletonOperand::Lit(value))
    }

    /// One step up: a literal singleton widens to its intrinsic kind, a path
    /// singleton to the declared type of its binding. Any other type is
    /// returned unchanged.
    pub fn widen(&mut self, ty: &'cx ty::Ty<'cx>) -> &'cx ty::Ty<'cx> {
        match ty.as_singleton() {
            Some(ty::SingletonTy::Lit(lit)) => self.intrinsic_ty(lit.value.kind()),
            Some(ty::SingletonTy::Path(path)) => self.get_type_of_symbol(path.symbol()),
            None => ty,
        }
    }

    pub(super) fn get_widened_literal_ty(&self, ty: &'cx ty::Ty<'cx>) -> &'cx ty::Ty<'cx> {
        match ty.as_lit_singleton() {
            Some(lit) => self.intrinsic_ty(lit.value.kind()),
            None => ty,
        }
    }

    /// Widens until a non-singleton type is reached.
    pub(super) fn get_base_ty(&mut self, ty: &'cx ty::Ty<'cx>) -> &'cx ty::Ty<'cx> {
        let mut ty = ty;
        let mut steps = 0;
        while ty.is_singleton() {
            let next = self.widen(ty);
            if next == ty || steps > self.binder.symbols.len() {
                return self.error_ty;
            }
            ty = next;
            steps += 1;
        }
        ty
    }

    pub(super) fn get_base_kind(&mut self, ty: &'cx ty::Ty<'cx>) -> IntrinsicTyKind {
        self.get_base_ty(ty)
            .intrinsic_kind()
            .unwrap_or(IntrinsicTyKind::Error)
    }
}
