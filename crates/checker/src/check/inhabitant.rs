use monolit_ast as ast;
use monolit_span::Span;

use super::errors::{self, SingletonError};
use super::{InhabitantWitness, TyChecker};
use crate::ty::{self, IntrinsicTyKind, LitValue};

impl<'cx> TyChecker<'cx> {
    /// Recovers the unique value of `ty`.
    ///
    /// A literal singleton always succeeds. A path singleton succeeds when
    /// the declared type of its binding has an inhabitant, or else when its
    /// initializer folds to a constant. `Unit` and `Null` have exactly one
    /// value each; every other type is rejected.
    #[tracing::instrument(level = "debug", skip_all, fields(ty = ty.id.as_u32()))]
    pub fn resolve_inhabitant(
        &mut self,
        ty: &'cx ty::Ty<'cx>,
        span: Span,
    ) -> Result<InhabitantWitness<'cx>, SingletonError> {
        let value = self.resolve_inhabitant_value(ty, span, 0)?;
        let (lit, value) = self.cache.intern_lit(self.arena, value);
        Ok(InhabitantWitness { ty, lit, value })
    }

    fn resolve_inhabitant_value(
        &mut self,
        ty: &'cx ty::Ty<'cx>,
        span: Span,
        depth: u32,
    ) -> Result<LitValue, SingletonError> {
        match ty.kind {
            ty::TyKind::Singleton(ty::SingletonTy::Lit(lit)) => Ok(*lit.value),
            ty::TyKind::Singleton(ty::SingletonTy::Path(path)) => {
                let symbol = path.symbol();
                let not_a_constant = |this: &Self| {
                    SingletonError::NotAConstant(errors::NotAConstant {
                        span,
                        name: this.symbol_name(symbol),
                    })
                };
                if depth > self.config.max_const_eval_depth() {
                    return Err(not_a_constant(self));
                }
                let declared = self.get_type_of_symbol(symbol);
                if declared.is_singleton() {
                    return self
                        .resolve_inhabitant_value(declared, span, depth + 1)
                        .map_err(|_| not_a_constant(self));
                }
                self.const_eval_symbol(symbol, depth + 1)
                    .ok_or_else(|| not_a_constant(self))
            }
            ty::TyKind::Intrinsic(i) => match i.kind {
                IntrinsicTyKind::Unit => Ok(LitValue::Unit),
                IntrinsicTyKind::Null => Ok(LitValue::Null),
                _ => Err(SingletonError::TyHasNoSingleInhabitant(
                    errors::TyHasNoSingleInhabitant {
                        span,
                        ty: self.print_ty(ty),
                    },
                )),
            },
        }
    }

    pub(super) fn check_inhabitant_expr(
        &mut self,
        node: &'cx ast::InhabitantExpr<'cx>,
    ) -> &'cx ty::Ty<'cx> {
        let ty = self.get_ty_from_ty_node(node.ty);
        if ty.is_error() {
            return ty;
        }
        match self.resolve_inhabitant(ty, node.ty.span()) {
            Ok(witness) => {
                self.get_mut_node_links(node.id).set_inhabitant(witness);
            }
            Err(error) => self.push_error(error),
        }
        ty
    }
}
