use monolit_ast as ast;

use super::{TyChecker, errors};
use crate::ty::{self, LitValue};

impl<'cx> TyChecker<'cx> {
    pub(super) fn check_match_expr(
        &mut self,
        m: &'cx ast::MatchExpr<'cx>,
        expected: Option<&'cx ty::Ty<'cx>>,
    ) -> &'cx ty::Ty<'cx> {
        let scrutinee_ty = self.check_expr(m.scrutinee);
        // `5 match { case 7 => .. }` is legal
        let scrutinee_ty = self.get_widened_literal_ty(scrutinee_ty);
        let mut seen_wildcard = false;
        let mut res: Option<&'cx ty::Ty<'cx>> = None;
        for arm in m.arms {
            if seen_wildcard {
                let error = errors::UnreachableCase { span: arm.pat.span() };
                self.push_error(error);
            }
            self.check_pat(arm.pat, scrutinee_ty);
            seen_wildcard |= arm.pat.is_wildcard();
            let arm_ty = self.check_expr_with_expected(arm.body, expected);
            res = Some(match res {
                Some(prev) => self.get_lub(prev, arm_ty),
                None => arm_ty,
            });
        }
        res.unwrap_or(self.nothing_ty)
    }

    /// The type a pattern tests for, if it tests for one.
    pub fn pattern_ty(&self, pat: &'cx ast::Pat<'cx>) -> Option<&'cx ty::Ty<'cx>> {
        self.node_ty(pat.id())
    }

    fn check_pat(&mut self, pat: &'cx ast::Pat<'cx>, scrutinee_ty: &'cx ty::Ty<'cx>) {
        let pat_ty = match pat.kind {
            ast::PatKind::Wildcard(_) => return,
            ast::PatKind::Lit(lit) => self.get_lit_ty(LitValue::from(lit.lit.kind)),
            ast::PatKind::Typed(typed) => self.get_ty_from_ty_node(typed.ty),
        };
        self.get_mut_node_links(pat.id()).set_resolved_ty(pat_ty);
        if pat_ty.is_error() || scrutinee_ty.is_error() {
            return;
        }
        if !self.is_subtype(pat_ty, scrutinee_ty) && !self.is_subtype(scrutinee_ty, pat_ty) {
            let error = errors::PatternTyIsIncompatibleWithScrutinee {
                span: pat.span(),
                pat_ty: self.print_ty(pat_ty),
                scrutinee_ty: self.print_ty(scrutinee_ty),
            };
            self.push_error(error);
        }
    }
}
