use monolit_ast as ast;
use monolit_binder::SymbolFlags;

use super::{TyChecker, errors};
use crate::ops;
use crate::ty::{self, IntrinsicTyKind, LitValue};

impl<'cx> TyChecker<'cx> {
    pub fn check_expr(&mut self, expr: &'cx ast::Expr<'cx>) -> &'cx ty::Ty<'cx> {
        self.check_expr_with_expected(expr, None)
    }

    /// Each expression is checked once; the first result is cached and
    /// returned for later visits whatever their expected type.
    pub fn check_expr_with_expected(
        &mut self,
        expr: &'cx ast::Expr<'cx>,
        expected: Option<&'cx ty::Ty<'cx>>,
    ) -> &'cx ty::Ty<'cx> {
        if let Some(ty) = self.get_node_links(expr.id()).get_resolved_ty() {
            return ty;
        }
        let ty = self.check_expr_worker(expr, expected);
        let links = self.get_mut_node_links(expr.id());
        if links.get_resolved_ty().is_none() {
            links.set_resolved_ty(ty);
        }
        ty
    }

    fn check_expr_worker(
        &mut self,
        expr: &'cx ast::Expr<'cx>,
        expected: Option<&'cx ty::Ty<'cx>>,
    ) -> &'cx ty::Ty<'cx> {
        use ast::ExprKind::*;
        match expr.kind {
            Lit(lit) => self.get_lit_ty(LitValue::from(lit.kind)),
            Ident(ident) => self.check_ident(ident, expected),
            Paren(paren) => self.check_expr_with_expected(paren.expr, expected),
            Unary(unary) => self.check_unary_expr(unary),
            Bin(bin) => self.check_bin_expr(bin),
            Call(call) => self.check_call_expr(call),
            Block(block) => {
                for stmt in block.stmts {
                    self.check_stmt(stmt);
                }
                match block.tail {
                    Some(tail) => self.check_expr_with_expected(tail, expected),
                    None => self.unit_ty,
                }
            }
            Assign(assign) => self.check_assign_expr(assign),
            Match(m) => self.check_match_expr(m, expected),
            Inhabitant(n) => self.check_inhabitant_expr(n),
            Opaque(_) => self.unit_ty,
        }
    }

    fn check_ident(
        &mut self,
        ident: &'cx ast::Ident,
        expected: Option<&'cx ty::Ty<'cx>>,
    ) -> &'cx ty::Ty<'cx> {
        let Some(symbol) = self.symbol_of(ident.id) else {
            return self.error_ty;
        };
        let s = self.symbol(symbol);
        if s.flags.contains(SymbolFlags::FUNCTION) {
            let error = errors::FunctionIsNotAValue {
                span: ident.span,
                name: self.symbol_name(symbol),
            };
            self.push_error(error);
            return self.error_ty;
        }
        let declared = self.get_type_of_symbol(symbol);
        // a stable reference only takes its path type when asked for it
        if let Some(expected) = expected
            && let Some(path) = expected.as_path_singleton()
            && path.symbol() == symbol
            && s.is_stable()
        {
            return expected;
        }
        declared
    }

    fn check_unary_expr(&mut self, unary: &'cx ast::UnaryExpr<'cx>) -> &'cx ty::Ty<'cx> {
        let operand = self.check_expr(unary.expr);
        if operand.is_error() {
            return self.error_ty;
        }
        let kind = self.get_base_kind(operand);
        let res = match unary.op {
            ast::UnaryOp::Minus => match kind {
                IntrinsicTyKind::Char => Some(IntrinsicTyKind::Int),
                k if k.numeric_rank().is_some() => Some(k),
                _ => None,
            },
            ast::UnaryOp::Not => (kind == IntrinsicTyKind::Boolean).then_some(kind),
        };
        let Some(res) = res else {
            let error = errors::OperatorCannotBeAppliedToTy {
                span: unary.span,
                op: unary.op.as_str().to_string(),
                ty: self.print_ty(operand),
            };
            self.push_error(error);
            return self.error_ty;
        };
        if let Some(lit) = operand.as_lit_singleton()
            && let Ok(folded) = ops::eval_unary(unary.op, lit.value)
        {
            return self.get_lit_ty(folded);
        }
        self.intrinsic_ty(res)
    }

    fn get_bin_result_kind(
        &self,
        op: ast::BinOp,
        l: IntrinsicTyKind,
        r: IntrinsicTyKind,
    ) -> Option<IntrinsicTyKind> {
        use IntrinsicTyKind::*;
        let numeric = || match (l.numeric_rank(), r.numeric_rank()) {
            (Some(a), Some(b)) => Some(match a.max(b) {
                0 => Int,
                1 => Long,
                _ => Double,
            }),
            _ => None,
        };
        if op == ast::BinOp::Add && (l == String || r == String) {
            Some(String)
        } else if op.is_arithmetic() {
            numeric()
        } else if op.is_comparison() {
            numeric().map(|_| Boolean)
        } else if op.is_equality() {
            Some(Boolean)
        } else {
            (l == Boolean && r == Boolean).then_some(Boolean)
        }
    }

    fn check_bin_expr(&mut self, bin: &'cx ast::BinExpr<'cx>) -> &'cx ty::Ty<'cx> {
        let left = self.check_expr(bin.left);
        let right = self.check_expr(bin.right);
        if left.is_error() || right.is_error() {
            return self.error_ty;
        }
        let l = self.get_base_kind(left);
        let r = self.get_base_kind(right);
        let Some(res) = self.get_bin_result_kind(bin.op, l, r) else {
            let error = errors::OperatorCannotBeAppliedToTy1AndTy2 {
                span: bin.span,
                op: bin.op.as_str().to_string(),
                ty1: self.print_ty(left),
                ty2: self.print_ty(right),
            };
            self.push_error(error);
            return self.error_ty;
        };
        if let (Some(l), Some(r)) = (left.as_lit_singleton(), right.as_lit_singleton()) {
            match ops::eval_bin(bin.op, l.value, r.value, &mut self.atoms) {
                Ok(folded) => return self.get_lit_ty(folded),
                Err(err) => {
                    tracing::debug!(op = bin.op.as_str(), ?err, "constant operands not folded");
                }
            }
        }
        self.intrinsic_ty(res)
    }

    fn check_assign_expr(&mut self, assign: &'cx ast::AssignExpr<'cx>) -> &'cx ty::Ty<'cx> {
        let Some(symbol) = self.symbol_of(assign.left.id) else {
            self.check_expr(assign.right);
            return self.unit_ty;
        };
        if !self.symbol(symbol).flags.contains(SymbolFlags::VAR) {
            let error = errors::CannotAssignToVal {
                span: assign.left.span,
                name: self.symbol_name(symbol),
            };
            self.push_error(error);
            self.check_expr(assign.right);
            return self.unit_ty;
        }
        let declared = self.get_type_of_symbol(symbol);
        let source = self.check_expr_with_expected(assign.right, Some(declared));
        self.check_type_assignable_to(source, declared, assign.right.span());
        self.unit_ty
    }
}
