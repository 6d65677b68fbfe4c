use monolit_ast as ast;

use super::TyChecker;

impl<'cx> TyChecker<'cx> {
    pub(super) fn check_stmt(&mut self, stmt: &'cx ast::Stmt<'cx>) {
        use ast::StmtKind::*;
        match stmt.kind {
            Val(decl) => self.check_val_decl(decl),
            TypeAlias(decl) => self.check_type_alias_decl(decl),
            Fn(decl) => self.check_fn_decl(decl),
            Expr(stmt) => {
                self.check_expr(stmt.expr);
            }
        }
    }

    fn check_val_decl(&mut self, decl: &'cx ast::ValDecl<'cx>) {
        let Some(symbol) = self.symbol_of(decl.id) else {
            return;
        };
        let declared = self.get_type_of_symbol(symbol);
        if decl.ty.is_some() {
            let init_ty = self.check_expr_with_expected(decl.init, Some(declared));
            self.check_type_assignable_to(init_ty, declared, decl.init.span());
        } else {
            self.check_expr(decl.init);
        }
    }

    fn check_type_alias_decl(&mut self, decl: &'cx ast::TypeAliasDecl<'cx>) {
        if let Some(symbol) = self.symbol_of(decl.id) {
            self.get_declared_ty_of_alias(symbol, decl.name.span);
        }
    }

    fn check_fn_decl(&mut self, decl: &'cx ast::FnDecl<'cx>) {
        let sig = self.get_sig(decl);
        if decl.ret_ty.is_some() {
            let body_ty = self.check_expr_with_expected(decl.body, Some(sig.ret));
            self.check_type_assignable_to(body_ty, sig.ret, decl.body.span());
        } else {
            self.check_expr(decl.body);
        }
    }
}
