use monolit_ast as ast;
use monolit_binder::{SymbolFlags, SymbolID};

use super::TyChecker;
use crate::ops;
use crate::ty::LitValue;

impl<'cx> TyChecker<'cx> {
    /// Value of a stable binding whose initializer is a constant expression.
    pub(super) fn const_eval_symbol(&mut self, symbol: SymbolID, depth: u32) -> Option<LitValue> {
        if depth > self.config.max_const_eval_depth() || self.const_eval_stack.contains(&symbol) {
            return None;
        }
        let s = self.symbol(symbol);
        if !s.is_stable() || s.flags.intersects(SymbolFlags::PARAM | SymbolFlags::FUNCTION) {
            return None;
        }
        let declared = self.get_type_of_symbol(symbol);
        if let Some(lit) = declared.as_lit_singleton() {
            return Some(*lit.value);
        }
        if let Some(path) = declared.as_path_singleton() {
            return self.const_eval_symbol(path.symbol(), depth + 1);
        }
        let init = s
            .value_decl()
            .and_then(|decl| self.nodes.get(decl).as_val_decl())
            .map(|decl| decl.init)?;
        self.const_eval_stack.push(symbol);
        let res = self.const_eval(init, depth + 1);
        self.const_eval_stack.pop();
        res
    }

    /// Folds `expr` when it is built only from literals, stable constant
    /// bindings and operators. Division by zero is not a constant.
    pub fn const_eval(&mut self, expr: &'cx ast::Expr<'cx>, depth: u32) -> Option<LitValue> {
        if depth > self.config.max_const_eval_depth() {
            tracing::debug!(depth, "constant evaluation depth exceeded");
            return None;
        }
        use ast::ExprKind::*;
        match expr.kind {
            Lit(lit) => Some(LitValue::from(lit.kind)),
            Paren(paren) => self.const_eval(paren.expr, depth + 1),
            Ident(ident) => {
                let symbol = self.symbol_of(ident.id)?;
                self.const_eval_symbol(symbol, depth + 1)
            }
            Unary(unary) => {
                let v = self.const_eval(unary.expr, depth + 1)?;
                ops::eval_unary(unary.op, &v).ok()
            }
            Bin(bin) => {
                let l = self.const_eval(bin.left, depth + 1)?;
                let r = self.const_eval(bin.right, depth + 1)?;
                ops::eval_bin(bin.op, &l, &r, &mut self.atoms).ok()
            }
            _ => None,
        }
    }
}
