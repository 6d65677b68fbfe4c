use monolit_ast as ast;
use monolit_binder::{SymbolFlags, SymbolID};

use super::{Sig, TyChecker, errors};
use crate::ty;

impl<'cx> TyChecker<'cx> {
    pub(super) fn check_call_expr(&mut self, call: &'cx ast::CallExpr<'cx>) -> &'cx ty::Ty<'cx> {
        let Some(symbol) = self.symbol_of(call.callee.id) else {
            self.check_args(call.args);
            return self.error_ty;
        };
        let flags = self.symbol(symbol).flags;
        if !flags.contains(SymbolFlags::FUNCTION) {
            self.check_args(call.args);
            let error = errors::ValueIsNotCallable {
                span: call.callee.span,
                name: self.symbol_name(symbol),
            };
            self.push_error(error);
            return self.error_ty;
        }
        if flags.contains(SymbolFlags::BUILTIN) {
            return self.check_builtin_call(call);
        }
        let sigs = self.get_sigs_of_symbol(symbol);
        match self.resolve_call(call, symbol, &sigs) {
            Some(sig) => {
                self.get_mut_node_links(call.id).set_resolved_sig(sig);
                sig.ret
            }
            None => self.error_ty,
        }
    }

    fn check_args(&mut self, args: ast::Exprs<'cx>) {
        for arg in args {
            self.check_expr(arg);
        }
    }

    /// `println` takes one argument of any type.
    fn check_builtin_call(&mut self, call: &'cx ast::CallExpr<'cx>) -> &'cx ty::Ty<'cx> {
        self.check_args(call.args);
        if call.args.len() != 1 {
            let error = errors::ExpectedXArgsButGotY {
                span: call.span,
                x: 1,
                y: call.args.len(),
            };
            self.push_error(error);
        }
        self.unit_ty
    }

    fn defined_here(&self, sigs: &[&'cx Sig<'cx>]) -> Vec<errors::DefinedHere> {
        sigs.iter()
            .map(|sig| errors::DefinedHere {
                span: sig.decl.name.span,
                name: self.atoms.get(sig.decl.name.name).to_string(),
            })
            .collect()
    }

    #[tracing::instrument(level = "debug", skip_all, fields(candidates = sigs.len()))]
    fn resolve_call(
        &mut self,
        call: &'cx ast::CallExpr<'cx>,
        symbol: SymbolID,
        sigs: &[&'cx Sig<'cx>],
    ) -> Option<&'cx Sig<'cx>> {
        let candidates = sigs
            .iter()
            .copied()
            .filter(|sig| sig.params.len() == call.args.len())
            .collect::<Vec<_>>();
        // a unique arity match gives its parameter types as expected types
        let arg_tys = call
            .args
            .iter()
            .enumerate()
            .map(|(idx, arg)| {
                let expected = match candidates.as_slice() {
                    [only] => Some(only.params[idx]),
                    _ => None,
                };
                self.check_expr_with_expected(arg, expected)
            })
            .collect::<Vec<_>>();
        if arg_tys.iter().any(|ty| ty.is_error()) {
            return None;
        }

        let applicable = candidates
            .iter()
            .copied()
            .filter(|sig| {
                arg_tys
                    .iter()
                    .zip(sig.params.iter())
                    .all(|(arg, param)| self.is_assignable(*arg, *param))
            })
            .collect::<Vec<_>>();

        match applicable.as_slice() {
            [] => {
                self.report_no_applicable_sig(call, symbol, sigs, &arg_tys);
                None
            }
            [only] => Some(*only),
            _ => {
                let most_specific = applicable
                    .iter()
                    .copied()
                    .filter(|sig| {
                        applicable.iter().all(|other| {
                            sig.decl.id == other.decl.id || self.is_more_specific(*sig, *other)
                        })
                    })
                    .collect::<Vec<_>>();
                if let [sig] = most_specific.as_slice() {
                    tracing::debug!(
                        name = self.symbol_name(symbol),
                        "picked the most specific overload"
                    );
                    Some(*sig)
                } else {
                    let error = errors::AmbiguousCall {
                        span: call.span,
                        name: self.symbol_name(symbol),
                        related: self.defined_here(&applicable),
                    };
                    self.push_error(error);
                    None
                }
            }
        }
    }

    fn is_more_specific(&mut self, a: &'cx Sig<'cx>, b: &'cx Sig<'cx>) -> bool {
        a.params
            .iter()
            .zip(b.params.iter())
            .all(|(pa, pb)| self.is_subtype(*pa, *pb))
    }

    fn report_no_applicable_sig(
        &mut self,
        call: &'cx ast::CallExpr<'cx>,
        symbol: SymbolID,
        sigs: &[&'cx Sig<'cx>],
        arg_tys: &[&'cx ty::Ty<'cx>],
    ) {
        let [sig] = sigs else {
            let error = errors::NoOverloadMatchesThisCall {
                span: call.span,
                name: self.symbol_name(symbol),
                related: self.defined_here(sigs),
            };
            self.push_error(error);
            return;
        };
        if sig.params.len() != call.args.len() {
            let error = errors::ExpectedXArgsButGotY {
                span: call.span,
                x: sig.params.len(),
                y: call.args.len(),
            };
            self.push_error(error);
            return;
        }
        for (idx, (&arg_ty, &param_ty)) in arg_tys.iter().zip(sig.params.iter()).enumerate() {
            if !self.is_assignable(arg_ty, param_ty) {
                let error = errors::ArgumentOfTyIsNotAssignableToParameterOfTy {
                    span: call.args[idx].span(),
                    arg_ty: self.print_ty(arg_ty),
                    param_ty: self.print_ty(param_ty),
                };
                self.push_error(error);
                return;
            }
        }
    }
}
