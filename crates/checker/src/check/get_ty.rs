use monolit_ast as ast;
use monolit_binder::{Symbol, SymbolFlags, SymbolID};

use super::cycle_check::ResolutionKey;
use super::{Sig, TyChecker, errors};
use crate::ty;

impl<'cx> TyChecker<'cx> {
    /// Declared type of a value binding, computed on first use.
    pub fn get_type_of_symbol(&mut self, symbol: SymbolID) -> &'cx ty::Ty<'cx> {
        if symbol == Symbol::ERR {
            return self.error_ty;
        }
        if let Some(ty) = self.get_symbol_links(symbol).get_ty() {
            return ty;
        }
        let s = self.symbol(symbol);
        if !s.flags.intersects(SymbolFlags::VAL | SymbolFlags::VAR | SymbolFlags::PARAM) {
            return self.error_ty;
        }
        let Some(decl) = s.value_decl() else {
            return self.error_ty;
        };
        if !self.push_ty_resolution(ResolutionKey::Type(symbol)) {
            return self.error_ty;
        }
        let node = self.nodes.get(decl);
        let (mut ty, name_span) = if let Some(param) = node.as_param_decl() {
            (self.get_ty_from_ty_node(param.ty), param.name.span)
        } else if let Some(decl) = node.as_val_decl() {
            (self.get_ty_of_val_decl(decl), decl.name.span)
        } else {
            (self.error_ty, node.span())
        };
        if self.pop_ty_resolution().has_cycle() {
            let error = errors::CircularInitializer {
                span: name_span,
                name: self.symbol_name(symbol),
            };
            self.push_error(error);
            ty = self.error_ty;
        }
        let links = self.get_mut_symbol_links(symbol);
        if links.get_ty().is_none() {
            links.set_ty(ty);
        }
        ty
    }

    fn get_ty_of_val_decl(&mut self, decl: &'cx ast::ValDecl<'cx>) -> &'cx ty::Ty<'cx> {
        if let Some(ty) = decl.ty {
            return self.get_ty_from_ty_node(ty);
        }
        let init_ty = self.check_expr(decl.init);
        let keep_singleton = decl.is_final()
            && !decl.is_var()
            && self.config.infer_final_singleton()
            && init_ty.as_lit_singleton().is_some();
        if keep_singleton {
            init_ty
        } else {
            self.get_widened_literal_ty(init_ty)
        }
    }

    /// Signature of one overload. Parameter types come from their
    /// annotations; a missing result type is the widened type of the body.
    pub fn get_sig(&mut self, decl: &'cx ast::FnDecl<'cx>) -> &'cx Sig<'cx> {
        if let Some(sig) = self.get_node_links(decl.id).get_resolved_sig() {
            return sig;
        }
        let symbol = self.binder.res(decl.id).unwrap_or(Symbol::ERR);
        let params = decl
            .params
            .iter()
            .map(|param| match self.binder.res(param.id) {
                Some(symbol) => self.get_type_of_symbol(symbol),
                None => self.get_ty_from_ty_node(param.ty),
            })
            .collect::<Vec<_>>();
        let params = self.arena.alloc_slice_copy(&params);
        let ret = match decl.ret_ty {
            Some(ret_ty) => self.get_ty_from_ty_node(ret_ty),
            None => {
                if !self.push_ty_resolution(ResolutionKey::ReturnType(decl.id)) {
                    // recursive use while the body is still being inferred
                    return self.alloc(Sig {
                        decl,
                        symbol,
                        params,
                        ret: self.error_ty,
                    });
                }
                let body_ty = self.check_expr(decl.body);
                let ret = self.get_widened_literal_ty(body_ty);
                if self.pop_ty_resolution().has_cycle() {
                    let error = errors::RecursiveFnNeedsResultTy {
                        span: decl.name.span,
                        name: self.atoms.get(decl.name.name).to_string(),
                    };
                    self.push_error(error);
                    self.error_ty
                } else {
                    ret
                }
            }
        };
        let sig = self.alloc(Sig {
            decl,
            symbol,
            params,
            ret,
        });
        let links = self.get_mut_node_links(decl.id);
        if links.get_resolved_sig().is_none() {
            links.set_resolved_sig(sig);
        }
        sig
    }

    pub(super) fn get_sigs_of_symbol(&mut self, symbol: SymbolID) -> Vec<&'cx Sig<'cx>> {
        let decls = self
            .symbol(symbol)
            .decls
            .iter()
            .filter_map(|decl| self.nodes.get(*decl).as_fn_decl())
            .collect::<Vec<_>>();
        decls.into_iter().map(|decl| self.get_sig(decl)).collect()
    }
}
