use monolit_ast as ast;
use monolit_ast::keyword;
use monolit_binder::{Symbol, SymbolFlags, SymbolID};
use monolit_span::Span;

use super::TyChecker;
use super::cycle_check::ResolutionKey;
use super::errors;
use super::singleton::SingletonOperand;
use crate::path::resolve_path;
use crate::ty::{self, IntrinsicTyKind, LitValue};

impl<'cx> TyChecker<'cx> {
    /// Elaborates a type node. Each node is elaborated once; diagnostics are
    /// reported on the first visit only.
    pub fn get_ty_from_ty_node(&mut self, node: &'cx ast::Ty<'cx>) -> &'cx ty::Ty<'cx> {
        if let Some(ty) = self.get_node_links(node.id()).get_resolved_ty() {
            return ty;
        }
        let ty = match node.kind {
            ast::TyKind::Refer(refer) => self.get_ty_from_refer(refer),
            ast::TyKind::Singleton(singleton) => self.get_ty_from_singleton_node(singleton),
            ast::TyKind::Lit(lit) => self.get_ty_from_lit_node(lit),
            ast::TyKind::Paren(paren) => self.get_ty_from_ty_node(paren.ty),
        };
        let links = self.get_mut_node_links(node.id());
        if links.get_resolved_ty().is_none() {
            links.set_resolved_ty(ty);
        }
        ty
    }

    fn get_intrinsic_ty_by_name(&self, name: monolit_atom::Atom) -> Option<&'cx ty::Ty<'cx>> {
        let kind = match name {
            keyword::IDENT_ANY => IntrinsicTyKind::Any,
            keyword::IDENT_NOTHING => IntrinsicTyKind::Nothing,
            keyword::IDENT_INT => IntrinsicTyKind::Int,
            keyword::IDENT_LONG => IntrinsicTyKind::Long,
            keyword::IDENT_DOUBLE => IntrinsicTyKind::Double,
            keyword::IDENT_BOOLEAN => IntrinsicTyKind::Boolean,
            keyword::IDENT_STRING => IntrinsicTyKind::String,
            keyword::IDENT_CHAR => IntrinsicTyKind::Char,
            keyword::IDENT_UNIT => IntrinsicTyKind::Unit,
            keyword::IDENT_NULL => IntrinsicTyKind::Null,
            _ => return None,
        };
        Some(self.intrinsic_ty(kind))
    }

    fn get_ty_from_refer(&mut self, refer: &'cx ast::ReferTy<'cx>) -> &'cx ty::Ty<'cx> {
        let Some(symbol) = self.binder.res(refer.name.id) else {
            return self
                .get_intrinsic_ty_by_name(refer.name.name)
                .unwrap_or(self.error_ty);
        };
        if symbol == Symbol::ERR {
            return self.error_ty;
        }
        let flags = self.symbol(symbol).flags;
        if flags.contains(SymbolFlags::TYPE_ALIAS) {
            self.get_declared_ty_of_alias(symbol, refer.name.span)
        } else {
            let error = errors::ValueUsedAsType {
                span: refer.span,
                name: self.symbol_name(symbol),
            };
            self.push_error(error);
            self.error_ty
        }
    }

    pub(super) fn get_declared_ty_of_alias(
        &mut self,
        symbol: SymbolID,
        span: Span,
    ) -> &'cx ty::Ty<'cx> {
        if let Some(ty) = self.get_symbol_links(symbol).get_declared_ty() {
            return ty;
        }
        if !self.push_ty_resolution(ResolutionKey::DeclaredType(symbol)) {
            return self.error_ty;
        }
        let target = self
            .symbol(symbol)
            .decls
            .first()
            .and_then(|decl| self.nodes.get(*decl).as_type_alias_decl())
            .map(|decl| decl.ty);
        let mut ty = match target {
            Some(target) => self.get_ty_from_ty_node(target),
            None => self.error_ty,
        };
        if self.pop_ty_resolution().has_cycle() {
            let error = errors::TypeAliasCircularlyReferencesItself {
                span,
                name: self.symbol_name(symbol),
            };
            self.push_error(error);
            ty = self.error_ty;
        }
        let links = self.get_mut_symbol_links(symbol);
        if links.get_declared_ty().is_none() {
            links.set_declared_ty(ty);
        }
        ty
    }

    fn get_ty_from_singleton_node(
        &mut self,
        node: &'cx ast::SingletonTy<'cx>,
    ) -> &'cx ty::Ty<'cx> {
        match node.operand.kind {
            ast::ExprKind::Lit(lit) => self.make_singleton(SingletonOperand::Lit(lit.kind.into())),
            ast::ExprKind::Ident(ident) => self.get_path_singleton_ty(ident, node.span),
            _ => {
                let error = errors::UnsupportedSingletonOperand {
                    span: node.operand.span(),
                };
                self.push_error(error);
                self.error_ty
            }
        }
    }

    fn get_path_singleton_ty(&mut self, ident: &'cx ast::Ident, span: Span) -> &'cx ty::Ty<'cx> {
        let Some(symbol) = self.symbol_of(ident.id) else {
            return self.error_ty;
        };
        // `val x: x.type = ..` and `def f(p: p.type)` have no underlying type
        if self.is_resolving(ResolutionKey::Type(symbol)) {
            let error = errors::CircularInitializer {
                span,
                name: self.symbol_name(symbol),
            };
            self.push_error(error);
            return self.error_ty;
        }
        match resolve_path(&self.binder.symbols, &self.atoms, symbol, span) {
            Ok(path) => self.make_singleton(SingletonOperand::Path(path)),
            Err(error) => {
                self.push_error(error);
                self.error_ty
            }
        }
    }

    fn get_ty_from_lit_node(&mut self, node: &'cx ast::LitTy<'cx>) -> &'cx ty::Ty<'cx> {
        let value = LitValue::from(node.lit.kind);
        if !node.dot_type && !self.config.bare_literal_types() {
            let error = errors::LiteralTypeRequiresDotType {
                span: node.span,
                lit: value.to_source(&self.atoms),
            };
            self.push_error(error);
        }
        self.make_singleton(SingletonOperand::Lit(value))
    }
}
