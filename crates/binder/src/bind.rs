use monolit_ast as ast;
use monolit_ast::keyword;
use monolit_atom::Atom;
use monolit_span::Span;

use super::errors;
use super::{BinderState, ScopeID, Symbol, SymbolFlags, SymbolID, SymbolName};

impl<'cx> BinderState<'_> {
    pub(super) fn declare_builtins(&mut self) {
        debug_assert_eq!(self.scope_id, ScopeID::root());
        for (_, name) in keyword::BUILTIN_VALUES {
            let flags = SymbolFlags::FUNCTION | SymbolFlags::BUILTIN | SymbolFlags::IMPURE;
            let symbol = self.symbols.insert(Symbol::new(*name, flags, None));
            self.res
                .insert((ScopeID::root(), SymbolName::Value(*name)), symbol);
        }
    }

    pub(super) fn bind_program(&mut self, root: &'cx ast::Program<'cx>) {
        self.push_scope();
        self.bind_stmts(root.stmts);
        self.pop_scope();
    }

    /// Marks every `var` of this unit that no assignment targets.
    pub(super) fn freeze_unassigned_vars(&mut self) {
        let vars = self
            .symbols
            .iter()
            .filter(|(id, s)| s.flags.contains(SymbolFlags::VAR) && !self.assigned.contains(id))
            .map(|(id, _)| id)
            .collect::<Vec<_>>();
        for id in vars {
            self.symbols.get_mut(id).flags.insert(SymbolFlags::FROZEN);
        }
    }

    fn push_scope(&mut self) {
        let id = ScopeID::new(self.scope_parent.len() as u32);
        self.scope_parent.push(Some(self.scope_id));
        self.scope_id = id;
    }

    fn pop_scope(&mut self) {
        if let Some(parent) = self.scope_parent[self.scope_id.as_usize()] {
            self.scope_id = parent;
        }
    }

    fn create_final_res(&mut self, id: ast::NodeID, symbol: SymbolID) {
        let prev = self.final_res.insert(id, symbol);
        assert!(prev.is_none());
    }

    fn duplicate(&mut self, name: &ast::Ident, original: SymbolID) {
        let original_span = self
            .name_spans
            .get(&original)
            .copied()
            .unwrap_or_default();
        let error = errors::DuplicateIdentifier {
            span: name.span,
            name: self.atoms.get(name.name).to_string(),
            original_span,
        };
        self.push_error(error);
    }

    fn declare(
        &mut self,
        decl: ast::NodeID,
        name: &'cx ast::Ident,
        symbol_name: SymbolName,
        flags: SymbolFlags,
    ) -> SymbolID {
        let key = (self.scope_id, symbol_name);
        if let Some(&prev) = self.res.get(&key) {
            let prev_flags = self.symbols.get(prev).flags;
            if prev_flags.contains(SymbolFlags::FUNCTION) && flags.contains(SymbolFlags::FUNCTION) {
                self.symbols.get_mut(prev).decls.push(decl);
                self.create_final_res(decl, prev);
                return prev;
            }
            self.duplicate(name, prev);
            let symbol = self
                .symbols
                .insert(Symbol::new(name.name, flags, Some(decl)));
            self.create_final_res(decl, symbol);
            return symbol;
        }
        let symbol = self
            .symbols
            .insert(Symbol::new(name.name, flags, Some(decl)));
        self.res.insert(key, symbol);
        self.name_spans.insert(symbol, name.span);
        self.create_final_res(decl, symbol);
        symbol
    }

    fn hoist_stmts(&mut self, stmts: ast::Stmts<'cx>) {
        for stmt in stmts {
            use ast::StmtKind::*;
            match stmt.kind {
                Val(decl) => {
                    let mut flags = if decl.is_var() {
                        SymbolFlags::VAR
                    } else {
                        SymbolFlags::VAL
                    };
                    if decl.is_final() {
                        flags |= SymbolFlags::FINAL;
                    }
                    self.declare(decl.id, decl.name, SymbolName::Value(decl.name.name), flags);
                }
                TypeAlias(decl) => {
                    self.declare(
                        decl.id,
                        decl.name,
                        SymbolName::Ty(decl.name.name),
                        SymbolFlags::TYPE_ALIAS,
                    );
                }
                Fn(decl) => {
                    self.declare(
                        decl.id,
                        decl.name,
                        SymbolName::Value(decl.name.name),
                        SymbolFlags::FUNCTION,
                    );
                }
                Expr(_) => {}
            }
        }
    }

    fn bind_stmts(&mut self, stmts: ast::Stmts<'cx>) {
        self.hoist_stmts(stmts);
        for stmt in stmts {
            self.bind_stmt(stmt);
        }
    }

    fn bind_stmt(&mut self, stmt: &'cx ast::Stmt<'cx>) {
        use ast::StmtKind::*;
        match stmt.kind {
            Val(decl) => {
                if let Some(ty) = decl.ty {
                    self.bind_ty(ty);
                }
                self.bind_expr(decl.init);
            }
            TypeAlias(decl) => self.bind_ty(decl.ty),
            Fn(decl) => self.bind_fn_decl(decl),
            Expr(stmt) => self.bind_expr(stmt.expr),
        }
    }

    fn bind_fn_decl(&mut self, f: &'cx ast::FnDecl<'cx>) {
        self.push_scope();
        for param in f.params {
            self.declare(
                param.id,
                param.name,
                SymbolName::Value(param.name.name),
                SymbolFlags::PARAM,
            );
        }
        for param in f.params {
            self.bind_ty(param.ty);
        }
        if let Some(ret_ty) = f.ret_ty {
            self.bind_ty(ret_ty);
        }
        self.bind_expr(f.body);
        self.pop_scope();
    }

    fn bind_expr(&mut self, expr: &'cx ast::Expr<'cx>) {
        use ast::ExprKind::*;
        match expr.kind {
            Lit(_) | Opaque(_) => {}
            Ident(ident) => {
                self.resolve_value_by_ident(ident);
            }
            Paren(p) => self.bind_expr(p.expr),
            Unary(u) => self.bind_expr(u.expr),
            Bin(b) => {
                self.bind_expr(b.left);
                self.bind_expr(b.right);
            }
            Call(call) => {
                self.resolve_value_by_ident(call.callee);
                for arg in call.args {
                    self.bind_expr(arg);
                }
            }
            Block(block) => {
                self.push_scope();
                self.bind_stmts(block.stmts);
                if let Some(tail) = block.tail {
                    self.bind_expr(tail);
                }
                self.pop_scope();
            }
            Assign(assign) => {
                let symbol = self.resolve_value_by_ident(assign.left);
                if symbol != Symbol::ERR {
                    self.assigned.insert(symbol);
                }
                self.bind_expr(assign.right);
            }
            Match(m) => {
                self.bind_expr(m.scrutinee);
                for arm in m.arms {
                    if let ast::PatKind::Typed(pat) = arm.pat.kind {
                        self.bind_ty(pat.ty);
                    }
                    self.bind_expr(arm.body);
                }
            }
            Inhabitant(n) => self.bind_ty(n.ty),
        }
    }

    fn bind_ty(&mut self, ty: &'cx ast::Ty<'cx>) {
        use ast::TyKind::*;
        match ty.kind {
            Refer(refer) => self.resolve_ty_by_ident(refer.name),
            Singleton(singleton) => self.bind_expr(singleton.operand),
            Lit(_) => {}
            Paren(paren) => self.bind_ty(paren.ty),
        }
    }

    fn lookup(&self, name: SymbolName) -> Option<SymbolID> {
        let mut scope_id = self.scope_id;
        loop {
            if let Some(id) = self.res.get(&(scope_id, name)).copied() {
                return Some(id);
            }
            scope_id = self.scope_parent[scope_id.as_usize()]?;
        }
    }

    fn cannot_find_name(&mut self, span: Span, name: Atom) {
        let error = errors::CannotFindName {
            span,
            name: self.atoms.get(name).to_string(),
        };
        self.push_error(error);
    }

    fn resolve_value_by_ident(&mut self, ident: &'cx ast::Ident) -> SymbolID {
        let res = match self.lookup(SymbolName::Value(ident.name)) {
            Some(symbol) => symbol,
            None => {
                self.cannot_find_name(ident.span, ident.name);
                Symbol::ERR
            }
        };
        self.create_final_res(ident.id, res);
        res
    }

    /// Type namespace first, then intrinsic types, then values.
    fn resolve_ty_by_ident(&mut self, ident: &'cx ast::Ident) {
        let ty = self.lookup(SymbolName::Ty(ident.name));
        let value = self.lookup(SymbolName::Value(ident.name));
        let is_intrinsic = keyword::is_intrinsic_ty_name(ident.name);
        if value.is_some() && (ty.is_some() || is_intrinsic) {
            tracing::debug!(
                name = self.atoms.get(ident.name),
                span = %ident.span,
                "identifier names both a type and a value, resolved as a type"
            );
        }
        let res = match (ty, value) {
            (Some(ty), _) => ty,
            (None, _) if is_intrinsic => return,
            (None, Some(value)) => value,
            (None, None) => {
                self.cannot_find_name(ident.span, ident.name);
                Symbol::ERR
            }
        };
        self.create_final_res(ident.id, res);
    }
}
