use monolit_ast as ast;
use monolit_binder::{SymbolFlags, SymbolID};
use monolit_span::Span;

use super::TyChecker;

#[derive(Debug, Clone, Copy)]
pub(super) enum Purity<'cx> {
    InProgress,
    /// Pure once every binding in `reads` has been initialized. These are the
    /// bindings declared outside the function that its body reads.
    Pure { reads: &'cx [SymbolID] },
    Impure,
}

/// Where an expression sits while its purity is judged.
struct PurityScope<'cx> {
    /// The innermost enclosing function, `None` at the top level.
    owner: Option<&'cx ast::FnDecl<'cx>>,
    /// `Some` while judging `owner`'s own body: reads of outer bindings are
    /// collected and checked later at each call site.
    outer_reads: Option<Vec<SymbolID>>,
}

impl<'cx> TyChecker<'cx> {
    /// Conservative: `false` means evaluating `expr` may have an observable
    /// effect (output, assignment, a runtime failure or non-termination).
    /// `expr` is taken to sit at the top level of the program.
    ///
    /// Calls are judged by the overload the checker resolved, so this must run
    /// after [`TyChecker::check_program`].
    pub fn is_pure(&mut self, expr: &'cx ast::Expr<'cx>) -> bool {
        self.is_pure_within(expr, None)
    }

    /// Like [`TyChecker::is_pure`] for an expression inside the body of
    /// `owner`. Reads of bindings declared outside `owner` are impure since
    /// `owner` may run before they are initialized.
    pub fn is_pure_within(
        &mut self,
        expr: &'cx ast::Expr<'cx>,
        owner: Option<&'cx ast::FnDecl<'cx>>,
    ) -> bool {
        let mut scope = PurityScope {
            owner,
            outer_reads: None,
        };
        self.expr_is_pure(expr, &mut scope)
    }

    fn expr_is_pure(&mut self, expr: &'cx ast::Expr<'cx>, scope: &mut PurityScope<'cx>) -> bool {
        use ast::ExprKind::*;
        match expr.kind {
            Lit(_) | Inhabitant(_) => true,
            Ident(ident) => match self.symbol_of(ident.id) {
                Some(symbol) => self.read_is_initialized(symbol, ident.span, scope),
                None => false,
            },
            Paren(paren) => self.expr_is_pure(paren.expr, scope),
            Unary(unary) => self.expr_is_pure(unary.expr, scope),
            Bin(bin) => {
                let divides = matches!(bin.op, ast::BinOp::Div | ast::BinOp::Rem);
                self.expr_is_pure(bin.left, scope)
                    && self.expr_is_pure(bin.right, scope)
                    && (!divides || self.is_non_zero_constant(bin.right))
            }
            Block(block) => {
                block.stmts.iter().all(|stmt| self.stmt_is_pure(stmt, scope))
                    && block.tail.is_none_or(|tail| self.expr_is_pure(tail, scope))
            }
            // without a wildcard a match can fail at runtime
            Match(m) => {
                m.arms.iter().any(|arm| arm.pat.is_wildcard())
                    && self.expr_is_pure(m.scrutinee, scope)
                    && m.arms.iter().all(|arm| self.expr_is_pure(arm.body, scope))
            }
            Call(call) => match self.resolved_sig(call.id) {
                Some(sig) => {
                    call.args.iter().all(|arg| self.expr_is_pure(arg, scope))
                        && self.is_fn_pure(sig.decl)
                        && self
                            .outer_reads_of(sig.decl)
                            .iter()
                            .all(|symbol| self.read_is_initialized(*symbol, call.span, scope))
                }
                None => false,
            },
            Assign(_) | Opaque(_) => false,
        }
    }

    fn stmt_is_pure(&mut self, stmt: &'cx ast::Stmt<'cx>, scope: &mut PurityScope<'cx>) -> bool {
        use ast::StmtKind::*;
        match stmt.kind {
            Val(decl) => self.expr_is_pure(decl.init, scope),
            TypeAlias(_) | Fn(_) => true,
            Expr(stmt) => self.expr_is_pure(stmt.expr, scope),
        }
    }

    fn is_non_zero_constant(&mut self, expr: &'cx ast::Expr<'cx>) -> bool {
        self.const_eval(expr, 0).is_some_and(|v| !v.is_zero())
    }

    /// Whether reading `symbol` at `at` finds it initialized. Declarations are
    /// hoisted, so a binding declared later in its scope is still unset.
    fn read_is_initialized(
        &mut self,
        symbol: SymbolID,
        at: Span,
        scope: &mut PurityScope<'cx>,
    ) -> bool {
        let s = self.symbol(symbol);
        if !s.flags.intersects(SymbolFlags::VAL | SymbolFlags::VAR | SymbolFlags::PARAM) {
            return false;
        }
        let Some(decl) = s.value_decl() else {
            return false;
        };
        let decl_span = self.nodes.get(decl).span();
        let is_local = scope
            .owner
            .is_none_or(|owner| owner.span.lo <= decl_span.lo && decl_span.hi <= owner.span.hi);
        if is_local {
            return decl_span.hi <= at.lo;
        }
        match &mut scope.outer_reads {
            Some(reads) => {
                if !reads.contains(&symbol) {
                    reads.push(symbol);
                }
                true
            }
            None => false,
        }
    }

    fn outer_reads_of(&self, decl: &'cx ast::FnDecl<'cx>) -> &'cx [SymbolID] {
        match self.purity.get(&decl.id).copied() {
            Some(Purity::Pure { reads }) => reads,
            _ => &[],
        }
    }

    /// Whether calling the overload `decl` is pure, provided the outer
    /// bindings its body reads are initialized by then. Recursion, direct or
    /// through other functions, is treated as impure.
    pub fn is_fn_pure(&mut self, decl: &'cx ast::FnDecl<'cx>) -> bool {
        match self.purity.get(&decl.id).copied() {
            Some(Purity::Pure { .. }) => return true,
            Some(Purity::Impure) | Some(Purity::InProgress) => return false,
            None => {}
        }
        self.purity.insert(decl.id, Purity::InProgress);
        let mut scope = PurityScope {
            owner: Some(decl),
            outer_reads: Some(Vec::new()),
        };
        let pure = self.expr_is_pure(decl.body, &mut scope);
        let res = if pure {
            let reads = scope.outer_reads.unwrap_or_default();
            Purity::Pure {
                reads: self.arena.alloc_slice_copy(&reads),
            }
        } else {
            Purity::Impure
        };
        self.purity.insert(decl.id, res);
        tracing::debug!(
            name = self.atoms.get(decl.name.name),
            pure,
            "computed purity of function"
        );
        pure
    }
}
