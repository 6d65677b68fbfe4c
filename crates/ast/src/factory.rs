use std::cell::{Cell, RefCell};

use bumpalo::Bump;
use monolit_atom::{Atom, AtomIntern};
use monolit_span::{ModuleID, Span};

use super::*;

/// Everything the binder and checker need from one compilation unit.
pub struct ParsedProgram<'cx> {
    pub root: &'cx Program<'cx>,
    pub nodes: Nodes<'cx>,
    pub atoms: AtomIntern,
}

/// Builds the tree a parser would produce for `source`.
///
/// Leaves (identifiers and literals) are anchored to the next occurrence of
/// their token text in `source`, so callers build nodes in source order to get
/// exact spans. Compound nodes cover their children. A token that cannot be
/// found gets an empty span at the current position.
pub struct AstBuilder<'cx, 'src> {
    arena: &'cx Bump,
    module: ModuleID,
    source: &'src str,
    pos: Cell<u32>,
    nodes: RefCell<Nodes<'cx>>,
    atoms: RefCell<AtomIntern>,
}

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

impl<'cx, 'src> AstBuilder<'cx, 'src> {
    pub fn new(arena: &'cx Bump, module: ModuleID, source: &'src str, atoms: AtomIntern) -> Self {
        Self {
            arena,
            module,
            source,
            pos: Cell::new(0),
            nodes: RefCell::new(Nodes::default()),
            atoms: RefCell::new(atoms),
        }
    }

    #[inline(always)]
    fn alloc<T>(&self, t: T) -> &'cx T {
        self.arena.alloc(t)
    }

    fn next_node_id(&self) -> NodeID {
        NodeID::new(self.nodes.borrow().len() as u32)
    }

    fn insert(&self, id: NodeID, node: Node<'cx>) {
        self.nodes.borrow_mut().insert(id, node);
    }

    pub fn atom(&self, s: &str) -> Atom {
        self.atoms.borrow_mut().atom(s)
    }

    fn empty_span(&self) -> Span {
        let pos = self.pos.get();
        Span::new(pos, pos, self.module)
    }

    fn token_span(&self, token: &str) -> Span {
        let start = self.pos.get() as usize;
        let Some(rest) = self.source.get(start..) else {
            return self.empty_span();
        };
        let mut from = 0;
        while let Some(offset) = rest[from..].find(token) {
            let lo = start + from + offset;
            let hi = lo + token.len();
            let before = self.source[..lo].chars().next_back();
            let after = self.source[hi..].chars().next();
            let starts_word = token.chars().next().is_some_and(is_ident_char);
            let ends_word = token.chars().next_back().is_some_and(is_ident_char);
            let clean_before = !starts_word || !before.is_some_and(is_ident_char);
            let clean_after = !ends_word || !after.is_some_and(is_ident_char);
            if clean_before && clean_after {
                self.pos.set(hi as u32);
                return Span::new(lo as u32, hi as u32, self.module);
            }
            from += offset + token.len().max(1);
        }
        self.empty_span()
    }

    fn cover(&self, spans: impl IntoIterator<Item = Span>) -> Span {
        spans
            .into_iter()
            .reduce(|a, b| a.to(b))
            .unwrap_or_else(|| self.empty_span())
    }

    fn alloc_slice<T: Copy>(&self, items: &[T]) -> &'cx [T] {
        self.arena.alloc_slice_copy(items)
    }

    fn expr(&self, kind: ExprKind<'cx>) -> &'cx Expr<'cx> {
        self.alloc(Expr { kind })
    }

    // ---- names and literals ----

    pub fn ident(&self, name: &str) -> &'cx Ident {
        let id = self.next_node_id();
        let span = self.token_span(name);
        let name = self.atom(name);
        let n = self.alloc(Ident { id, span, name });
        self.insert(id, Node::Ident(n));
        n
    }

    pub fn lit(&self, kind: LitKind) -> &'cx Lit {
        let text = match kind {
            LitKind::Int(v) => v.to_string(),
            LitKind::Long(v) => format!("{v}L"),
            LitKind::Double(v) => format!("{v:?}"),
            LitKind::Bool(v) => v.to_string(),
            LitKind::String(s) => format!("{:?}", self.atoms.borrow().get(s)),
            LitKind::Char(c) => format!("{c:?}"),
            LitKind::Unit => "()".to_string(),
            LitKind::Null => "null".to_string(),
        };
        let id = self.next_node_id();
        let span = self.token_span(&text);
        let n = self.alloc(Lit { id, span, kind });
        self.insert(id, Node::Lit(n));
        n
    }

    pub fn str_lit(&self, s: &str) -> &'cx Lit {
        let atom = self.atom(s);
        self.lit(LitKind::String(atom))
    }

    pub fn lit_expr(&self, lit: &'cx Lit) -> &'cx Expr<'cx> {
        self.expr(ExprKind::Lit(lit))
    }

    pub fn int(&self, v: i32) -> &'cx Expr<'cx> {
        self.lit_expr(self.lit(LitKind::Int(v)))
    }

    pub fn long(&self, v: i64) -> &'cx Expr<'cx> {
        self.lit_expr(self.lit(LitKind::Long(v)))
    }

    pub fn double(&self, v: f64) -> &'cx Expr<'cx> {
        self.lit_expr(self.lit(LitKind::Double(v)))
    }

    pub fn bool(&self, v: bool) -> &'cx Expr<'cx> {
        self.lit_expr(self.lit(LitKind::Bool(v)))
    }

    pub fn char(&self, v: char) -> &'cx Expr<'cx> {
        self.lit_expr(self.lit(LitKind::Char(v)))
    }

    pub fn str(&self, s: &str) -> &'cx Expr<'cx> {
        self.lit_expr(self.str_lit(s))
    }

    pub fn unit(&self) -> &'cx Expr<'cx> {
        self.lit_expr(self.lit(LitKind::Unit))
    }

    pub fn null(&self) -> &'cx Expr<'cx> {
        self.lit_expr(self.lit(LitKind::Null))
    }

    /// An identifier read.
    pub fn name(&self, name: &str) -> &'cx Expr<'cx> {
        self.expr(ExprKind::Ident(self.ident(name)))
    }

    // ---- expressions ----

    pub fn paren(&self, expr: &'cx Expr<'cx>) -> &'cx Expr<'cx> {
        let id = self.next_node_id();
        let span = expr.span();
        let n = self.alloc(ParenExpr { id, span, expr });
        self.insert(id, Node::ParenExpr(n));
        self.expr(ExprKind::Paren(n))
    }

    pub fn unary(&self, op: UnaryOp, expr: &'cx Expr<'cx>) -> &'cx Expr<'cx> {
        let id = self.next_node_id();
        let span = expr.span();
        let n = self.alloc(UnaryExpr { id, span, op, expr });
        self.insert(id, Node::UnaryExpr(n));
        self.expr(ExprKind::Unary(n))
    }

    pub fn bin(&self, left: &'cx Expr<'cx>, op: BinOp, right: &'cx Expr<'cx>) -> &'cx Expr<'cx> {
        let id = self.next_node_id();
        let span = left.span().to(right.span());
        let n = self.alloc(BinExpr {
            id,
            span,
            left,
            op,
            right,
        });
        self.insert(id, Node::BinExpr(n));
        self.expr(ExprKind::Bin(n))
    }

    pub fn call(&self, callee: &'cx Ident, args: &[&'cx Expr<'cx>]) -> &'cx Expr<'cx> {
        let id = self.next_node_id();
        let span = self.cover(std::iter::once(callee.span).chain(args.iter().map(|a| a.span())));
        let args = self.alloc_slice(args);
        let n = self.alloc(CallExpr {
            id,
            span,
            callee,
            args,
        });
        self.insert(id, Node::CallExpr(n));
        self.expr(ExprKind::Call(n))
    }

    pub fn block(&self, stmts: &[&'cx Stmt<'cx>], tail: Option<&'cx Expr<'cx>>) -> &'cx Expr<'cx> {
        let id = self.next_node_id();
        let span = self.cover(stmts.iter().map(|s| s.span()).chain(tail.map(|t| t.span())));
        let stmts = self.alloc_slice(stmts);
        let n = self.alloc(BlockExpr {
            id,
            span,
            stmts,
            tail,
        });
        self.insert(id, Node::BlockExpr(n));
        self.expr(ExprKind::Block(n))
    }

    pub fn assign(&self, left: &'cx Ident, right: &'cx Expr<'cx>) -> &'cx Expr<'cx> {
        let id = self.next_node_id();
        let span = left.span.to(right.span());
        let n = self.alloc(AssignExpr {
            id,
            span,
            left,
            right,
        });
        self.insert(id, Node::AssignExpr(n));
        self.expr(ExprKind::Assign(n))
    }

    pub fn match_expr(
        &self,
        scrutinee: &'cx Expr<'cx>,
        arms: &[&'cx MatchArm<'cx>],
    ) -> &'cx Expr<'cx> {
        let id = self.next_node_id();
        let span = self.cover(std::iter::once(scrutinee.span()).chain(arms.iter().map(|a| a.span)));
        let arms = self.alloc_slice(arms);
        let n = self.alloc(MatchExpr {
            id,
            span,
            scrutinee,
            arms,
        });
        self.insert(id, Node::MatchExpr(n));
        self.expr(ExprKind::Match(n))
    }

    pub fn arm(&self, pat: &'cx Pat<'cx>, body: &'cx Expr<'cx>) -> &'cx MatchArm<'cx> {
        let id = self.next_node_id();
        let span = pat.span().to(body.span());
        let n = self.alloc(MatchArm {
            id,
            span,
            pat,
            body,
        });
        self.insert(id, Node::MatchArm(n));
        n
    }

    pub fn inhabitant(&self, ty: &'cx Ty<'cx>) -> &'cx Expr<'cx> {
        let id = self.next_node_id();
        let span = ty.span();
        let n = self.alloc(InhabitantExpr { id, span, ty });
        self.insert(id, Node::InhabitantExpr(n));
        self.expr(ExprKind::Inhabitant(n))
    }

    /// A host construct that is not modelled, e.g. a `while` loop or a field write.
    pub fn opaque(&self, desc: &str) -> &'cx Expr<'cx> {
        let id = self.next_node_id();
        let span = self.token_span(desc);
        let desc = self.atom(desc);
        let n = self.alloc(OpaqueExpr { id, span, desc });
        self.insert(id, Node::OpaqueExpr(n));
        self.expr(ExprKind::Opaque(n))
    }

    // ---- patterns ----

    pub fn wildcard_pat(&self) -> &'cx Pat<'cx> {
        let id = self.next_node_id();
        let span = self.token_span("_");
        let n = self.alloc(WildcardPat { id, span });
        self.insert(id, Node::WildcardPat(n));
        self.alloc(Pat {
            kind: PatKind::Wildcard(n),
        })
    }

    pub fn lit_pat(&self, lit: &'cx Lit) -> &'cx Pat<'cx> {
        let id = self.next_node_id();
        let n = self.alloc(LitPat {
            id,
            span: lit.span,
            lit,
        });
        self.insert(id, Node::LitPat(n));
        self.alloc(Pat {
            kind: PatKind::Lit(n),
        })
    }

    pub fn typed_pat(&self, ty: &'cx Ty<'cx>) -> &'cx Pat<'cx> {
        let id = self.next_node_id();
        let n = self.alloc(TypedPat {
            id,
            span: ty.span(),
            ty,
        });
        self.insert(id, Node::TypedPat(n));
        self.alloc(Pat {
            kind: PatKind::Typed(n),
        })
    }

    // ---- types ----

    pub fn ty_ref(&self, name: &'cx Ident) -> &'cx Ty<'cx> {
        let id = self.next_node_id();
        let n = self.alloc(ReferTy {
            id,
            span: name.span,
            name,
        });
        self.insert(id, Node::ReferTy(n));
        self.alloc(Ty {
            kind: TyKind::Refer(n),
        })
    }

    pub fn ty_name(&self, name: &str) -> &'cx Ty<'cx> {
        self.ty_ref(self.ident(name))
    }

    /// `operand.type`
    pub fn ty_singleton(&self, operand: &'cx Expr<'cx>) -> &'cx Ty<'cx> {
        let id = self.next_node_id();
        let n = self.alloc(SingletonTy {
            id,
            span: operand.span(),
            operand,
        });
        self.insert(id, Node::SingletonTy(n));
        self.alloc(Ty {
            kind: TyKind::Singleton(n),
        })
    }

    /// `name.type`
    pub fn ty_path(&self, name: &str) -> &'cx Ty<'cx> {
        self.ty_singleton(self.name(name))
    }

    pub fn ty_lit(&self, lit: &'cx Lit, dot_type: bool) -> &'cx Ty<'cx> {
        let id = self.next_node_id();
        let n = self.alloc(LitTy {
            id,
            span: lit.span,
            lit,
            dot_type,
        });
        self.insert(id, Node::LitTy(n));
        self.alloc(Ty {
            kind: TyKind::Lit(n),
        })
    }

    pub fn ty_paren(&self, ty: &'cx Ty<'cx>) -> &'cx Ty<'cx> {
        let id = self.next_node_id();
        let n = self.alloc(ParenTy {
            id,
            span: ty.span(),
            ty,
        });
        self.insert(id, Node::ParenTy(n));
        self.alloc(Ty {
            kind: TyKind::Paren(n),
        })
    }

    // ---- statements ----

    fn val_decl(
        &self,
        kind: ValKind,
        modifiers: Modifiers,
        name: &'cx Ident,
        ty: Option<&'cx Ty<'cx>>,
        init: &'cx Expr<'cx>,
    ) -> &'cx Stmt<'cx> {
        let id = self.next_node_id();
        let span = name.span.to(init.span());
        let n = self.alloc(ValDecl {
            id,
            span,
            kind,
            modifiers,
            name,
            ty,
            init,
        });
        self.insert(id, Node::ValDecl(n));
        self.alloc(Stmt {
            kind: StmtKind::Val(n),
        })
    }

    pub fn val(
        &self,
        name: &'cx Ident,
        ty: Option<&'cx Ty<'cx>>,
        init: &'cx Expr<'cx>,
    ) -> &'cx Stmt<'cx> {
        self.val_decl(ValKind::Val, Modifiers::empty(), name, ty, init)
    }

    pub fn final_val(
        &self,
        name: &'cx Ident,
        ty: Option<&'cx Ty<'cx>>,
        init: &'cx Expr<'cx>,
    ) -> &'cx Stmt<'cx> {
        self.val_decl(ValKind::Val, Modifiers::FINAL, name, ty, init)
    }

    pub fn var(
        &self,
        name: &'cx Ident,
        ty: Option<&'cx Ty<'cx>>,
        init: &'cx Expr<'cx>,
    ) -> &'cx Stmt<'cx> {
        self.val_decl(ValKind::Var, Modifiers::empty(), name, ty, init)
    }

    pub fn type_alias(&self, name: &'cx Ident, ty: &'cx Ty<'cx>) -> &'cx Stmt<'cx> {
        let id = self.next_node_id();
        let span = name.span.to(ty.span());
        let n = self.alloc(TypeAliasDecl { id, span, name, ty });
        self.insert(id, Node::TypeAliasDecl(n));
        self.alloc(Stmt {
            kind: StmtKind::TypeAlias(n),
        })
    }

    pub fn param(&self, name: &'cx Ident, ty: &'cx Ty<'cx>) -> &'cx ParamDecl<'cx> {
        let id = self.next_node_id();
        let span = name.span.to(ty.span());
        let n = self.alloc(ParamDecl { id, span, name, ty });
        self.insert(id, Node::ParamDecl(n));
        n
    }

    pub fn fn_decl(
        &self,
        name: &'cx Ident,
        params: &[&'cx ParamDecl<'cx>],
        ret_ty: Option<&'cx Ty<'cx>>,
        body: &'cx Expr<'cx>,
    ) -> &'cx Stmt<'cx> {
        let id = self.next_node_id();
        let span = name.span.to(body.span());
        let params = self.alloc_slice(params);
        let n = self.alloc(FnDecl {
            id,
            span,
            name,
            params,
            ret_ty,
            body,
        });
        self.insert(id, Node::FnDecl(n));
        self.alloc(Stmt {
            kind: StmtKind::Fn(n),
        })
    }

    pub fn expr_stmt(&self, expr: &'cx Expr<'cx>) -> &'cx Stmt<'cx> {
        let id = self.next_node_id();
        let n = self.alloc(ExprStmt {
            id,
            span: expr.span(),
            expr,
        });
        self.insert(id, Node::ExprStmt(n));
        self.alloc(Stmt {
            kind: StmtKind::Expr(n),
        })
    }

    pub fn finish(self, stmts: &[&'cx Stmt<'cx>]) -> ParsedProgram<'cx> {
        let id = self.next_node_id();
        let span = Span::new(0, self.source.len() as u32, self.module);
        let stmts = self.alloc_slice(stmts);
        let root = self.alloc(Program { id, span, stmts });
        self.insert(id, Node::Program(root));
        ParsedProgram {
            root,
            nodes: self.nodes.into_inner(),
            atoms: self.atoms.into_inner(),
        }
    }
}
