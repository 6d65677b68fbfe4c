use monolit_span::Span;

use super::{Expr, Ident, NodeID, Ty};

pub type Stmts<'cx> = &'cx [&'cx Stmt<'cx>];

#[derive(Debug, Clone, Copy)]
pub struct Stmt<'cx> {
    pub kind: StmtKind<'cx>,
}

#[derive(Debug, Clone, Copy)]
pub enum StmtKind<'cx> {
    Val(&'cx ValDecl<'cx>),
    TypeAlias(&'cx TypeAliasDecl<'cx>),
    Fn(&'cx FnDecl<'cx>),
    Expr(&'cx ExprStmt<'cx>),
}

impl Stmt<'_> {
    pub fn id(&self) -> NodeID {
        match self.kind {
            StmtKind::Val(n) => n.id,
            StmtKind::TypeAlias(n) => n.id,
            StmtKind::Fn(n) => n.id,
            StmtKind::Expr(n) => n.id,
        }
    }

    pub fn span(&self) -> Span {
        match self.kind {
            StmtKind::Val(n) => n.span,
            StmtKind::TypeAlias(n) => n.span,
            StmtKind::Fn(n) => n.span,
            StmtKind::Expr(n) => n.span,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValKind {
    Val,
    Var,
}

bitflags::bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Modifiers: u8 {
        const FINAL = 1 << 0;
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ValDecl<'cx> {
    pub id: NodeID,
    pub span: Span,
    pub kind: ValKind,
    pub modifiers: Modifiers,
    pub name: &'cx Ident,
    pub ty: Option<&'cx Ty<'cx>>,
    pub init: &'cx Expr<'cx>,
}

impl ValDecl<'_> {
    pub fn is_final(&self) -> bool {
        self.modifiers.contains(Modifiers::FINAL)
    }

    pub fn is_var(&self) -> bool {
        self.kind == ValKind::Var
    }
}

#[derive(Debug, Clone, Copy)]
pub struct TypeAliasDecl<'cx> {
    pub id: NodeID,
    pub span: Span,
    pub name: &'cx Ident,
    pub ty: &'cx Ty<'cx>,
}

#[derive(Debug, Clone, Copy)]
pub struct FnDecl<'cx> {
    pub id: NodeID,
    pub span: Span,
    pub name: &'cx Ident,
    pub params: &'cx [&'cx ParamDecl<'cx>],
    pub ret_ty: Option<&'cx Ty<'cx>>,
    pub body: &'cx Expr<'cx>,
}

#[derive(Debug, Clone, Copy)]
pub struct ParamDecl<'cx> {
    pub id: NodeID,
    pub span: Span,
    pub name: &'cx Ident,
    pub ty: &'cx Ty<'cx>,
}

#[derive(Debug, Clone, Copy)]
pub struct ExprStmt<'cx> {
    pub id: NodeID,
    pub span: Span,
    pub expr: &'cx Expr<'cx>,
}
