use monolit_atom::Atom;
use monolit_span::Span;

use super::{Ident, NodeID, Pat, Stmts, Ty};

pub type Exprs<'cx> = &'cx [&'cx Expr<'cx>];

#[derive(Debug, Clone, Copy)]
pub struct Expr<'cx> {
    pub kind: ExprKind<'cx>,
}

#[derive(Debug, Clone, Copy)]
pub enum ExprKind<'cx> {
    Lit(&'cx Lit),
    Ident(&'cx Ident),
    Paren(&'cx ParenExpr<'cx>),
    Unary(&'cx UnaryExpr<'cx>),
    Bin(&'cx BinExpr<'cx>),
    Call(&'cx CallExpr<'cx>),
    Block(&'cx BlockExpr<'cx>),
    Assign(&'cx AssignExpr<'cx>),
    Match(&'cx MatchExpr<'cx>),
    Inhabitant(&'cx InhabitantExpr<'cx>),
    Opaque(&'cx OpaqueExpr),
}

impl<'cx> Expr<'cx> {
    pub fn span(&self) -> Span {
        match self.kind {
            ExprKind::Lit(n) => n.span,
            ExprKind::Ident(n) => n.span,
            ExprKind::Paren(n) => n.span,
            ExprKind::Unary(n) => n.span,
            ExprKind::Bin(n) => n.span,
            ExprKind::Call(n) => n.span,
            ExprKind::Block(n) => n.span,
            ExprKind::Assign(n) => n.span,
            ExprKind::Match(n) => n.span,
            ExprKind::Inhabitant(n) => n.span,
            ExprKind::Opaque(n) => n.span,
        }
    }

    pub fn id(&self) -> NodeID {
        match self.kind {
            ExprKind::Lit(n) => n.id,
            ExprKind::Ident(n) => n.id,
            ExprKind::Paren(n) => n.id,
            ExprKind::Unary(n) => n.id,
            ExprKind::Bin(n) => n.id,
            ExprKind::Call(n) => n.id,
            ExprKind::Block(n) => n.id,
            ExprKind::Assign(n) => n.id,
            ExprKind::Match(n) => n.id,
            ExprKind::Inhabitant(n) => n.id,
            ExprKind::Opaque(n) => n.id,
        }
    }

    pub fn as_ident(&self) -> Option<&'cx Ident> {
        if let ExprKind::Ident(ident) = self.kind {
            Some(ident)
        } else {
            None
        }
    }

    pub fn as_lit(&self) -> Option<&'cx Lit> {
        if let ExprKind::Lit(lit) = self.kind {
            Some(lit)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LitKind {
    Int(i32),
    Long(i64),
    Double(f64),
    Bool(bool),
    String(Atom),
    Char(char),
    Unit,
    Null,
}

#[derive(Debug, Clone, Copy)]
pub struct Lit {
    pub id: NodeID,
    pub span: Span,
    pub kind: LitKind,
}

#[derive(Debug, Clone, Copy)]
pub struct ParenExpr<'cx> {
    pub id: NodeID,
    pub span: Span,
    pub expr: &'cx Expr<'cx>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Minus,
    Not,
}

impl UnaryOp {
    pub fn as_str(self) -> &'static str {
        match self {
            UnaryOp::Minus => "-",
            UnaryOp::Not => "!",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct UnaryExpr<'cx> {
    pub id: NodeID,
    pub span: Span,
    pub op: UnaryOp,
    pub expr: &'cx Expr<'cx>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    EqEq,
    NEq,
    Less,
    LessEq,
    Great,
    GreatEq,
    LogicalAnd,
    LogicalOr,
}

impl BinOp {
    pub fn as_str(self) -> &'static str {
        use BinOp::*;
        match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Rem => "%",
            EqEq => "==",
            NEq => "!=",
            Less => "<",
            LessEq => "<=",
            Great => ">",
            GreatEq => ">=",
            LogicalAnd => "&&",
            LogicalOr => "||",
        }
    }

    pub fn is_arithmetic(self) -> bool {
        use BinOp::*;
        matches!(self, Add | Sub | Mul | Div | Rem)
    }

    pub fn is_comparison(self) -> bool {
        use BinOp::*;
        matches!(self, Less | LessEq | Great | GreatEq)
    }

    pub fn is_equality(self) -> bool {
        matches!(self, BinOp::EqEq | BinOp::NEq)
    }

    pub fn is_logical(self) -> bool {
        matches!(self, BinOp::LogicalAnd | BinOp::LogicalOr)
    }
}

impl std::fmt::Display for BinOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct BinExpr<'cx> {
    pub id: NodeID,
    pub span: Span,
    pub left: &'cx Expr<'cx>,
    pub op: BinOp,
    pub right: &'cx Expr<'cx>,
}

#[derive(Debug, Clone, Copy)]
pub struct CallExpr<'cx> {
    pub id: NodeID,
    pub span: Span,
    pub callee: &'cx Ident,
    pub args: Exprs<'cx>,
}

#[derive(Debug, Clone, Copy)]
pub struct BlockExpr<'cx> {
    pub id: NodeID,
    pub span: Span,
    pub stmts: Stmts<'cx>,
    pub tail: Option<&'cx Expr<'cx>>,
}

#[derive(Debug, Clone, Copy)]
pub struct AssignExpr<'cx> {
    pub id: NodeID,
    pub span: Span,
    pub left: &'cx Ident,
    pub right: &'cx Expr<'cx>,
}

#[derive(Debug, Clone, Copy)]
pub struct MatchExpr<'cx> {
    pub id: NodeID,
    pub span: Span,
    pub scrutinee: &'cx Expr<'cx>,
    pub arms: &'cx [&'cx MatchArm<'cx>],
}

#[derive(Debug, Clone, Copy)]
pub struct MatchArm<'cx> {
    pub id: NodeID,
    pub span: Span,
    pub pat: &'cx Pat<'cx>,
    pub body: &'cx Expr<'cx>,
}

/// `inhabitant[T]`: the unique value of a singleton type.
#[derive(Debug, Clone, Copy)]
pub struct InhabitantExpr<'cx> {
    pub id: NodeID,
    pub span: Span,
    pub ty: &'cx Ty<'cx>,
}

/// A host-language construct this core knows nothing about.
#[derive(Debug, Clone, Copy)]
pub struct OpaqueExpr {
    pub id: NodeID,
    pub span: Span,
    pub desc: Atom,
}
