use monolit_span::Span;

use super::{Expr, Ident, Lit, NodeID};

#[derive(Debug, Clone, Copy)]
pub struct Ty<'cx> {
    pub kind: TyKind<'cx>,
}

#[derive(Debug, Clone, Copy)]
pub enum TyKind<'cx> {
    /// `StableId`: a type alias, an intrinsic type, or a value used by mistake.
    Refer(&'cx ReferTy<'cx>),
    /// `Path '.' 'type'`; the operand is whatever the parser saw before `.type`.
    Singleton(&'cx SingletonTy<'cx>),
    /// `Literal ['.' type]`
    Lit(&'cx LitTy<'cx>),
    Paren(&'cx ParenTy<'cx>),
}

impl<'cx> Ty<'cx> {
    pub fn span(&self) -> Span {
        match self.kind {
            TyKind::Refer(n) => n.span,
            TyKind::Singleton(n) => n.span,
            TyKind::Lit(n) => n.span,
            TyKind::Paren(n) => n.span,
        }
    }

    pub fn id(&self) -> NodeID {
        match self.kind {
            TyKind::Refer(n) => n.id,
            TyKind::Singleton(n) => n.id,
            TyKind::Lit(n) => n.id,
            TyKind::Paren(n) => n.id,
        }
    }

    pub fn skip_ty_parens(&'cx self) -> &'cx Ty<'cx> {
        let mut ty = self;
        while let TyKind::Paren(p) = ty.kind {
            ty = p.ty;
        }
        ty
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ReferTy<'cx> {
    pub id: NodeID,
    pub span: Span,
    pub name: &'cx Ident,
}

#[derive(Debug, Clone, Copy)]
pub struct SingletonTy<'cx> {
    pub id: NodeID,
    pub span: Span,
    pub operand: &'cx Expr<'cx>,
}

#[derive(Debug, Clone, Copy)]
pub struct LitTy<'cx> {
    pub id: NodeID,
    pub span: Span,
    pub lit: &'cx Lit,
    /// Whether the source spelled `42.type` rather than a bare `42`.
    pub dot_type: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct ParenTy<'cx> {
    pub id: NodeID,
    pub span: Span,
    pub ty: &'cx Ty<'cx>,
}
