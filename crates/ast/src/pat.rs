use monolit_span::Span;

use super::{Lit, NodeID, Ty};

#[derive(Debug, Clone, Copy)]
pub struct Pat<'cx> {
    pub kind: PatKind<'cx>,
}

#[derive(Debug, Clone, Copy)]
pub enum PatKind<'cx> {
    /// `case _ =>`
    Wildcard(&'cx WildcardPat),
    /// `case 7 =>`
    Lit(&'cx LitPat<'cx>),
    /// `case _: T =>`
    Typed(&'cx TypedPat<'cx>),
}

impl Pat<'_> {
    pub fn id(&self) -> NodeID {
        match self.kind {
            PatKind::Wildcard(n) => n.id,
            PatKind::Lit(n) => n.id,
            PatKind::Typed(n) => n.id,
        }
    }

    pub fn span(&self) -> Span {
        match self.kind {
            PatKind::Wildcard(n) => n.span,
            PatKind::Lit(n) => n.span,
            PatKind::Typed(n) => n.span,
        }
    }

    pub fn is_wildcard(&self) -> bool {
        matches!(self.kind, PatKind::Wildcard(_))
    }
}

#[derive(Debug, Clone, Copy)]
pub struct WildcardPat {
    pub id: NodeID,
    pub span: Span,
}

#[derive(Debug, Clone, Copy)]
pub struct LitPat<'cx> {
    pub id: NodeID,
    pub span: Span,
    pub lit: &'cx Lit,
}

#[derive(Debug, Clone, Copy)]
pub struct TypedPat<'cx> {
    pub id: NodeID,
    pub span: Span,
    pub ty: &'cx Ty<'cx>,
}
