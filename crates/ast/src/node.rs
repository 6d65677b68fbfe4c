use monolit_span::Span;

monolit_utils::index!(NodeID);

macro_rules! define_nodes {
    ($lt: lifetime; $( $variant: ident($($ty: tt)+) ),* $(,)?) => {
        #[derive(Debug, Clone, Copy)]
        pub enum Node<$lt> {
            $($variant(&$lt $($ty)+),)*
        }

        impl<$lt> Node<$lt> {
            pub fn id(&self) -> NodeID {
                match self {
                    $(Node::$variant(n) => n.id,)*
                }
            }

            pub fn span(&self) -> Span {
                match self {
                    $(Node::$variant(n) => n.span,)*
                }
            }

            paste::paste! {
                $(
                    pub fn [<as_ $variant:snake>](&self) -> Option<&$lt $($ty)+> {
                        match *self {
                            Node::$variant(n) => Some(n),
                            _ => None,
                        }
                    }

                    pub fn [<is_ $variant:snake>](&self) -> bool {
                        matches!(self, Node::$variant(_))
                    }
                )*
            }
        }
    };
}

define_nodes!(
    'cx;
    Program(super::Program<'cx>),
    Ident(super::Ident),
    // stmt
    ValDecl(super::ValDecl<'cx>),
    TypeAliasDecl(super::TypeAliasDecl<'cx>),
    FnDecl(super::FnDecl<'cx>),
    ParamDecl(super::ParamDecl<'cx>),
    ExprStmt(super::ExprStmt<'cx>),
    // expr
    Lit(super::Lit),
    ParenExpr(super::ParenExpr<'cx>),
    UnaryExpr(super::UnaryExpr<'cx>),
    BinExpr(super::BinExpr<'cx>),
    CallExpr(super::CallExpr<'cx>),
    BlockExpr(super::BlockExpr<'cx>),
    AssignExpr(super::AssignExpr<'cx>),
    MatchExpr(super::MatchExpr<'cx>),
    MatchArm(super::MatchArm<'cx>),
    InhabitantExpr(super::InhabitantExpr<'cx>),
    OpaqueExpr(super::OpaqueExpr),
    // pat
    WildcardPat(super::WildcardPat),
    LitPat(super::LitPat<'cx>),
    TypedPat(super::TypedPat<'cx>),
    // ty
    ReferTy(super::ReferTy<'cx>),
    SingletonTy(super::SingletonTy<'cx>),
    LitTy(super::LitTy<'cx>),
    ParenTy(super::ParenTy<'cx>),
);

impl Node<'_> {
    pub fn is_decl(&self) -> bool {
        matches!(
            self,
            Node::ValDecl(_) | Node::TypeAliasDecl(_) | Node::FnDecl(_) | Node::ParamDecl(_)
        )
    }
}

/// Dense `NodeID -> Node` table filled by [`crate::AstBuilder`].
#[derive(Debug, Default)]
pub struct Nodes<'cx>(Vec<Node<'cx>>);

impl<'cx> Nodes<'cx> {
    pub(crate) fn insert(&mut self, id: NodeID, node: Node<'cx>) {
        assert_eq!(id.as_usize(), self.0.len());
        self.0.push(node);
    }

    pub fn get(&self, id: NodeID) -> Node<'cx> {
        self.0[id.as_usize()]
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
