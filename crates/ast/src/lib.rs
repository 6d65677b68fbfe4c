mod expr;
mod factory;
pub mod keyword;
mod node;
mod pat;
mod stmt;
mod ty;

pub use expr::*;
pub use factory::{AstBuilder, ParsedProgram};
pub use node::{Node, NodeID, Nodes};
pub use pat::*;
pub use stmt::*;
pub use ty::*;

use monolit_atom::Atom;
use monolit_span::Span;

#[derive(Debug, Clone, Copy)]
pub struct Program<'cx> {
    pub id: NodeID,
    pub span: Span,
    pub stmts: Stmts<'cx>,
}

#[derive(Debug, Clone, Copy)]
pub struct Ident {
    pub id: NodeID,
    pub span: Span,
    pub name: Atom,
}
