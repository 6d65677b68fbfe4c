use monolit_ast as ast;
use monolit_atom::{Atom, AtomIntern};

use super::{F64Represent, IntrinsicTyKind};

monolit_utils::index!(LitID);

/// A compile-time literal. Equal iff same kind and same bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LitValue {
    Int(i32),
    Long(i64),
    Double(F64Represent),
    Boolean(bool),
    String(Atom),
    Char(char),
    Unit,
    Null,
}

impl LitValue {
    pub fn kind(&self) -> IntrinsicTyKind {
        match self {
            LitValue::Int(_) => IntrinsicTyKind::Int,
            LitValue::Long(_) => IntrinsicTyKind::Long,
            LitValue::Double(_) => IntrinsicTyKind::Double,
            LitValue::Boolean(_) => IntrinsicTyKind::Boolean,
            LitValue::String(_) => IntrinsicTyKind::String,
            LitValue::Char(_) => IntrinsicTyKind::Char,
            LitValue::Unit => IntrinsicTyKind::Unit,
            LitValue::Null => IntrinsicTyKind::Null,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        if let LitValue::Boolean(b) = self {
            Some(*b)
        } else {
            None
        }
    }

    pub fn is_zero(&self) -> bool {
        match self {
            LitValue::Int(v) => *v == 0,
            LitValue::Long(v) => *v == 0,
            LitValue::Double(v) => v.val() == 0.0,
            LitValue::Char(c) => *c == '\0',
            _ => false,
        }
    }

    /// The text string concatenation produces.
    pub fn to_display(&self, atoms: &AtomIntern) -> String {
        match self {
            LitValue::Int(v) => v.to_string(),
            LitValue::Long(v) => v.to_string(),
            LitValue::Double(v) => format!("{:?}", v.val()),
            LitValue::Boolean(v) => v.to_string(),
            LitValue::String(s) => atoms.get(*s).to_string(),
            LitValue::Char(c) => c.to_string(),
            LitValue::Unit => "()".to_string(),
            LitValue::Null => "null".to_string(),
        }
    }

    /// The text used when the value is printed as a type.
    pub fn to_source(&self, atoms: &AtomIntern) -> String {
        match self {
            LitValue::Long(v) => format!("{v}L"),
            LitValue::String(s) => format!("{:?}", atoms.get(*s)),
            LitValue::Char(c) => format!("{c:?}"),
            _ => self.to_display(atoms),
        }
    }
}

impl From<ast::LitKind> for LitValue {
    fn from(kind: ast::LitKind) -> Self {
        match kind {
            ast::LitKind::Int(v) => LitValue::Int(v),
            ast::LitKind::Long(v) => LitValue::Long(v),
            ast::LitKind::Double(v) => LitValue::Double(F64Represent::new(v)),
            ast::LitKind::Bool(v) => LitValue::Boolean(v),
            ast::LitKind::String(s) => LitValue::String(s),
            ast::LitKind::Char(c) => LitValue::Char(c),
            ast::LitKind::Unit => LitValue::Unit,
            ast::LitKind::Null => LitValue::Null,
        }
    }
}
