mod f64_represent;
mod flags;
mod lit;

use monolit_atom::Atom;

pub use self::f64_represent::F64Represent;
pub use self::flags::TypeFlags;
pub use self::lit::{LitID, LitValue};
use crate::PathRef;

monolit_utils::index!(TyID);

pub type Tys<'cx> = &'cx [&'cx Ty<'cx>];

#[derive(Debug, Clone, Copy)]
pub struct Ty<'cx> {
    pub id: TyID,
    pub kind: TyKind<'cx>,
    pub flags: TypeFlags,
}

impl PartialEq for Ty<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Ty<'_> {}

impl<'cx> Ty<'cx> {
    pub fn new(id: TyID, kind: TyKind<'cx>, flags: TypeFlags) -> Self {
        Self { id, kind, flags }
    }

    pub fn is_singleton(&self) -> bool {
        self.flags.intersects(TypeFlags::SINGLETON)
    }

    pub fn is_error(&self) -> bool {
        self.flags.intersects(TypeFlags::ERROR)
    }

    pub fn is_any(&self) -> bool {
        self.flags.intersects(TypeFlags::ANY)
    }

    pub fn is_nothing(&self) -> bool {
        self.flags.intersects(TypeFlags::NOTHING)
    }

    pub fn as_singleton(&self) -> Option<SingletonTy<'cx>> {
        if let TyKind::Singleton(s) = self.kind {
            Some(s)
        } else {
            None
        }
    }

    pub fn as_lit_singleton(&self) -> Option<&'cx LitSingleton<'cx>> {
        if let TyKind::Singleton(SingletonTy::Lit(lit)) = self.kind {
            Some(lit)
        } else {
            None
        }
    }

    pub fn as_path_singleton(&self) -> Option<PathRef> {
        if let TyKind::Singleton(SingletonTy::Path(path)) = self.kind {
            Some(path)
        } else {
            None
        }
    }

    pub fn as_intrinsic(&self) -> Option<&'cx IntrinsicTy> {
        if let TyKind::Intrinsic(i) = self.kind {
            Some(i)
        } else {
            None
        }
    }

    pub fn intrinsic_kind(&self) -> Option<IntrinsicTyKind> {
        self.as_intrinsic().map(|i| i.kind)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum TyKind<'cx> {
    Intrinsic(&'cx IntrinsicTy),
    Singleton(SingletonTy<'cx>),
}

/// A type whose only value is one literal or the value of one stable binding.
#[derive(Debug, Clone, Copy)]
pub enum SingletonTy<'cx> {
    Lit(&'cx LitSingleton<'cx>),
    Path(PathRef),
}

#[derive(Debug, Clone, Copy)]
pub struct LitSingleton<'cx> {
    pub id: LitID,
    pub value: &'cx LitValue,
}

#[derive(Debug, Clone, Copy)]
pub struct IntrinsicTy {
    pub name: Atom,
    pub kind: IntrinsicTyKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntrinsicTyKind {
    Any,
    Nothing,
    Int,
    Long,
    Double,
    Boolean,
    String,
    Char,
    Unit,
    Null,
    Error,
}

impl IntrinsicTyKind {
    pub fn flags(self) -> TypeFlags {
        use IntrinsicTyKind::*;
        match self {
            Any => TypeFlags::ANY,
            Nothing => TypeFlags::NOTHING,
            Int => TypeFlags::INT,
            Long => TypeFlags::LONG,
            Double => TypeFlags::DOUBLE,
            Boolean => TypeFlags::BOOLEAN,
            String => TypeFlags::STRING,
            Char => TypeFlags::CHAR,
            Unit => TypeFlags::UNIT,
            Null => TypeFlags::NULL,
            Error => TypeFlags::ERROR,
        }
    }

    /// Numeric promotion order; `Char` takes part in arithmetic as an `Int`.
    pub fn numeric_rank(self) -> Option<u8> {
        use IntrinsicTyKind::*;
        match self {
            Char | Int => Some(0),
            Long => Some(1),
            Double => Some(2),
            _ => None,
        }
    }
}
