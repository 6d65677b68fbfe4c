use monolit_ast::NodeID;
use monolit_atom::Atom;

monolit_utils::index!(SymbolID);

bitflags::bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct SymbolFlags: u16 {
        const VAL           = 1 << 0;
        const VAR           = 1 << 1;
        const FINAL         = 1 << 2;
        /// A `var` that is never assigned in its compilation unit.
        const FROZEN        = 1 << 3;
        const PARAM         = 1 << 4;
        const FUNCTION      = 1 << 5;
        const TYPE_ALIAS    = 1 << 6;
        const BUILTIN       = 1 << 7;
        /// Calling it has an observable effect.
        const IMPURE        = 1 << 8;

        const VALUE = Self::VAL.bits() | Self::VAR.bits() | Self::PARAM.bits() | Self::FUNCTION.bits();
        const TYPE = Self::TYPE_ALIAS.bits();
    }
}

impl SymbolFlags {
    pub fn is_value(&self) -> bool {
        self.intersects(SymbolFlags::VALUE)
    }

    pub fn is_type(&self) -> bool {
        self.intersects(SymbolFlags::TYPE)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolName {
    Value(Atom),
    Ty(Atom),
}

impl SymbolName {
    pub fn atom(&self) -> Atom {
        match self {
            SymbolName::Value(atom) | SymbolName::Ty(atom) => *atom,
        }
    }
}

#[derive(Debug)]
pub struct Symbol {
    pub name: Atom,
    pub flags: SymbolFlags,
    /// `ValDecl`, `ParamDecl`, `TypeAliasDecl` or every `FnDecl` overload.
    pub decls: Vec<NodeID>,
}

impl Symbol {
    pub const ERR: SymbolID = SymbolID::root();

    pub fn new(name: Atom, flags: SymbolFlags, decl: Option<NodeID>) -> Self {
        Self {
            name,
            flags,
            decls: decl.into_iter().collect(),
        }
    }

    pub fn value_decl(&self) -> Option<NodeID> {
        self.decls.first().copied()
    }

    /// `val`, `final val`, parameters and frozen `var`s.
    pub fn is_stable(&self) -> bool {
        if self.flags.intersects(SymbolFlags::VAL | SymbolFlags::PARAM) {
            true
        } else {
            self.flags.contains(SymbolFlags::VAR | SymbolFlags::FROZEN)
        }
    }
}

#[derive(Debug)]
pub struct Symbols(Vec<Symbol>);

impl Symbols {
    pub(crate) fn new(err_name: Atom) -> Self {
        let err = Symbol::new(err_name, SymbolFlags::empty(), None);
        Self(vec![err])
    }

    pub(crate) fn insert(&mut self, symbol: Symbol) -> SymbolID {
        let id = SymbolID::new(self.0.len() as u32);
        self.0.push(symbol);
        id
    }

    #[inline(always)]
    #[track_caller]
    pub fn get(&self, id: SymbolID) -> &Symbol {
        &self.0[id.as_usize()]
    }

    pub(crate) fn get_mut(&mut self, id: SymbolID) -> &mut Symbol {
        &mut self.0[id.as_usize()]
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (SymbolID, &Symbol)> {
        self.0
            .iter()
            .enumerate()
            .map(|(idx, s)| (SymbolID::new(idx as u32), s))
    }
}
