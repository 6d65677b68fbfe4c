use std::borrow::Cow;

use monolit_utils::FxIndexSet;

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub struct Atom(u32);

impl Atom {
    #[inline]
    pub const fn new(id: u32) -> Self {
        Atom(id)
    }

    #[inline]
    pub const fn as_u32(&self) -> u32 {
        self.0
    }
}

impl nohash_hasher::IsEnabled for Atom {}

/// Owns every identifier and string literal text of one compilation unit.
#[derive(Debug, Default)]
pub struct AtomIntern {
    set: FxIndexSet<Cow<'static, str>>,
}

impl AtomIntern {
    pub fn prefill(list: &[&'static str]) -> Self {
        let set = list.iter().map(|s| Cow::Borrowed(*s)).collect();
        Self { set }
    }

    pub fn get(&self, atom: Atom) -> &str {
        &self.set[atom.0 as usize]
    }

    pub fn lookup(&self, s: &str) -> Option<Atom> {
        self.set.get_index_of(s).map(|idx| Atom(idx as u32))
    }

    pub fn atom(&mut self, s: &str) -> Atom {
        if let Some(atom) = self.lookup(s) {
            return atom;
        }
        let (idx, prev_is_not_exist) = self.set.insert_full(Cow::Owned(s.to_string()));
        debug_assert!(prev_is_not_exist);
        Atom(idx as u32)
    }

    pub fn len(&self) -> usize {
        self.set.len()
    }

    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }
}

#[macro_export]
macro_rules! prefilled_atom_map {
    (
    $prefilled_atom_fn_name: ident,
    {
        $(
            $owner: ident: {
                $( $name:ident : [$lit:literal, $idx: literal]),* $(,)?
            },
        )+
    }) => {
        $(
            prefilled_atom_map!($owner, $(($name, [$lit, $idx])),*);
        )+

        const PREFILLED: &[&'static str] = &[
            $(
                $( $lit, )*
            )+
        ];
        pub fn $prefilled_atom_fn_name() -> monolit_atom::AtomIntern {
            monolit_atom::AtomIntern::prefill(PREFILLED)
        }

    };
    ( $owner: ident, $(($name:ident, [$lit:literal, $idx: literal])),* $(,)? ) => {
        paste::paste! {
            $(pub const [<$name _STR>]: &str = $lit;)*
            $(pub const $name: Atom = Atom::new($idx);)*
        }
        pub const $owner: &[(&str, Atom)] = &[$(($lit, $name),)*];
    }
}

#[test]
fn atom_is_stable_for_equal_text() {
    let mut atoms = AtomIntern::prefill(&["Int", "String"]);
    assert_eq!(atoms.lookup("String"), Some(Atom::new(1)));
    let a = atoms.atom("x");
    let b = atoms.atom("x");
    assert_eq!(a, b);
    assert_eq!(atoms.get(a), "x");
    assert_eq!(atoms.atom("Int"), Atom::new(0));
    assert_eq!(atoms.len(), 3);
}
