use monolit_atom::{Atom, prefilled_atom_map};

pub fn is_intrinsic_ty_name(name: Atom) -> bool {
    INTRINSIC_TYS.iter().any(|(_, atom)| *atom == name)
}

pub fn is_builtin_value_name(name: Atom) -> bool {
    BUILTIN_VALUES.iter().any(|(_, atom)| *atom == name)
}

prefilled_atom_map!(
    init_atom,
    {
        INTRINSIC_TYS: {
            IDENT_ANY:          ["Any", 0],
            IDENT_NOTHING:      ["Nothing", 1],
            IDENT_INT:          ["Int", 2],
            IDENT_LONG:         ["Long", 3],
            IDENT_DOUBLE:       ["Double", 4],
            IDENT_BOOLEAN:      ["Boolean", 5],
            IDENT_STRING:       ["String", 6],
            IDENT_CHAR:         ["Char", 7],
            IDENT_UNIT:         ["Unit", 8],
            IDENT_NULL:         ["Null", 9],
        },
        BUILTIN_VALUES: {
            IDENT_PRINTLN:      ["println", 10],
        },
        SPECIAL: {
            IDENT_EMPTY:        ["", 11],
        },
    }
);

#[test]
fn prefilled_atoms_are_in_order() {
    let atoms = init_atom();
    assert_eq!(atoms.get(IDENT_ANY), IDENT_ANY_STR);
    assert_eq!(atoms.get(IDENT_NULL), "Null");
    assert_eq!(atoms.get(IDENT_PRINTLN), "println");
    assert!(is_intrinsic_ty_name(IDENT_UNIT));
    assert!(!is_intrinsic_ty_name(IDENT_PRINTLN));
    assert!(is_builtin_value_name(IDENT_PRINTLN));
}
