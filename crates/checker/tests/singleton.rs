#[macro_use]
mod utils;

use monolit_ast::{BinOp, LitKind, Stmt, StmtKind};
use monolit_checker::errors::SingletonError;
use monolit_checker::ty::LitValue;
use monolit_checker::{SingletonOperand, resolve_path};
use monolit_config::RawCompilerOptions;
use monolit_span::Span;

fn defaults() -> monolit_config::NormalizedCompilerOptions {
    RawCompilerOptions::default().normalize()
}

#[test]
fn equal_literals_intern_to_one_type() {
    check!("", defaults(), |_b| (Vec::<&Stmt>::new(), ()), |c, ()| {
        let a = c.make_singleton(SingletonOperand::Lit(LitValue::Int(42)));
        let b = c.make_singleton(SingletonOperand::Lit(LitValue::Int(42)));
        assert!(std::ptr::eq(a, b));
        let long = c.make_singleton(SingletonOperand::Lit(LitValue::Long(42)));
        assert!(!std::ptr::eq(a, long));
        let s1 = c.atoms.atom("monolit");
        let s2 = c.atoms.atom("monolit");
        let x = c.make_singleton(SingletonOperand::Lit(LitValue::String(s1)));
        let y = c.make_singleton(SingletonOperand::Lit(LitValue::String(s2)));
        assert_eq!(x.id, y.id);
    });
}

#[test]
fn singleton_is_a_strict_subtype_of_its_widening() {
    check!("", defaults(), |_b| (Vec::<&Stmt>::new(), ()), |c, ()| {
        for value in [
            LitValue::Int(42),
            LitValue::Boolean(true),
            LitValue::Char('m'),
            LitValue::Unit,
        ] {
            let s = c.make_singleton(SingletonOperand::Lit(value));
            let w = c.widen(s);
            assert!(!w.is_singleton());
            assert!(c.is_subtype(s, w));
            assert!(!c.is_subtype(w, s));
            let any = c.any_ty;
            assert!(c.is_subtype(s, any));
            let nothing = c.nothing_ty;
            assert!(c.is_subtype(nothing, s));
        }
        let int = c.int_ty;
        assert!(std::ptr::eq(c.widen(int), int));
    });
}

#[test]
fn literal_singletons_are_equal_by_value_and_kind() {
    check!("", defaults(), |_b| (Vec::<&Stmt>::new(), ()), |c, ()| {
        let a = c.make_singleton(SingletonOperand::Lit(LitValue::Int(42)));
        let b = c.make_singleton(SingletonOperand::Lit(LitValue::Int(42)));
        let other = c.make_singleton(SingletonOperand::Lit(LitValue::Int(43)));
        let text = c.atoms.atom("42");
        let string = c.make_singleton(SingletonOperand::Lit(LitValue::String(text)));
        assert!(c.types_equal(a, b));
        assert!(!c.types_equal(a, other));
        assert!(!c.types_equal(a, string));
        assert!(!c.is_subtype(a, other));
        let string_ty = c.string_ty;
        assert!(!c.is_subtype(a, string_ty));
        assert!(c.is_subtype(string, string_ty));
    });
}

#[test]
fn null_is_a_subtype_of_string_only() {
    check!("", defaults(), |_b| (Vec::<&Stmt>::new(), ()), |c, ()| {
        let null = c.make_singleton(SingletonOperand::Lit(LitValue::Null));
        let string = c.string_ty;
        let int = c.int_ty;
        assert!(c.is_subtype(null, string));
        assert!(!c.is_subtype(null, int));
        let null_ty = c.null_ty;
        assert!(!c.is_subtype(string, null_ty));
    });
}

#[test]
fn lub_climbs_to_the_common_intrinsic() {
    check!("", defaults(), |_b| (Vec::<&Stmt>::new(), ()), |c, ()| {
        let one = c.make_singleton(SingletonOperand::Lit(LitValue::Int(1)));
        let two = c.make_singleton(SingletonOperand::Lit(LitValue::Int(2)));
        let text = c.atoms.atom("x");
        let x = c.make_singleton(SingletonOperand::Lit(LitValue::String(text)));
        let lub = c.get_lub(one, two);
        assert_eq!(c.print_ty(lub), "Int");
        let same = c.get_lub(one, one);
        assert!(std::ptr::eq(same, one));
        let lub = c.get_lub(one, x);
        assert_eq!(c.print_ty(lub), "Any");
        let null = c.make_singleton(SingletonOperand::Lit(LitValue::Null));
        let lub = c.get_lub(x, null);
        assert_eq!(c.print_ty(lub), "String");
    });
}

#[test]
fn literal_inhabitant_is_the_literal() {
    check!("", defaults(), |_b| (Vec::<&Stmt>::new(), ()), |c, ()| {
        let ty = c.make_singleton(SingletonOperand::Lit(LitValue::Int(42)));
        let witness = c.resolve_inhabitant(ty, Span::default()).unwrap();
        assert_eq!(*witness.value, LitValue::Int(42));
        assert!(std::ptr::eq(witness.ty, ty));
        let unit = c.unit_ty;
        let witness = c.resolve_inhabitant(unit, Span::default()).unwrap();
        assert_eq!(*witness.value, LitValue::Unit);
        let int = c.int_ty;
        let err = c.resolve_inhabitant(int, Span::default()).unwrap_err();
        assert!(matches!(err, SingletonError::TyHasNoSingleInhabitant(_)));
        assert_eq!(err.to_string(), "Type 'Int' does not have a single inhabitant.");
    });
}

fn decl_symbol(c: &monolit_checker::TyChecker<'_>, stmt: &Stmt<'_>) -> monolit_binder::SymbolID {
    c.symbol_of(stmt.id()).unwrap()
}

#[test]
fn path_inhabitant_follows_constant_initializers() {
    let source = "final val x = 1; val y = x + 41; var z = 2; val w = z * 3";
    check!(
        source,
        defaults(),
        |b| {
            let x = b.final_val(b.ident("x"), None, b.int(1));
            let y = b.val(b.ident("y"), None, b.bin(b.name("x"), BinOp::Add, b.int(41)));
            let z = b.var(b.ident("z"), None, b.int(2));
            let w = b.val(b.ident("w"), None, b.bin(b.name("z"), BinOp::Mul, b.int(3)));
            (vec![x, y, z, w], (x, y, w))
        },
        |c, (x, y, w)| {
            assert!(c.diags.is_empty());
            let expected = [
                (x, LitValue::Int(1)),
                (y, LitValue::Int(42)),
                (w, LitValue::Int(6)),
            ];
            for (stmt, expected) in expected {
                let symbol = decl_symbol(&c, stmt);
                let symbols = &c.binder().symbols;
                let path = resolve_path(symbols, &c.atoms, symbol, stmt.span()).unwrap();
                let ty = c.make_singleton(SingletonOperand::Path(path));
                let witness = c.resolve_inhabitant(ty, stmt.span()).unwrap();
                assert_eq!(*witness.value, expected);
            }
        }
    );
}

#[test]
fn path_singleton_widens_to_its_declared_type() {
    let source = "val y: 5 = 5; val n: Int = 5";
    check!(
        source,
        defaults(),
        |b| {
            let five = b.lit(LitKind::Int(5));
            let y = b.val(b.ident("y"), Some(b.ty_lit(five, false)), b.int(5));
            let n = b.val(b.ident("n"), Some(b.ty_name("Int")), b.int(5));
            (vec![y, n], (y, n))
        },
        |c, (y, n)| {
            assert!(c.diags.is_empty());
            let symbols = &c.binder().symbols;
            let y_path = resolve_path(symbols, &c.atoms, decl_symbol(&c, y), y.span()).unwrap();
            let n_path = resolve_path(symbols, &c.atoms, decl_symbol(&c, n), n.span()).unwrap();
            let y_ty = c.make_singleton(SingletonOperand::Path(y_path));
            let n_ty = c.make_singleton(SingletonOperand::Path(n_path));
            let widened = c.widen(y_ty);
            assert_eq!(c.print_ty(widened), "5");
            let int = c.int_ty;
            assert!(c.is_subtype(y_ty, int));
            assert!(!c.types_equal(y_ty, n_ty));
            assert!(!c.is_subtype(y_ty, n_ty));
            let again = c.make_singleton(SingletonOperand::Path(y_path));
            assert!(c.types_equal(y_ty, again));
            assert_eq!(c.print_ty(y_ty), "y.type");
        }
    );
}

#[test]
fn reassigned_var_is_not_a_stable_path() {
    let source = "var v = 1; v = 2; def f(p: Int): Int = p";
    check!(
        source,
        defaults(),
        |b| {
            let v = b.var(b.ident("v"), None, b.int(1));
            let assign = b.expr_stmt(b.assign(b.ident("v"), b.int(2)));
            let f = b.fn_decl(
                b.ident("f"),
                &[b.param(b.ident("p"), b.ty_name("Int"))],
                Some(b.ty_name("Int")),
                b.name("p"),
            );
            (vec![v, assign, f], (v, f))
        },
        |c, (v, f)| {
            let symbols = &c.binder().symbols;
            let err = resolve_path(symbols, &c.atoms, decl_symbol(&c, v), v.span()).unwrap_err();
            assert_eq!(
                err.to_string(),
                "'v' is not a stable reference: it is a 'var' that is assigned."
            );
            let fn_symbol = decl_symbol(&c, f);
            let err = resolve_path(symbols, &c.atoms, fn_symbol, f.span()).unwrap_err();
            assert_eq!(
                err.to_string(),
                "'f' is not a stable reference: it does not name a value."
            );
            let StmtKind::Fn(decl) = f.kind else {
                unreachable!()
            };
            let param = c.symbol_of(decl.params[0].id).unwrap();
            let path = resolve_path(symbols, &c.atoms, param, f.span()).unwrap();
            let ty = c.make_singleton(SingletonOperand::Path(path));
            let err = c.resolve_inhabitant(ty, f.span()).unwrap_err();
            assert!(matches!(err, SingletonError::NotAConstant(_)));
        }
    );
}
