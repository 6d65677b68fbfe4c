#[macro_use]
mod utils;

use expect_test::expect;
use monolit_ast::{AstBuilder, BinOp, LitKind, Stmt, StmtKind};
use monolit_config::RawCompilerOptions;
use monolit_errors::miette::Severity;

use utils::messages;

fn defaults() -> monolit_config::NormalizedCompilerOptions {
    RawCompilerOptions::default().normalize()
}

#[test]
fn singleton_var_rejects_other_values() {
    let source = "var x: 3.type = 3; x = 42";
    check!(
        source,
        defaults(),
        |b| {
            let three = b.lit(LitKind::Int(3));
            let x = b.var(b.ident("x"), Some(b.ty_lit(three, true)), b.int(3));
            let assign = b.expr_stmt(b.assign(b.ident("x"), b.int(42)));
            (vec![x, assign], ())
        },
        |c, ()| {
            expect![[r#"
                Type '42' is not assignable to type '3'."#]]
            .assert_eq(&messages(&c.diags).join("\n"));
        }
    );
}

fn build_finals<'cx>(b: &AstBuilder<'cx, '_>) -> Vec<&'cx Stmt<'cx>> {
    let x = b.final_val(b.ident("x"), None, b.bin(b.int(1), BinOp::Add, b.int(1)));
    let y = b.val(b.ident("y"), None, b.int(1));
    let z = b.final_val(b.ident("z"), None, b.bin(b.name("x"), BinOp::Mul, b.int(3)));
    vec![x, y, z]
}

#[test]
fn final_val_keeps_its_folded_literal_type() {
    let source = "final val x = 1 + 1; val y = 1; final val z = x * 3";
    check!(source, defaults(), |b| (build_finals(&b), ()), |c, ()| {
        assert!(c.diags.is_empty());
        let tys = c
            .root()
            .stmts
            .iter()
            .map(|stmt| {
                let symbol = c.symbol_of(stmt.id()).unwrap();
                let ty = c.get_type_of_symbol(symbol);
                c.print_ty(ty)
            })
            .collect::<Vec<_>>();
        assert_eq!(tys, ["2", "Int", "6"]);
    });

    let options = RawCompilerOptions::default()
        .with_infer_final_singleton(false)
        .normalize();
    check!(source, options, |b| (build_finals(&b), ()), |c, ()| {
        let x = c.symbol_of(c.root().stmts[0].id()).unwrap();
        let ty = c.get_type_of_symbol(x);
        assert_eq!(c.print_ty(ty), "Int");
    });
}

#[test]
fn type_namespace_is_preferred_over_values() {
    let source = "type T = Int; final val T = 1; val a: T = 2; val b: T.type = T";
    check!(
        source,
        defaults(),
        |b| {
            let alias = b.type_alias(b.ident("T"), b.ty_name("Int"));
            let value = b.final_val(b.ident("T"), None, b.int(1));
            let a_ty = b.ty_name("T");
            let a = b.val(b.ident("a"), Some(a_ty), b.int(2));
            let b_ty = b.ty_path("T");
            let inhabitant = b.inhabitant(b.ty_path("T"));
            let v = b.val(b.ident("b"), Some(b_ty), b.name("T"));
            let w = b.expr_stmt(inhabitant);
            (vec![alias, value, a, v, w], (a_ty, b_ty, inhabitant))
        },
        |c, (a_ty, b_ty, inhabitant)| {
            assert!(c.diags.is_empty(), "{:?}", messages(&c.diags));
            let a = c.node_ty(a_ty.id()).unwrap();
            assert_eq!(c.print_ty(a), "Int");
            let b = c.node_ty(b_ty.id()).unwrap();
            assert_eq!(c.print_ty(b), "T.type");
            let widened = c.widen(b);
            assert_eq!(c.print_ty(widened), "1");
            let witness = c.inhabitant_of(inhabitant.id()).unwrap();
            assert_eq!(*witness.value, monolit_checker::ty::LitValue::Int(1));
        }
    );
}

#[test]
fn value_in_type_position_suggests_dot_type() {
    let source = "val k = 1; val m: k = 1";
    check!(
        source,
        defaults(),
        |b| {
            let k = b.val(b.ident("k"), None, b.int(1));
            let m = b.val(b.ident("m"), Some(b.ty_name("k")), b.int(1));
            (vec![k, m], ())
        },
        |c, ()| {
            assert_eq!(
                messages(&c.diags),
                ["'k' refers to a value, but is being used as a type here."]
            );
        }
    );
}

#[test]
fn stability_of_var_paths_depends_on_assignments() {
    let source = "var v = 1; v = 2; val w: v.type = v; var f = 3; val g: f.type = f";
    check!(
        source,
        defaults(),
        |b| {
            let v = b.var(b.ident("v"), None, b.int(1));
            let assign = b.expr_stmt(b.assign(b.ident("v"), b.int(2)));
            let w = b.val(b.ident("w"), Some(b.ty_path("v")), b.name("v"));
            let f = b.var(b.ident("f"), None, b.int(3));
            let g = b.val(b.ident("g"), Some(b.ty_path("f")), b.name("f"));
            (vec![v, assign, w, f, g], ())
        },
        |c, ()| {
            assert_eq!(
                messages(&c.diags),
                ["'v' is not a stable reference: it is a 'var' that is assigned."]
            );
        }
    );
}

#[test]
fn compound_singleton_operands_are_rejected() {
    let source = "val z: (1 + 1).type = 2";
    check!(
        source,
        defaults(),
        |b| {
            let operand = b.paren(b.bin(b.int(1), BinOp::Add, b.int(1)));
            let z = b.val(b.ident("z"), Some(b.ty_singleton(operand)), b.int(2));
            (vec![z], ())
        },
        |c, ()| {
            assert_eq!(
                messages(&c.diags),
                ["Only a literal or a stable identifier can be followed by '.type'."]
            );
        }
    );
}

fn build_bare_literal<'cx>(b: &AstBuilder<'cx, '_>) -> Vec<&'cx Stmt<'cx>> {
    let lit = b.lit(LitKind::Int(42));
    vec![b.val(b.ident("q"), Some(b.ty_lit(lit, false)), b.int(42))]
}

#[test]
fn bare_literal_types_follow_the_option() {
    let source = "val q: 42 = 42";
    check!(source, defaults(), |b| (build_bare_literal(&b), ()), |c, ()| {
        assert!(c.diags.is_empty());
    });
    let strict = RawCompilerOptions::default().with_strict(true).normalize();
    check!(source, strict, |b| (build_bare_literal(&b), ()), |c, ()| {
        assert_eq!(
            messages(&c.diags),
            ["A literal type must be written as '42.type'."]
        );
    });
}

#[test]
fn inhabitant_of_a_parameter_is_not_a_constant() {
    let source = "def f(p: Int): Int = inhabitant[p.type]";
    check!(
        source,
        defaults(),
        |b| {
            let body = b.inhabitant(b.ty_path("p"));
            let f = b.fn_decl(
                b.ident("f"),
                &[b.param(b.ident("p"), b.ty_name("Int"))],
                Some(b.ty_name("Int")),
                body,
            );
            (vec![f], ())
        },
        |c, ()| {
            assert_eq!(messages(&c.diags), ["'p' is not a compile-time constant."]);
        }
    );
}

#[test]
fn overload_with_literal_parameter_is_more_specific() {
    let source = r#"def f(x: 1.type): String = "one"; def f(x: Int): String = "int"; f(1); f(2)"#;
    check!(
        source,
        defaults(),
        |b| {
            let one = b.lit(LitKind::Int(1));
            let f1 = b.fn_decl(
                b.ident("f"),
                &[b.param(b.ident("x"), b.ty_lit(one, true))],
                Some(b.ty_name("String")),
                b.str("one"),
            );
            let f2 = b.fn_decl(
                b.ident("f"),
                &[b.param(b.ident("x"), b.ty_name("Int"))],
                Some(b.ty_name("String")),
                b.str("int"),
            );
            let call1 = b.call(b.ident("f"), &[b.int(1)]);
            let call2 = b.call(b.ident("f"), &[b.int(2)]);
            let stmts = vec![f1, f2, b.expr_stmt(call1), b.expr_stmt(call2)];
            (stmts, (f1, f2, call1, call2))
        },
        |c, (f1, f2, call1, call2)| {
            assert!(c.diags.is_empty(), "{:?}", messages(&c.diags));
            assert_eq!(c.resolved_sig(call1.id()).unwrap().decl.id, f1.id());
            assert_eq!(c.resolved_sig(call2.id()).unwrap().decl.id, f2.id());
        }
    );
}

#[test]
fn overload_failures_are_reported() {
    let source = concat!(
        "def g(x: Int): Int = x; def g(y: Int): Int = y; g(1); ",
        r#"def h(s: String): Int = 0; h(1, 2); h(3); g("a")"#
    );
    check!(
        source,
        defaults(),
        |b| {
            let param = |name: &str, ty: &str| b.param(b.ident(name), b.ty_name(ty));
            let int = || Some(b.ty_name("Int"));
            let g1 = b.fn_decl(b.ident("g"), &[param("x", "Int")], int(), b.name("x"));
            let g2 = b.fn_decl(b.ident("g"), &[param("y", "Int")], int(), b.name("y"));
            let ambiguous = b.expr_stmt(b.call(b.ident("g"), &[b.int(1)]));
            let h = b.fn_decl(b.ident("h"), &[param("s", "String")], int(), b.int(0));
            let arity = b.expr_stmt(b.call(b.ident("h"), &[b.int(1), b.int(2)]));
            let mismatch = b.expr_stmt(b.call(b.ident("h"), &[b.int(3)]));
            let none = b.expr_stmt(b.call(b.ident("g"), &[b.str("a")]));
            (vec![g1, g2, ambiguous, h, arity, mismatch, none], ())
        },
        |c, ()| {
            expect![[r#"
                Ambiguous call to 'g': no overload is more specific than the others.
                Expected 1 arguments, but got 2.
                Argument of type '3' is not assignable to parameter of type 'String'.
                No overload of 'g' matches this call."#]]
            .assert_eq(&messages(&c.diags).join("\n"));
        }
    );
}

#[test]
fn match_arms_are_checked_against_the_scrutinee() {
    let source = r#"val s: String = "a"; val r = s match { case 1 => 1 case _ => 2 case "b" => 3 }"#;
    check!(
        source,
        defaults(),
        |b| {
            let s = b.val(b.ident("s"), Some(b.ty_name("String")), b.str("a"));
            let arms = [
                b.arm(b.lit_pat(b.lit(LitKind::Int(1))), b.int(1)),
                b.arm(b.wildcard_pat(), b.int(2)),
                b.arm(b.lit_pat(b.str_lit("b")), b.int(3)),
            ];
            let m = b.match_expr(b.name("s"), &arms);
            let r = b.val(b.ident("r"), None, m);
            (vec![s, r], (r, arms))
        },
        |c, (r, arms)| {
            expect![[r#"
                Pattern type '1' is incompatible with scrutinee type 'String'.
                Unreachable case: a previous case matches every value."#]]
            .assert_eq(&messages(&c.diags).join("\n"));
            assert!(c.diags[0].is_error());
            assert_eq!(c.diags[1].severity(), Severity::Warning);
            let pat_ty = c.pattern_ty(arms[2].pat).unwrap();
            assert_eq!(c.print_ty(pat_ty), "\"b\"");
            assert!(c.pattern_ty(arms[1].pat).is_none());
            let symbol = c.symbol_of(r.id()).unwrap();
            let ty = c.get_type_of_symbol(symbol);
            assert_eq!(c.print_ty(ty), "Int");
        }
    );
}

#[test]
fn cycles_are_reported_once_per_binding() {
    let source = "val a = b; val b = a; type A = B; type B = A; def r(n: Int) = r(n)";
    check!(
        source,
        defaults(),
        |b| {
            let a = b.val(b.ident("a"), None, b.name("b"));
            let bb = b.val(b.ident("b"), None, b.name("a"));
            let ta = b.type_alias(b.ident("A"), b.ty_name("B"));
            let tb = b.type_alias(b.ident("B"), b.ty_name("A"));
            let r = b.fn_decl(
                b.ident("r"),
                &[b.param(b.ident("n"), b.ty_name("Int"))],
                None,
                b.call(b.ident("r"), &[b.name("n")]),
            );
            (vec![a, bb, ta, tb, r], ())
        },
        |c, ()| {
            expect![[r#"
                'b' is referenced directly or indirectly in its own initializer.
                'a' is referenced directly or indirectly in its own initializer.
                Type alias 'B' circularly references itself.
                Type alias 'A' circularly references itself.
                Recursive function 'r' needs an explicit result type."#]]
            .assert_eq(&messages(&c.diags).join("\n"));
        }
    );
}

#[test]
fn assignment_requires_a_var() {
    let source = "val x = 1; x = 2; def f(): Int = 1; val g = f";
    check!(
        source,
        defaults(),
        |b| {
            let x = b.val(b.ident("x"), None, b.int(1));
            let assign = b.expr_stmt(b.assign(b.ident("x"), b.int(2)));
            let f = b.fn_decl(b.ident("f"), &[], Some(b.ty_name("Int")), b.int(1));
            let g = b.val(b.ident("g"), None, b.name("f"));
            (vec![x, assign, f, g], ())
        },
        |c, ()| {
            assert_eq!(
                messages(&c.diags),
                [
                    "Cannot assign to 'x' because it is not a 'var'.",
                    "Function 'f' is not a value; call it instead."
                ]
            );
            let StmtKind::Fn(decl) = c.root().stmts[2].kind else {
                unreachable!()
            };
            let sig = c.get_sig(decl);
            assert!(sig.params.is_empty());
            assert_eq!(c.print_ty(sig.ret), "Int");
        }
    );
}
