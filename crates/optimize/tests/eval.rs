#[macro_use]
mod utils;

use monolit_ast::{BinOp, LitKind};
use monolit_config::RawCompilerOptions;
use monolit_optimize::EvalError;

fn defaults() -> monolit_config::NormalizedCompilerOptions {
    RawCompilerOptions::default().normalize()
}

#[test]
fn type_patterns_test_singleton_values() {
    let source = r#"val y: 5 = 5; def classify(n: Int): String = n match { case _: y.type => "five" case _: 7.type => "seven" case _ => "other" } println(classify(5)); println(classify(7)); println(classify(1))"#;
    run!(
        source,
        defaults(),
        |b| {
            let y = b.val(b.ident("y"), Some(b.ty_lit(b.lit(LitKind::Int(5)), false)), b.int(5));
            let name = b.ident("classify");
            let param = b.param(b.ident("n"), b.ty_name("Int"));
            let ret = b.ty_name("String");
            let scrutinee = b.name("n");
            let five = b.arm(b.typed_pat(b.ty_path("y")), b.str("five"));
            let seven = b.arm(
                b.typed_pat(b.ty_lit(b.lit(LitKind::Int(7)), true)),
                b.str("seven"),
            );
            let other = b.arm(b.wildcard_pat(), b.str("other"));
            let body = b.match_expr(scrutinee, &[five, seven, other]);
            let classify = b.fn_decl(name, &[param], Some(ret), body);
            let mut stmts = vec![y, classify];
            for n in [5, 7, 1] {
                let call = b.call(b.ident("classify"), &[b.int(n)]);
                stmts.push(b.expr_stmt(b.call(b.ident("println"), &[call])));
            }
            stmts
        },
        |_folded, (res, output)| {
            assert_eq!(res, Ok(()));
            assert_eq!(output, ["five", "seven", "other"]);
        }
    );
}

#[test]
fn intrinsic_patterns_test_the_runtime_kind() {
    let source = r#"def kind(s: String): Int = s match { case _: String => 1 case _ => 2 } println(kind("a")); println(kind(null))"#;
    run!(
        source,
        defaults(),
        |b| {
            let name = b.ident("kind");
            let param = b.param(b.ident("s"), b.ty_name("String"));
            let ret = b.ty_name("Int");
            let scrutinee = b.name("s");
            let string = b.arm(b.typed_pat(b.ty_name("String")), b.int(1));
            let other = b.arm(b.wildcard_pat(), b.int(2));
            let body = b.match_expr(scrutinee, &[string, other]);
            let kind = b.fn_decl(name, &[param], Some(ret), body);
            let first = b.call(b.ident("kind"), &[b.str("a")]);
            let first = b.expr_stmt(b.call(b.ident("println"), &[first]));
            let second = b.call(b.ident("kind"), &[b.null()]);
            let second = b.expr_stmt(b.call(b.ident("println"), &[second]));
            vec![kind, first, second]
        },
        |_folded, (res, output)| {
            assert_eq!(res, Ok(()));
            assert_eq!(output, ["1", "2"]);
        }
    );
}

#[test]
fn unmatched_scrutinee_is_a_match_error() {
    let source = r#"println("before"); val m = 3 match { case 1 => 2 }"#;
    run!(
        source,
        defaults(),
        |b| {
            let before = b.expr_stmt(b.call(b.ident("println"), &[b.str("before")]));
            let name = b.ident("m");
            let scrutinee = b.int(3);
            let arm = b.arm(b.lit_pat(b.lit(LitKind::Int(1))), b.int(2));
            let m = b.val(name, None, b.match_expr(scrutinee, &[arm]));
            vec![before, m]
        },
        |_folded, (res, output)| {
            assert_eq!(res, Err(EvalError::MatchError("3".to_string())));
            assert_eq!(output, ["before"]);
        }
    );
}

#[test]
fn integral_division_by_zero_fails_at_runtime() {
    let source = "def d(a: Int): Int = a / 0; val x = d(1)";
    run!(
        source,
        defaults(),
        |b| {
            let d = b.fn_decl(
                b.ident("d"),
                &[b.param(b.ident("a"), b.ty_name("Int"))],
                Some(b.ty_name("Int")),
                b.bin(b.name("a"), BinOp::Div, b.int(0)),
            );
            let x = b.val(b.ident("x"), None, b.call(b.ident("d"), &[b.int(1)]));
            vec![d, x]
        },
        |_folded, (res, _output)| {
            assert_eq!(res, Err(EvalError::DivisionByZero));
        }
    );
}

#[test]
fn unbounded_recursion_hits_the_call_depth_limit() {
    let source = "def r(n: Int): Int = r(n); val z = r(1)";
    run!(
        source,
        RawCompilerOptions::default().with_max_call_depth(16).normalize(),
        |b| {
            let r = b.fn_decl(
                b.ident("r"),
                &[b.param(b.ident("n"), b.ty_name("Int"))],
                Some(b.ty_name("Int")),
                b.call(b.ident("r"), &[b.name("n")]),
            );
            let z = b.val(b.ident("z"), None, b.call(b.ident("r"), &[b.int(1)]));
            vec![r, z]
        },
        |_folded, (res, _output)| {
            assert_eq!(res, Err(EvalError::StackOverflow(16)));
        }
    );
}

#[test]
fn logical_operators_short_circuit() {
    let source = "var n = 0; val t = false && 1 / 0 == 0; n = n + 1; println(t); println(n)";
    run!(
        source,
        defaults(),
        |b| {
            let n = b.var(b.ident("n"), None, b.int(0));
            let name = b.ident("t");
            let left = b.bool(false);
            let div = b.bin(b.int(1), BinOp::Div, b.int(0));
            let cmp = b.bin(div, BinOp::EqEq, b.int(0));
            let t = b.val(name, None, b.bin(left, BinOp::LogicalAnd, cmp));
            let target = b.ident("n");
            let inc = b.bin(b.name("n"), BinOp::Add, b.int(1));
            let assign = b.expr_stmt(b.assign(target, inc));
            let print_t = b.expr_stmt(b.call(b.ident("println"), &[b.name("t")]));
            let print_n = b.expr_stmt(b.call(b.ident("println"), &[b.name("n")]));
            vec![n, t, assign, print_t, print_n]
        },
        |_folded, (res, output)| {
            assert_eq!(res, Ok(()));
            assert_eq!(output, ["false", "1"]);
        }
    );
}
