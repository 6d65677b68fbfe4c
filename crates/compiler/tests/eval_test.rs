use monolit_ast::{AstBuilder, BinOp, LitKind, Stmt};
use monolit_compiler::{Unit, eval_unit, eval_units_parallel};
use monolit_config::{NormalizedCompilerOptions, RawCompilerOptions};
use monolit_errors::miette::Severity;

fn defaults() -> NormalizedCompilerOptions {
    RawCompilerOptions::default().normalize()
}

const SIDE_EFFECT: &str = r#"def f(): 7.type = { println("computing"); 7 } def g(): 7.type = 7 println(f()); println(g())"#;

fn build_side_effect<'cx>(b: &AstBuilder<'cx, '_>) -> Vec<&'cx Stmt<'cx>> {
    let name = b.ident("f");
    let ret = b.ty_lit(b.lit(LitKind::Int(7)), true);
    let print = b.expr_stmt(b.call(b.ident("println"), &[b.str("computing")]));
    let f = b.fn_decl(name, &[], Some(ret), b.block(&[print], Some(b.int(7))));
    let name = b.ident("g");
    let ret = b.ty_lit(b.lit(LitKind::Int(7)), true);
    let g = b.fn_decl(name, &[], Some(ret), b.int(7));
    let callee = b.ident("println");
    let call_f = b.expr_stmt(b.call(callee, &[b.call(b.ident("f"), &[])]));
    let callee = b.ident("println");
    let call_g = b.expr_stmt(b.call(callee, &[b.call(b.ident("g"), &[])]));
    vec![f, g, call_f, call_g]
}

#[test]
fn side_effect_of_a_singleton_call_is_observed() {
    let out = eval_unit("side_effect", SIDE_EFFECT, build_side_effect, &defaults());
    assert!(out.diags.is_empty(), "{:?}", out.messages());
    assert!(out.eval_error.is_none());
    assert_eq!(out.output, ["computing", "7", "7"]);
    assert_eq!(out.fold_stats.calls, 1);
    assert_eq!(out.fold_stats.retained, 1);
}

const REASSIGN: &str = "var x: 3.type = 3; x = 42; println(x)";

fn build_reassign<'cx>(b: &AstBuilder<'cx, '_>) -> Vec<&'cx Stmt<'cx>> {
    let name = b.ident("x");
    let ty = b.ty_lit(b.lit(LitKind::Int(3)), true);
    let x = b.var(name, Some(ty), b.int(3));
    let target = b.ident("x");
    let assign = b.expr_stmt(b.assign(target, b.int(42)));
    let print = b.expr_stmt(b.call(b.ident("println"), &[b.name("x")]));
    vec![x, assign, print]
}

#[test]
fn ill_typed_unit_reports_and_is_not_evaluated() {
    let out = eval_unit("reassign", REASSIGN, build_reassign, &defaults());
    assert!(out.has_errors());
    expect_test::expect![[r#"
        [
            "Type '42' is not assignable to type '3'.",
        ]
    "#]]
    .assert_debug_eq(&out.messages());
    assert!(out.diags[0].rendered.contains("is not assignable"));
    assert!(out.output.is_empty());
}

const UNREACHABLE: &str = "val m = 1 match { case _ => 1 case 2 => 3 } println(m)";

fn build_unreachable<'cx>(b: &AstBuilder<'cx, '_>) -> Vec<&'cx Stmt<'cx>> {
    let name = b.ident("m");
    let scrutinee = b.int(1);
    let wildcard = b.arm(b.wildcard_pat(), b.int(1));
    let two = b.arm(b.lit_pat(b.lit(LitKind::Int(2))), b.int(3));
    let m = b.val(name, None, b.match_expr(scrutinee, &[wildcard, two]));
    let print = b.expr_stmt(b.call(b.ident("println"), &[b.name("m")]));
    vec![m, print]
}

#[test]
fn warnings_do_not_block_evaluation() {
    let out = eval_unit("unreachable", UNREACHABLE, build_unreachable, &defaults());
    assert!(!out.has_errors());
    assert_eq!(out.diags.len(), 1);
    assert_eq!(out.diags[0].severity, Severity::Warning);
    assert_eq!(out.output, ["1"]);
}

const ALIAS_AND_VALUE: &str = "type T = Int; final val T = 1; val a: T = 5; println(a + inhabitant[T.type])";

fn build_alias_and_value<'cx>(b: &AstBuilder<'cx, '_>) -> Vec<&'cx Stmt<'cx>> {
    let alias = b.type_alias(b.ident("T"), b.ty_name("Int"));
    let value = b.final_val(b.ident("T"), None, b.int(1));
    let a = b.val(b.ident("a"), Some(b.ty_name("T")), b.int(5));
    let callee = b.ident("println");
    let left = b.name("a");
    let sum = b.bin(left, BinOp::Add, b.inhabitant(b.ty_path("T")));
    let print = b.expr_stmt(b.call(callee, &[sum]));
    vec![alias, value, a, print]
}

#[test]
fn type_alias_and_value_of_one_name_coexist() {
    let out = eval_unit("alias", ALIAS_AND_VALUE, build_alias_and_value, &defaults());
    assert!(out.diags.is_empty(), "{:?}", out.messages());
    assert_eq!(out.output, ["6"]);
    assert_eq!(out.fold_stats.inhabitants, 1);
}

const MANY_LITERALS: &str = r#"val a = 1; val b = 2L; val c = "c"; val d = 'd'; println(a)"#;

fn build_many_literals<'cx>(b: &AstBuilder<'cx, '_>) -> Vec<&'cx Stmt<'cx>> {
    let a = b.val(b.ident("a"), None, b.int(1));
    let bb = b.val(b.ident("b"), None, b.long(2));
    let c = b.val(b.ident("c"), None, b.str("c"));
    let d = b.val(b.ident("d"), None, b.char('d'));
    let print = b.expr_stmt(b.call(b.ident("println"), &[b.name("a")]));
    vec![a, bb, c, d, print]
}

const FEW_LITERALS: &str = "println(1)";

fn build_few_literals<'cx>(b: &AstBuilder<'cx, '_>) -> Vec<&'cx Stmt<'cx>> {
    vec![b.expr_stmt(b.call(b.ident("println"), &[b.int(1)]))]
}

#[test]
fn parallel_units_have_independent_caches() {
    let options = defaults();
    let alone = eval_unit("few", FEW_LITERALS, build_few_literals, &options);
    let units = [
        Unit::new("many", MANY_LITERALS, build_many_literals),
        Unit::new("few", FEW_LITERALS, build_few_literals),
        Unit::new("side_effect", SIDE_EFFECT, build_side_effect),
    ];
    let outs = eval_units_parallel(&units, &options);
    assert_eq!(outs.len(), 3);
    assert_eq!(outs[0].output, ["1"]);
    assert_eq!(outs[1].output, ["1"]);
    assert_eq!(outs[2].output, ["computing", "7", "7"]);
    // literals interned by `many` are not visible to `few`
    assert_eq!(outs[1].types_len, alone.types_len);
    assert!(outs[0].types_len > outs[1].types_len);
}

#[test]
fn options_deserialize_from_json() {
    let raw: RawCompilerOptions =
        serde_json::from_str(r#"{ "foldSingletonCalls": false }"#).unwrap();
    let out = eval_unit("side_effect", SIDE_EFFECT, build_side_effect, &raw.normalize());
    assert_eq!(out.output, ["computing", "7", "7"]);
    assert_eq!(out.fold_stats.calls, 0);
    assert_eq!(out.fold_stats.retained, 2);
}

const FORWARD_READ: &str = "def f(): 7.type = { val a = z; 7 } println(f()); val z = 1";

fn build_forward_read<'cx>(b: &AstBuilder<'cx, '_>) -> Vec<&'cx Stmt<'cx>> {
    let name = b.ident("f");
    let ret = b.ty_lit(b.lit(LitKind::Int(7)), true);
    let read = b.val(b.ident("a"), None, b.name("z"));
    let f = b.fn_decl(name, &[], Some(ret), b.block(&[read], Some(b.int(7))));
    let callee = b.ident("println");
    let print = b.expr_stmt(b.call(callee, &[b.call(b.ident("f"), &[])]));
    let z = b.val(b.ident("z"), None, b.int(1));
    vec![f, print, z]
}

#[test]
fn folding_does_not_hide_a_read_before_initialization() {
    let folded = eval_unit("forward_read", FORWARD_READ, build_forward_read, &defaults());
    let options = RawCompilerOptions::default()
        .with_fold_singleton_calls(false)
        .normalize();
    let kept = eval_unit("forward_read", FORWARD_READ, build_forward_read, &options);
    assert!(folded.diags.is_empty(), "{:?}", folded.messages());
    assert!(folded.eval_error.is_some());
    assert_eq!(folded.eval_error, kept.eval_error);
    assert_eq!(folded.output, kept.output);
    assert_eq!(folded.fold_stats.calls, 0);
}
