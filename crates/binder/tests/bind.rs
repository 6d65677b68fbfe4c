use bumpalo::Bump;
use monolit_ast::{AstBuilder, StmtKind, keyword};
use monolit_binder::{Symbol, SymbolFlags, bind};
use monolit_span::ModuleID;

#[test]
fn var_without_assignment_is_frozen() {
    let arena = Bump::new();
    let source = "var a = 1; var b = 2; b = 3";
    let b = AstBuilder::new(&arena, ModuleID::root(), source, keyword::init_atom());
    let s1 = b.var(b.ident("a"), None, b.int(1));
    let s2 = b.var(b.ident("b"), None, b.int(2));
    let s3 = b.expr_stmt(b.assign(b.ident("b"), b.int(3)));
    let p = b.finish(&[s1, s2, s3]);
    let result = bind(p.root, &p.atoms);
    assert!(result.diags.is_empty());

    let symbol_of = |idx: usize| {
        let StmtKind::Val(decl) = p.root.stmts[idx].kind else {
            unreachable!()
        };
        result.symbol(result.res(decl.id).unwrap())
    };
    let a = symbol_of(0);
    assert!(a.flags.contains(SymbolFlags::VAR | SymbolFlags::FROZEN));
    assert!(a.is_stable());
    let b = symbol_of(1);
    assert!(!b.flags.contains(SymbolFlags::FROZEN));
    assert!(!b.is_stable());
}

#[test]
fn type_namespace_wins_in_type_position() {
    let arena = Bump::new();
    let source = "type T = Int; final val T = 1; val x: T = 2; val y: T.type = T";
    let b = AstBuilder::new(&arena, ModuleID::root(), source, keyword::init_atom());
    let s1 = b.type_alias(b.ident("T"), b.ty_name("Int"));
    let s2 = b.final_val(b.ident("T"), None, b.int(1));
    let x_ty = b.ty_name("T");
    let s3 = b.val(b.ident("x"), Some(x_ty), b.int(2));
    let y_ty = b.ty_path("T");
    let s4 = b.val(b.ident("y"), Some(y_ty), b.name("T"));
    let p = b.finish(&[s1, s2, s3, s4]);
    let result = bind(p.root, &p.atoms);
    assert!(result.diags.is_empty());

    let monolit_ast::TyKind::Refer(refer) = x_ty.kind else {
        unreachable!()
    };
    let alias = result.symbol(result.res(refer.name.id).unwrap());
    assert!(alias.flags.contains(SymbolFlags::TYPE_ALIAS));

    let monolit_ast::TyKind::Singleton(singleton) = y_ty.kind else {
        unreachable!()
    };
    let operand = singleton.operand.as_ident().unwrap();
    let value = result.symbol(result.res(operand.id).unwrap());
    assert!(value.flags.contains(SymbolFlags::VAL | SymbolFlags::FINAL));
}

#[test]
fn intrinsic_type_names_are_not_recorded() {
    let arena = Bump::new();
    let b = AstBuilder::new(&arena, ModuleID::root(), "val x: Int = 1", keyword::init_atom());
    let ty = b.ty_name("Int");
    let s = b.val(b.ident("x"), Some(ty), b.int(1));
    let p = b.finish(&[s]);
    let result = bind(p.root, &p.atoms);
    assert!(result.res(ty.id()).is_none());
    let monolit_ast::TyKind::Refer(refer) = ty.kind else {
        unreachable!()
    };
    assert!(result.res(refer.name.id).is_none());
}

#[test]
fn overloads_merge_into_one_symbol() {
    let arena = Bump::new();
    let b = AstBuilder::new(&arena, ModuleID::root(), "", keyword::init_atom());
    let f1 = b.fn_decl(
        b.ident("f"),
        &[b.param(b.ident("x"), b.ty_name("Int"))],
        None,
        b.name("x"),
    );
    let f2 = b.fn_decl(
        b.ident("f"),
        &[b.param(b.ident("x"), b.ty_name("String"))],
        None,
        b.name("x"),
    );
    let p = b.finish(&[f1, f2]);
    let result = bind(p.root, &p.atoms);
    assert!(result.diags.is_empty());
    let id = result.res(f1.id()).unwrap();
    assert_eq!(result.res(f2.id()), Some(id));
    assert_eq!(result.symbol(id).decls.len(), 2);
}

#[test]
fn duplicate_and_unknown_names_are_reported() {
    let arena = Bump::new();
    let source = "val a = 1; val a = 2; val c = missing";
    let b = AstBuilder::new(&arena, ModuleID::root(), source, keyword::init_atom());
    let s1 = b.val(b.ident("a"), None, b.int(1));
    let s2 = b.val(b.ident("a"), None, b.int(2));
    let missing = b.name("missing");
    let s3 = b.val(b.ident("c"), None, missing);
    let p = b.finish(&[s1, s2, s3]);
    let result = bind(p.root, &p.atoms);
    let messages = result.diags.iter().map(|d| d.message()).collect::<Vec<_>>();
    assert_eq!(
        messages,
        vec![
            "Duplicate identifier 'a'.".to_string(),
            "Cannot find name 'missing'.".to_string()
        ]
    );
    assert_eq!(result.res(missing.id()), Some(Symbol::ERR));
}

#[test]
fn println_is_an_impure_builtin() {
    let arena = Bump::new();
    let b = AstBuilder::new(&arena, ModuleID::root(), "", keyword::init_atom());
    let callee = b.ident("println");
    let s = b.expr_stmt(b.call(callee, &[b.str("hi")]));
    let p = b.finish(&[s]);
    let result = bind(p.root, &p.atoms);
    let println = result.symbol(result.res(callee.id).unwrap());
    assert!(println.flags.contains(SymbolFlags::BUILTIN | SymbolFlags::IMPURE));
}
