/// Builds a program with an `AstBuilder`, binds it, and checks it.
///
/// The build block returns `(stmts, extra)`; `extra` is bound to `$out` in
/// the body so node handles can be inspected after checking.
macro_rules! check {
    ($source: expr, $options: expr, |$b: ident| $build: expr, |$c: ident, $out: pat_param| $body: expr) => {{
        let arena = bumpalo::Bump::new();
        let $b = monolit_ast::AstBuilder::new(
            &arena,
            monolit_span::ModuleID::root(),
            $source,
            monolit_ast::keyword::init_atom(),
        );
        let (stmts, $out) = $build;
        let parsed = $b.finish(&stmts);
        let binder = monolit_binder::bind(parsed.root, &parsed.atoms);
        assert!(
            binder.diags.is_empty(),
            "{:?}",
            binder.diags.iter().map(|d| d.message()).collect::<Vec<_>>()
        );
        let options: monolit_config::NormalizedCompilerOptions = $options;
        let mut $c = monolit_checker::TyChecker::new(
            &arena,
            parsed.root,
            &parsed.nodes,
            &binder,
            parsed.atoms,
            &options,
            monolit_checker::InternCache::new(),
        );
        $c.check_program();
        $body
    }};
}

#[allow(dead_code)]
pub fn messages(diags: &[monolit_errors::Diag]) -> Vec<String> {
    diags.iter().map(|d| d.message()).collect()
}
