/// Builds, binds and checks a program, folds it, then evaluates it.
///
/// The body sees the fold result as `$folded` and the evaluation result and
/// output as `$out`.
macro_rules! run {
    ($source: expr, $options: expr, |$b: ident| $build: expr, |$folded: ident, $out: pat_param| $body: expr) => {{
        let arena = bumpalo::Bump::new();
        let $b = monolit_ast::AstBuilder::new(
            &arena,
            monolit_span::ModuleID::root(),
            $source,
            monolit_ast::keyword::init_atom(),
        );
        let stmts = $build;
        let parsed = $b.finish(&stmts);
        let binder = monolit_binder::bind(parsed.root, &parsed.atoms);
        assert!(binder.diags.is_empty());
        let options: monolit_config::NormalizedCompilerOptions = $options;
        let mut checker = monolit_checker::TyChecker::new(
            &arena,
            parsed.root,
            &parsed.nodes,
            &binder,
            parsed.atoms,
            &options,
            monolit_checker::InternCache::new(),
        );
        checker.check_program();
        assert!(
            checker.diags.iter().all(|d| !d.is_error()),
            "{:?}",
            checker.diags.iter().map(|d| d.message()).collect::<Vec<_>>()
        );
        let $folded = monolit_optimize::SingletonCallFolder::new(&mut checker).fold_program();
        let mut interpreter = monolit_optimize::Interpreter::new(&mut checker, &$folded.folds);
        let res = interpreter.run();
        let $out = (res, interpreter.into_output());
        $body
    }};
}
