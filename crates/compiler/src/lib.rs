use bumpalo::Bump;
use rayon::prelude::*;

use monolit_ast::{AstBuilder, Stmt, keyword};
use monolit_checker::{InternCache, TyChecker};
use monolit_config::NormalizedCompilerOptions;
use monolit_errors::Diag;
use monolit_errors::miette::Severity;
use monolit_optimize::{EvalError, FoldStats, Interpreter, SingletonCallFolder};
use monolit_span::ModuleArena;

/// Builds the statements of one unit, standing in for a parser.
pub type BuildFn = for<'cx, 'src> fn(&AstBuilder<'cx, 'src>) -> Vec<&'cx Stmt<'cx>>;

pub struct Unit {
    pub name: String,
    pub source: String,
    pub build: BuildFn,
}

impl Unit {
    pub fn new(name: impl Into<String>, source: impl Into<String>, build: BuildFn) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
            build,
        }
    }
}

#[derive(Debug)]
pub struct RenderedDiag {
    pub severity: Severity,
    pub message: String,
    /// The miette report, without colors.
    pub rendered: String,
}

#[derive(Debug)]
pub struct Output {
    pub diags: Vec<RenderedDiag>,
    /// Lines printed by the program. Empty when it was not evaluated.
    pub output: Vec<String>,
    pub eval_error: Option<EvalError>,
    pub fold_stats: FoldStats,
    /// Types interned by this unit, intrinsics included.
    pub types_len: usize,
}

impl Output {
    pub fn has_errors(&self) -> bool {
        self.diags.iter().any(|d| d.severity == Severity::Error)
    }

    pub fn messages(&self) -> Vec<&str> {
        self.diags.iter().map(|d| d.message.as_str()).collect()
    }
}

/// Runs one unit through bind, check, fold and evaluation.
///
/// Each call owns its arena, atoms and intern cache. A unit whose
/// diagnostics contain an error is not folded or evaluated.
#[tracing::instrument(level = "debug", skip_all, fields(unit = name))]
pub fn eval_unit<F>(
    name: &str,
    source: &str,
    build: F,
    options: &NormalizedCompilerOptions,
) -> Output
where
    F: for<'cx, 'src> FnOnce(&AstBuilder<'cx, 'src>) -> Vec<&'cx Stmt<'cx>>,
{
    monolit_tracing::init_tracing();
    let mut module_arena = ModuleArena::new(1);
    let module = module_arena.new_module_with_content(name, source.to_string());

    // ==== build ====
    let arena = Bump::new();
    let builder = AstBuilder::new(&arena, module, source, keyword::init_atom());
    let stmts = build(&builder);
    let parsed = builder.finish(&stmts);

    // ==== bind ====
    let mut binder = monolit_binder::bind(parsed.root, &parsed.atoms);
    let mut diags = binder.steal_errors();

    // ==== check ====
    let mut checker = TyChecker::new(
        &arena,
        parsed.root,
        &parsed.nodes,
        &binder,
        parsed.atoms,
        options,
        InternCache::new(),
    );
    checker.check_program();
    diags.extend(checker.steal_diags());

    let mut fold_stats = FoldStats::default();
    let mut output = Vec::new();
    let mut eval_error = None;
    if diags.iter().any(Diag::is_error) {
        tracing::debug!(diags = diags.len(), "skipped evaluation of an ill-typed unit");
    } else {
        // ==== fold ====
        let folded = SingletonCallFolder::new(&mut checker).fold_program();
        fold_stats = folded.stats;

        // ==== evaluate ====
        let mut interpreter = Interpreter::new(&mut checker, &folded.folds);
        if let Err(error) = interpreter.run() {
            tracing::debug!(%error, "evaluation failed");
            eval_error = Some(error);
        }
        output = interpreter.into_output();
    }

    let types_len = checker.cache().ty_count();
    let diags = diags
        .into_iter()
        .map(|diag| RenderedDiag {
            severity: diag.severity(),
            message: diag.message(),
            rendered: diag.emit_message(&module_arena, true),
        })
        .collect();
    Output {
        diags,
        output,
        eval_error,
        fold_stats,
        types_len,
    }
}

/// Evaluates independent units on the rayon pool, in order of `units`.
pub fn eval_units_parallel(units: &[Unit], options: &NormalizedCompilerOptions) -> Vec<Output> {
    units
        .par_iter()
        .map(|unit| eval_unit(&unit.name, &unit.source, unit.build, options))
        .collect()
}
