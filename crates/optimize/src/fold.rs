use monolit_ast as ast;
use monolit_checker::TyChecker;
use monolit_checker::ty::LitValue;
use monolit_utils::no_hashmap_with_capacity;
use nohash_hasher::IntMap;

/// Expression nodes replaced by a compile-time value.
pub type Folds<'cx> = IntMap<ast::NodeID, &'cx LitValue>;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FoldStats {
    /// `inhabitant[T]` expressions replaced by their witness.
    pub inhabitants: usize,
    /// Calls replaced by the inhabitant of their result type.
    pub calls: usize,
    /// Calls with a singleton result type that were kept.
    pub retained: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RetainReason {
    Disabled,
    NoInhabitant,
    ImpureArgument,
    ImpureBody,
    MayReadUninitialized,
}

impl RetainReason {
    fn as_str(self) -> &'static str {
        match self {
            RetainReason::Disabled => "singleton call folding is disabled",
            RetainReason::NoInhabitant => "result type has no resolvable inhabitant",
            RetainReason::ImpureArgument => "an argument may have effects",
            RetainReason::ImpureBody => "the callee body may have effects",
            RetainReason::MayReadUninitialized => "the callee may read an uninitialized binding",
        }
    }
}

pub struct Folded<'cx> {
    pub folds: Folds<'cx>,
    pub stats: FoldStats,
}

/// Replaces calls whose result type pins down the returned value.
///
/// A call to `def f(): 7.type = body` always yields `7`, but dropping the
/// call also drops whatever `body` does on the way, so only calls the
/// checker proves pure are folded.
pub struct SingletonCallFolder<'a, 'cx> {
    checker: &'a mut TyChecker<'cx>,
    fold_calls: bool,
    /// The function whose body is being walked.
    owner: Option<&'cx ast::FnDecl<'cx>>,
    folds: Folds<'cx>,
    stats: FoldStats,
}

impl<'a, 'cx> SingletonCallFolder<'a, 'cx> {
    pub fn new(checker: &'a mut TyChecker<'cx>) -> Self {
        let fold_calls = checker.config().fold_singleton_calls();
        Self {
            checker,
            fold_calls,
            owner: None,
            folds: no_hashmap_with_capacity(32),
            stats: FoldStats::default(),
        }
    }

    #[tracing::instrument(level = "debug", skip_all)]
    pub fn fold_program(mut self) -> Folded<'cx> {
        let root = self.checker.root();
        for stmt in root.stmts {
            self.fold_stmt(stmt);
        }
        tracing::debug!(
            inhabitants = self.stats.inhabitants,
            calls = self.stats.calls,
            retained = self.stats.retained,
            "folded program"
        );
        Folded {
            folds: self.folds,
            stats: self.stats,
        }
    }

    fn fold_stmt(&mut self, stmt: &'cx ast::Stmt<'cx>) {
        use ast::StmtKind::*;
        match stmt.kind {
            Val(decl) => self.fold_expr(decl.init),
            Fn(decl) => {
                let outer = self.owner.replace(decl);
                self.fold_expr(decl.body);
                self.owner = outer;
            }
            Expr(stmt) => self.fold_expr(stmt.expr),
            TypeAlias(_) => {}
        }
    }

    fn fold_expr(&mut self, expr: &'cx ast::Expr<'cx>) {
        use ast::ExprKind::*;
        match expr.kind {
            Lit(_) | Ident(_) | Opaque(_) => {}
            Paren(paren) => self.fold_expr(paren.expr),
            Unary(unary) => self.fold_expr(unary.expr),
            Bin(bin) => {
                self.fold_expr(bin.left);
                self.fold_expr(bin.right);
            }
            Block(block) => {
                for stmt in block.stmts {
                    self.fold_stmt(stmt);
                }
                if let Some(tail) = block.tail {
                    self.fold_expr(tail);
                }
            }
            Assign(assign) => self.fold_expr(assign.right),
            Match(m) => {
                self.fold_expr(m.scrutinee);
                for arm in m.arms {
                    self.fold_expr(arm.body);
                }
            }
            Inhabitant(inhabitant) => {
                if let Some(witness) = self.checker.inhabitant_of(inhabitant.id) {
                    self.folds.insert(inhabitant.id, witness.value);
                    self.stats.inhabitants += 1;
                }
            }
            Call(call) => {
                if !self.fold_call(expr, call) {
                    for arg in call.args {
                        self.fold_expr(arg);
                    }
                }
            }
        }
    }

    fn fold_call(&mut self, expr: &'cx ast::Expr<'cx>, call: &'cx ast::CallExpr<'cx>) -> bool {
        let Some(sig) = self.checker.resolved_sig(call.id) else {
            return false;
        };
        if !sig.ret.is_singleton() {
            return false;
        }
        match self.try_fold_call(expr, call, sig) {
            Ok(value) => {
                self.folds.insert(call.id, value);
                self.stats.calls += 1;
                true
            }
            Err(reason) => {
                self.stats.retained += 1;
                tracing::debug!(
                    callee = self.checker.atoms.get(call.callee.name),
                    reason = reason.as_str(),
                    "retained call"
                );
                false
            }
        }
    }

    fn try_fold_call(
        &mut self,
        expr: &'cx ast::Expr<'cx>,
        call: &'cx ast::CallExpr<'cx>,
        sig: &'cx monolit_checker::Sig<'cx>,
    ) -> Result<&'cx LitValue, RetainReason> {
        if !self.fold_calls {
            return Err(RetainReason::Disabled);
        }
        let witness = self
            .checker
            .resolve_inhabitant(sig.ret, call.span)
            .map_err(|_| RetainReason::NoInhabitant)?;
        let owner = self.owner;
        if !call
            .args
            .iter()
            .all(|arg| self.checker.is_pure_within(arg, owner))
        {
            return Err(RetainReason::ImpureArgument);
        }
        if !self.checker.is_fn_pure(sig.decl) {
            return Err(RetainReason::ImpureBody);
        }
        // the body may read bindings declared after this call
        if !self.checker.is_pure_within(expr, owner) {
            return Err(RetainReason::MayReadUninitialized);
        }
        Ok(witness.value)
    }
}
