mod errors;

use monolit_ast as ast;
use monolit_binder::{SymbolFlags, SymbolID};
use monolit_checker::TyChecker;
use monolit_checker::ops::{self, OpError};
use monolit_checker::ty::{self, IntrinsicTyKind, LitValue};
use monolit_utils::fx_hashmap_with_capacity;
use rustc_hash::FxHashMap;

pub use self::errors::EvalError;
use crate::fold::Folds;

type Frame = FxHashMap<SymbolID, LitValue>;

const RED_ZONE: usize = 64 * 1024;
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Tree-walking evaluator over a checked program.
///
/// Every call gets a fresh frame. Names are looked up from the innermost
/// frame outwards, which finds the enclosing binding because each
/// declaration has its own symbol.
pub struct Interpreter<'a, 'cx> {
    checker: &'a mut TyChecker<'cx>,
    folds: &'a Folds<'cx>,
    frames: Vec<Frame>,
    output: Vec<String>,
    max_call_depth: usize,
}

impl<'a, 'cx> Interpreter<'a, 'cx> {
    pub fn new(checker: &'a mut TyChecker<'cx>, folds: &'a Folds<'cx>) -> Self {
        let max_call_depth = checker.config().max_call_depth() as usize;
        Self {
            checker,
            folds,
            frames: vec![fx_hashmap_with_capacity(64)],
            output: Vec::new(),
            max_call_depth,
        }
    }

    /// Runs the top-level statements in order. Output produced before a
    /// failure stays in [`Interpreter::output`].
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn run(&mut self) -> Result<(), EvalError> {
        let root = self.checker.root();
        for stmt in root.stmts {
            self.eval_stmt(stmt)?;
        }
        Ok(())
    }

    pub fn output(&self) -> &[String] {
        &self.output
    }

    pub fn into_output(self) -> Vec<String> {
        self.output
    }

    fn eval_stmt(&mut self, stmt: &'cx ast::Stmt<'cx>) -> Result<(), EvalError> {
        use ast::StmtKind::*;
        match stmt.kind {
            Val(decl) => {
                let value = self.eval_expr(decl.init)?;
                if let Some(symbol) = self.checker.symbol_of(decl.id) {
                    self.bind(symbol, value);
                }
            }
            Expr(stmt) => {
                self.eval_expr(stmt.expr)?;
            }
            TypeAlias(_) | Fn(_) => {}
        }
        Ok(())
    }

    pub fn eval_expr(&mut self, expr: &'cx ast::Expr<'cx>) -> Result<LitValue, EvalError> {
        if let Some(value) = self.folds.get(&expr.id()) {
            return Ok(**value);
        }
        use ast::ExprKind::*;
        match expr.kind {
            Lit(lit) => Ok(LitValue::from(lit.kind)),
            Ident(ident) => self.read(ident),
            Paren(paren) => self.eval_expr(paren.expr),
            Unary(unary) => {
                let v = self.eval_expr(unary.expr)?;
                ops::eval_unary(unary.op, &v).map_err(|e| op_error(e, unary.op.as_str()))
            }
            Bin(bin) => self.eval_bin(bin),
            Call(call) => self.eval_call(call),
            Block(block) => {
                for stmt in block.stmts {
                    self.eval_stmt(stmt)?;
                }
                match block.tail {
                    Some(tail) => self.eval_expr(tail),
                    None => Ok(LitValue::Unit),
                }
            }
            Assign(assign) => {
                let value = self.eval_expr(assign.right)?;
                self.write(assign.left, value)?;
                Ok(LitValue::Unit)
            }
            Match(m) => self.eval_match(m),
            // checked programs fold every inhabitant
            Inhabitant(inhabitant) => match self.checker.inhabitant_of(inhabitant.id) {
                Some(witness) => Ok(*witness.value),
                None => Err(EvalError::Unevaluable(inhabitant.span)),
            },
            Opaque(_) => Ok(LitValue::Unit),
        }
    }

    fn eval_bin(&mut self, bin: &'cx ast::BinExpr<'cx>) -> Result<LitValue, EvalError> {
        let left = self.eval_expr(bin.left)?;
        match (bin.op, left.as_bool()) {
            (ast::BinOp::LogicalAnd, Some(false)) | (ast::BinOp::LogicalOr, Some(true)) => {
                return Ok(left);
            }
            _ => {}
        }
        let right = self.eval_expr(bin.right)?;
        ops::eval_bin(bin.op, &left, &right, &mut self.checker.atoms)
            .map_err(|e| op_error(e, bin.op.as_str()))
    }

    fn eval_call(&mut self, call: &'cx ast::CallExpr<'cx>) -> Result<LitValue, EvalError> {
        let mut args = Vec::with_capacity(call.args.len());
        for arg in call.args {
            args.push(self.eval_expr(arg)?);
        }
        if let Some(symbol) = self.checker.symbol_of(call.callee.id)
            && self.checker.symbol(symbol).flags.contains(SymbolFlags::BUILTIN)
        {
            return Ok(self.eval_builtin(&args));
        }
        let Some(sig) = self.checker.resolved_sig(call.id) else {
            return Err(EvalError::Unevaluable(call.span));
        };
        if self.frames.len() > self.max_call_depth {
            return Err(EvalError::StackOverflow(self.max_call_depth));
        }
        let mut frame = fx_hashmap_with_capacity(sig.decl.params.len());
        for (param, value) in sig.decl.params.iter().zip(args) {
            if let Some(symbol) = self.checker.symbol_of(param.id) {
                frame.insert(symbol, value);
            }
        }
        self.frames.push(frame);
        let body = sig.decl.body;
        let res = stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, || self.eval_expr(body));
        self.frames.pop();
        res
    }

    /// `println` is the only builtin.
    fn eval_builtin(&mut self, args: &[LitValue]) -> LitValue {
        let line = args
            .iter()
            .map(|arg| arg.to_display(&self.checker.atoms))
            .collect::<Vec<_>>()
            .join(" ");
        self.output.push(line);
        LitValue::Unit
    }

    fn eval_match(&mut self, m: &'cx ast::MatchExpr<'cx>) -> Result<LitValue, EvalError> {
        let value = self.eval_expr(m.scrutinee)?;
        for arm in m.arms {
            if self.matches(arm.pat, &value)? {
                return self.eval_expr(arm.body);
            }
        }
        Err(EvalError::MatchError(value.to_source(&self.checker.atoms)))
    }

    fn matches(&self, pat: &'cx ast::Pat<'cx>, value: &LitValue) -> Result<bool, EvalError> {
        match pat.kind {
            ast::PatKind::Wildcard(_) => Ok(true),
            ast::PatKind::Lit(lit) => Ok(ops::values_eq(&LitValue::from(lit.lit.kind), value)),
            ast::PatKind::Typed(typed) => match self.checker.pattern_ty(pat) {
                Some(pat_ty) => self.is_instance(pat_ty, value),
                None => Err(EvalError::Unevaluable(typed.span)),
            },
        }
    }

    fn is_instance(&self, ty: &'cx ty::Ty<'cx>, value: &LitValue) -> Result<bool, EvalError> {
        match ty.kind {
            ty::TyKind::Singleton(ty::SingletonTy::Lit(lit)) => Ok(ops::values_eq(lit.value, value)),
            ty::TyKind::Singleton(ty::SingletonTy::Path(path)) => {
                let current = self.lookup(path.symbol())?;
                Ok(ops::values_eq(current, value))
            }
            ty::TyKind::Intrinsic(i) => Ok(match i.kind {
                IntrinsicTyKind::Any => true,
                IntrinsicTyKind::Nothing | IntrinsicTyKind::Error => false,
                kind => value.kind() == kind,
            }),
        }
    }

    fn bind(&mut self, symbol: SymbolID, value: LitValue) {
        if let Some(frame) = self.frames.last_mut() {
            frame.insert(symbol, value);
        }
    }

    fn lookup(&self, symbol: SymbolID) -> Result<&LitValue, EvalError> {
        self.frames
            .iter()
            .rev()
            .find_map(|frame| frame.get(&symbol))
            .ok_or_else(|| {
                let name = self.checker.symbol(symbol).name;
                EvalError::Uninitialized(self.checker.atoms.get(name).to_string())
            })
    }

    fn read(&self, ident: &'cx ast::Ident) -> Result<LitValue, EvalError> {
        match self.checker.symbol_of(ident.id) {
            Some(symbol) => self.lookup(symbol).copied(),
            None => Err(EvalError::Unevaluable(ident.span)),
        }
    }

    fn write(&mut self, ident: &'cx ast::Ident, value: LitValue) -> Result<(), EvalError> {
        let Some(symbol) = self.checker.symbol_of(ident.id) else {
            return Err(EvalError::Unevaluable(ident.span));
        };
        match self
            .frames
            .iter_mut()
            .rev()
            .find_map(|frame| frame.get_mut(&symbol))
        {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => {
                let name = self.checker.symbol(symbol).name;
                Err(EvalError::Uninitialized(
                    self.checker.atoms.get(name).to_string(),
                ))
            }
        }
    }
}

fn op_error(error: OpError, op: &'static str) -> EvalError {
    match error {
        OpError::DivisionByZero => EvalError::DivisionByZero,
        OpError::Unsupported => EvalError::InvalidOperands(op),
    }
}

