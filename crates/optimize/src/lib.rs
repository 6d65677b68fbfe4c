//! Singleton-aware optimization and evaluation of checked Monolit programs.

mod fold;
pub mod interpreter;

pub use self::fold::{FoldStats, Folded, Folds, SingletonCallFolder};
pub use self::interpreter::{EvalError, Interpreter};
