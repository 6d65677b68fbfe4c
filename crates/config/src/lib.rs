mod normalized;
mod options;
mod raw;

pub use normalized::{CompilerOptionFlags, NormalizedCompilerOptions};
pub use options::{DEFAULT_MAX_CALL_DEPTH, DEFAULT_MAX_CONST_EVAL_DEPTH, Limits};
pub use raw::RawCompilerOptions;
