pub const DEFAULT_MAX_CONST_EVAL_DEPTH: u32 = 64;
pub const DEFAULT_MAX_CALL_DEPTH: u32 = 512;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// How many bindings the constant evaluator follows before giving up.
    pub max_const_eval_depth: u32,
    /// Call depth after which the evaluator reports a stack overflow.
    pub max_call_depth: u32,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_const_eval_depth: DEFAULT_MAX_CONST_EVAL_DEPTH,
            max_call_depth: DEFAULT_MAX_CALL_DEPTH,
        }
    }
}
