use super::{CompilerOptionFlags, Limits};

macro_rules! with_option {
    ($s: ident, $(($option: ident, $ty: ty)),* $(,)?) => {
        #[derive(Debug, Default, Clone, serde::Deserialize, serde::Serialize)]
        #[serde(rename_all = "camelCase", deny_unknown_fields)]
        pub struct $s {
            $(pub(super) $option: Option<$ty>,)*
        }
        impl $s {
            paste::paste! {
                $(
                    pub fn [<with_ $option>](mut self, $option: $ty) -> Self {
                        self.$option = Some($option);
                        self
                    }
                    pub fn [<with_ $option _if_none>](mut self, $option: $ty) -> Self {
                        if self.$option.is_none() {
                            self.$option = Some($option);
                        }
                        self
                    }
                )*
            }
        }
    };
}

with_option!(
    RawCompilerOptions,
    (infer_final_singleton, bool),
    (bare_literal_types, bool),
    (fold_singleton_calls, bool),
    (strict, bool),
    (max_const_eval_depth, u32),
    (max_call_depth, u32),
);

impl RawCompilerOptions {
    pub fn normalize(self) -> super::NormalizedCompilerOptions {
        let strict = self.strict.unwrap_or_default();
        let mut flags = CompilerOptionFlags::empty();
        flags.set(CompilerOptionFlags::STRICT, strict);
        flags.set(
            CompilerOptionFlags::INFER_FINAL_SINGLETON,
            self.infer_final_singleton.unwrap_or(true),
        );
        // `strict` asks for the explicit `.type` spelling unless overridden
        flags.set(
            CompilerOptionFlags::BARE_LITERAL_TYPES,
            self.bare_literal_types.unwrap_or(!strict),
        );
        flags.set(
            CompilerOptionFlags::FOLD_SINGLETON_CALLS,
            self.fold_singleton_calls.unwrap_or(true),
        );
        let defaults = Limits::default();
        let limits = Limits {
            max_const_eval_depth: self
                .max_const_eval_depth
                .unwrap_or(defaults.max_const_eval_depth),
            max_call_depth: self.max_call_depth.unwrap_or(defaults.max_call_depth),
        };
        super::NormalizedCompilerOptions { flags, limits }
    }
}
