use crate::options::Limits;

macro_rules! normalized_option {
    ($s: ident, $(($option: ident, $ty: ty)),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub struct $s {
            $(pub(super) $option: $ty,)*
        }
        impl $s {
            $(pub fn $option(&self) -> & $ty {
                &self.$option
            })*
        }
    };
}

bitflags::bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct CompilerOptionFlags: u8 {
        const STRICT                    = 1 << 0;
        /// `final val x = 1` gets the type `1` instead of `Int`.
        const INFER_FINAL_SINGLETON     = 1 << 1;
        /// A literal in type position means its singleton without `.type`.
        const BARE_LITERAL_TYPES        = 1 << 2;
        const FOLD_SINGLETON_CALLS      = 1 << 3;
    }
}

normalized_option!(
    NormalizedCompilerOptions,
    (flags, CompilerOptionFlags),
    (limits, Limits),
);

impl Default for NormalizedCompilerOptions {
    fn default() -> Self {
        crate::RawCompilerOptions::default().normalize()
    }
}

impl NormalizedCompilerOptions {
    #[inline(always)]
    pub const fn strict(&self) -> bool {
        self.flags.contains(CompilerOptionFlags::STRICT)
    }

    #[inline(always)]
    pub const fn infer_final_singleton(&self) -> bool {
        self.flags.contains(CompilerOptionFlags::INFER_FINAL_SINGLETON)
    }

    #[inline(always)]
    pub const fn bare_literal_types(&self) -> bool {
        self.flags.contains(CompilerOptionFlags::BARE_LITERAL_TYPES)
    }

    #[inline(always)]
    pub const fn fold_singleton_calls(&self) -> bool {
        self.flags.contains(CompilerOptionFlags::FOLD_SINGLETON_CALLS)
    }

    #[inline(always)]
    pub const fn max_const_eval_depth(&self) -> u32 {
        self.limits.max_const_eval_depth
    }

    #[inline(always)]
    pub const fn max_call_depth(&self) -> u32 {
        self.limits.max_call_depth
    }
}
