//! Singleton types for Monolit: literal and path singletons, their interning,
//! subtyping, inhabitant extraction and the purity gate used by the folder.

mod check;
mod intern;
pub mod ops;
mod path;
pub mod ty;

pub use self::check::errors;
pub use self::check::{InhabitantWitness, Sig, SingletonOperand, TyChecker};
pub use self::intern::InternCache;
pub use self::path::{PathRef, resolve_path};
