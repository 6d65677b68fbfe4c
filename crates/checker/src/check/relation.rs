use super::TyChecker;
use crate::ty::{self, IntrinsicTyKind, SingletonTy};

impl<'cx> TyChecker<'cx> {
    /// Singleton identity. Interning makes this agree with pointer identity.
    pub fn types_equal(&self, s1: &'cx ty::Ty<'cx>, s2: &'cx ty::Ty<'cx>) -> bool {
        match (s1.as_singleton(), s2.as_singleton()) {
            (Some(SingletonTy::Lit(a)), Some(SingletonTy::Lit(b))) => a.id == b.id,
            (Some(SingletonTy::Path(a)), Some(SingletonTy::Path(b))) => a.symbol() == b.symbol(),
            (None, None) => s1.id == s2.id,
            _ => false,
        }
    }

    #[tracing::instrument(level = "trace", skip_all, fields(source = s.id.as_u32(), target = t.id.as_u32()), ret)]
    pub fn is_subtype(&mut self, s: &'cx ty::Ty<'cx>, t: &'cx ty::Ty<'cx>) -> bool {
        if s.id == t.id {
            return true;
        }
        if let Some(res) = self.subtype_cache.get(&(s.id, t.id)).copied() {
            return res;
        }
        let res = self.structured_is_subtype(s, t);
        self.subtype_cache.insert((s.id, t.id), res);
        res
    }

    pub fn is_assignable(&mut self, source: &'cx ty::Ty<'cx>, target: &'cx ty::Ty<'cx>) -> bool {
        self.is_subtype(source, target)
    }

    fn structured_is_subtype(&mut self, s: &'cx ty::Ty<'cx>, t: &'cx ty::Ty<'cx>) -> bool {
        if s.is_error() || t.is_error() || s.is_nothing() || t.is_any() {
            return true;
        }
        match (s.is_singleton(), t.is_singleton()) {
            (true, true) => self.types_equal(s, t),
            (true, false) => {
                let widened = self.widen(s);
                widened != s && self.is_subtype(widened, t)
            }
            (false, true) => false,
            (false, false) => match (s.intrinsic_kind(), t.intrinsic_kind()) {
                (Some(a), Some(b)) => is_intrinsic_subtype(a, b),
                _ => false,
            },
        }
    }

    /// Least upper bound used to join match arms.
    pub fn get_lub(&mut self, a: &'cx ty::Ty<'cx>, b: &'cx ty::Ty<'cx>) -> &'cx ty::Ty<'cx> {
        let mut a = a;
        let mut b = b;
        loop {
            if self.is_subtype(a, b) {
                return b;
            } else if self.is_subtype(b, a) {
                return a;
            }
            let wa = self.widen(a);
            let wb = self.widen(b);
            if wa == a && wb == b {
                return self.any_ty;
            }
            a = wa;
            b = wb;
        }
    }
}

fn is_intrinsic_subtype(s: IntrinsicTyKind, t: IntrinsicTyKind) -> bool {
    use IntrinsicTyKind::*;
    s == t
        || matches!((s, t), (_, Any) | (Nothing, _) | (Null, String) | (Error, _) | (_, Error))
}
