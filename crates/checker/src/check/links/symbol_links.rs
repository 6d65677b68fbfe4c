use super::links;
use crate::ty;

links!(
    SymbolLinks,
    (ty, &'cx ty::Ty<'cx>),
    (declared_ty, &'cx ty::Ty<'cx>),
);
