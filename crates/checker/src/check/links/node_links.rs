use super::links;
use crate::check::{InhabitantWitness, Sig};
use crate::ty;

links!(
    NodeLinks,
    (resolved_ty, &'cx ty::Ty<'cx>),
    (resolved_sig, &'cx Sig<'cx>),
    (inhabitant, InhabitantWitness<'cx>),
);
