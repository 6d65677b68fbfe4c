/// An `f64` compared and hashed by its bit pattern.
#[derive(Debug, Clone, Copy)]
pub struct F64Represent {
    inner: u64,
}

impl PartialEq for F64Represent {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl Eq for F64Represent {}

impl std::hash::Hash for F64Represent {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.inner.hash(state);
    }
}

impl F64Represent {
    pub fn new(val: f64) -> Self {
        Self {
            inner: val.to_bits(),
        }
    }

    pub fn val(&self) -> f64 {
        f64::from_bits(self.inner)
    }
}

impl From<f64> for F64Represent {
    fn from(val: f64) -> Self {
        F64Represent::new(val)
    }
}

impl From<F64Represent> for f64 {
    fn from(val: F64Represent) -> Self {
        f64::from_bits(val.inner)
    }
}

#[test]
fn signed_zeros_are_distinct() {
    assert_ne!(F64Represent::new(0.0), F64Represent::new(-0.0));
    assert_eq!(F64Represent::new(f64::NAN), F64Represent::new(f64::NAN));
    assert_eq!(F64Represent::new(1.5).val(), 1.5);
}
