use std::sync::Arc;

monolit_utils::index!(ModuleID);

impl ModuleID {
    pub const DEFAULT: ModuleID = ModuleID::new(u32::MAX - 1);
}

impl Default for ModuleID {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Span {
    pub lo: u32,
    pub hi: u32,
    pub module: ModuleID,
}

impl Span {
    pub fn new(lo: u32, hi: u32, module: ModuleID) -> Self {
        debug_assert!(lo <= hi);
        Self { lo, hi, module }
    }

    pub fn to(self, other: Span) -> Span {
        debug_assert_eq!(self.module, other.module);
        Span::new(self.lo.min(other.lo), self.hi.max(other.hi), self.module)
    }
}

impl From<Span> for miette::SourceSpan {
    fn from(value: Span) -> Self {
        let len = value.hi - value.lo;
        (value.lo as usize, len as usize).into()
    }
}

impl std::fmt::Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.module.as_u32(), self.lo, self.hi)
    }
}

#[derive(Clone, Debug)]
pub struct Module {
    pub id: ModuleID,
    pub name: String,
}

/// Source text of every compilation unit registered for diagnostics.
#[derive(Default)]
pub struct ModuleArena {
    content_map: Vec<Arc<String>>,
    modules: Vec<Module>,
}

impl ModuleArena {
    pub fn new(cap: usize) -> Self {
        Self {
            content_map: Vec::with_capacity(cap),
            modules: Vec::with_capacity(cap),
        }
    }

    pub fn new_module_with_content(&mut self, name: impl Into<String>, content: String) -> ModuleID {
        let id = ModuleID::new(self.modules.len() as u32);
        self.modules.push(Module {
            id,
            name: name.into(),
        });
        self.content_map.push(Arc::new(content));
        assert_eq!(self.modules.len(), self.content_map.len());
        id
    }

    pub fn get_content(&self, id: ModuleID) -> Option<&Arc<String>> {
        self.content_map.get(id.as_usize())
    }

    pub fn get_module(&self, id: ModuleID) -> Option<&Module> {
        self.modules.get(id.as_usize())
    }

    pub fn modules(&self) -> &[Module] {
        &self.modules
    }
}

#[test]
fn span_to_covers_both_sides() {
    let m = ModuleID::root();
    let a = Span::new(3, 5, m);
    let b = Span::new(1, 4, m);
    assert_eq!(a.to(b), Span::new(1, 5, m));
    assert_eq!(a.to(b).to_string(), "0:1:5");
}
