/// Hands out element id bases (`monthpicker-0`, `monthpicker-1`, ...).
/// Each generator counts on its own; share one per page or host.
#[derive(Clone, Debug)]
pub struct IdGenerator {
    prefix: String,
    next: u64,
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::with_prefix("monthpicker")
    }
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self { prefix: prefix.into(), next: 0 }
    }

    pub fn next_id(&mut self) -> String {
        let id = format!("{}-{}", self.prefix, self.next);
        self.next += 1;
        id
    }
}

/// Element ids for one selector's controls, derived from a base id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ControlIds {
    pub base: String,
    pub month: String,
    pub year: String,
    pub first: String,
    pub prev: String,
    pub next: String,
    pub last: String,
}

impl ControlIds {
    pub fn from_base(base: impl Into<String>) -> Self {
        let base = base.into();
        Self {
            month: format!("{base}-month"),
            year: format!("{base}-year"),
            first: format!("{base}-first"),
            prev: format!("{base}-prev"),
            next: format!("{base}-next"),
            last: format!("{base}-last"),
            base,
        }
    }
}
