use std::collections::{HashMap, HashSet};

/// Opaque form state handed through to widgets unchanged.
pub trait FormContext {
    /// Current value for a field, if the form has one.
    fn value(&self, field: &str) -> Option<&str>;

    /// Whether the form's validation rules require the field.
    fn is_required(&self, field: &str) -> bool;
}

/// Map-backed context for tests, demos and standalone rendering.
#[derive(Debug, Clone, Default)]
pub struct MapContext {
    values: HashMap<String, String>,
    required: HashSet<String>,
}

impl MapContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(field.into(), value.into());
        self
    }

    pub fn require(mut self, field: impl Into<String>) -> Self {
        self.required.insert(field.into());
        self
    }
}

impl FormContext for MapContext {
    fn value(&self, field: &str) -> Option<&str> {
        self.values.get(field).map(String::as_str)
    }

    fn is_required(&self, field: &str) -> bool {
        self.required.contains(field)
    }
}
