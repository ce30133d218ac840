use std::collections::HashMap;

use crate::value::Value;

/// Option key holding the `templateVars` map.
pub const TEMPLATE_VARS: &str = "templateVars";

/// Option map for a single widget render call.
///
/// Built by the caller per call and consumed within it. Apart from the keys
/// a widget understands (`type`, `name`, `value`, ...) the input group
/// decorator recognizes the two extension keys `prepend` and `append`.
#[derive(Debug, Clone, Default)]
pub struct WidgetConfig {
    options: HashMap<String, Value>,
}

impl WidgetConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.options.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.options.get(key)
    }

    /// String value of an option, `None` for absent or non-string options.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.options.get(key).and_then(Value::as_str)
    }

    /// Removes an option and returns its value.
    pub fn take(&mut self, key: &str) -> Option<Value> {
        self.options.remove(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.options.contains_key(key)
    }

    /// Current CSS class list. A string-valued `class` option is split on
    /// whitespace; a list-valued one is taken as is.
    pub fn classes(&self) -> Vec<String> {
        match self.options.get("class") {
            Some(Value::Str(s)) => s.split_whitespace().map(str::to_string).collect(),
            Some(Value::List(items)) => items.clone(),
            _ => Vec::new(),
        }
    }

    /// Appends each space-separated class to the `class` option unless it is
    /// already present. Additive and idempotent.
    pub fn inject_classes(&mut self, classes: &str) {
        let mut current = self.classes();
        for class in classes.split_whitespace() {
            if !current.iter().any(|c| c == class) {
                log::debug!("[config] injecting class {class}");
                current.push(class.to_string());
            }
        }
        if !current.is_empty() {
            self.options
                .insert("class".to_string(), Value::Str(current.join(" ")));
        }
    }

    /// The `templateVars` map option, empty when absent.
    pub fn template_vars(&self) -> HashMap<String, String> {
        match self.options.get(TEMPLATE_VARS) {
            Some(Value::Map(map)) => map.clone(),
            _ => HashMap::new(),
        }
    }

    /// Renders the remaining options as HTML attributes.
    ///
    /// Keys in `exclude` and `templateVars` are skipped, as are list and map
    /// values. `Flag(true)` renders as a boolean attribute, `Flag(false)` is
    /// omitted. Keys are sorted so output is deterministic. Attribute values
    /// are escaped; the returned string starts with a space when non-empty.
    pub fn attribute_string(&self, exclude: &[&str]) -> String {
        let mut keys: Vec<&String> = self
            .options
            .keys()
            .filter(|k| k.as_str() != TEMPLATE_VARS && !exclude.contains(&k.as_str()))
            .collect();
        keys.sort();

        let mut out = String::new();
        for key in keys {
            match &self.options[key] {
                Value::Str(value) => {
                    out.push(' ');
                    out.push_str(key);
                    out.push_str("=\"");
                    out.push_str(&escape_attr(value));
                    out.push('"');
                }
                Value::Flag(true) => {
                    out.push(' ');
                    out.push_str(key);
                }
                Value::Flag(false) | Value::List(_) | Value::Map(_) => {}
            }
        }
        out
    }
}

/// Minimal escaping for attribute values. Addon markup and template bodies
/// pass through verbatim; only attribute values go through here.
fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}
