//! Named markup templates with `{{key}}` placeholder substitution.

use std::collections::HashMap;

use crate::error::RenderError;

/// Substitution values for a single `format` call.
///
/// An ordered list of key/value pairs; on duplicate keys the later entry
/// wins, so explicit values set after a `templateVars` import take
/// precedence.
#[derive(Debug, Clone, Default)]
pub struct TemplateVars {
    vars: Vec<(String, String)>,
}

impl TemplateVars {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the vars from a caller-supplied `templateVars` map.
    pub fn from_map(map: HashMap<String, String>) -> Self {
        let mut vars = Self::new();
        for (key, value) in map {
            vars.set(key, value);
        }
        vars
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.vars.push((key.into(), value.into()));
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// A registry of named markup templates.
///
/// The defaults carry the Bootstrap input group markup the decorator
/// targets; callers can override any entry with [`TemplateSet::add`].
#[derive(Debug, Clone)]
pub struct TemplateSet {
    templates: HashMap<String, String>,
}

impl Default for TemplateSet {
    fn default() -> Self {
        let mut set = Self::empty();
        set.add("input", r#"<input type="{{type}}" name="{{name}}"{{attrs}}>"#);
        set.add(
            "inputGroupAddon",
            r#"<span class="{{class}}">{{content}}</span>"#,
        );
        set.add(
            "inputGroupContainer",
            r#"<div class="input-group">{{prepend}}{{content}}{{append}}</div>"#,
        );
        set
    }
}

impl TemplateSet {
    /// The default Bootstrap-flavored template set.
    pub fn new() -> Self {
        Self::default()
    }

    /// A set with no templates registered.
    pub fn empty() -> Self {
        Self {
            templates: HashMap::new(),
        }
    }

    /// Registers or overrides a template.
    pub fn add(&mut self, name: impl Into<String>, template: impl Into<String>) {
        self.templates.insert(name.into(), template.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.templates.get(name).map(String::as_str)
    }

    /// Formats a named template. Placeholders with no matching var
    /// substitute as the empty string; an unknown template name is an error.
    pub fn format(&self, name: &str, vars: &TemplateVars) -> Result<String, RenderError> {
        let template = self
            .templates
            .get(name)
            .ok_or_else(|| RenderError::missing_template(name))?;
        log::trace!("[template] formatting {name}");
        Ok(substitute(template, vars))
    }
}

fn substitute(template: &str, vars: &TemplateVars) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        match after.find("}}") {
            Some(end) => {
                if let Some(value) = vars.get(&after[..end]) {
                    out.push_str(value);
                }
                rest = &after[end + 2..];
            }
            None => {
                // Unterminated placeholder, emit verbatim.
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}
