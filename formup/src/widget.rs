//! Widget trait for form control rendering.
//!
//! Widgets take a per-call option map and the current form context and
//! produce markup. The trait is object safe so decorators can hold a
//! `Box<dyn Widget>` and delegate explicitly.

use std::sync::Arc;

use crate::config::WidgetConfig;
use crate::context::FormContext;
use crate::error::RenderError;
use crate::template::{TemplateSet, TemplateVars};

/// A unit of form control rendering logic.
pub trait Widget {
    /// Renders the widget described by `config` against `context`.
    fn render(&self, config: &WidgetConfig, context: &dyn FormContext)
        -> Result<String, RenderError>;
}

/// Base `<input>` renderer.
///
/// Defaults `type` to `"text"`, fills `value` and `required` from the form
/// context when the config names a field, and renders via the `input`
/// template with the remaining options as attributes.
#[derive(Debug, Clone)]
pub struct BasicWidget {
    templates: Arc<TemplateSet>,
}

impl BasicWidget {
    pub fn new(templates: Arc<TemplateSet>) -> Self {
        Self { templates }
    }
}

impl Widget for BasicWidget {
    fn render(
        &self,
        config: &WidgetConfig,
        context: &dyn FormContext,
    ) -> Result<String, RenderError> {
        let mut config = config.clone();
        if !config.contains("type") {
            config.set("type", "text");
        }
        if let Some(name) = config.get_str("name").map(str::to_string) {
            if !config.contains("value") {
                if let Some(value) = context.value(&name) {
                    config.set("value", value);
                }
            }
            if !config.contains("required") && context.is_required(&name) {
                config.set("required", true);
            }
        }

        let mut vars = TemplateVars::from_map(config.template_vars());
        vars.set("type", config.get_str("type").unwrap_or_default());
        vars.set("name", config.get_str("name").unwrap_or_default());
        vars.set("attrs", config.attribute_string(&["type", "name"]));
        self.templates.format("input", &vars)
    }
}
