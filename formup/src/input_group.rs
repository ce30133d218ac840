//! Input group decoration for rendered form controls.
//!
//! Wraps a base widget's markup with optional addon fragments arranged in a
//! Bootstrap style input group. Apart from the standard keys a widget
//! understands, two extra config keys are recognized:
//!
//! - `prepend` Addon markup placed before the input.
//! - `append` Addon markup placed after the input.
//!
//! Addon content is not escaped, so escape untrusted content before putting
//! it in the config.

use std::sync::Arc;

use crate::config::WidgetConfig;
use crate::context::FormContext;
use crate::error::RenderError;
use crate::template::{TemplateSet, TemplateVars};
use crate::value::Value;
use crate::widget::Widget;

/// Addon content attached to one side of an input.
#[derive(Debug, Clone, PartialEq)]
pub enum Addon {
    /// A single markup fragment: icon, text or one button.
    Text(String),
    /// Multiple fragments rendered back to back. Always treated as a button
    /// toolbar, whatever the fragments contain.
    Group(Vec<String>),
}

impl Addon {
    /// Reads an addon out of a config value. Empty values count as absent;
    /// strings and lists convert; anything else is a config error.
    fn from_value(key: &str, value: Value) -> Result<Option<Addon>, RenderError> {
        if !value.is_truthy() {
            return Ok(None);
        }
        match value {
            Value::Str(markup) => Ok(Some(Addon::Text(markup))),
            Value::List(fragments) => Ok(Some(Addon::Group(fragments))),
            other => Err(RenderError::invalid_addon(key, other.kind())),
        }
    }
}

/// Decorates a widget's output with an input group wrapper when addons are
/// present; without addons the inner markup passes through untouched.
pub struct InputGroup {
    inner: Box<dyn Widget>,
    templates: Arc<TemplateSet>,
}

impl InputGroup {
    pub fn new(inner: Box<dyn Widget>, templates: Arc<TemplateSet>) -> Self {
        Self { inner, templates }
    }

    /// Formats one addon via the `inputGroupAddon` template.
    fn addon_markup(&self, addon: &Addon, config: &WidgetConfig) -> Result<String, RenderError> {
        let (class, content) = match addon {
            Addon::Text(markup) => {
                let class = if is_button(markup) {
                    "input-group-btn"
                } else {
                    "input-group-addon"
                };
                (class, markup.clone())
            }
            Addon::Group(fragments) => ("input-group-btn", fragments.concat()),
        };
        log::debug!("[input_group] addon classified as {class}");

        let mut vars = TemplateVars::from_map(config.template_vars());
        vars.set("class", class);
        vars.set("content", content);
        self.templates.format("inputGroupAddon", &vars)
    }
}

impl Widget for InputGroup {
    fn render(
        &self,
        config: &WidgetConfig,
        context: &dyn FormContext,
    ) -> Result<String, RenderError> {
        let mut config = config.clone();

        if config.get_str("type") != Some("hidden") {
            config.inject_classes("form-control");
        }

        // The inner widget must not see the extension keys.
        let prepend = match config.take("prepend") {
            Some(value) => Addon::from_value("prepend", value)?,
            None => None,
        };
        let append = match config.take("append") {
            Some(value) => Addon::from_value("append", value)?,
            None => None,
        };

        let input = self.inner.render(&config, context)?;

        let prepend = match prepend {
            Some(addon) => Some(self.addon_markup(&addon, &config)?),
            None => None,
        };
        let append = match append {
            Some(addon) => Some(self.addon_markup(&addon, &config)?),
            None => None,
        };

        if prepend.is_none() && append.is_none() {
            return Ok(input);
        }
        log::debug!("[input_group] wrapping input in group container");

        let mut vars = TemplateVars::from_map(config.template_vars());
        vars.set("prepend", prepend.unwrap_or_default());
        vars.set("append", append.unwrap_or_default());
        vars.set("content", input);
        self.templates.format("inputGroupContainer", &vars)
    }
}

/// A fragment counts as a button when it opens a `<button` tag or carries a
/// `type="submit"` attribute. Case sensitive substring match.
fn is_button(markup: &str) -> bool {
    markup.contains("<button") || markup.contains(r#"type="submit""#)
}
