//! Render error types.

/// Errors that can occur while rendering a widget.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// A template name was requested that the template set does not define.
    #[error("unknown template: {name}")]
    MissingTemplate {
        /// Name the formatter was asked for.
        name: String,
    },

    /// An addon option held a value that is neither a markup string nor a
    /// fragment list.
    #[error("invalid `{key}` addon: expected markup string or fragment list, found {found}")]
    InvalidAddon {
        /// Config key the value was read from (`prepend` or `append`).
        key: String,
        /// Type label of the rejected value.
        found: &'static str,
    },
}

impl RenderError {
    /// Creates a missing template error.
    pub fn missing_template(name: impl Into<String>) -> Self {
        Self::MissingTemplate { name: name.into() }
    }

    /// Creates an invalid addon error.
    pub fn invalid_addon(key: impl Into<String>, found: &'static str) -> Self {
        Self::InvalidAddon {
            key: key.into(),
            found,
        }
    }
}
