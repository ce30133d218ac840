pub mod config;
pub mod context;
pub mod error;
pub mod input_group;
pub mod template;
pub mod value;
pub mod widget;

pub use config::WidgetConfig;
pub use context::{FormContext, MapContext};
pub use error::RenderError;
pub use input_group::{Addon, InputGroup};
pub use template::{TemplateSet, TemplateVars};
pub use value::Value;
pub use widget::{BasicWidget, Widget};
