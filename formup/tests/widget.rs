use std::sync::Arc;

use formup::{BasicWidget, MapContext, TemplateSet, Widget, WidgetConfig};

fn widget() -> BasicWidget {
    BasicWidget::new(Arc::new(TemplateSet::default()))
}

#[test]
fn test_type_defaults_to_text() {
    let output = widget()
        .render(&WidgetConfig::new().with("name", "q"), &MapContext::new())
        .unwrap();

    assert_eq!(output, r#"<input type="text" name="q">"#);
}

#[test]
fn test_explicit_type_is_kept() {
    let config = WidgetConfig::new().with("name", "pw").with("type", "password");
    let output = widget().render(&config, &MapContext::new()).unwrap();

    assert_eq!(output, r#"<input type="password" name="pw">"#);
}

#[test]
fn test_value_is_filled_from_context() {
    let context = MapContext::new().with_value("email", "a@b.c");
    let output = widget()
        .render(&WidgetConfig::new().with("name", "email"), &context)
        .unwrap();

    assert_eq!(output, r#"<input type="text" name="email" value="a@b.c">"#);
}

#[test]
fn test_explicit_value_beats_context_value() {
    let context = MapContext::new().with_value("email", "from-context");
    let config = WidgetConfig::new().with("name", "email").with("value", "explicit");
    let output = widget().render(&config, &context).unwrap();

    assert!(output.contains(r#"value="explicit""#));
    assert!(!output.contains("from-context"));
}

#[test]
fn test_required_is_filled_from_context() {
    let context = MapContext::new().require("email");
    let output = widget()
        .render(&WidgetConfig::new().with("name", "email"), &context)
        .unwrap();

    assert_eq!(output, r#"<input type="text" name="email" required>"#);
}

#[test]
fn test_template_vars_reach_the_input_template() {
    let mut templates = TemplateSet::default();
    templates.add("input", r#"<input type="{{type}}" name="{{name}}"{{attrs}}>{{help}}"#);
    let widget = BasicWidget::new(Arc::new(templates));

    let vars: std::collections::HashMap<String, String> =
        [("help".to_string(), "<small>hint</small>".to_string())].into();
    let config = WidgetConfig::new().with("name", "q").with("templateVars", vars);
    let output = widget.render(&config, &MapContext::new()).unwrap();

    assert!(output.ends_with("<small>hint</small>"));
}
