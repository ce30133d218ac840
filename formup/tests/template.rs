use formup::{RenderError, TemplateSet, TemplateVars};

// ============================================================================
// Substitution
// ============================================================================

#[test]
fn test_basic_substitution() {
    let mut templates = TemplateSet::empty();
    templates.add("label", r#"<label for="{{for}}">{{text}}</label>"#);

    let vars = TemplateVars::new().with("for", "email").with("text", "Email");
    let output = templates.format("label", &vars).unwrap();

    assert_eq!(output, r#"<label for="email">Email</label>"#);
}

#[test]
fn test_unknown_placeholder_substitutes_empty() {
    let mut templates = TemplateSet::empty();
    templates.add("t", "a{{missing}}b");

    let output = templates.format("t", &TemplateVars::new()).unwrap();

    assert_eq!(output, "ab");
}

#[test]
fn test_later_var_wins_on_duplicate_key() {
    let mut templates = TemplateSet::empty();
    templates.add("t", "{{x}}");

    let vars = TemplateVars::new().with("x", "first").with("x", "second");
    assert_eq!(templates.format("t", &vars).unwrap(), "second");
}

#[test]
fn test_unterminated_placeholder_is_emitted_verbatim() {
    let mut templates = TemplateSet::empty();
    templates.add("t", "a{{broken");

    assert_eq!(templates.format("t", &TemplateVars::new()).unwrap(), "a{{broken");
}

#[test]
fn test_repeated_placeholder() {
    let mut templates = TemplateSet::empty();
    templates.add("t", "{{x}} and {{x}}");

    let vars = TemplateVars::new().with("x", "y");
    assert_eq!(templates.format("t", &vars).unwrap(), "y and y");
}

// ============================================================================
// Registry
// ============================================================================

#[test]
fn test_defaults_cover_the_input_group_templates() {
    let templates = TemplateSet::default();

    assert!(templates.get("input").is_some());
    assert!(templates.get("inputGroupAddon").is_some());
    assert!(templates.get("inputGroupContainer").is_some());
}

#[test]
fn test_add_overrides_a_default() {
    let mut templates = TemplateSet::default();
    templates.add("input", "<input>");

    let output = templates.format("input", &TemplateVars::new()).unwrap();
    assert_eq!(output, "<input>");
}

#[test]
fn test_unknown_template_is_an_error() {
    let templates = TemplateSet::empty();
    let err = templates.format("nope", &TemplateVars::new()).unwrap_err();

    match err {
        RenderError::MissingTemplate { name } => assert_eq!(name, "nope"),
        other => panic!("expected MissingTemplate, got {other:?}"),
    }
}
