use std::fs::File;
use std::sync::Arc;

use formup::{BasicWidget, InputGroup, MapContext, TemplateSet, Widget, WidgetConfig};
use simplelog::{Config, LevelFilter, WriteLogger};

fn main() -> std::io::Result<()> {
    // Set up file logging
    let log_file = File::create("addons.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let templates = Arc::new(TemplateSet::default());
    let group = InputGroup::new(
        Box::new(BasicWidget::new(templates.clone())),
        templates,
    );
    let context = MapContext::new().with_value("amount", "19.99");

    let amount = WidgetConfig::new()
        .with("name", "amount")
        .with("prepend", "$")
        .with("append", ".00");
    println!("{}", group.render(&amount, &context).expect("render amount"));

    let search = WidgetConfig::new()
        .with("name", "q")
        .with("placeholder", "Search...")
        .with("append", vec![r#"<button type="submit">Go</button>"#]);
    println!("{}", group.render(&search, &context).expect("render search"));

    let plain = WidgetConfig::new().with("name", "email");
    println!("{}", group.render(&plain, &context).expect("render plain"));

    Ok(())
}
