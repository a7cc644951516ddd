use thrifty_model::Document;

/// Handle `thrifty schema`.
pub fn handle() -> anyhow::Result<()> {
    println!("{}", render()?);
    Ok(())
}

fn render() -> anyhow::Result<String> {
    let schema = schemars::schema_for!(Document);
    Ok(serde_json::to_string_pretty(&schema)?)
}
