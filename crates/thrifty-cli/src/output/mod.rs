use thrifty_config::OutputFormat;
use thrifty_model::Document;

mod summary;

pub use summary::Summary;

/// Render a document in the requested format.
pub fn render(document: &Document, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(document)?),
        OutputFormat::Raw => Ok(serde_json::to_string(document)?),
        OutputFormat::Summary => Ok(Summary(document).to_string()),
    }
}
