//! Renders query matches for the command line tool.
use crate::config::OutputFormat;
use serde_json::Value;

/// Serializes `matches` in the requested format. The result carries no
/// trailing newline.
pub fn render(matches: &[&Value], format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Array => serde_json::to_string(matches),
        OutputFormat::Pretty => serde_json::to_string_pretty(matches),
        OutputFormat::Lines => {
            let lines = matches
                .iter()
                .map(|value| serde_json::to_string(value))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(lines.join("\n"))
        }
    }
}
