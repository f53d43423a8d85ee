pub mod commands;
pub mod ui;

pub use ui::Output;

/// Report output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Config dump format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConfigFormat {
    #[default]
    Yaml,
    Json,
}

/// Parse an output format from a CLI argument
pub fn parse_output_format(s: &str) -> Result<OutputFormat, String> {
    match s.to_lowercase().as_str() {
        "text" => Ok(OutputFormat::Text),
        "json" => Ok(OutputFormat::Json),
        _ => Err(format!("Invalid format '{}'. Valid values: text, json", s)),
    }
}

/// Parse a config dump format from a CLI argument
pub fn parse_config_format(s: &str) -> Result<ConfigFormat, String> {
    match s.to_lowercase().as_str() {
        "yaml" => Ok(ConfigFormat::Yaml),
        "json" => Ok(ConfigFormat::Json),
        _ => Err(format!("Invalid format '{}'. Valid values: yaml, json", s)),
    }
}
