//! Renderer module
//!
//! Renders a ScanReport for stdout: text (nothing), jsonl, json

use crate::core::model::ScanReport;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Warnings on stderr only
    #[default]
    Text,
    Jsonl,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "jsonl" => Ok(OutputFormat::Jsonl),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

/// Render configuration combining format and options
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderConfig {
    pub format: OutputFormat,
    pub pretty: bool,
}

impl RenderConfig {
    pub fn with_pretty(format: OutputFormat, pretty: bool) -> Self {
        Self { format, pretty }
    }
}

/// Renderer for scan reports
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    pub fn with_config(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Render the stdout part of a report, if the format has one
    pub fn render(&self, report: &ScanReport) -> Option<String> {
        match self.config.format {
            OutputFormat::Text => None,
            OutputFormat::Jsonl => Some(self.render_jsonl(report)),
            OutputFormat::Json => Some(self.render_json(report)),
        }
    }

    /// One JSON finding per line
    fn render_jsonl(&self, report: &ScanReport) -> String {
        report
            .findings
            .iter()
            .filter_map(|finding| {
                if self.config.pretty {
                    serde_json::to_string_pretty(finding).ok()
                } else {
                    serde_json::to_string(finding).ok()
                }
            })
            .collect::<Vec<_>>()
            .join(if self.config.pretty { "\n\n" } else { "\n" })
    }

    /// The whole report as a single JSON document
    fn render_json(&self, report: &ScanReport) -> String {
        if self.config.pretty {
            serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string())
        } else {
            serde_json::to_string(report).unwrap_or_else(|_| "{}".to_string())
        }
    }
}
