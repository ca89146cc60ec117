use crate::domain::model::{Certificate, Language, RawInput, Report};
use crate::utils::error::{NumerologyError, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = NumerologyError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(NumerologyError::InvalidConfigValueError {
                field: "format".to_string(),
                value: other.to_string(),
                reason: "Supported formats: text, json".to_string(),
            }),
        }
    }
}

/// Where a report request comes from (command line flags, TOML file).
pub trait ConfigProvider {
    fn raw_input(&self) -> RawInput;
    fn language(&self) -> Language;
    fn output_format(&self) -> OutputFormat;
    fn certificate(&self) -> bool;
}

/// Presentation of a finished report.
pub trait ReportRenderer {
    fn render_report(&self, report: &Report) -> Result<String>;
    fn render_certificate(&self, certificate: &Certificate, lang: Language) -> Result<String>;
}
