use crate::config::detect_language;
use crate::core::ConfigProvider;
use crate::domain::model::{Language, RawInput};
use crate::domain::ports::OutputFormat;
use crate::utils::error::Result;
use crate::utils::validation::{validate_required_input, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "numerology")]
#[command(about = "Numerology profile report from a name and date of birth")]
pub struct CliConfig {
    #[arg(long, default_value = "", help = "Full name")]
    pub name: String,

    #[arg(long, default_value = "", help = "Date of birth, e.g. 1990-01-01")]
    pub dob: String,

    #[arg(long, help = "Partner name for compatibility")]
    pub partner_name: Option<String>,

    #[arg(long, help = "Partner date of birth for compatibility")]
    pub partner_dob: Option<String>,

    #[arg(long, value_enum, help = "Report language (defaults to the system locale)")]
    pub lang: Option<Language>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[arg(long, help = "Append a numbered certificate")]
    pub certificate: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn raw_input(&self) -> RawInput {
        RawInput {
            name: self.name.clone(),
            date_of_birth: self.dob.clone(),
            partner_name: self.partner_name.clone(),
            partner_dob: self.partner_dob.clone(),
        }
    }

    fn language(&self) -> Language {
        self.lang.unwrap_or_else(detect_language)
    }

    fn output_format(&self) -> OutputFormat {
        self.format
    }

    fn certificate(&self) -> bool {
        self.certificate
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_required_input("name", &self.name)?;
        validate_required_input("date_of_birth", &self.dob)?;
        Ok(())
    }
}
