use crate::config::detect_language;
use crate::core::ConfigProvider;
use crate::domain::model::{Language, RawInput};
use crate::domain::ports::OutputFormat;
use crate::utils::error::{NumerologyError, Result};
use crate::utils::validation::{validate_required_input, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub report: Option<ReportSettings>,
    pub person: PersonConfig,
    pub partner: Option<PersonConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportSettings {
    pub language: Option<String>,
    pub format: Option<String>,
    pub certificate: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PersonConfig {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub date_of_birth: String,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| NumerologyError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${ASHA_DOB})，找不到的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| NumerologyError::ConfigValidationError {
            field: "environment".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    fn settings(&self) -> ReportSettings {
        self.report.clone().unwrap_or_default()
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        validate_required_input("person.name", &self.person.name)?;
        validate_required_input("person.date_of_birth", &self.person.date_of_birth)?;

        let settings = self.settings();
        if let Some(language) = &settings.language {
            language.parse::<Language>()?;
        }
        if let Some(format) = &settings.format {
            format.parse::<OutputFormat>()?;
        }

        if let Some(partner) = &self.partner {
            let name_set = !partner.name.trim().is_empty();
            let dob_set = !partner.date_of_birth.trim().is_empty();
            if name_set != dob_set {
                tracing::warn!("[partner] needs both name and date_of_birth, compatibility will be skipped");
            }
        }

        Ok(())
    }
}

impl ConfigProvider for TomlConfig {
    fn raw_input(&self) -> RawInput {
        RawInput {
            name: self.person.name.clone(),
            date_of_birth: self.person.date_of_birth.clone(),
            partner_name: self.partner.as_ref().map(|p| p.name.clone()),
            partner_dob: self.partner.as_ref().map(|p| p.date_of_birth.clone()),
        }
    }

    fn language(&self) -> Language {
        self.settings()
            .language
            .and_then(|l| l.parse().ok())
            .unwrap_or_else(detect_language)
    }

    fn output_format(&self) -> OutputFormat {
        self.settings()
            .format
            .and_then(|f| f.parse().ok())
            .unwrap_or_default()
    }

    fn certificate(&self) -> bool {
        self.settings().certificate.unwrap_or(false)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
