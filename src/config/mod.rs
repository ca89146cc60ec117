#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

use crate::domain::model::Language;

/// 依序檢查 LC_ALL、LC_MESSAGES、LANG，取第一個有值的 locale 判斷語言
pub fn detect_language() -> Language {
    ["LC_ALL", "LC_MESSAGES", "LANG"]
        .iter()
        .filter_map(|key| std::env::var(key).ok())
        .find(|value| !value.trim().is_empty())
        .map(|locale| Language::from_locale(&locale))
        .unwrap_or_default()
}
