pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::toml_config::TomlConfig;
pub use crate::core::engine::generate_report;
pub use crate::core::report_engine::{CertificateStamp, ReportEngine};
pub use crate::domain::model::{Language, RawInput, Report};
pub use crate::utils::error::{NumerologyError, Result};
