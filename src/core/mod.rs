pub mod advice;
pub mod calculators;
pub mod certificate;
pub mod compatibility;
pub mod engine;
pub mod interpretation;
pub mod reduction;
pub mod report_engine;

pub use crate::domain::model::{Language, RawInput, ReducedNumber, Report};
pub use crate::domain::ports::{ConfigProvider, OutputFormat, ReportRenderer};
pub use crate::utils::error::Result;
