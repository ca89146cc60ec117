use crate::adapters::render::renderer_for;
use crate::core::certificate::{issue_certificate, serial_from_seed};
use crate::core::engine::generate_report;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use chrono::NaiveDate;

/// Serial number and issue date stamped on a certificate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CertificateStamp {
    pub serial: u32,
    pub issued_on: NaiveDate,
}

impl CertificateStamp {
    /// 序號取自目前時間的奈秒，日期用本地日期
    pub fn now() -> Self {
        let now = chrono::Local::now();
        Self {
            serial: serial_from_seed(u64::from(now.timestamp_subsec_nanos())),
            issued_on: now.date_naive(),
        }
    }
}

/// Runs one report request end to end: input from the config, text out.
pub struct ReportEngine<C: ConfigProvider> {
    config: C,
}

impl<C: ConfigProvider> ReportEngine<C> {
    pub fn new(config: C) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    pub fn run(&self) -> Result<String> {
        self.run_with_stamp(CertificateStamp::now())
    }

    pub fn run_with_stamp(&self, stamp: CertificateStamp) -> Result<String> {
        let lang = self.config.language();
        let format = self.config.output_format();
        tracing::info!("Generating report (language: {}, format: {:?})", lang, format);

        let report = generate_report(&self.config.raw_input(), lang)?;
        let renderer = renderer_for(format);
        let mut output = renderer.render_report(&report)?;

        if self.config.certificate() {
            let certificate = issue_certificate(&report, stamp.serial, stamp.issued_on)?;
            tracing::info!("Issued certificate {}", certificate.serial);
            output.push('\n');
            output.push_str(&renderer.render_certificate(&certificate, lang)?);
        }

        Ok(output)
    }
}
