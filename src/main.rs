use clap::Parser;
use numerology_engine::core::ConfigProvider;
use numerology_engine::utils::error::ErrorSeverity;
use numerology_engine::utils::{logger, validation::Validate};
use numerology_engine::{CliConfig, ReportEngine};

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting numerology CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let lang = config.language();

    // 驗證輸入
    if let Err(e) = config.validate() {
        tracing::error!("❌ Input validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message(lang));
        std::process::exit(exit_code(e.severity()));
    }

    let engine = ReportEngine::new(config);

    match engine.run() {
        Ok(output) => {
            print!("{}", output);
        }
        Err(e) => {
            tracing::error!(
                "❌ Report failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message(lang));
            eprintln!("💡 {}", e.recovery_suggestion());

            std::process::exit(exit_code(e.severity()));
        }
    }
}

// 根據錯誤嚴重程度決定退出碼
fn exit_code(severity: ErrorSeverity) -> i32 {
    match severity {
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use numerology_engine::NumerologyError;

    #[test]
    fn test_exit_code_by_severity() {
        assert_eq!(exit_code(NumerologyError::missing("name").severity()), 2);
        assert_eq!(exit_code(ErrorSeverity::High), 1);
        assert_eq!(exit_code(ErrorSeverity::Critical), 3);
    }
}
