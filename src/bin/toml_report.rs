use clap::Parser;
use numerology_engine::core::{ConfigProvider, OutputFormat};
use numerology_engine::domain::model::Language;
use numerology_engine::utils::{logger, validation::Validate};
use numerology_engine::{ReportEngine, TomlConfig};

#[derive(Parser)]
#[command(name = "toml-report")]
#[command(about = "Numerology report from a TOML request file")]
struct Args {
    /// Path to TOML request file
    #[arg(short, long, default_value = "numerology.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Log as JSON lines instead of compact text
    #[arg(long)]
    json_logs: bool,

    /// Override the language from the file
    #[arg(long, value_enum)]
    lang: Option<Language>,

    /// Override the output format from the file
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Dry run - show the request without computing a report
    #[arg(long)]
    dry_run: bool,
}

fn main() {
    let args = Args::parse();

    // 初始化日誌
    if args.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(args.verbose);
    }

    tracing::info!("📁 Loading request from: {}", args.config);

    // 載入 TOML 配置
    let mut config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    // 應用命令列覆蓋設定
    if args.lang.is_some() || args.format.is_some() {
        let mut settings = config.report.clone().unwrap_or_default();
        if let Some(lang) = args.lang {
            settings.language = Some(lang.code().to_string());
            tracing::info!("🔧 Language overridden to: {}", lang);
        }
        if let Some(format) = args.format {
            settings.format = Some(match format {
                OutputFormat::Text => "text".to_string(),
                OutputFormat::Json => "json".to_string(),
            });
            tracing::info!("🔧 Format overridden to: {:?}", format);
        }
        config.report = Some(settings);
    }

    let lang = config.language();

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message(lang));
        std::process::exit(1);
    }

    if args.dry_run {
        display_request_summary(&config);
        return;
    }

    let engine = ReportEngine::new(config);
    match engine.run() {
        Ok(output) => print!("{}", output),
        Err(e) => {
            tracing::error!(
                "❌ Report failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message(lang));
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    }
}

fn display_request_summary(config: &TomlConfig) {
    let input = config.raw_input();
    println!("📋 Request Summary:");
    println!("  Name: {}", input.name.trim());
    println!("  Date of birth: {}", input.date_of_birth.trim());
    match input.partner() {
        Some((name, dob)) => println!("  Partner: {} ({})", name, dob),
        None => println!("  Partner: -"),
    }
    println!("  Language: {}", config.language());
    println!("  Format: {:?}", config.output_format());
    println!("  Certificate: {}", config.certificate());
}
