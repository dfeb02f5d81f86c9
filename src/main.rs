use clap::Parser;
use franchise_app::core::ConfigProvider;
use franchise_app::utils::error::ErrorSeverity;
use franchise_app::utils::{logger, validation::Validate};
use franchise_app::{server, CliConfig, TomlConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 指定設定檔時以檔案為準
    let toml_config = match cli.config.as_deref().map(TomlConfig::from_file) {
        Some(Ok(config)) => Some(config),
        Some(Err(e)) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 建議: {}", e.recovery_suggestion());
            std::process::exit(1);
        }
        None => None,
    };
    let config: &dyn ConfigProvider = match &toml_config {
        Some(config) => config,
        None => &cli,
    };

    logger::init_logger(
        cli.verbose || config.verbose(),
        config.log_level(),
        cli.json_logs || config.json_logs(),
    );

    tracing::info!("Starting franchise-app");
    tracing::debug!("CLI config: {:?}", cli);

    let validation = match &toml_config {
        Some(config) => config.validate(),
        None => cli.validate(),
    };
    if let Err(e) = validation {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let app = match server::build_app(config) {
        Ok(app) => app,
        Err(e) => {
            tracing::error!(
                "❌ Failed to open document store: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 建議: {}", e.recovery_suggestion());
            let exit_code = match e.severity() {
                ErrorSeverity::Critical => 3,
                _ => 1,
            };
            std::process::exit(exit_code);
        }
    };

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    server::serve(listener, app).await?;

    Ok(())
}
