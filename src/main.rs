//! Lectern Console - Academic Content Management
//!
//! Terminal administration console for the Lectern backend.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lectern_console::{config::AppConfig, console::shell::Shell, Console};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load()?;

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("lectern_console={}", config.logging.level).into());

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Lectern console v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Backend at {}", config.backend.base_url);

    let console = Console::new(config);

    // `lectern-console dashboard` prints the summary once and exits;
    // with no argument the interactive shell starts.
    if std::env::args().nth(1).as_deref() == Some("dashboard") {
        let summary = console.dashboard.overview().await?;
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    Shell::new(console).run().await?;
    Ok(())
}
