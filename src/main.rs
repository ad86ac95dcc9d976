// badgedex entry point.
// Loads configuration, sets up logging and the terminal, and runs the app.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use badgedex::app::App;
use badgedex::catalog::CatalogCache;
use badgedex::error::Result;
use badgedex::github::GitHubClient;

/// Initialize tracing. Logs go to the file named by BADGEDEX_LOG; without
/// it the filter is installed with no output layer so the TUI stays clean.
fn init_logging() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if let Ok(log_path) = std::env::var("BADGEDEX_LOG") {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();
    } else {
        tracing_subscriber::registry().with(filter).init();
    }

    Ok(())
}

async fn run() -> Result<()> {
    dotenvy::dotenv().ok();
    init_logging()?;

    let client = GitHubClient::from_env()?;

    let mut terminal = ratatui::init();
    let mut app = App::new(client, CatalogCache::new());
    let result = app.run(&mut terminal).await;
    ratatui::restore();

    result
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
