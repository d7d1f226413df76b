use anyhow::Result;
use tracing_subscriber::EnvFilter;
use tracsis::commands::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    // Structured logging is opt-in; the message macros fall back to plain
    // console output when neither variable is set.
    if std::env::var("TRACSIS_DEBUG").is_ok() || std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
            .init();
    }

    Cli::menu().await
}
