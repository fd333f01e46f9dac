use stint::commands::Cli;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Structured logging only when explicitly requested; normal runs keep
    // the console output to the message macros.
    if std::env::var("RUST_LOG").is_ok() || std::env::var("STINT_DEBUG").is_ok() {
        tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();
    }

    Cli::menu().await
}
