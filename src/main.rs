use anyhow::{Context, Result};
use docshell::Config;
use tracing_subscriber::EnvFilter;

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let config = Config::parse();
    init_tracing(&config);
    config.validate().context("Invalid configuration")?;

    let report = docshell::generate_site(&config).context("Failed to generate site")?;
    println!(
        "Generated {} pages in {}",
        report.page_count(),
        config.output.display()
    );

    let index_path = config.output.join("index.html");
    if !config.no_open
        && index_path.exists()
        && let Err(e) = open::that(&index_path)
    {
        tracing::warn!(path = %index_path.display(), "Failed to open browser: {}", e);
    }

    Ok(())
}
