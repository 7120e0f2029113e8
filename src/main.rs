use anyhow::Result;

use presentist::{backend, config::Config, logger, ui};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load()?;
    logger::init_file_logging(&config.logging)?;

    let roster_backend = backend::create_backend(&config).await?;

    // Run the TUI application
    ui::run_app(config, roster_backend).await?;

    Ok(())
}
