use anyhow::Result;
use ratakit::config::Config;
use ratakit::logger::init_file_logging;
use ratakit::ui;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load()?;

    if config.logging.enabled {
        init_file_logging()?;
        log::info!("starting showcase");
    }

    ui::run_app(config).await?;

    Ok(())
}
