use clap::Parser;
use tracing::info;

use remapi::{Config, Server, greet, logging};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::parse();
    logging::init(&config.log);

    info!(addr = %config.addr, log = %config.log, "configuration loaded");

    let app = greet::routes()?;
    Server::bind(config.addr).await?.serve(app).await?;

    info!("shutdown complete");
    Ok(())
}
