use anyhow::Result;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use sftpwatch_client::StatusClient;
use sftpwatch_common::Config;
use sftpwatch_console::{run, MessagePanel};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("sftpwatch=info".parse()?))
        .init();

    let config = Config::console_from_env();

    let client = StatusClient::new(&config.base_url);
    let mut panel = MessagePanel::new();

    info!(base_url = %config.base_url, "Fetching service status");

    if let Err(e) = run(&client, &mut panel).await {
        error!(error = %e, "Status request failed");
        std::process::exit(1);
    }

    println!("{}", panel.render());

    Ok(())
}
