use anyhow::Result;
use rentdesk::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let config = ServerConfig::load()?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_filter))?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!(
        invoice_amount = config.billing.invoice_amount,
        "Starting rentdesk v{}",
        env!("CARGO_PKG_VERSION")
    );

    ServerBuilder::from_config(&config)
        .serve(&config.bind_address())
        .await
}
