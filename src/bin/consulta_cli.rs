use clap::Parser;
use consulta_ventas::client::cli_client::{self, CliArgs};
use consulta_ventas::client::config::ClientConfig;
use consulta_ventas::client::services::query_client::QueryClient;
use consulta_ventas::utils::logger;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    let mut config = ClientConfig::from_env()?;
    if let Some(endpoint) = &args.endpoint {
        config = config.with_endpoint(endpoint)?;
    }
    logger::init(&config.log_level);
    config.log_summary();

    let client = QueryClient::from_config(&config)?;
    cli_client::run(args, client).await
}
