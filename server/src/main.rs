use clap::Parser;
use tokio::net::TcpListener;

use numeral_server::config::ServerConfig;
use numeral_server::logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::parse();
    logging::init_logger(config.log_format);

    let addr = config.socket_addr();
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, "listening");
    numeral_server::run(listener).await?;
    Ok(())
}
