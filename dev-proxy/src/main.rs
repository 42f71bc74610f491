use dev_proxy::ProxyConfig;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ProxyConfig::from_env();
    let listener = TcpListener::bind(&config.bind).await?;
    tracing::info!(bind = %config.bind, target = %config.target, "dev proxy listening");
    dev_proxy::run(listener, &config).await
}
