use anyhow::Result;
use career_compass::{start_web_server, AppConfig};
use tracing::info;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry};

#[tokio::main]
async fn main() -> Result<()> {
    Registry::default()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or(EnvFilter::new("career_compass=info,rocket=warn")),
        )
        .init();

    let config = AppConfig::load()?;

    info!("Starting Career Compass AI frontend");
    info!("Advice service: {}", config.advise_api_url);
    info!("Server: http://0.0.0.0:{}", config.port);

    start_web_server(config).await
}
