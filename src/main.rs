use person_service::config::AppConfig;
use person_service::services::{init_metrics, seed};
use person_service::startup::Application;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,person_service=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Metrics recorder must be installed before any metrics are recorded
    init_metrics();

    let config = AppConfig::from_env()?;
    let application = Application::build(config).await?;

    let store = application.store();
    seed::run(store.as_ref()).await?;

    application.run_until_stopped().await?;

    Ok(())
}
