use anyhow::Context;
use docgen::{generate, GeneratorConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = GeneratorConfig::default();
    generate(&config)
        .await
        .with_context(|| format!("generating {}", config.output_path.display()))?;
    Ok(())
}
