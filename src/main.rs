//! Monster Forge binary: fetch the raw SRD collection, transform every
//! structurally valid record, write the normalized entities to disk.

use monster_forge::{driver, fetch, output, raw, AppConfig, Extractor};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "monster_forge=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env();
    let client = reqwest::Client::new();

    tracing::info!("Fetching monsters from {}", config.monsters_url);
    let records = fetch::fetch_raw_monsters(&client, &config.monsters_url).await?;

    let total = records.len();
    let valid = raw::filter_valid(records);
    tracing::info!(
        "Discovered {} valid monsters out of {} total",
        valid.len(),
        total
    );

    let extractor = Extractor::builder(&config.ollama_base_url)
        .client(client)
        .model(&config.ollama_model)
        .build();

    let monsters = driver::transform_all_with_progress(&extractor, valid, |progress| {
        tracing::info!(
            "[{}/{}] transformed {}",
            progress.completed,
            progress.total,
            progress.name
        );
    })
    .await?;

    output::write_monsters(&config.output_path, &monsters)?;

    Ok(())
}
