use anyhow::Result;
use clap::Parser;
use tracing::{error, info, Instrument};

use wishlist_promotions::app_system::{setup_tracing, CatalogSeed, CatalogSystem};
use wishlist_promotions::config::Config;
use wishlist_promotions::pipeline::WishlistPromotionPipeline;
use wishlist_promotions::source::{JsonFileSource, ProductCatalogSource};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::parse();

    setup_tracing();

    match &config.data_dir {
        Some(dir) => {
            info!(data_dir = %dir.display(), "Using JSON catalog");
            let source = JsonFileSource::new(dir);
            execute(&config, &source).await
        }
        None => {
            info!("Using built-in reference catalog");
            let system = CatalogSystem::start(CatalogSeed::reference(), config.actor_buffer);
            let outcome = execute(&config, &system.catalog).await;
            system.shutdown().await?;
            outcome
        }
    }
}

async fn execute(config: &Config, source: &dyn ProductCatalogSource) -> Result<()> {
    let output = if config.list_products {
        let products = source.list_products().await?;
        info!(products = products.len(), "Catalog listed");
        serde_json::to_string_pretty(&products)?
    } else {
        let span = tracing::info_span!("promoted_wishlist");
        let result = WishlistPromotionPipeline::new()
            .run(source)
            .instrument(span)
            .await;

        match result {
            Ok(priced) => {
                info!(products = priced.len(), "Promoted wishlist computed");
                serde_json::to_string_pretty(&priced)?
            }
            Err(e) => {
                error!(error = %e, "Pipeline failed");
                return Err(e.into());
            }
        }
    };

    println!("{}", output);
    Ok(())
}
