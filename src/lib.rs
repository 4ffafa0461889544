//! # Wishlist Promotions
//!
//! Prices the logged-in user's wishlist items that are on Black Friday
//! promotion.
//!
//! ## Ingredients
//!
//! - **Domain types** - Plain data plus the two pure steps → [`domain::promoted_ids`], [`domain::final_value`]
//! - **Catalog source** - The async seam the pipeline depends on → [`source::ProductCatalogSource`]
//!     - **JSON documents** - One static file per request → [`source::JsonFileSource`]
//!     - **Resource actors** - In-memory catalog behind channels → [`source::ActorCatalog`], [`app_system::CatalogSystem`]
//! - **Pipeline** - Orchestrates the lookups → [`pipeline::WishlistPromotionPipeline`]
//!
//! ## Example Usage
//!
//! ```no_run
//! # use wishlist_promotions::app_system::{CatalogSeed, CatalogSystem};
//! # use wishlist_promotions::pipeline::WishlistPromotionPipeline;
//! # async fn demo() -> Result<(), wishlist_promotions::error::CatalogError> {
//! let system = CatalogSystem::start(CatalogSeed::reference(), 32);
//! let priced = WishlistPromotionPipeline::new().run(&system.catalog).await?;
//! system.shutdown().await?;
//! # Ok(())
//! # }
//! ```

pub mod actor_framework;
pub mod app_system;
pub mod clients;
pub mod config;
pub mod domain;
pub mod error;
pub mod pipeline;
pub mod product_actor;
pub mod source;
pub mod user_actor;

#[cfg(test)]
mod mock_framework;
#[cfg(test)]
mod integration_tests;
