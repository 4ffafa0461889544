//! Catalog sources consumed by the pipeline.
//!
//! [`ProductCatalogSource`] is the only seam the pipeline depends on. Two
//! adapters ship with the crate:
//!
//! - [`JsonFileSource`] reads one static JSON document per request from a
//!   data directory.
//! - [`ActorCatalog`] answers from in-memory resource actors started by
//!   [`CatalogSystem`](crate::app_system::CatalogSystem).
//!
//! Implementations must be callable concurrently for distinct ids; the
//! pipeline issues per-product lookups in parallel.

pub mod actor_catalog;
pub mod json_files;

pub use actor_catalog::*;
pub use json_files::*;

use async_trait::async_trait;

use crate::domain::{Product, ProductId, PromotionSet, User, UserId};
use crate::error::CatalogError;

#[async_trait]
pub trait ProductCatalogSource: Send + Sync {
    /// The logged-in user. `NotFound` when there is no session.
    async fn current_user(&self) -> Result<User, CatalogError>;

    /// Product ids on the user's wishlist, in server order.
    async fn wishlist(&self, user_id: UserId) -> Result<Vec<ProductId>, CatalogError>;

    /// Product ids currently on Black Friday promotion.
    async fn black_friday_product_ids(&self) -> Result<PromotionSet, CatalogError>;

    async fn product(&self, id: ProductId) -> Result<Product, CatalogError>;

    /// Every product in the catalog.
    async fn list_products(&self) -> Result<Vec<Product>, CatalogError>;
}
