//! The wishlist/promotion pipeline.
//!
//! ```text
//! current_user ──► wishlist(user.id) ──┐
//!                                      ├─► promoted_ids ──► product(id) × N ──► PricedProduct
//! black_friday_product_ids ────────────┘        (concurrent, re-joined in wishlist order)
//! ```
//!
//! Any failure aborts the run and is returned unchanged. Pending sibling
//! lookups are dropped with the run.

use futures::future::try_join_all;
use tracing::{debug, info, instrument};

use crate::domain::{promoted_ids, PricedProduct, Product, ProductId};
use crate::error::CatalogError;
use crate::source::ProductCatalogSource;

/// Computes the logged-in user's wishlist restricted to promoted products,
/// each with its discounted price. Holds no state between runs.
#[derive(Debug, Default, Clone, Copy)]
pub struct WishlistPromotionPipeline;

impl WishlistPromotionPipeline {
    pub fn new() -> Self {
        Self
    }

    #[instrument(name = "wishlist_promotion_pipeline", skip(self, source))]
    pub async fn run<S>(&self, source: &S) -> Result<Vec<PricedProduct>, CatalogError>
    where
        S: ProductCatalogSource + ?Sized,
    {
        // Step 1: Resolve the session user
        let user = source.current_user().await?;
        info!(user_id = user.id, user_name = %user.name, "Current user resolved");

        // Step 2: Wishlist and promotions are independent of each other
        let (wishlist, promotions) = tokio::try_join!(
            source.wishlist(user.id),
            source.black_friday_product_ids(),
        )?;
        info!(
            wishlist = wishlist.len(),
            promotions = promotions.len(),
            "Wishlist and promotions fetched"
        );
        debug!(?wishlist, ?promotions);

        // Step 3: Filter in wishlist order
        let promoted = promoted_ids(&wishlist, &promotions);
        info!(promoted = promoted.len(), "Wishlist filtered by promotion");
        debug!(?promoted);

        if promoted.is_empty() {
            return Ok(Vec::new());
        }

        // Step 4: Fetch every promoted product concurrently
        let products = try_join_all(promoted.iter().map(|&id| fetch_product(source, id))).await?;

        // Step 5: Price
        let priced: Vec<PricedProduct> = products.into_iter().map(PricedProduct::from).collect();
        info!(products = priced.len(), "Promoted wishlist priced");
        Ok(priced)
    }
}

/// Fetches one product and checks it is the one that was asked for.
async fn fetch_product<S>(source: &S, id: ProductId) -> Result<Product, CatalogError>
where
    S: ProductCatalogSource + ?Sized,
{
    let product = source.product(id).await?;
    if product.id != id {
        return Err(CatalogError::InvalidData(format!(
            "requested product {} but source returned product {}",
            id, product.id
        )));
    }
    Ok(product)
}
