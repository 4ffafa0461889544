use async_trait::async_trait;
use tracing::{debug, instrument};

use super::ProductCatalogSource;
use crate::clients::{ProductClient, PromotionClient, UserClient, WishlistClient};
use crate::domain::{Product, ProductId, PromotionSet, User, UserId};
use crate::error::CatalogError;

/// Catalog backed by in-memory resource actors.
///
/// Cloning is cheap; every clone talks to the same actors. The actors stop
/// once all clones are dropped.
#[derive(Clone)]
pub struct ActorCatalog {
    users: UserClient,
    wishlists: WishlistClient,
    products: ProductClient,
    promotions: PromotionClient,
    session: Option<UserId>,
}

impl ActorCatalog {
    pub fn new(
        users: UserClient,
        wishlists: WishlistClient,
        products: ProductClient,
        promotions: PromotionClient,
        session: Option<UserId>,
    ) -> Self {
        Self {
            users,
            wishlists,
            products,
            promotions,
            session,
        }
    }

    /// Same actors, different logged-in user.
    pub fn with_session(&self, session: Option<UserId>) -> Self {
        Self {
            session,
            ..self.clone()
        }
    }
}

#[async_trait]
impl ProductCatalogSource for ActorCatalog {
    #[instrument(skip(self), fields(session = ?self.session))]
    async fn current_user(&self) -> Result<User, CatalogError> {
        let id = self
            .session
            .ok_or_else(|| CatalogError::NotFound("no active session".to_string()))?;
        self.users.get_user(id).await
    }

    async fn wishlist(&self, user_id: UserId) -> Result<Vec<ProductId>, CatalogError> {
        let wishlist = self.wishlists.get_wishlist(user_id).await?;
        Ok(wishlist.product_ids)
    }

    async fn black_friday_product_ids(&self) -> Result<PromotionSet, CatalogError> {
        let promotions = self.promotions.list_promotions().await?;
        debug!(count = promotions.len(), "Promotions listed");
        Ok(promotions.into_iter().map(|p| p.product_id).collect())
    }

    async fn product(&self, id: ProductId) -> Result<Product, CatalogError> {
        self.products.get_product(id).await
    }

    async fn list_products(&self) -> Result<Vec<Product>, CatalogError> {
        self.products.list_products().await
    }
}
