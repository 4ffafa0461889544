use tokio::task::JoinHandle;
use tracing::{error, info};

use crate::actor_framework::ResourceActor;
use crate::clients::{ProductClient, PromotionClient, UserClient, WishlistClient};
use crate::domain::{Product, Promotion, User, UserId, Wishlist};
use crate::error::CatalogError;
use crate::source::ActorCatalog;

/// Initial contents of an in-memory catalog.
#[derive(Debug, Clone, Default)]
pub struct CatalogSeed {
    pub session: Option<UserId>,
    pub users: Vec<User>,
    pub wishlists: Vec<Wishlist>,
    pub products: Vec<Product>,
    pub promotions: Vec<Promotion>,
}

impl CatalogSeed {
    /// The exercise's reference data set, mirrored by the documents under `data/`.
    pub fn reference() -> Self {
        Self {
            session: Some(0),
            users: vec![User::new(0, "Machado de Assis", "machado", "machado@assis.com.br")],
            wishlists: vec![Wishlist::new(0, vec![1, 2, 3, 5])],
            products: vec![
                Product::new(1, "Ressurreição", 100.0, 10),
                Product::new(2, "Quincas Borba", 200.0, 50),
                Product::new(3, "Helena", 50.0, 0),
                Product::new(4, "Esaú e Jacó", 75.5, 20),
                Product::new(5, "Memórias Póstumas de Brás Cubas", 120.0, 30),
            ],
            promotions: [2, 3, 4, 5].into_iter().map(Promotion::new).collect(),
        }
    }
}

/// Starts one resource actor per entity kind and wires them into an [`ActorCatalog`].
pub struct CatalogSystem {
    pub catalog: ActorCatalog,
    handles: Vec<JoinHandle<()>>,
}

impl CatalogSystem {
    /// Must be called inside a tokio runtime.
    pub fn start(seed: CatalogSeed, buffer_size: usize) -> Self {
        info!(
            users = seed.users.len(),
            products = seed.products.len(),
            promotions = seed.promotions.len(),
            "Starting catalog system"
        );

        let (user_actor, users) = ResourceActor::new(buffer_size, seed.users);
        let (wishlist_actor, wishlists) = ResourceActor::new(buffer_size, seed.wishlists);
        let (product_actor, products) = ResourceActor::new(buffer_size, seed.products);
        let (promotion_actor, promotions) = ResourceActor::new(buffer_size, seed.promotions);

        let handles = vec![
            tokio::spawn(user_actor.run()),
            tokio::spawn(wishlist_actor.run()),
            tokio::spawn(product_actor.run()),
            tokio::spawn(promotion_actor.run()),
        ];

        let catalog = ActorCatalog::new(
            UserClient::new(users),
            WishlistClient::new(wishlists),
            ProductClient::new(products),
            PromotionClient::new(promotions),
            seed.session,
        );

        Self { catalog, handles }
    }

    /// Drops this system's clients and waits for the actors to stop.
    ///
    /// Actors only stop once every clone of the catalog is gone, so callers
    /// must drop their own clones first.
    pub async fn shutdown(self) -> Result<(), CatalogError> {
        info!("Shutting down catalog system...");
        drop(self.catalog);

        join_actors(self.handles).await?;

        info!("Catalog system shutdown complete.");
        Ok(())
    }
}

/// Awaits every actor task, logging each failure, and reports the first one.
async fn join_actors(handles: Vec<JoinHandle<()>>) -> Result<(), CatalogError> {
    let mut first_failure = None;

    for handle in handles {
        if let Err(e) = handle.await {
            error!("Actor task failed: {:?}", e);
            first_failure.get_or_insert_with(|| {
                CatalogError::SourceUnavailable(format!("Actor task failed: {}", e))
            });
        }
    }

    match first_failure {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
