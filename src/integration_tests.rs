#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use tokio::sync::mpsc;

    use crate::actor_framework::ResourceRequest;
    use crate::app_system::{CatalogSeed, CatalogSystem};
    use crate::clients::{ProductClient, PromotionClient, UserClient, WishlistClient};
    use crate::domain::{Product, ProductId, Promotion, User, Wishlist};
    use crate::error::CatalogError;
    use crate::mock_framework::{create_mock_client, expect_get, expect_list};
    use crate::pipeline::WishlistPromotionPipeline;
    use crate::source::{ActorCatalog, JsonFileSource};

    struct MockCatalog {
        catalog: ActorCatalog,
        users: mpsc::Receiver<ResourceRequest<User>>,
        wishlists: mpsc::Receiver<ResourceRequest<Wishlist>>,
        products: mpsc::Receiver<ResourceRequest<Product>>,
        promotions: mpsc::Receiver<ResourceRequest<Promotion>>,
    }

    fn mock_catalog() -> MockCatalog {
        let (users_inner, users) = create_mock_client::<User>(10);
        let (wishlists_inner, wishlists) = create_mock_client::<Wishlist>(10);
        let (products_inner, products) = create_mock_client::<Product>(10);
        let (promotions_inner, promotions) = create_mock_client::<Promotion>(10);

        let catalog = ActorCatalog::new(
            UserClient::new(users_inner),
            WishlistClient::new(wishlists_inner),
            ProductClient::new(products_inner),
            PromotionClient::new(promotions_inner),
            Some(0),
        );

        MockCatalog { catalog, users, wishlists, products, promotions }
    }

    async fn answer_user(mock: &mut MockCatalog) {
        let (user_id, responder) = expect_get(&mut mock.users).await.expect("Expected User Get");
        assert_eq!(user_id, 0);
        let user = User::new(0, "Machado de Assis", "machado", "machado@assis.com.br");
        responder.send(Ok(Some(user))).unwrap();
    }

    /// Answers the user, wishlist and promotion lookups of one run.
    async fn answer_prelude(
        mock: &mut MockCatalog,
        wishlist: Vec<ProductId>,
        promoted: Vec<ProductId>,
    ) {
        answer_user(mock).await;

        let (owner, responder) =
            expect_get(&mut mock.wishlists).await.expect("Expected Wishlist Get");
        assert_eq!(owner, 0);
        responder.send(Ok(Some(Wishlist::new(0, wishlist)))).unwrap();

        let responder = expect_list(&mut mock.promotions).await.expect("Expected Promotion List");
        responder.send(Ok(promoted.into_iter().map(Promotion::new).collect())).unwrap();
    }

    #[tokio::test]
    async fn test_products_answered_out_of_order_keep_wishlist_order() {
        let mut mock = mock_catalog();
        let catalog = mock.catalog.clone();

        let run = tokio::spawn(async move { WishlistPromotionPipeline::new().run(&catalog).await });

        answer_prelude(&mut mock, vec![5, 3], vec![3, 5]).await;

        // Both product lookups are in flight before either is answered.
        let (first_id, first) = expect_get(&mut mock.products).await.expect("Expected Product Get");
        let (second_id, second) =
            expect_get(&mut mock.products).await.expect("Expected Product Get");
        assert_eq!((first_id, second_id), (5, 3));

        second.send(Ok(Some(Product::new(3, "Helena", 50.0, 0)))).unwrap();
        first.send(Ok(Some(Product::new(5, "Iaiá Garcia", 80.0, 25)))).unwrap();

        let result = run.await.unwrap().unwrap();
        let ids: Vec<ProductId> = result.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![5, 3]);
        assert_eq!(result[0].final_value, 60.0);
        assert_eq!(result[1].final_value, 50.0);
    }

    #[tokio::test]
    async fn test_failed_product_lookup_discards_siblings() {
        let mut mock = mock_catalog();
        let catalog = mock.catalog.clone();

        let run = tokio::spawn(async move { WishlistPromotionPipeline::new().run(&catalog).await });

        answer_prelude(&mut mock, vec![1, 2, 3], vec![1, 2, 3]).await;

        let (_, first) = expect_get(&mut mock.products).await.expect("Expected Product Get");
        let (_, second) = expect_get(&mut mock.products).await.expect("Expected Product Get");
        let (_, third) = expect_get(&mut mock.products).await.expect("Expected Product Get");

        first.send(Ok(Some(Product::new(1, "Ressurreição", 100.0, 10)))).unwrap();
        drop(second);

        let result = run.await.unwrap();
        assert_eq!(
            result,
            Err(CatalogError::SourceUnavailable("Actor dropped the response".to_string()))
        );

        // The run is gone; a late answer has nowhere to go.
        assert!(third.send(Ok(Some(Product::new(3, "Helena", 50.0, 0)))).is_err());
    }

    #[tokio::test]
    async fn test_lost_promotion_list_aborts_the_run() {
        let mut mock = mock_catalog();
        let catalog = mock.catalog.clone();

        let run = tokio::spawn(async move { WishlistPromotionPipeline::new().run(&catalog).await });

        answer_user(&mut mock).await;

        // Wishlist and promotion lookups are both in flight.
        let (_, wishlist) = expect_get(&mut mock.wishlists).await.expect("Expected Wishlist Get");
        let promotions = expect_list(&mut mock.promotions).await.expect("Expected Promotion List");
        drop(promotions);

        let result = run.await.unwrap();
        assert_eq!(
            result,
            Err(CatalogError::SourceUnavailable("Actor dropped the response".to_string()))
        );
        assert!(wishlist.send(Ok(Some(Wishlist::new(0, vec![1, 2])))).is_err());

        drop(mock.catalog);
        assert!(mock.products.recv().await.is_none());
    }

    #[tokio::test]
    async fn test_stopped_user_actor_surfaces_as_source_unavailable() {
        let mock = mock_catalog();
        drop(mock.users);

        let result = WishlistPromotionPipeline::new().run(&mock.catalog).await;
        assert_eq!(
            result,
            Err(CatalogError::SourceUnavailable("Actor closed".to_string()))
        );
    }

    #[tokio::test]
    async fn test_empty_intersection_sends_no_product_request() {
        let mut mock = mock_catalog();
        let catalog = mock.catalog.clone();

        let run = tokio::spawn(async move { WishlistPromotionPipeline::new().run(&catalog).await });

        answer_prelude(&mut mock, vec![1, 2], vec![7]).await;

        assert_eq!(run.await.unwrap(), Ok(Vec::new()));
        drop(mock.catalog);
        assert!(mock.products.recv().await.is_none());
    }

    #[tokio::test]
    async fn test_reference_catalog_end_to_end() {
        let system = CatalogSystem::start(CatalogSeed::reference(), 8);

        let result = WishlistPromotionPipeline::new().run(&system.catalog).await.unwrap();
        let summary: Vec<(ProductId, f64)> = result.iter().map(|p| (p.id, p.final_value)).collect();
        assert_eq!(summary, vec![(2, 100.0), (3, 50.0), (5, 84.0)]);

        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_bundled_data_directory_matches_reference_catalog() {
        let data_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data");
        let from_files = WishlistPromotionPipeline::new()
            .run(&JsonFileSource::new(data_dir))
            .await
            .unwrap();

        let system = CatalogSystem::start(CatalogSeed::reference(), 8);
        let from_actors = WishlistPromotionPipeline::new().run(&system.catalog).await.unwrap();
        system.shutdown().await.unwrap();

        assert_eq!(from_files, from_actors);
    }

    #[tokio::test]
    async fn test_concurrent_runs_are_independent() {
        let system = CatalogSystem::start(CatalogSeed::reference(), 8);
        let pipeline = WishlistPromotionPipeline::new();
        let anonymous = system.catalog.with_session(None);

        let (ok, failed) = tokio::join!(pipeline.run(&system.catalog), pipeline.run(&anonymous));
        assert_eq!(ok.unwrap().len(), 3);
        assert!(matches!(failed, Err(CatalogError::NotFound(_))));

        drop(anonymous);
        system.shutdown().await.unwrap();
    }
}
