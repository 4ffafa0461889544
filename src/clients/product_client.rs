use crate::actor_framework::ResourceClient;
use crate::domain::{Product, Promotion};

/// Client for the product actor.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

impl_basic_client!(ProductClient, Product, product);
impl_client_list!(ProductClient, Product, product);

/// Client for the promotion actor. Only the full listing is exposed.
#[derive(Clone)]
pub struct PromotionClient {
    inner: ResourceClient<Promotion>,
}

impl_client_new!(PromotionClient, Promotion);
impl_client_list!(PromotionClient, Promotion, promotion);
