use crate::actor_framework::Entity;
use crate::domain::{Product, ProductId, Promotion};

impl Entity for Product {
    type Id = ProductId;
    const KIND: &'static str = "product";

    fn id(&self) -> &ProductId {
        &self.id
    }
}

/// A promotion entry is keyed by the product it discounts, so a product
/// appears at most once in the promotion list.
impl Entity for Promotion {
    type Id = ProductId;
    const KIND: &'static str = "promotion";

    fn id(&self) -> &ProductId {
        &self.product_id
    }
}
