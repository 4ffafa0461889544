use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::{ProductId, UserId};

/// Product ids currently on promotion ("Black Friday"). Membership only.
pub type PromotionSet = HashSet<ProductId>;

/// A user's wishlist in server order. Duplicates are kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wishlist {
    pub user_id: UserId,
    pub product_ids: Vec<ProductId>,
}

impl Wishlist {
    pub fn new(user_id: UserId, product_ids: impl Into<Vec<ProductId>>) -> Self {
        Self {
            user_id,
            product_ids: product_ids.into(),
        }
    }
}

/// A single product's membership in the promotion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Promotion {
    pub product_id: ProductId,
}

impl Promotion {
    pub fn new(product_id: ProductId) -> Self {
        Self { product_id }
    }
}

/// Keeps the wishlist entries that are on promotion, in wishlist order.
pub fn promoted_ids(wishlist: &[ProductId], promotions: &PromotionSet) -> Vec<ProductId> {
    wishlist
        .iter()
        .copied()
        .filter(|id| promotions.contains(id))
        .collect()
}
