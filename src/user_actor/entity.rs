use crate::actor_framework::Entity;
use crate::domain::{User, UserId, Wishlist};

impl Entity for User {
    type Id = UserId;
    const KIND: &'static str = "user";

    fn id(&self) -> &UserId {
        &self.id
    }
}

/// Wishlists are keyed by their owner, one per user.
impl Entity for Wishlist {
    type Id = UserId;
    const KIND: &'static str = "wishlist";

    fn id(&self) -> &UserId {
        &self.user_id
    }
}
