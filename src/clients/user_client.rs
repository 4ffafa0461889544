use crate::actor_framework::ResourceClient;
use crate::domain::{User, Wishlist};

/// Client for the user actor.
#[derive(Clone)]
pub struct UserClient {
    inner: ResourceClient<User>,
}

impl_basic_client!(UserClient, User, user);

/// Client for the wishlist actor. Lookups are by owning user id.
#[derive(Clone)]
pub struct WishlistClient {
    inner: ResourceClient<Wishlist>,
}

impl_basic_client!(WishlistClient, Wishlist, wishlist);
