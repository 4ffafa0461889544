//! User-scoped catalog entities: the session user and their wishlist.

pub mod entity;
