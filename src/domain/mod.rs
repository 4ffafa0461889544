pub mod user;
pub mod product;
pub mod wishlist;

pub use user::*;
pub use product::*;
pub use wishlist::*;
