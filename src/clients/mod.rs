//! Typed clients over the generic `ResourceClient`, one per catalog entity.

#[macro_use]
mod macros;

pub mod product_client;
pub mod user_client;

pub use product_client::*;
pub use user_client::*;
