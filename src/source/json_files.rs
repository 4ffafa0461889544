use std::io;
use std::path::PathBuf;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::error::Category;
use tracing::{debug, instrument};

use super::ProductCatalogSource;
use crate::domain::{Product, ProductId, PromotionSet, User, UserId};
use crate::error::CatalogError;

/// Reads the catalog from a directory holding one JSON document per request:
///
/// ```text
/// user.json              current session user
/// wishlist{userId}.json  array of product ids
/// black_friday.json      array of product ids
/// products.json          array of products
/// product{id}.json       single product
/// ```
///
/// A missing document is `NotFound`. One that cannot be read or is not
/// well-formed JSON is `SourceUnavailable`. Well-formed JSON of the wrong
/// shape, such as a non-numeric `value`, is `InvalidData`.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    root: PathBuf,
}

impl JsonFileSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    async fn read_document<T: DeserializeOwned>(&self, name: &str) -> Result<T, CatalogError> {
        let path = self.root.join(name);
        debug!(path = %path.display(), "Reading document");

        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(CatalogError::NotFound(name.to_string()));
            }
            Err(e) => {
                return Err(CatalogError::SourceUnavailable(format!(
                    "{}: {}",
                    path.display(),
                    e
                )));
            }
        };

        serde_json::from_slice(&bytes).map_err(|e| decode_error(name, e))
    }
}

fn decode_error(name: &str, e: serde_json::Error) -> CatalogError {
    let message = format!("{}: {}", name, e);
    match e.classify() {
        Category::Data => CatalogError::InvalidData(message),
        Category::Io | Category::Syntax | Category::Eof => {
            CatalogError::SourceUnavailable(message)
        }
    }
}

#[async_trait]
impl ProductCatalogSource for JsonFileSource {
    #[instrument(skip(self))]
    async fn current_user(&self) -> Result<User, CatalogError> {
        self.read_document("user.json").await
    }

    #[instrument(skip(self))]
    async fn wishlist(&self, user_id: UserId) -> Result<Vec<ProductId>, CatalogError> {
        self.read_document(&format!("wishlist{}.json", user_id)).await
    }

    #[instrument(skip(self))]
    async fn black_friday_product_ids(&self) -> Result<PromotionSet, CatalogError> {
        let ids: Vec<ProductId> = self.read_document("black_friday.json").await?;
        Ok(ids.into_iter().collect())
    }

    #[instrument(skip(self))]
    async fn product(&self, id: ProductId) -> Result<Product, CatalogError> {
        self.read_document(&format!("product{}.json", id)).await
    }

    #[instrument(skip(self))]
    async fn list_products(&self) -> Result<Vec<Product>, CatalogError> {
        self.read_document("products.json").await
    }
}
