use serde::{Deserialize, Serialize};

pub type ProductId = u64;

/// A catalog product. `discount` is a percentage and is not range-checked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub value: f64,
    pub discount: i64,
}

impl Product {
    pub fn new(id: ProductId, name: impl Into<String>, value: f64, discount: i64) -> Self {
        Self {
            id,
            name: name.into(),
            value,
            discount,
        }
    }

    /// Price after applying `discount` percent to `value`.
    pub fn final_value(&self) -> f64 {
        final_value(self.value, self.discount)
    }
}

/// A product annotated with its discounted price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricedProduct {
    pub id: ProductId,
    pub name: String,
    pub value: f64,
    pub discount: i64,
    pub final_value: f64,
}

impl From<Product> for PricedProduct {
    fn from(product: Product) -> Self {
        let final_value = product.final_value();
        Self {
            id: product.id,
            name: product.name,
            value: product.value,
            discount: product.discount,
            final_value,
        }
    }
}

/// `value - value * discount / 100`. Discounts outside 0..=100 are applied as given.
pub fn final_value(value: f64, discount: i64) -> f64 {
    value - value * discount as f64 / 100.0
}
