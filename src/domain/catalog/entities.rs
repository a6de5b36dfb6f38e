pub use super::value_objects::ProductId;
use serde::{Deserialize, Serialize};

/// Domain entity - one catalog row. Immutable once received; identity is `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub brand: String,
    pub price: f64,
    pub rating: f64,
}

impl Product {
    pub fn new(
        id: ProductId,
        title: impl Into<String>,
        brand: impl Into<String>,
        price: f64,
        rating: f64,
    ) -> Self {
        Self { id, title: title.into(), brand: brand.into(), price, rating }
    }
}

/// One successfully decoded page of search results.
///
/// `total` counts all matches on the server side, not just this page.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogPage {
    pub products: Vec<Product>,
    pub total: u32,
}
