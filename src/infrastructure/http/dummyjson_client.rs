use futures::FutureExt;
use futures::future::{Either, LocalBoxFuture, select};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};
use serde::Deserialize;

use crate::domain::catalog::{CatalogGateway, CatalogPage, Product, ProductId, SearchTerm};
use crate::domain::errors::{AppError, NetworkResult};
use crate::domain::logging::{LogComponent, get_logger};

/// Upper bound on one search round-trip before it counts as failed.
pub const REQUEST_TIMEOUT_MS: u32 = 10_000;

/// Raw row from the search endpoint; fields the table never shows are
/// ignored by serde. Some catalog entries ship without a brand.
#[derive(Debug, Deserialize)]
struct ProductDto {
    id: u32,
    title: String,
    #[serde(default)]
    brand: String,
    price: f64,
    rating: f64,
}

#[derive(Debug, Deserialize)]
struct SearchResponseDto {
    products: Vec<ProductDto>,
    total: u32,
}

impl ProductDto {
    fn into_domain(self) -> Product {
        Product::new(ProductId::from(self.id), self.title, self.brand, self.price, self.rating)
    }
}

/// REST client for the DummyJSON products API.
pub struct DummyJsonClient {
    timeout_ms: u32,
}

impl DummyJsonClient {
    pub fn new() -> Self {
        Self { timeout_ms: REQUEST_TIMEOUT_MS }
    }

    fn base_url(&self) -> String {
        "https://dummyjson.com".to_string()
    }

    pub fn search_url(&self, term: &SearchTerm, skip: u32, limit: u32) -> String {
        // terms with spaces or query metacharacters must not break the URL
        let encoded_term = utf8_percent_encode(term.value(), NON_ALPHANUMERIC);
        format!(
            "{}/products/search?q={}&skip={}&limit={}",
            self.base_url(),
            encoded_term,
            skip,
            limit
        )
    }

    async fn fetch_from_url(url: String, timeout_ms: u32) -> NetworkResult<CatalogPage> {
        get_logger().info(
            LogComponent::Infrastructure("DummyJsonAPI"),
            &format!("🔎 Fetching products from: {url}"),
        );

        let request = Box::pin(Request::get(&url).send());
        let timeout = Box::pin(TimeoutFuture::new(timeout_ms));
        let response = match select(request, timeout).await {
            Either::Left((result, _)) => {
                result.map_err(|e| AppError::NetworkError(format!("Failed to fetch: {e:?}")))?
            }
            Either::Right(_) => {
                return Err(AppError::NetworkError(format!(
                    "Request timed out after {timeout_ms}ms"
                )));
            }
        };

        if !response.ok() {
            return Err(AppError::NetworkError(format!("HTTP error: {}", response.status())));
        }

        let body: SearchResponseDto = response
            .json()
            .await
            .map_err(|e| AppError::NetworkError(format!("Failed to parse JSON: {e:?}")))?;

        let products: Vec<Product> = body.products.into_iter().map(ProductDto::into_domain).collect();

        get_logger().info(
            LogComponent::Infrastructure("DummyJsonAPI"),
            &format!("✅ Loaded {} of {} matching products", products.len(), body.total),
        );

        Ok(CatalogPage { products, total: body.total })
    }
}

impl Default for DummyJsonClient {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogGateway for DummyJsonClient {
    fn search(
        &self,
        term: &SearchTerm,
        skip: u32,
        limit: u32,
    ) -> LocalBoxFuture<'static, NetworkResult<CatalogPage>> {
        let url = self.search_url(term, skip, limit);
        let timeout_ms = self.timeout_ms;
        Self::fetch_from_url(url, timeout_ms).boxed_local()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_url() {
        let client = DummyJsonClient::new();
        let url = client.search_url(&SearchTerm::from("phone"), 20, 10);
        assert_eq!(url, "https://dummyjson.com/products/search?q=phone&skip=20&limit=10");
    }

    #[test]
    fn test_search_url_encodes_reserved_characters() {
        let client = DummyJsonClient::new();
        let url = client.search_url(&SearchTerm::from("mac book"), 0, 10);
        assert_eq!(url, "https://dummyjson.com/products/search?q=mac%20book&skip=0&limit=10");

        let url = client.search_url(&SearchTerm::from("q&a #1"), 0, 10);
        assert_eq!(url, "https://dummyjson.com/products/search?q=q%26a%20%231&skip=0&limit=10");
    }

    #[test]
    fn test_search_url_match_all() {
        let client = DummyJsonClient::new();
        let url = client.search_url(&SearchTerm::default(), 0, 10);
        assert_eq!(url, "https://dummyjson.com/products/search?q=&skip=0&limit=10");
    }

    #[test]
    fn parses_search_response() {
        let json = r#"{
            "products": [
                {"id": 1, "title": "iPhone 9", "brand": "Apple", "price": 549.0,
                 "rating": 4.69, "stock": 94, "category": "smartphones"},
                {"id": 2, "title": "Generic Cable", "price": 9.99, "rating": 3.1}
            ],
            "total": 2,
            "skip": 0,
            "limit": 10
        }"#;
        let body: SearchResponseDto = serde_json::from_str(json).unwrap();
        assert_eq!(body.total, 2);
        let products: Vec<Product> =
            body.products.into_iter().map(ProductDto::into_domain).collect();
        assert_eq!(products[0].id.value(), 1);
        assert_eq!(products[0].brand, "Apple");
        // missing brand falls back to an empty string
        assert_eq!(products[1].brand, "");
        assert_eq!(products[1].price, 9.99);
    }

    #[test]
    fn rejects_malformed_response() {
        let result: Result<SearchResponseDto, _> = serde_json::from_str(r#"{"products": 42}"#);
        assert!(result.is_err());
    }
}
