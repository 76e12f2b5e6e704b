use gloo::net::http::Request;
use serde::de::DeserializeOwned;
use serde_json::Value;
use shared::page::parse_page;
use shared::{OrderStatus, OrderSummary, PageQuery, ProductSummary, Promotion, WalletTransaction};
use thiserror::Error;
use web_sys::AbortSignal;

use crate::services::logging::Logger;

/// Everything that can go wrong at the fetch boundary. Errors are converted
/// to pagination state by the caller and never thrown into the render path.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    /// The caller aborted the request. Never surfaced to the user.
    #[error("request cancelled")]
    Cancelled,
    #[error("network error: {0}")]
    Network(String),
    #[error("server error {0}: {1}")]
    Status(u16, String),
    #[error("bad response: {0}")]
    Decode(String),
}

impl FetchError {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, FetchError::Cancelled)
    }
}

/// API client for the delivery platform backend.
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a new API client with the default base URL.
    pub fn new() -> Self {
        Self {
            base_url: "http://localhost:5005".to_string(),
        }
    }

    /// Create a new API client with a custom base URL.
    pub fn with_base_url(base_url: String) -> Self {
        Self { base_url }
    }

    /// Products owned by one merchant, one page at a time.
    pub async fn get_products_by_merchant(
        &self,
        merchant_id: u64,
        query: PageQuery,
        signal: Option<&AbortSignal>,
    ) -> Result<Vec<ProductSummary>, FetchError> {
        let path = products_by_merchant_path(merchant_id, query);
        self.get_page(&path, "product", signal).await
    }

    /// Running orders assigned to one driver, optionally narrowed by status.
    pub async fn get_running_orders(
        &self,
        driver_id: u64,
        status: Option<OrderStatus>,
        query: PageQuery,
        signal: Option<&AbortSignal>,
    ) -> Result<Vec<OrderSummary>, FetchError> {
        let path = running_orders_path(driver_id, status, query);
        self.get_page(&path, "order", signal).await
    }

    /// Wallet transaction history for one user.
    pub async fn get_wallet_transactions(
        &self,
        user_id: u64,
        query: PageQuery,
        signal: Option<&AbortSignal>,
    ) -> Result<Vec<WalletTransaction>, FetchError> {
        let path = wallet_transactions_path(user_id, query);
        self.get_page(&path, "transactions", signal).await
    }

    /// Active promotional banners.
    pub async fn get_promotions(
        &self,
        query: PageQuery,
        signal: Option<&AbortSignal>,
    ) -> Result<Vec<Promotion>, FetchError> {
        let path = promotions_path(query);
        self.get_page(&path, "promotion", signal).await
    }

    /// Fetch one page of a collection endpoint and normalize it.
    async fn get_page<T: DeserializeOwned>(
        &self,
        path_and_query: &str,
        field: &str,
        signal: Option<&AbortSignal>,
    ) -> Result<Vec<T>, FetchError> {
        let url = format!("{}/{}", self.base_url, path_and_query);
        let response = Request::get(&url)
            .abort_signal(signal)
            .send()
            .await
            .map_err(classify_send_error)?;

        if !response.ok() {
            let status = response.status();
            let text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            Logger::error_with_component("api", &format!("GET {path_and_query} -> {status}"));
            return Err(FetchError::Status(status, text));
        }

        // 204 / empty bodies are an empty page, not a decode failure.
        let text = response
            .text()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;
        let body: Value = if text.trim().is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&text).map_err(|e| FetchError::Decode(e.to_string()))?
        };

        parse_page(body, field).map_err(|e| FetchError::Decode(e.to_string()))
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

fn classify_send_error(error: gloo::net::Error) -> FetchError {
    match error {
        gloo::net::Error::JsError(js) if js.name == "AbortError" => FetchError::Cancelled,
        other => FetchError::Network(other.to_string()),
    }
}

fn products_by_merchant_path(merchant_id: u64, query: PageQuery) -> String {
    format!(
        "api/v1/productbymerchant?merchant_id={}&{}",
        merchant_id,
        query.to_query_string()
    )
}

fn running_orders_path(driver_id: u64, status: Option<OrderStatus>, query: PageQuery) -> String {
    let status_param = status
        .map(|s| format!("&status={}", s.query_value()))
        .unwrap_or_default();
    format!(
        "api/v1/order/runningorder?driver_id={}{}&{}",
        driver_id,
        status_param,
        query.to_query_string()
    )
}

fn wallet_transactions_path(user_id: u64, query: PageQuery) -> String {
    format!(
        "api/v1/wallet/transactions?user_id={}&{}",
        user_id,
        query.to_query_string()
    )
}

fn promotions_path(query: PageQuery) -> String {
    format!("api/v1/promotion?{}", query.to_query_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cancelled_is_the_only_silent_variant() {
        assert!(FetchError::Cancelled.is_cancelled());
        assert!(!FetchError::Network("offline".to_string()).is_cancelled());
        assert!(!FetchError::Status(500, "boom".to_string()).is_cancelled());
    }

    #[test]
    fn error_messages_are_human_readable() {
        let error = FetchError::Status(404, "no such merchant".to_string());
        assert_eq!(error.to_string(), "server error 404: no such merchant");
    }

    #[test]
    fn collection_paths_match_the_backend_contract() {
        let query = PageQuery { page: 2, per_page: 10 };
        assert_eq!(
            products_by_merchant_path(7, query),
            "api/v1/productbymerchant?merchant_id=7&page=2&per_page=10"
        );
        assert_eq!(
            running_orders_path(3, Some(OrderStatus::Delivering), query),
            "api/v1/order/runningorder?driver_id=3&status=delivering&page=2&per_page=10"
        );
        assert_eq!(
            running_orders_path(3, None, query),
            "api/v1/order/runningorder?driver_id=3&page=2&per_page=10"
        );
        assert_eq!(
            wallet_transactions_path(4, query),
            "api/v1/wallet/transactions?user_id=4&page=2&per_page=10"
        );
        assert_eq!(promotions_path(query), "api/v1/promotion?page=2&per_page=10");
    }
}
