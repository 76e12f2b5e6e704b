use chrono::DateTime;
use serde::{Deserialize, Serialize};

pub mod page;

/// One page worth of query parameters for a collection endpoint.
///
/// Pages are 1-based. The backend returns no total count or cursor, so
/// "more pages exist" is inferred from a page coming back full.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageQuery {
    pub page: u32,
    pub per_page: u32,
}

impl PageQuery {
    pub fn to_query_string(&self) -> String {
        format!("page={}&per_page={}", self.page, self.per_page)
    }
}

/// Product as returned by the catalog endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSummary {
    pub id: u64,
    pub merchant_id: u64,
    pub name: String,
    pub price: f64,
    pub discount_price: Option<f64>,
    pub image: Option<String>,
    pub category: Option<String>,
    #[serde(default = "default_true")]
    pub is_available: bool,
}

fn default_true() -> bool {
    true
}

impl ProductSummary {
    /// Price after any active discount.
    pub fn effective_price(&self) -> f64 {
        self.discount_price.unwrap_or(self.price)
    }
}

/// Order lifecycle states used for filtering and rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Accepted,
    Cooking,
    ReadyForPickup,
    Delivering,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Accepted => "Accepted",
            OrderStatus::Cooking => "Cooking",
            OrderStatus::ReadyForPickup => "Ready for pickup",
            OrderStatus::Delivering => "Delivering",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        }
    }

    /// Value used for the `status` query parameter.
    pub fn query_value(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Accepted => "accepted",
            OrderStatus::Cooking => "cooking",
            OrderStatus::ReadyForPickup => "ready_for_pickup",
            OrderStatus::Delivering => "delivering",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderSummary {
    pub id: u64,
    pub merchant_id: u64,
    pub driver_id: Option<u64>,
    pub customer_name: String,
    pub address: String,
    pub status: OrderStatus,
    pub total: f64,
    pub created_at: String,
}

impl OrderSummary {
    pub fn formatted_date(&self) -> String {
        format_timestamp(&self.created_at)
    }
}

/// Wallet transaction status, serialized as the backend's integer codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum TransactionStatus {
    Pending,
    Completed,
    Rejected,
}

impl From<u8> for TransactionStatus {
    fn from(raw: u8) -> Self {
        match raw {
            2 => TransactionStatus::Completed,
            3 => TransactionStatus::Rejected,
            _ => TransactionStatus::Pending,
        }
    }
}

impl From<TransactionStatus> for u8 {
    fn from(status: TransactionStatus) -> u8 {
        match status {
            TransactionStatus::Pending => 1,
            TransactionStatus::Completed => 2,
            TransactionStatus::Rejected => 3,
        }
    }
}

impl TransactionStatus {
    pub fn label(&self) -> &'static str {
        match self {
            TransactionStatus::Pending => "Pending",
            TransactionStatus::Completed => "Completed",
            TransactionStatus::Rejected => "Rejected",
        }
    }
}

/// Wallet transaction row. `wallet_amount` arrives as a string from the
/// backend; use [`WalletTransaction::amount`] instead of parsing in views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalletTransaction {
    pub id: u64,
    pub payment_id: u64,
    pub user_id: u64,
    pub wallet_amount: String,
    pub remark: String,
    pub status: TransactionStatus,
    pub account_no: Option<String>,
    pub account_name: Option<String>,
    pub created_at: String,
}

impl WalletTransaction {
    pub fn amount(&self) -> f64 {
        self.wallet_amount.trim().parse().unwrap_or(0.0)
    }

    pub fn is_credit(&self) -> bool {
        self.amount() > 0.0
    }

    pub fn formatted_date(&self) -> String {
        format_timestamp(&self.created_at)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Promotion {
    pub id: u64,
    pub title: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub merchant_id: Option<u64>,
    pub expires_at: Option<String>,
}

/// One cart line. Carts hold items from a single merchant at a time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub product_id: u64,
    pub merchant_id: u64,
    pub name: String,
    pub price: f64,
    pub quantity: u32,
    pub image: Option<String>,
}

impl CartItem {
    pub fn line_total(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

/// Identity supplied by the external session provider. Only the ids flow
/// into list filters; everything else is display-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: u64,
    pub display_name: String,
    pub merchant_id: Option<u64>,
    pub driver_id: Option<u64>,
}

impl Session {
    pub fn guest() -> Self {
        Self {
            user_id: 0,
            display_name: "Guest".to_string(),
            merchant_id: None,
            driver_id: None,
        }
    }
}

/// Render an RFC 3339 timestamp as e.g. "Mar 05, 2026 1:23 PM".
/// Falls back to the raw string when it does not parse.
pub fn format_timestamp(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(dt) => dt.format("%b %d, %Y %-I:%M %p").to_string(),
        Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_query_renders_both_params() {
        let query = PageQuery { page: 1, per_page: 10 };
        assert_eq!(query.to_query_string(), "page=1&per_page=10");
        let query = PageQuery { page: 3, per_page: 25 };
        assert_eq!(query.to_query_string(), "page=3&per_page=25");
    }

    #[test]
    fn transaction_status_uses_backend_integer_codes() {
        let json = r#"{"id":7,"payment_id":12,"user_id":4,"wallet_amount":"2500.00",
            "remark":"Top up","status":2,"account_no":null,"account_name":null,
            "created_at":"2026-03-05T13:23:00+00:00"}"#;
        let tx: WalletTransaction = serde_json::from_str(json).unwrap();
        assert_eq!(tx.status, TransactionStatus::Completed);

        let back = serde_json::to_value(&tx).unwrap();
        assert_eq!(back["status"], 2);
    }

    #[test]
    fn unknown_transaction_status_falls_back_to_pending() {
        let status = TransactionStatus::from(9);
        assert_eq!(status, TransactionStatus::Pending);
    }

    #[test]
    fn wallet_amount_parses_with_zero_fallback() {
        let mut tx = WalletTransaction {
            id: 1,
            payment_id: 1,
            user_id: 1,
            wallet_amount: " -150.50 ".to_string(),
            remark: String::new(),
            status: TransactionStatus::Pending,
            account_no: None,
            account_name: None,
            created_at: String::new(),
        };
        assert_eq!(tx.amount(), -150.5);
        assert!(!tx.is_credit());

        tx.wallet_amount = "not-a-number".to_string();
        assert_eq!(tx.amount(), 0.0);
    }

    #[test]
    fn format_timestamp_falls_back_to_raw_input() {
        assert_eq!(
            format_timestamp("2026-03-05T13:23:00+00:00"),
            "Mar 05, 2026 1:23 PM"
        );
        assert_eq!(format_timestamp("yesterday"), "yesterday");
    }

    #[test]
    fn product_without_availability_flag_defaults_to_available() {
        let json = r#"{"id":1,"merchant_id":2,"name":"Mohinga","price":3500.0,
            "discount_price":3000.0,"image":null,"category":"noodles"}"#;
        let product: ProductSummary = serde_json::from_str(json).unwrap();
        assert!(product.is_available);
        assert_eq!(product.effective_price(), 3000.0);
    }
}
