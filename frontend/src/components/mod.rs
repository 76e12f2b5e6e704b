pub mod cart_view;
pub mod driver_order_list;
pub mod merchant_product_list;
pub mod order_card;
pub mod paginated_list;
pub mod product_card;
pub mod promo_banner;
pub mod promo_list;
pub mod shop_product_list;
pub mod transaction_history;
pub mod transaction_row;

pub use cart_view::CartView;
pub use driver_order_list::DriverOrderList;
pub use merchant_product_list::MerchantProductList;
pub use promo_list::PromoList;
pub use shop_product_list::ShopProductList;
pub use transaction_history::TransactionHistory;
