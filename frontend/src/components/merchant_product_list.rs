use shared::ProductSummary;
use web_sys::AbortSignal;
use yew::prelude::*;

use crate::components::paginated_list::PaginatedList;
use crate::components::product_card::ProductCard;
use crate::hooks::{use_paginated_list, use_visibility_trigger, PageFetcher};
use crate::services::api::ApiClient;
use crate::services::session::use_session;

const ITEMS_PER_PAGE: u32 = 10;
const OBSERVER_THRESHOLD: f64 = 0.5;

#[derive(Properties, PartialEq)]
pub struct MerchantProductListProps {
    pub api_client: ApiClient,
}

/// The signed-in merchant's own product inventory.
#[function_component(MerchantProductList)]
pub fn merchant_product_list(props: &MerchantProductListProps) -> Html {
    let session = use_session();
    let merchant_id = session.merchant_id;

    let fetcher = {
        let api_client = props.api_client.clone();
        PageFetcher::new(move |merchant_id: Option<u64>, query, signal: Option<AbortSignal>| {
            let api_client = api_client.clone();
            async move {
                match merchant_id {
                    Some(id) => {
                        api_client
                            .get_products_by_merchant(id, query, signal.as_ref())
                            .await
                    }
                    None => Ok(Vec::new()),
                }
            }
        })
    };

    let list = use_paginated_list(merchant_id, ITEMS_PER_PAGE, fetcher);
    let sentinel_ref = use_node_ref();
    let scroll_ref = use_node_ref();

    use_visibility_trigger(
        sentinel_ref.clone(),
        Some(scroll_ref.clone()),
        OBSERVER_THRESHOLD,
        list.has_more && !list.is_loading,
        list.load_next.clone(),
    );

    if merchant_id.is_none() {
        return html! {
            <div class="screen-notice">
                {"Sign in with a merchant account to manage products."}
            </div>
        };
    }

    let render_item = Callback::from(|product: ProductSummary| {
        let key = product.id;
        html! { <ProductCard key={key} product={product} /> }
    });

    html! {
        <div ref={scroll_ref} class="list-screen scrollable">
            <header class="screen-header">
                <h1>{"Your products"}</h1>
                <p class="screen-subtitle">{"Manage your product inventory"}</p>
            </header>
            <PaginatedList<ProductSummary>
                items={list.items.clone()}
                render_item={render_item}
                is_loading={list.is_loading}
                has_more={list.has_more}
                error={list.error.clone()}
                empty_text="No products yet. Add products to get started."
                on_retry={list.retry.clone()}
                sentinel_ref={sentinel_ref}
            />
        </div>
    }
}
