use shared::{CartItem, ProductSummary};
use web_sys::AbortSignal;
use yew::prelude::*;

use crate::components::paginated_list::PaginatedList;
use crate::components::product_card::ProductCard;
use crate::hooks::{use_paginated_list, use_visibility_trigger, PageFetcher};
use crate::services::api::ApiClient;
use crate::stores::cart::{CartAction, CartHandle};

const ITEMS_PER_PAGE: u32 = 10;
const OBSERVER_THRESHOLD: f64 = 0.5;

#[derive(Properties, PartialEq)]
pub struct ShopProductListProps {
    pub api_client: ApiClient,
    /// The shop being browsed. Changing it resets the list to page 1.
    pub merchant_id: u64,
}

/// Customer-facing product list for one shop, with add-to-cart.
#[function_component(ShopProductList)]
pub fn shop_product_list(props: &ShopProductListProps) -> Html {
    let cart = use_context::<CartHandle>();

    let fetcher = {
        let api_client = props.api_client.clone();
        PageFetcher::new(move |merchant_id: u64, query, signal: Option<AbortSignal>| {
            let api_client = api_client.clone();
            async move {
                api_client
                    .get_products_by_merchant(merchant_id, query, signal.as_ref())
                    .await
            }
        })
    };

    let list = use_paginated_list(props.merchant_id, ITEMS_PER_PAGE, fetcher);
    let sentinel_ref = use_node_ref();
    let scroll_ref = use_node_ref();

    use_visibility_trigger(
        sentinel_ref.clone(),
        Some(scroll_ref.clone()),
        OBSERVER_THRESHOLD,
        list.has_more && !list.is_loading,
        list.load_next.clone(),
    );

    let on_add = cart.map(|cart| {
        Callback::from(move |item: CartItem| {
            cart.dispatch(CartAction::Add(item));
        })
    });

    let render_item = {
        let on_add = on_add.clone();
        Callback::from(move |product: ProductSummary| {
            let key = product.id;
            html! { <ProductCard key={key} product={product} on_add={on_add.clone()} /> }
        })
    };

    html! {
        <div ref={scroll_ref} class="list-screen scrollable">
            <header class="screen-header">
                <h1>{format!("Shop #{}", props.merchant_id)}</h1>
            </header>
            <PaginatedList<ProductSummary>
                items={list.items.clone()}
                render_item={render_item}
                is_loading={list.is_loading}
                has_more={list.has_more}
                error={list.error.clone()}
                empty_text="This shop has no products right now."
                on_retry={list.retry.clone()}
                sentinel_ref={sentinel_ref}
            />
        </div>
    }
}
