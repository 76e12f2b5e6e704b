use shared::Promotion;
use web_sys::AbortSignal;
use yew::prelude::*;

use crate::components::paginated_list::PaginatedList;
use crate::components::promo_banner::PromoBanner;
use crate::hooks::{use_paginated_list, use_visibility_trigger, PageFetcher};
use crate::services::api::ApiClient;

const ITEMS_PER_PAGE: u32 = 5;
const OBSERVER_THRESHOLD: f64 = 0.5;

#[derive(Properties, PartialEq)]
pub struct PromoListProps {
    pub api_client: ApiClient,
}

/// Promotional banners. There is no owner id here; the unit filter is the
/// scoping key and only an explicit refresh restarts the list.
#[function_component(PromoList)]
pub fn promo_list(props: &PromoListProps) -> Html {
    let fetcher = {
        let api_client = props.api_client.clone();
        PageFetcher::new(move |_filter: (), query, signal: Option<AbortSignal>| {
            let api_client = api_client.clone();
            async move { api_client.get_promotions(query, signal.as_ref()).await }
        })
    };

    let list = use_paginated_list((), ITEMS_PER_PAGE, fetcher);
    let sentinel_ref = use_node_ref();
    let scroll_ref = use_node_ref();

    use_visibility_trigger(
        sentinel_ref.clone(),
        Some(scroll_ref.clone()),
        OBSERVER_THRESHOLD,
        list.has_more && !list.is_loading,
        list.load_next.clone(),
    );

    let on_refresh = {
        let refresh = list.refresh.clone();
        Callback::from(move |_: MouseEvent| refresh.emit(()))
    };

    let render_item = Callback::from(|promotion: Promotion| {
        let key = promotion.id;
        html! { <PromoBanner key={key} promotion={promotion} /> }
    });

    html! {
        <div ref={scroll_ref} class="list-screen scrollable">
            <header class="screen-header">
                <h1>{"Promotions"}</h1>
                <button class="btn btn-refresh" onclick={on_refresh}>{"Refresh"}</button>
            </header>
            <PaginatedList<Promotion>
                items={list.items.clone()}
                render_item={render_item}
                is_loading={list.is_loading}
                has_more={list.has_more}
                error={list.error.clone()}
                empty_text="No promotions running."
                on_retry={list.retry.clone()}
                sentinel_ref={sentinel_ref}
            />
        </div>
    }
}
