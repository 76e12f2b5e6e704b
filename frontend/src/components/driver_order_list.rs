use shared::{OrderStatus, OrderSummary};
use web_sys::{AbortSignal, HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::components::order_card::OrderCard;
use crate::components::paginated_list::PaginatedList;
use crate::hooks::{use_paginated_list, use_visibility_trigger, PageFetcher};
use crate::services::api::ApiClient;
use crate::services::session::use_session;

const ITEMS_PER_PAGE: u32 = 10;
const OBSERVER_THRESHOLD: f64 = 0.5;

const STATUS_FILTERS: [(Option<OrderStatus>, &str); 4] = [
    (None, "All"),
    (Some(OrderStatus::Accepted), "Accepted"),
    (Some(OrderStatus::ReadyForPickup), "Ready for pickup"),
    (Some(OrderStatus::Delivering), "Delivering"),
];

/// Scoping key for the running-order list. Both parts of the identity reset
/// pagination when they change.
#[derive(Debug, Clone, PartialEq)]
struct OrderFilter {
    driver_id: Option<u64>,
    status: Option<OrderStatus>,
}

#[derive(Properties, PartialEq)]
pub struct DriverOrderListProps {
    pub api_client: ApiClient,
}

/// Running deliveries for one driver. Seeded from the session but
/// switchable from the header, so dispatch can watch another driver's
/// queue; switching resets the list to page 1 for the new driver.
#[function_component(DriverOrderList)]
pub fn driver_order_list(props: &DriverOrderListProps) -> Html {
    let session = use_session();
    let driver_id = use_state(|| session.driver_id);
    let status = use_state(|| Option::<OrderStatus>::None);

    let filter = OrderFilter {
        driver_id: *driver_id,
        status: *status,
    };

    let fetcher = {
        let api_client = props.api_client.clone();
        PageFetcher::new(move |filter: OrderFilter, query, signal: Option<AbortSignal>| {
            let api_client = api_client.clone();
            async move {
                match filter.driver_id {
                    Some(driver_id) => {
                        api_client
                            .get_running_orders(driver_id, filter.status, query, signal.as_ref())
                            .await
                    }
                    None => Ok(Vec::new()),
                }
            }
        })
    };

    let list = use_paginated_list(filter, ITEMS_PER_PAGE, fetcher);
    let sentinel_ref = use_node_ref();
    let scroll_ref = use_node_ref();

    use_visibility_trigger(
        sentinel_ref.clone(),
        Some(scroll_ref.clone()),
        OBSERVER_THRESHOLD,
        list.has_more && !list.is_loading,
        list.load_next.clone(),
    );

    let on_status_change = {
        let status = status.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let selected = select.selected_index().max(0) as usize;
            status.set(STATUS_FILTERS.get(selected).and_then(|(value, _)| *value));
        })
    };

    let on_driver_id_change = {
        let driver_id = driver_id.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Ok(id) = input.value().trim().parse::<u64>() {
                driver_id.set(Some(id));
            }
        })
    };

    let render_item = Callback::from(|order: OrderSummary| {
        let key = order.id;
        html! { <OrderCard key={key} order={order} /> }
    });

    let empty_text = if driver_id.is_none() {
        "Pick a driver to see running orders."
    } else {
        "No running orders."
    };

    html! {
        <div ref={scroll_ref} class="list-screen scrollable">
            <header class="screen-header">
                <h1>{"Running orders"}</h1>
                <div class="driver-picker">
                    <label for="driver-id">{"Driver id"}</label>
                    <input
                        type="number"
                        id="driver-id"
                        min="1"
                        value={(*driver_id).map(|id| id.to_string()).unwrap_or_default()}
                        onchange={on_driver_id_change}
                    />
                </div>
                <select class="status-filter" onchange={on_status_change}>
                    { for STATUS_FILTERS.iter().map(|(value, label)| {
                        html! { <option selected={*value == *status}>{*label}</option> }
                    }) }
                </select>
            </header>
            <PaginatedList<OrderSummary>
                items={list.items.clone()}
                render_item={render_item}
                is_loading={list.is_loading}
                has_more={list.has_more}
                error={list.error.clone()}
                empty_text={empty_text}
                on_retry={list.retry.clone()}
                sentinel_ref={sentinel_ref}
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // The filter's equality is what triggers reset-then-refetch in the
    // pagination hook, so both halves of the key must count.
    #[test]
    fn switching_driver_or_status_is_a_new_list_identity() {
        let base = OrderFilter {
            driver_id: Some(1),
            status: None,
        };
        assert_eq!(base, base.clone());
        assert_ne!(
            base,
            OrderFilter {
                driver_id: Some(2),
                status: None,
            }
        );
        assert_ne!(
            base,
            OrderFilter {
                driver_id: Some(1),
                status: Some(OrderStatus::Accepted),
            }
        );
    }
}
