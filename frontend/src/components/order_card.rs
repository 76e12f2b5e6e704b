use shared::{OrderStatus, OrderSummary};
use yew::prelude::*;

use crate::stores::locale::LocaleHandle;

#[derive(Properties, PartialEq)]
pub struct OrderCardProps {
    pub order: OrderSummary,
}

fn status_class(status: OrderStatus) -> &'static str {
    match status {
        OrderStatus::Pending => "status pending",
        OrderStatus::Accepted | OrderStatus::Cooking => "status preparing",
        OrderStatus::ReadyForPickup | OrderStatus::Delivering => "status moving",
        OrderStatus::Delivered => "status done",
        OrderStatus::Cancelled => "status cancelled",
    }
}

#[function_component(OrderCard)]
pub fn order_card(props: &OrderCardProps) -> Html {
    let locale = use_context::<LocaleHandle>();
    let order = &props.order;
    let total = match &locale {
        Some(handle) => handle.format_price(order.total),
        None => format!("${:.2}", order.total),
    };

    html! {
        <div class="order-card">
            <div class="order-header">
                <span class="order-id">{format!("Order #{}", order.id)}</span>
                <span class={status_class(order.status)}>{order.status.label()}</span>
            </div>
            <div class="order-body">
                <p class="order-customer">{&order.customer_name}</p>
                <p class="order-address">{&order.address}</p>
            </div>
            <div class="order-footer">
                <span class="order-total">{total}</span>
                <span class="order-date">{order.formatted_date()}</span>
            </div>
        </div>
    }
}
