use shared::CartItem;
use yew::prelude::*;

use crate::stores::cart::{CartAction, CartHandle};
use crate::stores::locale::LocaleHandle;

/// The durable cart, shared across the whole app.
#[function_component(CartView)]
pub fn cart_view() -> Html {
    let cart = use_context::<CartHandle>();
    let locale = use_context::<LocaleHandle>();

    let Some(cart) = cart else {
        return html! { <div class="screen-notice">{"Cart unavailable."}</div> };
    };

    let format_price = move |amount: f64| match &locale {
        Some(handle) => handle.format_price(amount),
        None => format!("${amount:.2}"),
    };

    if cart.state.items.is_empty() {
        return html! { <div class="list-empty">{"Your cart is empty."}</div> };
    }

    let rows = cart.state.items.iter().map(|item: &CartItem| {
        let dec = {
            let cart = cart.clone();
            let product_id = item.product_id;
            let quantity = item.quantity.saturating_sub(1);
            Callback::from(move |_| cart.dispatch(CartAction::SetQuantity { product_id, quantity }))
        };
        let inc = {
            let cart = cart.clone();
            let product_id = item.product_id;
            let quantity = item.quantity + 1;
            Callback::from(move |_| cart.dispatch(CartAction::SetQuantity { product_id, quantity }))
        };
        let remove = {
            let cart = cart.clone();
            let product_id = item.product_id;
            Callback::from(move |_| cart.dispatch(CartAction::Remove { product_id }))
        };

        html! {
            <div class="cart-row" key={item.product_id}>
                <span class="cart-name">{&item.name}</span>
                <div class="cart-quantity">
                    <button class="btn btn-step" onclick={dec}>{"-"}</button>
                    <span>{item.quantity}</span>
                    <button class="btn btn-step" onclick={inc}>{"+"}</button>
                </div>
                <span class="cart-line-total">{format_price(item.line_total())}</span>
                <button class="btn btn-remove" onclick={remove}>{"Remove"}</button>
            </div>
        }
    });

    let clear = {
        let cart = cart.clone();
        Callback::from(move |_| cart.dispatch(CartAction::Clear))
    };

    html! {
        <div class="cart-view">
            <header class="screen-header">
                <h1>{"Shopping bag"}</h1>
            </header>
            { for rows }
            <footer class="cart-footer">
                <span class="cart-subtotal">
                    {format!("Subtotal: {}", format_price(cart.state.subtotal()))}
                </span>
                <button class="btn btn-clear" onclick={clear}>{"Clear cart"}</button>
            </footer>
        </div>
    }
}
