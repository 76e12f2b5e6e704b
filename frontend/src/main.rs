mod components;
mod hooks;
mod services;
mod stores;

use std::rc::Rc;

use shared::Session;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use components::{
    CartView, DriverOrderList, MerchantProductList, PromoList, ShopProductList,
    TransactionHistory,
};
use services::api::ApiClient;
use services::session::load_session;
use stores::cart::{CartHandle, CartStore};
use stores::locale::{Language, LocaleAction, LocaleHandle, LocaleStore};
use stores::LocalStorageAdapter;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Screen {
    Shop,
    Cart,
    MerchantProducts,
    DriverOrders,
    Wallet,
    Promos,
}

impl Screen {
    const ALL: [Screen; 6] = [
        Screen::Shop,
        Screen::Cart,
        Screen::MerchantProducts,
        Screen::DriverOrders,
        Screen::Wallet,
        Screen::Promos,
    ];

    fn label(&self) -> &'static str {
        match self {
            Screen::Shop => "Shop",
            Screen::Cart => "Cart",
            Screen::MerchantProducts => "My products",
            Screen::DriverOrders => "Deliveries",
            Screen::Wallet => "Wallet",
            Screen::Promos => "Promos",
        }
    }
}

#[function_component(App)]
fn app() -> Html {
    let api_client = ApiClient::new();
    let session = use_state(load_session);
    let cart = use_reducer(|| CartStore::hydrate(Rc::new(LocalStorageAdapter)));
    let locale = use_reducer(|| LocaleStore::hydrate(Rc::new(LocalStorageAdapter)));
    let screen = use_state(|| Screen::Shop);
    // Shop being browsed on the customer tab; changing it resets that list.
    let shop_id = use_state(|| 1u64);

    let on_shop_id_change = {
        let shop_id = shop_id.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Ok(id) = input.value().trim().parse::<u64>() {
                shop_id.set(id);
            }
        })
    };

    let toggle_language = {
        let locale = locale.clone();
        Callback::from(move |_| {
            let next = match locale.language {
                Language::En => Language::My,
                Language::My => Language::En,
            };
            locale.dispatch(LocaleAction::SetLanguage(next));
        })
    };

    let tabs = Screen::ALL.iter().map(|tab| {
        let screen = screen.clone();
        let tab = *tab;
        let class = if *screen == tab { "tab active" } else { "tab" };
        html! {
            <button class={class} onclick={Callback::from(move |_| screen.set(tab))}>
                {tab.label()}
            </button>
        }
    });

    let body = match *screen {
        Screen::Shop => html! {
            <>
                <div class="shop-picker">
                    <label for="shop-id">{"Shop id"}</label>
                    <input
                        type="number"
                        id="shop-id"
                        min="1"
                        value={shop_id.to_string()}
                        onchange={on_shop_id_change}
                    />
                </div>
                <ShopProductList api_client={api_client.clone()} merchant_id={*shop_id} />
            </>
        },
        Screen::Cart => html! { <CartView /> },
        Screen::MerchantProducts => {
            html! { <MerchantProductList api_client={api_client.clone()} /> }
        }
        Screen::DriverOrders => html! { <DriverOrderList api_client={api_client.clone()} /> },
        Screen::Wallet => html! { <TransactionHistory api_client={api_client.clone()} /> },
        Screen::Promos => html! { <PromoList api_client={api_client.clone()} /> },
    };

    html! {
        <ContextProvider<Session> context={(*session).clone()}>
        <ContextProvider<CartHandle> context={cart.clone()}>
        <ContextProvider<LocaleHandle> context={locale.clone()}>
            <header class="header">
                <div class="container">
                    <h1 class="brand">{"Feastly"}</h1>
                    <div class="header-side">
                        <button class="btn btn-language" onclick={toggle_language}>
                            {locale.language.label()}
                        </button>
                        <span class="cart-badge">
                            {format!(
                                "{} items · {}",
                                cart.state.count(),
                                locale.format_price(cart.state.subtotal())
                            )}
                        </span>
                        <span class="session-name">{&session.display_name}</span>
                    </div>
                </div>
            </header>
            <nav class="tabs">{ for tabs }</nav>
            <main class="main">{body}</main>
        </ContextProvider<LocaleHandle>>
        </ContextProvider<CartHandle>>
        </ContextProvider<Session>>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
