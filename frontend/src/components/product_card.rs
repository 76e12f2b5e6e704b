use shared::{CartItem, ProductSummary};
use yew::prelude::*;

use crate::stores::locale::LocaleHandle;

const FALLBACK_IMAGE: &str = "/food-fallback.png";

#[derive(Properties, PartialEq)]
pub struct ProductCardProps {
    pub product: ProductSummary,
    /// When set, renders an add-to-cart button (customer-facing lists).
    #[prop_or_default]
    pub on_add: Option<Callback<CartItem>>,
}

#[function_component(ProductCard)]
pub fn product_card(props: &ProductCardProps) -> Html {
    let locale = use_context::<LocaleHandle>();
    let product = &props.product;

    let format_price = |amount: f64| match &locale {
        Some(handle) => handle.format_price(amount),
        None => format!("${amount:.2}"),
    };

    let image = product.image.as_deref().unwrap_or(FALLBACK_IMAGE);

    let add_button = props.on_add.as_ref().map(|on_add| {
        let on_add = on_add.clone();
        let item = CartItem {
            product_id: product.id,
            merchant_id: product.merchant_id,
            name: product.name.clone(),
            price: product.effective_price(),
            quantity: 1,
            image: product.image.clone(),
        };
        let disabled = !product.is_available;
        html! {
            <button
                class="btn btn-add-to-cart"
                {disabled}
                onclick={move |_| on_add.emit(item.clone())}
            >
                { if disabled { "Unavailable" } else { "Add to cart" } }
            </button>
        }
    });

    html! {
        <div class="product-card">
            <img class="product-image" src={image.to_string()} alt={product.name.clone()} />
            <div class="product-body">
                <h3 class="product-name">{&product.name}</h3>
                { if let Some(category) = &product.category {
                    html! { <span class="product-category">{category}</span> }
                } else {
                    html! {}
                } }
                <div class="product-pricing">
                    { if product.discount_price.is_some() {
                        html! {
                            <>
                                <span class="price original">{format_price(product.price)}</span>
                                <span class="price discounted">{format_price(product.effective_price())}</span>
                            </>
                        }
                    } else {
                        html! { <span class="price">{format_price(product.price)}</span> }
                    } }
                </div>
                { add_button.unwrap_or_default() }
            </div>
        </div>
    }
}
