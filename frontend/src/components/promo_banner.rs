use shared::Promotion;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PromoBannerProps {
    pub promotion: Promotion,
}

#[function_component(PromoBanner)]
pub fn promo_banner(props: &PromoBannerProps) -> Html {
    let promo = &props.promotion;

    html! {
        <div class="promo-banner">
            { if let Some(image) = &promo.image {
                html! { <img class="promo-image" src={image.clone()} alt={promo.title.clone()} /> }
            } else {
                html! {}
            } }
            <div class="promo-body">
                <h3 class="promo-title">{&promo.title}</h3>
                { if let Some(description) = &promo.description {
                    html! { <p class="promo-description">{description}</p> }
                } else {
                    html! {}
                } }
                { if let Some(expires) = &promo.expires_at {
                    html! { <span class="promo-expiry">{format!("Ends {}", shared::format_timestamp(expires))}</span> }
                } else {
                    html! {}
                } }
            </div>
        </div>
    }
}
