use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PaginatedListProps<T: PartialEq> {
    pub items: Vec<T>,
    pub render_item: Callback<T, Html>,
    pub is_loading: bool,
    pub has_more: bool,
    pub error: Option<String>,
    pub empty_text: AttrValue,
    pub on_retry: Callback<()>,
    pub sentinel_ref: NodeRef,
}

/// Presentation for one paginated list: loading skeleton on the first page,
/// error panel with retry, empty state, or the items with a trailing
/// sentinel row while more pages exist. Every list screen in the app only
/// swaps the item view and the filter shape around this component.
#[function_component]
pub fn PaginatedList<T>(props: &PaginatedListProps<T>) -> Html
where
    T: Clone + PartialEq + 'static,
{
    let retry_button = {
        let on_retry = props.on_retry.clone();
        html! {
            <button class="btn btn-retry" onclick={move |_| on_retry.emit(())}>
                {"Try again"}
            </button>
        }
    };

    if props.items.is_empty() {
        if let Some(error) = &props.error {
            return html! {
                <div class="list-error">
                    <p>{error}</p>
                    {retry_button}
                </div>
            };
        }
        if props.is_loading {
            return html! {
                <div class="list-skeleton">
                    { for (0..4).map(|_| html! { <div class="skeleton-row"></div> }) }
                </div>
            };
        }
        return html! { <div class="list-empty">{props.empty_text.clone()}</div> };
    }

    html! {
        <div class="list-items">
            { for props.items.iter().map(|item| props.render_item.emit(item.clone())) }
            { if let Some(error) = &props.error {
                // A later page failed: keep what we have, offer a retry.
                html! {
                    <div class="list-error inline">
                        <span>{error}</span>
                        {retry_button}
                    </div>
                }
            } else if props.has_more {
                html! {
                    <div ref={props.sentinel_ref.clone()} class="list-sentinel">
                        { if props.is_loading {
                            html! { <span class="spinner"></span> }
                        } else {
                            html! {}
                        } }
                    </div>
                }
            } else {
                html! {}
            } }
        </div>
    }
}
