use shared::WalletTransaction;
use web_sys::AbortSignal;
use yew::prelude::*;

use crate::components::paginated_list::PaginatedList;
use crate::components::transaction_row::TransactionRow;
use crate::hooks::{use_paginated_list, use_visibility_trigger, PageFetcher};
use crate::services::api::ApiClient;
use crate::services::session::use_session;

const ITEMS_PER_PAGE: u32 = 10;
// Transaction rows are short; trigger earlier than the card lists.
const OBSERVER_THRESHOLD: f64 = 0.1;

#[derive(Properties, PartialEq)]
pub struct TransactionHistoryProps {
    pub api_client: ApiClient,
}

/// Wallet transaction history for the signed-in user.
#[function_component(TransactionHistory)]
pub fn transaction_history(props: &TransactionHistoryProps) -> Html {
    let session = use_session();

    let fetcher = {
        let api_client = props.api_client.clone();
        PageFetcher::new(move |user_id: u64, query, signal: Option<AbortSignal>| {
            let api_client = api_client.clone();
            async move {
                api_client
                    .get_wallet_transactions(user_id, query, signal.as_ref())
                    .await
            }
        })
    };

    let list = use_paginated_list(session.user_id, ITEMS_PER_PAGE, fetcher);
    let sentinel_ref = use_node_ref();
    let scroll_ref = use_node_ref();

    use_visibility_trigger(
        sentinel_ref.clone(),
        Some(scroll_ref.clone()),
        OBSERVER_THRESHOLD,
        list.has_more && !list.is_loading,
        list.load_next.clone(),
    );

    let render_item = Callback::from(|transaction: WalletTransaction| {
        let key = transaction.id;
        html! { <TransactionRow key={key} transaction={transaction} /> }
    });

    html! {
        <div ref={scroll_ref} class="list-screen scrollable">
            <header class="screen-header">
                <h1>{"Transaction history"}</h1>
            </header>
            <PaginatedList<WalletTransaction>
                items={list.items.clone()}
                render_item={render_item}
                is_loading={list.is_loading}
                has_more={list.has_more}
                error={list.error.clone()}
                empty_text="No transactions yet."
                on_retry={list.retry.clone()}
                sentinel_ref={sentinel_ref}
            />
        </div>
    }
}
