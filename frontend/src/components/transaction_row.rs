use shared::{TransactionStatus, WalletTransaction};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TransactionRowProps {
    pub transaction: WalletTransaction,
}

fn badge_class(status: TransactionStatus) -> &'static str {
    match status {
        TransactionStatus::Pending => "badge pending",
        TransactionStatus::Completed => "badge completed",
        TransactionStatus::Rejected => "badge rejected",
    }
}

#[function_component(TransactionRow)]
pub fn transaction_row(props: &TransactionRowProps) -> Html {
    let tx = &props.transaction;
    let amount = tx.amount();
    let direction = if tx.is_credit() { "credit" } else { "debit" };
    let sign = if tx.is_credit() { "+" } else { "" };

    html! {
        <div class={format!("transaction-row {direction}")}>
            <div class="transaction-main">
                <span class="transaction-remark">{&tx.remark}</span>
                <span class="transaction-date">{tx.formatted_date()}</span>
            </div>
            <div class="transaction-side">
                <span class="transaction-amount">{format!("{sign}{amount:.2}")}</span>
                <span class={badge_class(tx.status)}>{tx.status.label()}</span>
            </div>
            { if let Some(account) = &tx.account_no {
                html! { <div class="transaction-account">{format!("Account {account}")}</div> }
            } else {
                html! {}
            } }
        </div>
    }
}
