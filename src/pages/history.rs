//! Transaction-history page: filterable ledger table.

#[cfg(test)]
#[path = "history_test.rs"]
mod history_test;

use leptos::prelude::*;

use crate::components::layout::AppLayout;
use crate::net::api;
use crate::net::types::{TransactionKind, TransactionRecord};
use crate::state::session::SessionStore;
use crate::util::format::format_points;

/// Case-insensitive match against id and description.
fn matches_search(record: &TransactionRecord, needle: &str) -> bool {
    let needle = needle.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    record.id.to_lowercase().contains(&needle)
        || record.description.to_lowercase().contains(&needle)
}

/// Apply the kind filter and search box to the fetched rows.
fn filter_records(
    records: &[TransactionRecord],
    kind: Option<TransactionKind>,
    search: &str,
) -> Vec<TransactionRecord> {
    records
        .iter()
        .filter(|record| kind.is_none_or(|kind| record.kind == kind))
        .filter(|record| matches_search(record, search))
        .cloned()
        .collect()
}

/// Render the amount column with an explicit sign.
fn signed_points(record: &TransactionRecord) -> String {
    if record.kind.is_credit() {
        format!("+{}", format_points(record.amount))
    } else {
        format!("-{}", format_points(record.amount))
    }
}

fn parse_kind_filter(value: &str) -> Option<TransactionKind> {
    match value {
        "ISSUE" => Some(TransactionKind::Issue),
        "REDEEM" => Some(TransactionKind::Redeem),
        "TRANSFER_IN" => Some(TransactionKind::TransferIn),
        "TRANSFER_OUT" => Some(TransactionKind::TransferOut),
        _ => None,
    }
}

#[component]
pub fn HistoryPage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let search = RwSignal::new(String::new());
    let kind_filter = RwSignal::new(String::new());

    let records = LocalResource::new(move || async move {
        let id = session
            .snapshot()
            .identity
            .map_or_else(String::new, |identity| identity.username);
        api::fetch_recent_transactions(session, &id).await
    });

    view! {
        <AppLayout>
            <div class="history-page">
                <h1>"Transaction history"</h1>
                <div class="history-page__controls">
                    <input
                        class="history-page__search"
                        type="text"
                        placeholder="Search by id or description"
                        prop:value=move || search.get()
                        on:input=move |ev| search.set(event_target_value(&ev))
                    />
                    <select
                        class="history-page__filter"
                        on:change=move |ev| kind_filter.set(event_target_value(&ev))
                    >
                        <option value="">"All types"</option>
                        <option value="ISSUE">"Earned"</option>
                        <option value="REDEEM">"Redeemed"</option>
                        <option value="TRANSFER_IN">"Received"</option>
                        <option value="TRANSFER_OUT">"Sent"</option>
                    </select>
                </div>
                <Suspense fallback=move || view! { <p>"Loading transactions..."</p> }>
                    {move || {
                        records
                            .get()
                            .map(|result| match result {
                                Ok(rows) => {
                                    let visible = filter_records(
                                        &rows,
                                        parse_kind_filter(&kind_filter.get()),
                                        &search.get(),
                                    );
                                    view! {
                                        <table class="history-page__table">
                                            <thead>
                                                <tr>
                                                    <th>"Transaction"</th>
                                                    <th>"Type"</th>
                                                    <th>"Points"</th>
                                                    <th>"Description"</th>
                                                    <th>"Time"</th>
                                                </tr>
                                            </thead>
                                            <tbody>
                                                {visible
                                                    .into_iter()
                                                    .map(|record| {
                                                        let amount = signed_points(&record);
                                                        view! {
                                                            <tr>
                                                                <td>{record.id}</td>
                                                                <td>{record.kind.label()}</td>
                                                                <td>{amount}</td>
                                                                <td>{record.description}</td>
                                                                <td>{record.timestamp}</td>
                                                            </tr>
                                                        }
                                                    })
                                                    .collect::<Vec<_>>()}
                                            </tbody>
                                        </table>
                                    }
                                        .into_any()
                                }
                                Err(err) => {
                                    view! {
                                        <p class="history-page__error">
                                            "Could not load transactions: " {err.to_string()}
                                        </p>
                                    }
                                        .into_any()
                                }
                            })
                    }}
                </Suspense>
            </div>
        </AppLayout>
    }
}
