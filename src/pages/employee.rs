//! Employee desk: customer lookup, point issuance, account creation.
//!
//! Lookup results are simulated with placeholder data behind a short
//! artificial delay; issuance and account creation post nothing and only
//! confirm locally. The backing endpoints live in the staff service.

#[cfg(test)]
#[path = "employee_test.rs"]
mod employee_test;

use leptos::prelude::*;

use crate::components::layout::AppLayout;
use crate::util::format::format_points;

/// Customer profile shown after a desk lookup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CustomerInfo {
    pub id: String,
    pub name: String,
    pub balance: i64,
    pub member_since: String,
    pub total_earned: i64,
    pub total_spent: i64,
    pub member_level: String,
}

/// Placeholder lookup result for a non-empty query.
fn mock_customer(query: &str) -> Option<CustomerInfo> {
    let query = query.trim();
    if query.is_empty() {
        return None;
    }
    Some(CustomerInfo {
        id: "CUST001".to_owned(),
        name: "Alice Tran".to_owned(),
        balance: 1_500,
        member_since: "2022-01-15".to_owned(),
        total_earned: 3_200,
        total_spent: 1_700,
        member_level: "VIP".to_owned(),
    })
}

/// Validate the issue-points dialog before confirming.
fn validate_issue_points(amount: i64, reason: &str) -> Result<(), &'static str> {
    if amount < 1 {
        return Err("Amount must be greater than zero.");
    }
    if amount > 10_000 {
        return Err("Amounts above 10,000 need a supervisor.");
    }
    if reason.trim().is_empty() {
        return Err("A reason is required for the audit trail.");
    }
    Ok(())
}

/// Validate the create-account dialog before confirming.
fn validate_new_account(name: &str, email: &str) -> Result<(), &'static str> {
    if name.trim().is_empty() {
        return Err("Customer name is required.");
    }
    if !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    Ok(())
}

#[component]
pub fn EmployeeDashboardPage() -> impl IntoView {
    let query = RwSignal::new(String::new());
    let searching = RwSignal::new(false);
    let customer = RwSignal::new(None::<CustomerInfo>);
    let info = RwSignal::new(String::new());
    let show_issue = RwSignal::new(false);
    let show_create = RwSignal::new(false);

    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if searching.get() {
            return;
        }
        let query_value = query.get();
        if query_value.trim().is_empty() {
            info.set("Enter a customer id or name to search.".to_owned());
            return;
        }
        searching.set(true);
        info.set(String::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            // Placeholder latency until the staff lookup endpoint lands.
            gloo_timers::future::TimeoutFuture::new(1_000).await;
            customer.set(mock_customer(&query_value));
            searching.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            customer.set(mock_customer(&query_value));
            searching.set(false);
        }
    };

    let on_clear = move |_| {
        customer.set(None);
        query.set(String::new());
        info.set(String::new());
    };

    view! {
        <AppLayout>
            <div class="employee-page">
                <h1>"Customer desk"</h1>
                <form class="employee-page__search" on:submit=on_search>
                    <input
                        class="employee-page__search-input"
                        type="text"
                        placeholder="Customer id or name"
                        prop:value=move || query.get()
                        on:input=move |ev| query.set(event_target_value(&ev))
                    />
                    <button type="submit" disabled=move || searching.get()>
                        {move || if searching.get() { "Searching..." } else { "Search" }}
                    </button>
                    <button type="button" on:click=move |_| show_create.set(true)>
                        "New Account"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="employee-page__message">{move || info.get()}</p>
                </Show>
                {move || {
                    customer
                        .get()
                        .map(|found| {
                            view! {
                                <div class="customer-card">
                                    <header class="customer-card__header">
                                        <h2>{found.name.clone()}</h2>
                                        <span class="customer-card__level">
                                            {found.member_level.clone()}
                                        </span>
                                    </header>
                                    <dl class="customer-card__facts">
                                        <dt>"Account"</dt>
                                        <dd>{found.id.clone()}</dd>
                                        <dt>"Balance"</dt>
                                        <dd>{format_points(found.balance)} " points"</dd>
                                        <dt>"Member since"</dt>
                                        <dd>{found.member_since.clone()}</dd>
                                        <dt>"Earned / spent"</dt>
                                        <dd>
                                            {format_points(found.total_earned)} " / "
                                            {format_points(found.total_spent)}
                                        </dd>
                                    </dl>
                                    <div class="customer-card__actions">
                                        <button on:click=move |_| show_issue.set(true)>
                                            "Issue Points"
                                        </button>
                                        <button on:click=on_clear>"Clear"</button>
                                    </div>
                                </div>
                            }
                        })
                }}
                <Show when=move || show_issue.get()>
                    <IssuePointsDialog
                        info=info
                        on_close=Callback::new(move |()| show_issue.set(false))
                    />
                </Show>
                <Show when=move || show_create.get()>
                    <CreateAccountDialog
                        info=info
                        on_close=Callback::new(move |()| show_create.set(false))
                    />
                </Show>
            </div>
        </AppLayout>
    }
}

/// Modal dialog for crediting points to the selected customer.
#[component]
fn IssuePointsDialog(info: RwSignal<String>, on_close: Callback<()>) -> impl IntoView {
    let amount = RwSignal::new(String::new());
    let reason = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());

    let on_confirm = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let amount_value = amount.get().trim().parse::<i64>().unwrap_or(0);
        match validate_issue_points(amount_value, &reason.get()) {
            Ok(()) => {
                info.set(format!(
                    "Issued {} points: {}",
                    format_points(amount_value),
                    reason.get().trim()
                ));
                on_close.run(());
            }
            Err(message) => error.set(message.to_owned()),
        }
    };

    view! {
        <div class="dialog-backdrop">
            <form class="dialog" on:submit=on_confirm>
                <h2>"Issue points"</h2>
                <input
                    type="number"
                    min="1"
                    placeholder="Points to issue"
                    prop:value=move || amount.get()
                    on:input=move |ev| amount.set(event_target_value(&ev))
                />
                <input
                    type="text"
                    placeholder="Reason"
                    prop:value=move || reason.get()
                    on:input=move |ev| reason.set(event_target_value(&ev))
                />
                <Show when=move || !error.get().is_empty()>
                    <p class="dialog__error">{move || error.get()}</p>
                </Show>
                <div class="dialog__actions">
                    <button type="submit">"Confirm"</button>
                    <button type="button" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                </div>
            </form>
        </div>
    }
}

/// Modal dialog for registering a new loyalty account.
#[component]
fn CreateAccountDialog(info: RwSignal<String>, on_close: Callback<()>) -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());

    let on_confirm = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match validate_new_account(&name.get(), &email.get()) {
            Ok(()) => {
                info.set(format!("Account request created for {}.", name.get().trim()));
                on_close.run(());
            }
            Err(message) => error.set(message.to_owned()),
        }
    };

    view! {
        <div class="dialog-backdrop">
            <form class="dialog" on:submit=on_confirm>
                <h2>"New customer account"</h2>
                <input
                    type="text"
                    placeholder="Full name"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
                <input
                    type="email"
                    placeholder="Email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <Show when=move || !error.get().is_empty()>
                    <p class="dialog__error">{move || error.get()}</p>
                </Show>
                <div class="dialog__actions">
                    <button type="submit">"Create"</button>
                    <button type="button" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                </div>
            </form>
        </div>
    }
}
