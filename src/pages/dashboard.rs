//! Customer dashboard: account overview stat cards.

use leptos::prelude::*;

use crate::components::layout::AppLayout;
use crate::components::stat_card::StatCard;
use crate::net::api;
use crate::state::session::SessionStore;

#[component]
pub fn CustomerDashboardPage() -> impl IntoView {
    let session = expect_context::<SessionStore>();

    let username = move || {
        session
            .session()
            .identity
            .map_or_else(String::new, |identity| identity.username)
    };

    // The account id is the authenticated subject; staff look up other
    // accounts from their own desk page.
    let account = LocalResource::new(move || async move {
        let id = session
            .snapshot()
            .identity
            .map_or_else(String::new, |identity| identity.username);
        api::fetch_account(session, &id).await
    });

    view! {
        <AppLayout>
            <div class="dashboard-page">
                <header class="dashboard-page__header">
                    <h1>"Your account overview"</h1>
                    <p class="dashboard-page__greeting">
                        "Hello " <strong>{username}</strong> ", welcome back!"
                    </p>
                </header>
                <Suspense fallback=move || view! { <p>"Loading account..."</p> }>
                    {move || {
                        account
                            .get()
                            .map(|result| match result {
                                Ok(account) => {
                                    view! {
                                        <div class="dashboard-page__grid">
                                            <StatCard
                                                label="Current Balance"
                                                value=account.balance
                                                hint=account
                                                    .updated_at
                                                    .map(|at| format!("Last updated: {at}"))
                                            />
                                            <StatCard
                                                label="Total Earned"
                                                value=account.total_earned
                                                hint=Some("Accumulated across all activity".to_owned())
                                            />
                                            <StatCard
                                                label="Total Used"
                                                value=account.total_spent
                                                hint=Some("Redemptions and outgoing transfers".to_owned())
                                            />
                                        </div>
                                    }
                                        .into_any()
                                }
                                Err(err) => {
                                    view! {
                                        <p class="dashboard-page__error">
                                            "Could not load your account: " {err.to_string()}
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
