//! Landing page for authenticated sessions with an unrecognized role.

use leptos::prelude::*;

use crate::components::layout::AppLayout;
use crate::state::session::SessionStore;

#[component]
pub fn AccountPage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let username = move || {
        session
            .session()
            .identity
            .map_or_else(String::new, |identity| identity.username)
    };

    view! {
        <AppLayout>
            <div class="account-page">
                <h1>"Account"</h1>
                <p>"Signed in as " <strong>{username}</strong> "."</p>
                <p class="account-page__note">
                    "Your account has no portal role assigned yet. Contact support to \
                     activate customer or staff access."
                </p>
            </div>
        </AppLayout>
    }
}
