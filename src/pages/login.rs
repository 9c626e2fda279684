//! Login page: username/password form exchanging credentials for a token.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::state::session::SessionStore;
#[cfg(feature = "hydrate")]
use crate::state::session::LoginOutcome;
#[cfg(feature = "hydrate")]
use crate::util::route_guard::{classify, default_path};

/// Validate the login form before hitting the network.
fn validate_login_input(username: &str, password: &str) -> Result<(String, String), &'static str> {
    let username = username.trim();
    if username.is_empty() {
        return Err("Enter your username first.");
    }
    if password.is_empty() {
        return Err("Enter your password.");
    }
    Ok((username.to_owned(), password.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (username_value, password_value) =
            match validate_login_input(&username.get(), &password.get()) {
                Ok(values) => values,
                Err(message) => {
                    info.set(message.to_owned());
                    return;
                }
            };
        busy.set(true);
        info.set("Signing in...".to_owned());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match session.login(&username_value, &password_value).await {
                Ok(LoginOutcome::LoggedIn(_)) => {
                    let target = default_path(classify(&session.snapshot()));
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href(target);
                    }
                }
                // A logout raced this attempt; stay on the form quietly.
                Ok(LoginOutcome::Stale) => busy.set(false),
                Err(err) => {
                    info.set(err.to_string());
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = session;
            let _ = (username_value, password_value);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Loyalty Portal"</h1>
                <p class="login-card__subtitle">"Points & Rewards"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign In"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
