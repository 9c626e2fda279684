//! Point-transfer page: recipient/amount/note form with local checks.
//!
//! Validation here is a UX courtesy; the backend re-validates and settles
//! the transfer.

#[cfg(test)]
#[path = "transfer_test.rs"]
mod transfer_test;

use leptos::prelude::*;

use crate::components::layout::AppLayout;
use crate::state::session::SessionStore;
use crate::util::format::format_points;

const PLACEHOLDER_BALANCE: i64 = 1_500;

const NOTE_MIN_CHARS: usize = 5;
const NOTE_MAX_CHARS: usize = 200;

/// Validate the transfer form. `sender` is the logged-in account id.
fn validate_transfer(
    sender: &str,
    recipient: &str,
    amount: i64,
    balance: i64,
    note: &str,
) -> Result<(), String> {
    let recipient = recipient.trim();
    if recipient.chars().count() < 3 {
        return Err("Recipient id must be at least 3 characters.".to_owned());
    }
    if recipient == sender {
        return Err("You cannot transfer points to yourself.".to_owned());
    }
    if amount < 1 {
        return Err("Amount must be greater than zero.".to_owned());
    }
    if amount > balance {
        return Err(format!(
            "Amount cannot exceed your balance of {}.",
            format_points(balance)
        ));
    }
    let note_len = note.trim().chars().count();
    if note_len < NOTE_MIN_CHARS {
        return Err("Add a note of at least 5 characters.".to_owned());
    }
    if note_len > NOTE_MAX_CHARS {
        return Err("Note cannot exceed 200 characters.".to_owned());
    }
    Ok(())
}

#[component]
pub fn TransferPage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let recipient = RwSignal::new(String::new());
    let amount = RwSignal::new(String::new());
    let note = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let sender = session
            .snapshot()
            .identity
            .map_or_else(String::new, |identity| identity.username);
        let amount_value = amount.get().trim().parse::<i64>().unwrap_or(0);
        match validate_transfer(
            &sender,
            &recipient.get(),
            amount_value,
            PLACEHOLDER_BALANCE,
            &note.get(),
        ) {
            Ok(()) => {
                info.set(format!(
                    "Transfer of {} points to {} submitted.",
                    format_points(amount_value),
                    recipient.get().trim()
                ));
                recipient.set(String::new());
                amount.set(String::new());
                note.set(String::new());
            }
            Err(message) => info.set(message),
        }
    };

    view! {
        <AppLayout>
            <div class="transfer-page">
                <h1>"Transfer points"</h1>
                <p class="transfer-page__balance">
                    "Available balance: " <strong>{format_points(PLACEHOLDER_BALANCE)}</strong>
                    " points"
                </p>
                <form class="transfer-form" on:submit=on_submit>
                    <input
                        class="transfer-form__input"
                        type="text"
                        placeholder="Recipient account id"
                        prop:value=move || recipient.get()
                        on:input=move |ev| recipient.set(event_target_value(&ev))
                    />
                    <input
                        class="transfer-form__input"
                        type="number"
                        min="1"
                        placeholder="Points to transfer"
                        prop:value=move || amount.get()
                        on:input=move |ev| amount.set(event_target_value(&ev))
                    />
                    <textarea
                        class="transfer-form__note"
                        maxlength="200"
                        placeholder="Note for the recipient"
                        prop:value=move || note.get()
                        on:input=move |ev| note.set(event_target_value(&ev))
                    ></textarea>
                    <button class="transfer-form__submit" type="submit">
                        "Send Points"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="transfer-page__message">{move || info.get()}</p>
                </Show>
            </div>
        </AppLayout>
    }
}
