//! Registration page posting a new account to the tourism API.
//!
//! ERROR HANDLING
//! ==============
//! Every outcome of the registration call, transport failures included,
//! surfaces as a blocking notification; nothing is retried or escalated.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;

#[cfg(any(test, feature = "csr"))]
use crate::net::types::ApiError;
use crate::state::draft::RegistrationDraft;

#[cfg(any(test, feature = "csr"))]
fn success_message(username: &str) -> String {
    format!("Successfully registered: {username}")
}

#[cfg(any(test, feature = "csr"))]
fn failure_message(error: &ApiError) -> String {
    format!("Failed to register: {error}")
}

/// Registration page — username/password form submitting to the
/// registration endpoint.
///
/// Submits are ignored while a request is in flight; the draft is validated
/// before anything reaches the network.
#[component]
pub fn RegisterPage() -> impl IntoView {
    let draft = RwSignal::new(RegistrationDraft::default());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = match draft.get().validate() {
            Ok(request) => request,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set(String::new());

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::api::register(&request).await {
                Ok(user) => crate::util::notify::notify(&success_message(&user.username)),
                Err(error) => crate::util::notify::notify(&failure_message(&error)),
            }
            // The view may have unmounted while the request was in flight.
            let _ = busy.try_set(false);
        });
        #[cfg(not(feature = "csr"))]
        let _ = request;
    };

    view! {
        <div class="register-page">
            <h2>"Register"</h2>
            <form class="register-form" on:submit=on_submit>
                <input
                    class="register-input"
                    placeholder="User Name"
                    prop:value=move || draft.get().username
                    on:input=move |ev| draft.update(|d| d.set_username(event_target_value(&ev)))
                />
                <input
                    class="register-input"
                    type="password"
                    placeholder="password"
                    prop:value=move || draft.get().password
                    on:input=move |ev| draft.update(|d| d.set_password(event_target_value(&ev)))
                />
                <button class="register-button" type="submit" disabled=move || busy.get()>
                    "Register"
                </button>
            </form>
            <Show when=move || !info.get().is_empty()>
                <p class="register-message">{move || info.get()}</p>
            </Show>
        </div>
    }
}
