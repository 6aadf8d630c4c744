//! Static welcome page for the root route.

use leptos::prelude::*;

/// Welcome page — informational heading only, no state and no side effects.
#[component]
pub fn WelcomePage() -> impl IntoView {
    view! {
        <main class="welcome-page">
            <h1>"Welcome to Canada Tourism"</h1>
        </main>
    }
}
