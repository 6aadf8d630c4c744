//! Root application component with routing.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{register::RegisterPage, welcome::WelcomePage};

/// Root application component.
///
/// Navigation state lives in the router context provided here; views reach
/// it through hooks instead of any crate-global location state.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Canada Tourism"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=WelcomePage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
            </Routes>
        </Router>
    }
}
