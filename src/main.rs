//! Trunk binary entry point mounting the client into the host page.

fn main() {
    #[cfg(feature = "csr")]
    {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Debug);
        leptos::mount::mount_to_body(tourism_client::app::App);
    }
}
