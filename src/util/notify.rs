//! Blocking user notifications.

/// Show a blocking browser alert dialog. No-op outside the browser build.
pub fn notify(message: &str) {
    #[cfg(feature = "csr")]
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
    #[cfg(not(feature = "csr"))]
    let _ = message;
}
