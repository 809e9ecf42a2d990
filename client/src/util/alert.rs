//! Blocking browser alert for failures the user must acknowledge.
//!
//! SSR paths no-op; the message is still recorded in state for inline display.

#[cfg(test)]
#[path = "alert_test.rs"]
mod alert_test;

/// Text shown when the fact list cannot be loaded.
pub fn load_failed_message(error: &str) -> String {
    format!("There was a problem getting data: {error}")
}

/// Show `message` in a modal `window.alert`.
pub fn blocking_alert(message: &str) {
    #[cfg(feature = "hydrate")]
    {
        log::warn!("{message}");
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
    }
}
