//! Blocking browser dialogs, with logging fallbacks off the web.
//!
//! Non-wasm builds have no blocking dialogs; `alert` degrades to a log line
//! and `confirm` auto-confirms.

#[cfg(target_arch = "wasm32")]
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn alert(message: &str) {
    tracing::warn!("{message}");
}

#[cfg(target_arch = "wasm32")]
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .map(|window| window.confirm_with_message(message).unwrap_or(false))
        .unwrap_or(false)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn confirm(message: &str) -> bool {
    tracing::debug!("auto-confirming: {message}");
    true
}
