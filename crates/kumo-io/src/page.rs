//! Page-level effects: scheduled reload and blocking notices.
//!
//! Requires a browser environment (`wasm32-unknown-unknown` target).

/// Delay between a successful upload and the page reload, giving the
/// success feedback time to render before navigation.
pub const RELOAD_DELAY_MS: u32 = 1_000;

/// Reload the page after `delay_ms` milliseconds.
///
/// Fire-and-forget: the timer runs on the browser event loop and a
/// failed reload is only logged -- there is nothing useful to do with
/// the error at that point.
pub fn schedule_reload(delay_ms: u32) {
    wasm_bindgen_futures::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(delay_ms).await;
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(e) = window.location().reload() {
            web_sys::console::warn_1(&e);
        }
    });
}

/// Show a blocking user notice via `window.alert`.
///
/// Used for local validation failures (e.g. an empty CID lookup).
/// Silently does nothing outside a browser.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}
