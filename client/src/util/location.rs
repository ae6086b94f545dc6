//! Full-page navigation outside the router.

/// Load `path` as a fresh document, dropping all in-memory app state.
///
/// No-op outside the browser.
pub fn hard_redirect(path: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if window.location().set_href(path).is_err() {
                log::error!("navigation to {path} failed");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
    }
}
