//! Full-page navigation away from the app.

/// Sends the browser to another URL.
pub trait Navigator {
    fn navigate(&self, url: &str);
}

/// Navigator backed by `window.location`. Requires a browser environment.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn navigate(&self, url: &str) {
        #[cfg(feature = "csr")]
        {
            let Some(window) = web_sys::window() else {
                log::warn!("no window; cannot navigate to {url}");
                return;
            };
            if let Err(e) = window.location().set_href(url) {
                log::warn!("navigation to {url} failed: {e:?}");
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            log::debug!("navigation to {url} skipped outside the browser");
        }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
