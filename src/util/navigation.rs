//! Page navigation seam over `window.location`.
//!
//! SYSTEM CONTEXT
//! ==============
//! The request client and session guard both send users to the login page.
//! Routing those moves through `Navigator` keeps the redirect rules testable
//! without a browser.

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

/// Reads and changes the current page location.
pub trait Navigator {
    /// Path of the current page (`location.pathname`).
    fn pathname(&self) -> String;

    /// Navigate to `href` (`location.href = href`).
    fn assign(&self, href: &str);
}

/// `window.location`-backed navigator.
///
/// Outside the browser it reports an empty path and ignores navigation.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn pathname(&self) -> String {
        #[cfg(feature = "browser")]
        {
            web_sys::window()
                .and_then(|w| w.location().pathname().ok())
                .unwrap_or_default()
        }
        #[cfg(not(feature = "browser"))]
        {
            String::new()
        }
    }

    fn assign(&self, href: &str) {
        #[cfg(feature = "browser")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href(href);
            }
        }
        #[cfg(not(feature = "browser"))]
        {
            let _ = href;
        }
    }
}
