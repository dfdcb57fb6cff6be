//! # ledger-web
//!
//! Browser-side support layer for the ledger expense tracker: the REST
//! request wrapper, the session guard used by every page, and the view
//! helpers pages use to render amounts, dates, toasts and placeholders.
//!
//! Browser access is gated behind the `browser` feature. Without it the crate
//! builds natively with inert browser seams, which is how the tests run.

pub mod config;
pub mod net;
pub mod state;
pub mod util;

#[cfg(test)]
mod test_support;

pub use config::ClientConfig;
pub use net::client::{ApiClient, ApiResponse};
pub use net::error::ApiError;
pub use state::session::SessionGuard;

/// Install the console logger and panic hook. Call once per page load.
#[cfg(feature = "browser")]
pub fn init() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
}
