//! View helpers shared by the ledger pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (DOM, timers, dialogs, location)
//! from page logic. Formatting and date arithmetic are plain Rust so they can
//! be tested without a browser.

pub mod categories;
pub mod dates;
pub mod debounce;
pub mod dialog;
#[cfg(feature = "browser")]
pub mod dom;
pub mod money;
pub mod navigation;
pub mod palette;
pub mod placeholder;
pub mod toast;
