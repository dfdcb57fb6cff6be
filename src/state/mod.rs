//! Client-side state modules.
//!
//! DESIGN
//! ======
//! The only state the pages share is the signed-in user, held by the session
//! guard for the lifetime of one page load.

pub mod session;
