//! Native confirmation prompt.

#[cfg(test)]
#[path = "dialog_test.rs"]
mod dialog_test;

/// Show a blocking OK/Cancel prompt. Outside the browser nothing can answer,
/// so the result is `false`.
pub fn confirm(message: &str) -> bool {
    #[cfg(feature = "browser")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "browser"))]
    {
        let _ = message;
        false
    }
}
