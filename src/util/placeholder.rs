//! Loading and empty-state placeholders for list containers.

#[cfg(test)]
#[path = "placeholder_test.rs"]
mod placeholder_test;

pub const DEFAULT_EMPTY_MESSAGE: &str = "暫無資料";
pub const EMPTY_HINT: &str = "開始記錄您的收支吧！";

pub const LOADING_MARKUP: &str = r#"<div class="loading"><div class="spinner"></div></div>"#;

/// Empty-state markup. The `<h3>` is left blank and filled as text so
/// messages never become markup.
pub const EMPTY_MARKUP: &str = concat!(
    r#"<div class="empty-state">"#,
    r#"<svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">"#,
    r#"<path d="M14 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V8z"/>"#,
    r#"<polyline points="14 2 14 8 20 8"/>"#,
    r#"<line x1="16" y1="13" x2="8" y2="13"/>"#,
    r#"<line x1="16" y1="17" x2="8" y2="17"/>"#,
    "</svg><h3></h3><p></p></div>",
);

/// The heading shown by [`show_empty`].
pub fn empty_message(message: Option<&str>) -> &str {
    message.unwrap_or(DEFAULT_EMPTY_MESSAGE)
}

/// Replace `container`'s content with the loading spinner.
#[cfg(feature = "browser")]
pub fn show_loading(container: &web_sys::Element) {
    container.set_inner_html(LOADING_MARKUP);
}

/// Replace `container`'s content with the empty state.
#[cfg(feature = "browser")]
pub fn show_empty(container: &web_sys::Element, message: Option<&str>) {
    container.set_inner_html(EMPTY_MARKUP);
    if let Ok(Some(heading)) = container.query_selector(".empty-state h3") {
        heading.set_text_content(Some(empty_message(message)));
    }
    if let Ok(Some(hint)) = container.query_selector(".empty-state p") {
        hint.set_text_content(Some(EMPTY_HINT));
    }
}
