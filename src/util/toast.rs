//! Toast notifications.
//!
//! Toasts stack inside one lazily created `.toast-container` and remove
//! themselves: `TOAST_DISPLAY_MS` on screen, then `TOAST_EXIT_MS` of reversed
//! slide-in animation. There is no cap on how many can be shown at once.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

pub const CONTAINER_CLASS: &str = "toast-container";
pub const TOAST_DISPLAY_MS: u32 = 3000;
pub const TOAST_EXIT_MS: u32 = 300;
/// Value for the toast's `animation` style property when it starts leaving.
pub const EXIT_ANIMATION: &str = "slideIn 0.3s ease reverse";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastKind {
    #[default]
    Success,
    Error,
}

impl ToastKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Success => "\u{2713}",
            Self::Error => "\u{2715}",
        }
    }

    /// Class list of the toast element.
    pub fn class_name(self) -> String {
        format!("toast {}", self.as_str())
    }
}

/// Show `message` as a toast of `kind`. No-op outside the browser.
pub fn show_toast(message: &str, kind: ToastKind) {
    #[cfg(feature = "browser")]
    {
        use gloo_timers::callback::Timeout;
        use wasm_bindgen::JsCast;

        let Some(doc) = super::dom::document() else {
            return;
        };
        let Some(container) = toast_container(&doc) else {
            return;
        };
        let Ok(toast) = doc.create_element("div") else {
            return;
        };
        toast.set_class_name(&kind.class_name());
        for text in [kind.icon(), message] {
            if let Ok(span) = doc.create_element("span") {
                span.set_text_content(Some(text));
                let _ = toast.append_child(&span);
            }
        }
        if container.append_child(&toast).is_err() {
            return;
        }

        Timeout::new(TOAST_DISPLAY_MS, move || {
            if let Some(el) = toast.dyn_ref::<web_sys::HtmlElement>() {
                let _ = el.style().set_property("animation", EXIT_ANIMATION);
            }
            Timeout::new(TOAST_EXIT_MS, move || toast.remove()).forget();
        })
        .forget();
    }
    #[cfg(not(feature = "browser"))]
    {
        log::debug!("toast ({}): {message}", kind.as_str());
    }
}

#[cfg(feature = "browser")]
fn toast_container(doc: &web_sys::Document) -> Option<web_sys::Element> {
    if let Ok(Some(existing)) = doc.query_selector(&format!(".{CONTAINER_CLASS}")) {
        return Some(existing);
    }
    let container = doc.create_element("div").ok()?;
    container.set_class_name(CONTAINER_CLASS);
    doc.body()?.append_child(&container).ok()?;
    Some(container)
}
