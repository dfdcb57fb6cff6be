use super::*;

#[test]
fn kinds_map_to_class_and_icon() {
    assert_eq!(ToastKind::Success.class_name(), "toast success");
    assert_eq!(ToastKind::Error.class_name(), "toast error");
    assert_eq!(ToastKind::Success.icon(), "\u{2713}");
    assert_eq!(ToastKind::Error.icon(), "\u{2715}");
    assert_eq!(ToastKind::default(), ToastKind::Success);
}

#[test]
fn lifetime_is_display_plus_exit_animation() {
    assert_eq!(TOAST_DISPLAY_MS + TOAST_EXIT_MS, 3300);
    assert_eq!(EXIT_ANIMATION, "slideIn 0.3s ease reverse");
    assert!(!EXIT_ANIMATION.contains(':'));
}

#[test]
fn show_toast_is_noop_but_callable() {
    show_toast("新增成功", ToastKind::Success);
    show_toast("請求失敗", ToastKind::Error);
}
