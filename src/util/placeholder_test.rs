use super::*;

#[test]
fn empty_message_defaults_when_absent() {
    assert_eq!(empty_message(None), "暫無資料");
    assert_eq!(empty_message(Some("本月沒有交易")), "本月沒有交易");
}

#[test]
fn empty_markup_leaves_text_slots_blank() {
    assert!(EMPTY_MARKUP.starts_with(r#"<div class="empty-state">"#));
    assert!(EMPTY_MARKUP.contains("<h3></h3><p></p>"));
}

#[test]
fn loading_markup_has_spinner() {
    assert!(LOADING_MARKUP.contains(r#"class="spinner""#));
}
