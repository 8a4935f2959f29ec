use super::*;

#[test]
fn truncate_handles_zero_width_and_empty() {
    assert_eq!(truncate_to_width("", 5), 0);
    assert_eq!(truncate_to_width("abc", 0), 0);
    assert_eq!(truncate_to_width("abc", 5), 3);
    assert_eq!(truncate_to_width("abcdef", 4), 4);
}

#[test]
fn truncate_never_splits_wide_chars() {
    let text = "你好世界";
    // Each glyph is two cells wide and three bytes long.
    assert_eq!(truncate_to_width(text, 3), 3);
    assert_eq!(truncate_to_width(text, 4), 6);
}

#[test]
fn visible_tail_keeps_the_end() {
    assert_eq!(visible_tail("AAPL", 10), "AAPL");
    assert_eq!(visible_tail("BRK.B.EXTRA", 5), "EXTRA");
    assert_eq!(visible_tail("abc", 0), "");
    assert_eq!(visible_tail("你好世界", 5), "世界");
}
