use super::*;

#[test]
fn hidden_password_becomes_visible() {
    let next = toggled("password");
    assert_eq!(next.input_type, "text");
    assert_eq!(next.glyph, SHOWN_GLYPH);
    assert_eq!(next.aria_label, "Hide password");
}

#[test]
fn visible_password_becomes_hidden() {
    let next = toggled("text");
    assert_eq!(next.input_type, "password");
    assert_eq!(next.glyph, HIDDEN_GLYPH);
    assert_eq!(next.aria_label, "Show password");
}

#[test]
fn two_clicks_restore_hidden_state() {
    assert_eq!(
        toggled(toggled("password").input_type).input_type,
        "password"
    );
}
