#![cfg(test)]
//! The desktop binary inlines `ui/assets/theme/main.css`; a broken path or a
//! truncated file would only show up as an unstyled window at runtime.
//!
//! If the theme moves, update this test and the `include_str!` in
//! `desktop/src/main.rs` together.

const EMBEDDED_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

#[test]
fn embedded_css_file_exists_and_is_not_empty() {
    assert!(
        !EMBEDDED_CSS.trim().is_empty(),
        "Embedded CSS file appears to be empty."
    );
}

#[test]
fn embedded_css_contains_expected_tokens() {
    let required = [
        "--color-bg",
        "--color-complete",
        "body {",
        ".dashboard-card",
    ];
    for token in required {
        assert!(
            EMBEDDED_CSS.contains(token),
            "Expected token `{token}` missing from embedded CSS"
        );
    }
}
