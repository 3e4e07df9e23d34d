#![cfg(test)]
/*!
Theme selector lint for the desktop build.

The dashboard components in `ui` rely on these classes being present in the
shared theme (`ui/assets/theme/main.css`). A substring check is enough to catch
a selector that was renamed in the markup but not in the stylesheet.

When a component gains structural CSS, add its selectors to REQUIRED_SELECTORS.
*/

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

const REQUIRED_SELECTORS: &[&str] = &[
    // Global / layout
    ":root",
    "body {",
    ".page {",
    ".app-header",
    ".app-header__brand",
    // Buttons
    ".button {",
    ".button--ghost",
    // Cards
    ".dashboard-card",
    ".dashboard-card__header",
    ".dashboard-card__meta",
    ".dashboard-card__placeholder",
    ".dashboard__panels",
    // Filters
    ".filters__pickers",
    ".filters__field",
    ".filters__label",
    ".filters__toggles",
    ".filters__toggle--active",
    // Summary stats
    ".stats__grid",
    ".stat__label",
    ".stat__value",
    // Donut chart
    ".results-chart__donut",
    ".results-chart__total",
    ".results-chart__legend",
    ".results-chart__legend-swatch",
    // Plays list
    ".plays__items",
    ".play-item",
    ".play-meta",
    ".play-description",
    ".no-results",
    // Media query token (sanity check responsive block exists)
    "@media (max-width: 720px)",
];

#[test]
fn unified_theme_contains_required_selectors() {
    let missing: Vec<&str> = REQUIRED_SELECTORS
        .iter()
        .copied()
        .filter(|sel| !THEME_CSS.contains(sel))
        .collect();

    if !missing.is_empty() {
        panic!(
            "Missing {} required CSS selectors/tokens in unified theme:\n{}",
            missing.len(),
            missing.join("\n")
        );
    }
}

#[test]
fn unified_theme_not_trivially_empty() {
    let non_ws_len = THEME_CSS.chars().filter(|c| !c.is_whitespace()).count();
    assert!(
        non_ws_len > 3_000,
        "Embedded theme appears unexpectedly small ({} non-whitespace chars) – \
         did the file get truncated or path change?",
        non_ws_len
    );
}

#[test]
fn result_badges_cover_every_outcome() {
    for outcome in ["complete", "incomplete", "interception"] {
        let selector = format!(".result-badge--{outcome}");
        assert!(
            THEME_CSS.contains(&selector),
            "Result badge selector `{selector}` missing"
        );
    }
}
