//! Integration tests for CSS rendering under different writer settings.
//!
//! Covers:
//! - Pretty vs optimized output
//! - Indentation control
//! - url() quoting
//! - Rule-category suppression
//! - Version gating at render time

use cssom::{parse_stylesheet, CssVersion, WriterError, WriterSettings};

fn render(source: &str, settings: &WriterSettings) -> String {
    parse_stylesheet(source, CssVersion::Css30)
        .expect("valid CSS")
        .to_css_string(settings)
        .expect("renderable CSS")
}

// ============================================================================
// PRETTY AND OPTIMIZED OUTPUT
// ============================================================================

#[test]
fn test_pretty_output_layout() {
    let css = render(
        "a{color:red;margin:0}",
        &WriterSettings::default(),
    );
    assert_eq!(css, "a {\n  color: red;\n  margin: 0;\n}\n");
}

#[test]
fn test_optimized_output_is_compact() {
    let css = render(
        "h1, .title { color: #aabbcc; margin: 0px 1em; }",
        &WriterSettings::default().with_optimized_output(true),
    );
    assert_eq!(css, "h1,.title{color:#abc;margin:0 1em}");
}

#[test]
fn test_custom_indent() {
    let css = render(
        "a { color: red; }",
        &WriterSettings::default().with_indent("\t"),
    );
    assert_eq!(css, "a {\n\tcolor: red;\n}\n");
}

#[test]
fn test_media_rule_nesting_indents() {
    let css = render(
        "@media print { a { color: red; } }",
        &WriterSettings::default(),
    );
    assert_eq!(
        css,
        "@media print {\n  a {\n    color: red;\n  }\n}\n"
    );
}

#[test]
fn test_optimized_keeps_calc_sum_spacing() {
    let css = render(
        "a { width: calc(1px + 2px * 3); }",
        &WriterSettings::default().with_optimized_output(true),
    );
    assert_eq!(css, "a{width:calc(1px + 2px*3)}");
}

#[test]
fn test_important_renders() {
    let pretty = render("a { color: red !important; }", &WriterSettings::default());
    assert_eq!(pretty, "a {\n  color: red !important;\n}\n");
    let optimized = render(
        "a { color: red !important; }",
        &WriterSettings::default().with_optimized_output(true),
    );
    assert_eq!(optimized, "a{color:red!important}");
}

// ============================================================================
// URLS
// ============================================================================

#[test]
fn test_url_quoting() {
    let source = "a { background: url(img.png); }";
    let bare = render(source, &WriterSettings::default());
    assert!(bare.contains("url(img.png)"));
    let quoted = render(source, &WriterSettings::default().with_quote_urls(true));
    assert!(quoted.contains("url(\"img.png\")"));
}

// ============================================================================
// SUPPRESSION
// ============================================================================

#[test]
fn test_media_rules_can_be_suppressed() {
    let source = "a { color: red; }\n@media print { b { color: blue; } }";
    let css = render(
        source,
        &WriterSettings::default().with_write_media_rules(false),
    );
    assert!(css.contains("a {"));
    assert!(!css.contains("@media"));
}

#[test]
fn test_unknown_rules_can_be_suppressed() {
    let source = "@layer base;\na { color: red; }";
    let css = render(
        source,
        &WriterSettings::default().with_write_unknown_rules(false),
    );
    assert!(!css.contains("@layer"));
    let kept = render(source, &WriterSettings::default());
    assert!(kept.contains("@layer base;"));
}

#[test]
fn test_namespace_rules_can_be_suppressed() {
    let source = "@namespace svg \"http://www.w3.org/2000/svg\";\na { color: red; }";
    let css = render(
        source,
        &WriterSettings::default().with_write_namespace_rules(false),
    );
    assert!(!css.contains("@namespace"));
}

#[test]
fn test_remove_unnecessary_code_drops_empty_rules() {
    let css = render(
        "a { }\nb { color: red; }",
        &WriterSettings::default().with_remove_unnecessary_code(true),
    );
    assert!(!css.contains("a {"));
    assert!(css.contains("b {"));
}

// ============================================================================
// VERSION GATING
// ============================================================================

#[test]
fn test_css30_constructs_fail_to_render_as_css21() {
    let sheet = parse_stylesheet("a ~ b { color: red; }", CssVersion::Css30).unwrap();
    let result = sheet.to_css_string(
        &WriterSettings::default().with_version(CssVersion::Css21),
    );
    assert!(matches!(
        result,
        Err(WriterError::VersionMismatch {
            required: CssVersion::Css30,
            requested: CssVersion::Css21,
            ..
        })
    ));
}

#[test]
fn test_supports_rule_fails_under_css21_target() {
    let sheet = parse_stylesheet(
        "@supports (display: flex) { a { color: red; } }",
        CssVersion::Css30,
    )
    .unwrap();
    let css21 = WriterSettings::default().with_version(CssVersion::Css21);
    assert!(sheet.to_css_string(&css21).is_err());
    // Suppressing the category sidesteps the version check entirely.
    let suppressed = css21.with_write_supports_rules(false);
    assert_eq!(sheet.to_css_string(&suppressed).unwrap(), "");
}

#[test]
fn test_css21_compatible_sheet_renders_under_css21() {
    let sheet = parse_stylesheet("a > b { color: red; }", CssVersion::Css30).unwrap();
    let css = sheet
        .to_css_string(&WriterSettings::default().with_version(CssVersion::Css21))
        .unwrap();
    assert_eq!(css, "a > b {\n  color: red;\n}\n");
}
