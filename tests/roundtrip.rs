//! Round-trip tests: parse, render, re-parse, compare.
//!
//! Structural equality ignores source locations, so a stylesheet must
//! compare equal to the one obtained by parsing its own rendering — in
//! pretty and in optimized form. Also checks that a parsed tree equals an
//! identically shaped programmatically built one.

use cssom::ast::{
    Declaration, Expression, ImportRule, MediaQuery, Selector, StyleRule, Stylesheet,
    TopLevelRule,
};
use cssom::{parse_stylesheet, CssVersion, WriterSettings};

fn assert_roundtrips(source: &str) {
    let sheet = parse_stylesheet(source, CssVersion::Css30).expect("valid CSS");

    let pretty = sheet
        .to_css_string(&WriterSettings::default())
        .expect("pretty render");
    let reparsed = parse_stylesheet(&pretty, CssVersion::Css30)
        .unwrap_or_else(|| panic!("pretty output must re-parse: {pretty}"));
    assert_eq!(sheet, reparsed, "pretty round-trip of {source:?}");

    let optimized = sheet
        .to_css_string(&WriterSettings::default().with_optimized_output(true))
        .expect("optimized render");
    let reparsed = parse_stylesheet(&optimized, CssVersion::Css30)
        .unwrap_or_else(|| panic!("optimized output must re-parse: {optimized}"));
    // Optimization rewrites term values, but term equality compares the
    // optimized value, so the trees still match.
    assert_eq!(sheet, reparsed, "optimized round-trip of {source:?}");
}

// ============================================================================
// PER-RULE-KIND ROUND-TRIPS
// ============================================================================

#[test]
fn test_style_rules_roundtrip() {
    assert_roundtrips("h1, .title > em { color: #aabbcc; margin: 0px 1em; }");
}

#[test]
fn test_selectors_roundtrip() {
    assert_roundtrips("a[href^=\"https\"]:not(.internal, .me)::after { content: \"x\"; }");
}

#[test]
fn test_functional_pseudo_elements_keep_their_colons() {
    let sheet = parse_stylesheet("video::cue(v) { color: red; }", CssVersion::Css30)
        .expect("valid CSS");
    let optimized = sheet
        .to_css_string(&WriterSettings::default().with_optimized_output(true))
        .expect("render");
    assert_eq!(optimized, "video::cue(v){color:red}");
    assert_roundtrips("p:lang(fr) { quotes: none; }");
}

#[test]
fn test_import_and_namespace_roundtrip() {
    assert_roundtrips(
        "@import url(print.css) print;\n@namespace svg \"http://www.w3.org/2000/svg\";\na { color: red; }",
    );
}

#[test]
fn test_media_rule_roundtrip() {
    assert_roundtrips(
        "@media only screen and (min-width: 600px), print { a { color: red; } }",
    );
}

#[test]
fn test_page_rule_roundtrip() {
    assert_roundtrips("@page :first { margin: 2cm; }");
}

#[test]
fn test_font_face_roundtrip() {
    assert_roundtrips("@font-face { font-family: \"My Font\"; src: url(f.woff2); }");
}

#[test]
fn test_keyframes_roundtrip() {
    assert_roundtrips(
        "@-webkit-keyframes fade { from { opacity: 0; } 50% { opacity: 0.5; } to { opacity: 1; } }",
    );
}

#[test]
fn test_supports_roundtrip() {
    assert_roundtrips(
        "@supports (display: flex) and (not (display: grid)) { a { color: red; } }",
    );
}

#[test]
fn test_viewport_roundtrip() {
    assert_roundtrips("@viewport { width: device-width; }");
}

#[test]
fn test_unknown_rule_roundtrip() {
    assert_roundtrips("@layer base, components;");
}

#[test]
fn test_calc_roundtrip() {
    assert_roundtrips("a { width: calc(100% - 2px * 3); }");
}

#[test]
fn test_important_roundtrip() {
    assert_roundtrips("a { color: red !important; }");
}

// ============================================================================
// STRUCTURAL EQUALITY
// ============================================================================

#[test]
fn test_parsed_equals_programmatic() {
    let parsed = parse_stylesheet(
        "@import url(base.css) print;\nh1 { color: red; }",
        CssVersion::Css30,
    )
    .unwrap();

    let mut built = Stylesheet::new();
    let mut import = ImportRule::new("base.css");
    import.add_query(MediaQuery::medium("print"));
    built.add_import(import);

    let mut rule = StyleRule::new();
    rule.add_selector(Selector::simple("h1"));
    rule.add_declaration(Declaration::new("color", Expression::simple("red")).unwrap());
    built.add_rule(TopLevelRule::Style(rule));

    assert_eq!(parsed, built);
}

#[test]
fn test_equality_is_formatting_blind() {
    let compact = parse_stylesheet("a{margin:0px}", CssVersion::Css30).unwrap();
    let spaced = parse_stylesheet(
        "a {\n    margin : 0em ;\n}\n",
        CssVersion::Css30,
    )
    .unwrap();
    assert_eq!(compact, spaced);
}
