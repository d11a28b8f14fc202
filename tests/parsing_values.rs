//! Integration tests for declaration value parsing.
//!
//! Covers:
//! - Simple terms and their construction-time optimization
//! - Expression operators (`/`, `,`, `=`)
//! - Function, url() and string terms
//! - `calc()` structure
//! - `!important`

use cssom::ast::{
    CssUnit, ExpressionMember, ExpressionOperator, MathProductOperator, MathSumOperator,
    MathUnit, SimpleTerm,
};
use cssom::{is_valid_stylesheet, parse_stylesheet, CssVersion};

fn first_declaration_members(source: &str) -> Vec<ExpressionMember> {
    let sheet = parse_stylesheet(source, CssVersion::Css30).expect("valid CSS");
    let rule = sheet.style_rules().next().expect("one style rule");
    rule.declarations().get(0).unwrap().expression().all_members()
}

// ============================================================================
// SIMPLE TERMS
// ============================================================================

#[test]
fn test_multi_term_shorthand() {
    let members = first_declaration_members("a { margin: 1px 2em 0 auto; }");
    assert_eq!(members.len(), 4);
    assert!(members
        .iter()
        .all(|m| matches!(m, ExpressionMember::Term(_))));
}

#[test]
fn test_zero_unit_terms_optimize() {
    let members = first_declaration_members("a { margin: 0px; }");
    let ExpressionMember::Term(term) = &members[0] else {
        panic!("expected a term");
    };
    assert_eq!(term.value(), "0px");
    assert_eq!(term.optimized_value(), "0");
    assert_eq!(*term, SimpleTerm::new("0em"));
}

#[test]
fn test_hex_color_terms_optimize() {
    let members = first_declaration_members("a { color: #FFCC00; }");
    let ExpressionMember::Term(term) = &members[0] else {
        panic!("expected a term");
    };
    assert_eq!(term.value(), "#FFCC00");
    assert_eq!(term.optimized_value(), "#fc0");
}

#[test]
fn test_negative_dimension() {
    let members = first_declaration_members("a { margin-top: -4px; }");
    let ExpressionMember::Term(term) = &members[0] else {
        panic!("expected a term");
    };
    assert_eq!(term.value(), "-4px");
}

#[test]
fn test_string_term_keeps_quotes() {
    let members = first_declaration_members("a { content: \"\\201C\"; }");
    let ExpressionMember::Term(term) = &members[0] else {
        panic!("expected a term");
    };
    assert_eq!(term.value(), "\"\\201C\"");
}

// ============================================================================
// OPERATORS
// ============================================================================

#[test]
fn test_slash_operator_in_font_shorthand() {
    let members = first_declaration_members("a { font: 12px/1.5 serif; }");
    assert_eq!(members.len(), 4);
    assert_eq!(
        members[1],
        ExpressionMember::Operator(ExpressionOperator::Slash)
    );
}

#[test]
fn test_comma_separated_font_families() {
    let members = first_declaration_members("a { font-family: Arial, \"Helvetica Neue\", sans-serif; }");
    assert_eq!(members.len(), 5);
    assert_eq!(
        members[1],
        ExpressionMember::Operator(ExpressionOperator::Comma)
    );
}

// ============================================================================
// FUNCTIONS AND URLS
// ============================================================================

#[test]
fn test_function_term_with_arguments() {
    let members = first_declaration_members("a { transform: translate(10px, 20px); }");
    let ExpressionMember::Function(function) = &members[0] else {
        panic!("expected a function term");
    };
    assert_eq!(function.name(), "translate");
    assert_eq!(function.args().unwrap().len(), 3);
}

#[test]
fn test_zero_argument_function() {
    let members = first_declaration_members("a { content: counter(); }");
    let ExpressionMember::Function(function) = &members[0] else {
        panic!("expected a function term");
    };
    assert_eq!(function.name(), "counter");
    assert!(function.args().is_none());
}

#[test]
fn test_url_term_is_unquoted() {
    for source in [
        "a { background: url(img.png); }",
        "a { background: url(\"img.png\"); }",
        "a { background: url( 'img.png' ); }",
    ] {
        let members = first_declaration_members(source);
        let ExpressionMember::Uri(uri) = &members[0] else {
            panic!("expected a url term");
        };
        assert_eq!(uri.uri(), "img.png");
    }
}

// ============================================================================
// CALC
// ============================================================================

#[test]
fn test_calc_two_level_structure() {
    let members = first_declaration_members("a { width: calc(100% - 2px * 3); }");
    let ExpressionMember::Math(math) = &members[0] else {
        panic!("expected a math term");
    };
    assert_eq!(math.products().len(), 2);
    assert_eq!(math.operators(), &[MathSumOperator::Minus]);

    let first = &math.products()[0];
    assert_eq!(
        first.units(),
        &[MathUnit::value("100", Some(CssUnit::Percent))]
    );

    let second = &math.products()[1];
    assert_eq!(second.operators(), &[MathProductOperator::Multiply]);
    assert_eq!(
        second.units(),
        &[
            MathUnit::value("2", Some(CssUnit::Px)),
            MathUnit::value("3", None),
        ]
    );
}

#[test]
fn test_calc_nested_parentheses() {
    let members = first_declaration_members("a { width: calc((1px * 2) * 3); }");
    let ExpressionMember::Math(math) = &members[0] else {
        panic!("expected a math term");
    };
    let product = &math.products()[0];
    assert!(matches!(product.units()[0], MathUnit::Nested(_)));
    assert_eq!(product.units()[1], MathUnit::value("3", None));
}

#[test]
fn test_calc_requires_css30() {
    assert!(!is_valid_stylesheet("a { width: calc(1px + 2px); }", CssVersion::Css21));
    assert!(is_valid_stylesheet("a { width: calc(1px + 2px); }", CssVersion::Css30));
}

// ============================================================================
// IMPORTANT
// ============================================================================

#[test]
fn test_important_flag() {
    let sheet = parse_stylesheet("a { color: red !important; margin: 0; }", CssVersion::Css30)
        .unwrap();
    let rule = sheet.style_rules().next().unwrap();
    assert!(rule.declarations().get(0).unwrap().is_important());
    assert!(!rule.declarations().get(1).unwrap().is_important());
}

#[test]
fn test_important_with_inner_whitespace() {
    let sheet = parse_stylesheet("a { color: red ! important; }", CssVersion::Css30).unwrap();
    let rule = sheet.style_rules().next().unwrap();
    assert!(rule.declarations().get(0).unwrap().is_important());
}
