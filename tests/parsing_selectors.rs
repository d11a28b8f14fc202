//! Integration tests for selector parsing.
//!
//! Covers:
//! - Simple and compound selectors
//! - Combinators (descendant, `>`, `+`, `~`)
//! - Attribute selectors and their operators
//! - Pseudo-classes, pseudo-elements, functional pseudos
//! - `:not(...)` negation
//! - CSS 2.1 vs CSS 3.0 selector gating

use cssom::ast::{AttributeOperator, Combinator, SelectorMember};
use cssom::{is_valid_stylesheet, parse_stylesheet, CssVersion};

fn first_selector_members(source: &str) -> Vec<SelectorMember> {
    let sheet = parse_stylesheet(source, CssVersion::Css30).expect("valid CSS");
    let rule = sheet.style_rules().next().expect("one style rule");
    rule.selectors()[0].all_members()
}

// ============================================================================
// SIMPLE AND COMPOUND SELECTORS
// ============================================================================

#[test]
fn test_compound_selector_members() {
    let members = first_selector_members("div.note#intro { color: red; }");
    assert_eq!(
        members,
        vec![
            SelectorMember::Simple("div".to_string()),
            SelectorMember::Simple(".note".to_string()),
            SelectorMember::Simple("#intro".to_string()),
        ]
    );
}

#[test]
fn test_universal_and_pseudo_members() {
    let members = first_selector_members("*:hover::before { color: red; }");
    assert_eq!(
        members,
        vec![
            SelectorMember::Simple("*".to_string()),
            SelectorMember::Simple(":hover".to_string()),
            SelectorMember::Simple("::before".to_string()),
        ]
    );
}

#[test]
fn test_selector_list_alternatives() {
    let sheet = parse_stylesheet("h1, h2, .title { color: red; }", CssVersion::Css30).unwrap();
    let rule = sheet.style_rules().next().unwrap();
    assert_eq!(rule.selectors().len(), 3);
}

#[test]
fn test_multibyte_element_names() {
    // The element name ends on a non-ASCII character; slicing the source
    // around it must not split the character.
    let members = first_selector_members("aaaaaaaé { color: red }");
    assert_eq!(members, vec![SelectorMember::Simple("aaaaaaaé".to_string())]);
}

// ============================================================================
// COMBINATORS
// ============================================================================

#[test]
fn test_descendant_combinator_is_blank() {
    let members = first_selector_members("ul li { color: red; }");
    assert_eq!(members[1], SelectorMember::Combinator(Combinator::Blank));
}

#[test]
fn test_child_and_sibling_combinators() {
    let members = first_selector_members("a > b + c ~ d { color: red; }");
    let combinators: Vec<_> = members
        .iter()
        .filter_map(|m| match m {
            SelectorMember::Combinator(c) => Some(*c),
            _ => None,
        })
        .collect();
    assert_eq!(
        combinators,
        vec![Combinator::Greater, Combinator::Plus, Combinator::Tilde]
    );
}

#[test]
fn test_general_sibling_requires_css30() {
    assert!(!is_valid_stylesheet("a ~ b { color: red; }", CssVersion::Css21));
    assert!(is_valid_stylesheet("a ~ b { color: red; }", CssVersion::Css30));
    assert!(is_valid_stylesheet("a + b { color: red; }", CssVersion::Css21));
}

// ============================================================================
// ATTRIBUTE SELECTORS
// ============================================================================

#[test]
fn test_attribute_existence() {
    let members = first_selector_members("input[required] { color: red; }");
    assert_eq!(
        members[1],
        SelectorMember::Attribute {
            namespace_prefix: None,
            name: "required".to_string(),
            operator: None,
        }
    );
}

#[test]
fn test_attribute_with_quoted_value() {
    let members = first_selector_members("a[href^=\"https\"] { color: red; }");
    assert_eq!(
        members[1],
        SelectorMember::Attribute {
            namespace_prefix: None,
            name: "href".to_string(),
            operator: Some((AttributeOperator::BeginMatch, "\"https\"".to_string())),
        }
    );
}

#[test]
fn test_attribute_operators_version_split() {
    // CSS 2.1 knows `=`, `~=`, `|=`.
    assert!(is_valid_stylesheet("a[rel=next] { color: red; }", CssVersion::Css21));
    assert!(is_valid_stylesheet("a[rel~=next] { color: red; }", CssVersion::Css21));
    assert!(is_valid_stylesheet("a[lang|=en] { color: red; }", CssVersion::Css21));
    // The substring operators are CSS 3.0.
    for selector in ["a[href^=x]", "a[href$=x]", "a[href*=x]"] {
        let source = format!("{selector} {{ color: red; }}");
        assert!(!is_valid_stylesheet(&source, CssVersion::Css21), "{selector}");
        assert!(is_valid_stylesheet(&source, CssVersion::Css30), "{selector}");
    }
}

#[test]
fn test_namespaced_attribute() {
    let members = first_selector_members("a[xlink|href] { color: red; }");
    assert_eq!(
        members[1],
        SelectorMember::Attribute {
            namespace_prefix: Some("xlink".to_string()),
            name: "href".to_string(),
            operator: None,
        }
    );
}

// ============================================================================
// FUNCTIONAL PSEUDOS AND NEGATION
// ============================================================================

#[test]
fn test_functional_pseudo_with_argument() {
    let members = first_selector_members("p:lang(fr) { color: red; }");
    let SelectorMember::FunctionalPseudo { name, expression } = &members[1] else {
        panic!("expected a functional pseudo");
    };
    assert_eq!(name, ":lang");
    assert_eq!(expression.as_ref().unwrap().len(), 1);
}

#[test]
fn test_functional_pseudo_element_keeps_double_colon() {
    let members = first_selector_members("video::cue(v) { color: red; }");
    let SelectorMember::FunctionalPseudo { name, .. } = &members[1] else {
        panic!("expected a functional pseudo");
    };
    assert_eq!(name, "::cue");
}

#[test]
fn test_negation_with_one_selector() {
    let members = first_selector_members("a:not(.external) { color: red; }");
    let SelectorMember::Negation(selectors) = &members[1] else {
        panic!("expected a negation");
    };
    assert_eq!(selectors.len(), 1);
    assert_eq!(
        selectors[0].members(),
        &[SelectorMember::Simple(".external".to_string())]
    );
}

#[test]
fn test_negation_with_selector_list() {
    let members = first_selector_members("a:not(.a, .b) { color: red; }");
    let SelectorMember::Negation(selectors) = &members[1] else {
        panic!("expected a negation");
    };
    assert_eq!(selectors.len(), 2);
}

#[test]
fn test_negation_requires_css30() {
    assert!(!is_valid_stylesheet("a:not(.x) { color: red; }", CssVersion::Css21));
    assert!(is_valid_stylesheet("a:not(.x) { color: red; }", CssVersion::Css30));
}

// ============================================================================
// NAMESPACED ELEMENTS (CSS 3.0)
// ============================================================================

#[test]
fn test_namespace_qualified_element() {
    let members = first_selector_members("svg|circle { fill: red; }");
    assert_eq!(members[0], SelectorMember::Simple("svg|circle".to_string()));
}
