//! Integration tests for standalone declaration-list parsing, the shape of
//! inline `style="..."` attribute content.

use std::sync::Arc;

use cssom::handler::LoggingParseErrorHandler;
use cssom::{
    parse_declaration_list, parse_declaration_list_with, CssVersion, ReaderSettings,
};

#[test]
fn test_basic_declaration_list() {
    let list = parse_declaration_list("color: red; margin: 0", CssVersion::Css30).unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(
        list.get(0).unwrap().expression().members().len(),
        1
    );
}

#[test]
fn test_trailing_and_stray_semicolons() {
    let list = parse_declaration_list(";color: red;;margin: 0;", CssVersion::Css30).unwrap();
    assert_eq!(list.len(), 2);
}

#[test]
fn test_empty_input_yields_empty_list() {
    let list = parse_declaration_list("   ", CssVersion::Css30).unwrap();
    assert!(list.is_empty());
}

#[test]
fn test_important_in_list() {
    let list = parse_declaration_list("color: red !important", CssVersion::Css30).unwrap();
    assert!(list.get(0).unwrap().is_important());
}

#[test]
fn test_lookup_is_case_insensitive() {
    let list = parse_declaration_list("COLOR: red; color: blue", CssVersion::Css30).unwrap();
    assert_eq!(list.of_property("Color").len(), 2);
    assert_eq!(
        list.first_of_property("color").unwrap().expression().members().len(),
        1
    );
}

#[test]
fn test_rule_blocks_are_rejected() {
    assert!(parse_declaration_list("a { color: red; }", CssVersion::Css30).is_none());
}

#[test]
fn test_logging_handler_skips_rule_blocks() {
    let settings =
        ReaderSettings::default().with_error_handler(Arc::new(LoggingParseErrorHandler));
    let list = parse_declaration_list_with(
        "a { color: red; } margin: 0",
        CssVersion::Css30,
        &settings,
    )
    .unwrap();
    assert_eq!(list.len(), 1);
    assert!(list.first_of_property("margin").is_some());
}

#[test]
fn test_version_gating_applies_to_values() {
    assert!(parse_declaration_list("width: calc(1px + 2px)", CssVersion::Css21).is_none());
    assert!(parse_declaration_list("width: calc(1px + 2px)", CssVersion::Css30).is_some());
}
