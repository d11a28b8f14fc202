//! Integration tests for byte-level parsing with charset resolution.

use cssom::charset::BytesProvider;
use cssom::{parse_from_provider, CssVersion, ReaderSettings};
use encoding_rs::{UTF_8, WINDOWS_1252};

#[test]
fn test_utf8_without_declaration() {
    let provider = BytesProvider::new("a { color: red; }".as_bytes().to_vec());
    let sheet =
        parse_from_provider(&provider, UTF_8, CssVersion::Css30, &ReaderSettings::default())
            .unwrap();
    assert_eq!(sheet.rule_count(), 1);
}

#[test]
fn test_declared_charset_decodes_the_body() {
    let mut bytes = b"@charset \"windows-1252\";\na { content: \"".to_vec();
    bytes.push(0xe9); // e-acute in windows-1252, invalid as UTF-8
    bytes.extend_from_slice(b"\"; }");
    let provider = BytesProvider::new(bytes);

    let sheet =
        parse_from_provider(&provider, UTF_8, CssVersion::Css30, &ReaderSettings::default())
            .unwrap();
    let rule = sheet.style_rules().next().unwrap();
    let declaration = rule.declarations().first_of_property("content").unwrap();
    let rendered = format!("{:?}", declaration.expression().members());
    assert!(rendered.contains('\u{e9}'), "{rendered}");
}

#[test]
fn test_utf8_bom_is_stripped() {
    let mut bytes = b"\xef\xbb\xbf".to_vec();
    bytes.extend_from_slice(b"a { color: red; }");
    let provider = BytesProvider::new(bytes);

    let sheet =
        parse_from_provider(&provider, UTF_8, CssVersion::Css30, &ReaderSettings::default())
            .unwrap();
    assert_eq!(sheet.rule_count(), 1);
}

#[test]
fn test_fallback_encoding_applies() {
    let mut bytes = b"a { content: \"".to_vec();
    bytes.push(0xe9);
    bytes.extend_from_slice(b"\"; }");
    let provider = BytesProvider::new(bytes);

    // Without any declaration the caller's fallback decides.
    let sheet = parse_from_provider(
        &provider,
        WINDOWS_1252,
        CssVersion::Css30,
        &ReaderSettings::default(),
    )
    .unwrap();
    assert_eq!(sheet.rule_count(), 1);
}
